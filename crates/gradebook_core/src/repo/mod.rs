//! Repository layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the data access contract for grade records.
//! - Keep storage details away from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce grade bounds before mutating state.
//! - Repository APIs return semantic errors (`DuplicateKey`, `NotFound`,
//!   `InvalidArgument`) so callers can branch on the failure kind.

pub mod grade_repo;
