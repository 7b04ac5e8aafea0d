//! Caller-supplied ordering for grade retrieval.
//!
//! # Responsibility
//! - Define the sort capability consumed by `GradeRepository::get_all`.
//! - Ship the common by-id and by-grade strategies.
//!
//! # Invariants
//! - Strategies only reorder; they never add, drop or modify records.
//! - The repository applies no ordering of its own.

pub mod strategy;
