//! Grade domain model.
//!
//! # Responsibility
//! - Define the canonical data structures used by the repository layer.
//!
//! # Invariants
//! - Every record is identified by a non-blank student id.
//! - Grades are bounded to `[0, 20]` at every entry point.

pub mod grade;
