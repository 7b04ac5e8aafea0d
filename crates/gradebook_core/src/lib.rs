//! Core domain logic for the gradebook.
//! This crate is the single source of truth for grade invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod sorting;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::grade::{
    validate_grade, Grade, GradeValidationError, StudentGrade, MAX_GRADE, MIN_GRADE,
};
pub use repo::grade_repo::{GradeRepository, InMemoryGradeRepository, RepoError, RepoResult};
pub use service::grade_service::GradeService;
pub use sorting::strategy::{GradeSorting, ParseSortOrderError, SortByGrade, SortById, SortOrder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
