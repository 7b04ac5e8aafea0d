//! Grade repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the authoritative store of grade records for one course.
//! - Enforce key uniqueness and grade bounds on every write path.
//!
//! # Invariants
//! - Records are keyed by student id; at most one record per id.
//! - Failed operations leave stored state untouched.
//! - `get`/`delete` report ordinary absence as `None`; `update` on an
//!   absent id is an error.

use crate::model::grade::{validate_grade, Grade, GradeValidationError, StudentGrade};
use crate::sorting::strategy::GradeSorting;
use log::{debug, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Caller errors raised by grade repository writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    InvalidArgument(GradeValidationError),
    DuplicateKey(String),
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::DuplicateKey(id) => write!(f, "student already exists: {id}"),
            Self::NotFound(id) => write!(f, "student does not exist: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::DuplicateKey(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<GradeValidationError> for RepoError {
    fn from(value: GradeValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

/// Repository interface for grade records.
///
/// Writes take `&mut self`; shared use across threads needs one external lock
/// around the whole repository.
pub trait GradeRepository {
    /// Returns the record stored under `id`.
    fn get(&self, id: &str) -> Option<&StudentGrade>;
    /// Returns a detached copy of every record, ordered by `sorting`.
    fn get_all(&self, sorting: &dyn GradeSorting) -> Vec<StudentGrade>;
    /// Takes ownership of `record`; its id must not be stored yet.
    fn add(&mut self, record: StudentGrade) -> RepoResult<()>;
    /// Sets the stored grade for `id` and returns the previous grade.
    fn update(&mut self, id: &str, new_grade: i32) -> RepoResult<Grade>;
    /// Removes and returns the record stored under `id`.
    fn delete(&mut self, id: &str) -> Option<StudentGrade>;
    /// Removes every record.
    fn clear(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// Hash-map backed grade repository. Starts empty.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGradeRepository {
    records: HashMap<String, StudentGrade>,
}

impl InMemoryGradeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GradeRepository for InMemoryGradeRepository {
    fn get(&self, id: &str) -> Option<&StudentGrade> {
        self.records.get(id)
    }

    fn get_all(&self, sorting: &dyn GradeSorting) -> Vec<StudentGrade> {
        let mut grades: Vec<StudentGrade> = self.records.values().cloned().collect();
        sorting.sort(&mut grades);
        grades
    }

    fn add(&mut self, record: StudentGrade) -> RepoResult<()> {
        if self.records.contains_key(record.id()) {
            warn!("event=grade_add module=repo status=error reason=duplicate_key");
            return Err(RepoError::DuplicateKey(record.id().to_string()));
        }

        self.records.insert(record.id().to_string(), record);
        debug!(
            "event=grade_add module=repo status=ok records={}",
            self.records.len()
        );
        Ok(())
    }

    fn update(&mut self, id: &str, new_grade: i32) -> RepoResult<Grade> {
        let grade = validate_grade(new_grade).map_err(|err| {
            warn!("event=grade_update module=repo status=error reason=grade_out_of_range");
            RepoError::from(err)
        })?;
        let Some(stored) = self.records.get_mut(id) else {
            warn!("event=grade_update module=repo status=error reason=not_found");
            return Err(RepoError::NotFound(id.to_string()));
        };

        let previous = stored.update_grade(grade);
        debug!("event=grade_update module=repo status=ok");
        Ok(previous)
    }

    fn delete(&mut self, id: &str) -> Option<StudentGrade> {
        let removed = self.records.remove(id);
        debug!(
            "event=grade_delete module=repo status=ok removed={} records={}",
            removed.is_some(),
            self.records.len()
        );
        removed
    }

    fn clear(&mut self) {
        let cleared = self.records.len();
        self.records.clear();
        debug!("event=grade_clear module=repo status=ok cleared={cleared}");
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{GradeRepository, InMemoryGradeRepository, RepoError};
    use crate::model::grade::{GradeValidationError, StudentGrade};
    use std::error::Error;

    #[test]
    fn failed_update_leaves_record_untouched() {
        let mut repo = InMemoryGradeRepository::new();
        repo.add(StudentGrade::new("A1", 11).expect("valid record"))
            .expect("first add");

        let err = repo.update("A1", 21).expect_err("out of range");
        assert_eq!(
            err,
            RepoError::InvalidArgument(GradeValidationError::GradeOutOfRange { grade: 21 })
        );
        assert_eq!(repo.get("A1").map(StudentGrade::grade), Some(11));
    }

    #[test]
    fn range_check_runs_before_existence_check() {
        let mut repo = InMemoryGradeRepository::new();
        let err = repo.update("missing", -3).expect_err("invalid grade");
        assert!(matches!(err, RepoError::InvalidArgument(_)));
    }

    #[test]
    fn invalid_argument_exposes_validation_source() {
        let err = RepoError::from(GradeValidationError::EmptyId);
        assert_eq!(err.to_string(), "invalid argument: student id cannot be empty");
        assert!(err.source().is_some());

        let not_found = RepoError::NotFound("Z9".to_string());
        assert_eq!(not_found.to_string(), "student does not exist: Z9");
        assert!(not_found.source().is_none());
    }
}
