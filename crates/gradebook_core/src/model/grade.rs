//! Student grade domain model.
//!
//! # Responsibility
//! - Define the canonical record stored by the grade repository.
//! - Own the bounds check shared by construction and regrading.
//!
//! # Invariants
//! - `id` is non-blank and never changes after construction.
//! - `grade` always lies in `[MIN_GRADE, MAX_GRADE]`.
//! - Only the repository may change `grade` once a record exists.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Numeric score type. Kept narrow because valid values fit in `0..=20`.
pub type Grade = u8;

/// Lowest accepted grade.
pub const MIN_GRADE: Grade = 0;
/// Highest accepted grade.
pub const MAX_GRADE: Grade = 20;

/// Validation failures raised while building or regrading a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeValidationError {
    EmptyId,
    GradeOutOfRange { grade: i32 },
}

impl Display for GradeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "student id cannot be empty"),
            Self::GradeOutOfRange { grade } => write!(
                f,
                "grade {grade} must be in [{MIN_GRADE},{MAX_GRADE}]"
            ),
        }
    }
}

impl Error for GradeValidationError {}

/// One student's grade in a course.
///
/// Deserialization runs the same checks as [`StudentGrade::new`], so a record
/// read from the wire can never hold an out-of-range grade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStudentGrade")]
pub struct StudentGrade {
    id: String,
    grade: Grade,
}

impl StudentGrade {
    /// Creates a validated grade record.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty or whitespace-only.
    /// - `GradeOutOfRange` when `grade` falls outside `[0, 20]`.
    pub fn new(id: impl Into<String>, grade: i32) -> Result<Self, GradeValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GradeValidationError::EmptyId);
        }
        let grade = validate_grade(grade)?;
        Ok(Self { id, grade })
    }

    /// Stable student identifier used as the repository key.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Replaces the grade and returns the one it displaced.
    ///
    /// Callers must pass an already validated grade.
    pub(crate) fn update_grade(&mut self, grade: Grade) -> Grade {
        std::mem::replace(&mut self.grade, grade)
    }
}

impl Display for StudentGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.id, self.grade)
    }
}

/// Checks that `value` is a valid grade and narrows it to [`Grade`].
///
/// # Errors
/// Returns `GradeOutOfRange` when `value` falls outside `[0, 20]`.
pub fn validate_grade(value: i32) -> Result<Grade, GradeValidationError> {
    match Grade::try_from(value) {
        Ok(grade) if (MIN_GRADE..=MAX_GRADE).contains(&grade) => Ok(grade),
        _ => Err(GradeValidationError::GradeOutOfRange { grade: value }),
    }
}

#[derive(Deserialize)]
struct RawStudentGrade {
    id: String,
    grade: i32,
}

impl TryFrom<RawStudentGrade> for StudentGrade {
    type Error = GradeValidationError;

    fn try_from(value: RawStudentGrade) -> Result<Self, Self::Error> {
        Self::new(value.id, value.grade)
    }
}
