//! Sort strategies for grade listings.

use crate::model::grade::StudentGrade;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Ordering rule applied to a listing of grade records.
///
/// Any `Fn(&StudentGrade, &StudentGrade) -> Ordering` closure is a strategy,
/// so ad-hoc orderings do not need a named type.
pub trait GradeSorting {
    /// Reorders `grades` in place.
    fn sort(&self, grades: &mut [StudentGrade]);
}

impl<F> GradeSorting for F
where
    F: Fn(&StudentGrade, &StudentGrade) -> Ordering,
{
    fn sort(&self, grades: &mut [StudentGrade]) {
        grades.sort_by(|left, right| self(left, right));
    }
}

/// Direction for the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortOrderError(String);

impl Display for ParseSortOrderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported sort order `{}`; expected asc|ascending|desc|descending",
            self.0
        )
    }
}

impl Error for ParseSortOrderError {}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}

/// Orders records lexicographically by student id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortById(pub SortOrder);

impl GradeSorting for SortById {
    fn sort(&self, grades: &mut [StudentGrade]) {
        grades.sort_by(|left, right| self.0.apply(left.id().cmp(right.id())));
    }
}

/// Orders records by grade.
///
/// Equal grades fall back to ascending id regardless of direction, which
/// keeps listings stable across runs despite hash-map storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortByGrade(pub SortOrder);

impl GradeSorting for SortByGrade {
    fn sort(&self, grades: &mut [StudentGrade]) {
        grades.sort_by(|left, right| {
            self.0
                .apply(left.grade().cmp(&right.grade()))
                .then_with(|| left.id().cmp(right.id()))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{GradeSorting, SortByGrade, SortById, SortOrder};
    use crate::model::grade::StudentGrade;

    fn sample() -> Vec<StudentGrade> {
        vec![
            StudentGrade::new("B2", 14).expect("valid record"),
            StudentGrade::new("A1", 14).expect("valid record"),
            StudentGrade::new("C3", 7).expect("valid record"),
        ]
    }

    fn ids(grades: &[StudentGrade]) -> Vec<&str> {
        grades.iter().map(StudentGrade::id).collect()
    }

    #[test]
    fn sort_order_parses_known_spellings() {
        assert_eq!("ASC".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!(" descending ".parse::<SortOrder>(), Ok(SortOrder::Descending));
        let err = "sideways".parse::<SortOrder>().expect_err("unknown order");
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn by_id_respects_direction() {
        let mut grades = sample();
        SortById(SortOrder::Descending).sort(&mut grades);
        assert_eq!(ids(&grades), ["C3", "B2", "A1"]);
    }

    #[test]
    fn by_grade_breaks_ties_by_ascending_id() {
        let mut grades = sample();
        SortByGrade(SortOrder::Descending).sort(&mut grades);
        assert_eq!(ids(&grades), ["A1", "B2", "C3"]);

        SortByGrade(SortOrder::Ascending).sort(&mut grades);
        assert_eq!(ids(&grades), ["C3", "A1", "B2"]);
    }

    #[test]
    fn closures_act_as_strategies() {
        let mut grades = sample();
        let reverse_id = |left: &StudentGrade, right: &StudentGrade| right.id().cmp(left.id());
        reverse_id.sort(&mut grades);
        assert_eq!(ids(&grades), ["C3", "B2", "A1"]);
    }
}
