//! Grade use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for course-level grade operations.
//! - Delegate storage and invariant checks to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Service layer remains storage-agnostic.

use crate::model::grade::{Grade, StudentGrade};
use crate::repo::grade_repo::{GradeRepository, RepoResult};
use crate::sorting::strategy::GradeSorting;

/// Use-case service wrapper for grade operations.
pub struct GradeService<R: GradeRepository> {
    repo: R,
}

impl<R: GradeRepository> GradeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records a first grade for a student.
    ///
    /// # Contract
    /// - A blank `id` or out-of-range `grade` fails with `InvalidArgument`.
    /// - An already recorded `id` fails with `DuplicateKey`.
    pub fn record_grade(&mut self, id: impl Into<String>, grade: i32) -> RepoResult<()> {
        let record = StudentGrade::new(id, grade)?;
        self.repo.add(record)
    }

    /// Adds a prebuilt record.
    pub fn enroll(&mut self, record: StudentGrade) -> RepoResult<()> {
        self.repo.add(record)
    }

    /// Changes an existing grade and returns the previous one.
    ///
    /// Returns repository-level not-found or range errors unchanged.
    pub fn regrade(&mut self, id: &str, grade: i32) -> RepoResult<Grade> {
        self.repo.update(id, grade)
    }

    pub fn grade_of(&self, id: &str) -> Option<Grade> {
        self.repo.get(id).map(StudentGrade::grade)
    }

    /// Removes a student's record, if any.
    pub fn withdraw(&mut self, id: &str) -> Option<StudentGrade> {
        self.repo.delete(id)
    }

    /// Lists every record in the order chosen by `sorting`.
    pub fn roster(&self, sorting: &dyn GradeSorting) -> Vec<StudentGrade> {
        self.repo.get_all(sorting)
    }

    /// Drops every record.
    pub fn reset(&mut self) {
        self.repo.clear();
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}
