//! Domain error types.
//!
//! Lookups that fail and grades that fall outside the configured scale are
//! the only failures the record store can produce. Everything else is plain
//! in-memory computation.

use thiserror::Error;

use crate::model::{CourseId, StudentId};

/// Errors returned by the registries and the `University` facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniversityError {
    /// No student was registered with this id.
    #[error("student not found: {0}")]
    StudentNotFound(StudentId),

    /// No course was activated with this id.
    #[error("course not found: {0}")]
    CourseNotFound(CourseId),

    /// The grade is outside the configured scale.
    #[error("invalid grade {grade}: expected a value between {min} and {max}")]
    InvalidGrade { grade: i32, min: i32, max: i32 },
}

impl UniversityError {
    /// Returns `true` if this error comes from a failed id lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            UniversityError::StudentNotFound(_) | UniversityError::CourseNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, UniversityError>;
