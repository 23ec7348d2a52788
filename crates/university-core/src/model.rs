//! Core data model types for the record store.
//!
//! Students and courses get their ids from the registries in
//! [`crate::registry`]; exam results reference both by id only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Registration number of a student. Assigned from 10000 upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u32);

/// Code of a course. Assigned from 10 upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(StudentId)
    }
}

impl FromStr for CourseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(CourseId)
    }
}

/// A named person who is not a student, e.g. the rector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A student enrolled in the university.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
}

impl Student {
    pub(crate) fn new(id: StudentId, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// An active course and the students registered to attend it.
///
/// The enrollment relation is stored here, course → students, in the order
/// students were added. There is no reverse index on [`Student`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    id: CourseId,
    title: String,
    teacher_name: String,
    enrolled_students: Vec<StudentId>,
}

impl Course {
    pub(crate) fn new(id: CourseId, title: String, teacher_name: String) -> Self {
        Self {
            id,
            title,
            teacher_name,
            enrolled_students: Vec::new(),
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn teacher_name(&self) -> &str {
        &self.teacher_name
    }

    /// Ids of the enrolled students, in enrollment order.
    pub fn enrolled_students(&self) -> &[StudentId] {
        &self.enrolled_students
    }

    pub fn is_enrolled(&self, student_id: StudentId) -> bool {
        self.enrolled_students.contains(&student_id)
    }

    /// Adds the student to this course.
    ///
    /// Returns `false` and leaves the course untouched if the student was
    /// already enrolled.
    pub fn enroll(&mut self, student: &Student) -> bool {
        if self.is_enrolled(student.id()) {
            return false;
        }
        self.enrolled_students.push(student.id());
        true
    }

    /// Adds every student in order, skipping those already enrolled.
    /// Returns how many were newly added.
    pub fn enroll_all<'a>(&mut self, students: impl IntoIterator<Item = &'a Student>) -> usize {
        students.into_iter().filter(|s| self.enroll(s)).count()
    }
}

/// One recorded exam attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExamResult {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub grade: i32,
}

impl ExamResult {
    pub fn new(student_id: StudentId, course_id: CourseId, grade: i32) -> Self {
        Self {
            student_id,
            course_id,
            grade,
        }
    }
}
