//! Student and course registries.
//!
//! Each registry owns the entities of one kind and the counter used to hand
//! out their ids. Counters live on the instance, so two universities never
//! share a sequence. Ids are never reused.

use std::collections::BTreeMap;

use crate::error::{Result, UniversityError};
use crate::model::{Course, CourseId, Student, StudentId};

/// First id handed out by a [`StudentRegistry`].
pub const FIRST_STUDENT_ID: u32 = 10000;

/// First id handed out by a [`CourseRegistry`].
pub const FIRST_COURSE_ID: u32 = 10;

/// Owner of all students and of student id assignment.
#[derive(Debug, Clone)]
pub struct StudentRegistry {
    next_id: u32,
    students: BTreeMap<StudentId, Student>,
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self {
            next_id: FIRST_STUDENT_ID,
            students: BTreeMap::new(),
        }
    }

    /// Store a new student under the next sequential id and return that id.
    pub fn register(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> StudentId {
        let id = StudentId(self.next_id);
        self.next_id += 1;
        self.students
            .insert(id, Student::new(id, first_name.into(), last_name.into()));
        id
    }

    pub fn get(&self, id: StudentId) -> Result<&Student> {
        self.students
            .get(&id)
            .ok_or(UniversityError::StudentNotFound(id))
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    /// All students in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.values()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Owner of all courses and of course id assignment.
#[derive(Debug, Clone)]
pub struct CourseRegistry {
    next_id: u32,
    courses: BTreeMap<CourseId, Course>,
}

impl Default for CourseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseRegistry {
    pub fn new() -> Self {
        Self {
            next_id: FIRST_COURSE_ID,
            courses: BTreeMap::new(),
        }
    }

    /// Store a new course under the next sequential id and return that id.
    pub fn register(
        &mut self,
        title: impl Into<String>,
        teacher_name: impl Into<String>,
    ) -> CourseId {
        let id = CourseId(self.next_id);
        self.next_id += 1;
        self.courses
            .insert(id, Course::new(id, title.into(), teacher_name.into()));
        id
    }

    pub fn get(&self, id: CourseId) -> Result<&Course> {
        self.courses
            .get(&id)
            .ok_or(UniversityError::CourseNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: CourseId) -> Result<&mut Course> {
        self.courses
            .get_mut(&id)
            .ok_or(UniversityError::CourseNotFound(id))
    }

    pub fn contains(&self, id: CourseId) -> bool {
        self.courses.contains_key(&id)
    }

    /// All courses in ascending id order, which is registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.values()
    }

    /// Add a resolved student to a course. Idempotent.
    ///
    /// Fails before touching anything if the course does not exist.
    pub fn enroll(&mut self, course_id: CourseId, student: &Student) -> Result<bool> {
        Ok(self.get_mut(course_id)?.enroll(student))
    }

    /// Courses whose member set contains the student, by ascending id.
    ///
    /// Computed by scanning every course on each call.
    pub fn courses_of(&self, student_id: StudentId) -> impl Iterator<Item = &Course> + '_ {
        self.courses.values().filter(move |c| c.is_enrolled(student_id))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
