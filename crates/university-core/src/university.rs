//! The `University` facade.
//!
//! Owns the registries and the exam ledger, resolves raw ids into entities
//! before delegating, and is the only mutation path into the record store.
//! Every write either completes or fails before changing anything.

use crate::config::UniversityConfig;
use crate::error::{Result, UniversityError};
use crate::ledger::ExamLedger;
use crate::model::{Course, CourseId, ExamResult, Person, Student, StudentId};
use crate::registry::{CourseRegistry, StudentRegistry};
use crate::statistics::{self, RankedStudent, Records};

/// A university with its students, courses, and exam results.
///
/// Single-threaded by design: callers sharing one instance across threads
/// must wrap it in a lock.
#[derive(Debug, Clone)]
pub struct University {
    name: String,
    rector: Option<Person>,
    config: UniversityConfig,
    students: StudentRegistry,
    courses: CourseRegistry,
    ledger: ExamLedger,
}

impl University {
    /// Set up a university with default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, UniversityConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: UniversityConfig) -> Self {
        let name = name.into();
        tracing::debug!("creating university {name}");
        Self {
            name,
            rector: None,
            config,
            students: StudentRegistry::new(),
            courses: CourseRegistry::new(),
            ledger: ExamLedger::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &UniversityConfig {
        &self.config
    }

    /// Define the rector, replacing any previous one.
    pub fn set_rector(&mut self, first: impl Into<String>, last: impl Into<String>) {
        let rector = Person::new(first, last);
        tracing::info!("rector of {} is now {rector}", self.name);
        self.rector = Some(rector);
    }

    pub fn rector(&self) -> Option<&Person> {
        self.rector.as_ref()
    }

    // -----------------------------------------------------------------------
    // Students and courses
    // -----------------------------------------------------------------------

    /// Enroll a new student in the university. Ids start at 10000.
    pub fn enroll_student(
        &mut self,
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> StudentId {
        let id = self.students.register(first, last);
        tracing::info!("enrolled student {id}");
        id
    }

    pub fn student(&self, id: StudentId) -> Result<&Student> {
        self.students.get(id)
    }

    /// All students by ascending id.
    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter()
    }

    /// Activate a new course held by `teacher`. Codes start at 10.
    pub fn activate_course(
        &mut self,
        title: impl Into<String>,
        teacher: impl Into<String>,
    ) -> CourseId {
        let title = title.into();
        tracing::info!("activated course: {title}");
        self.courses.register(title, teacher)
    }

    pub fn course(&self, id: CourseId) -> Result<&Course> {
        self.courses.get(id)
    }

    /// All courses by ascending id.
    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter()
    }

    // -----------------------------------------------------------------------
    // Enrollment relation
    // -----------------------------------------------------------------------

    /// Register a student to attend a course. Registering twice is a no-op.
    pub fn register_student_in_course(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<()> {
        let student = self.students.get(student_id)?;
        if self.courses.enroll(course_id, student)? {
            tracing::info!("registered student {student_id} to course {course_id}");
        } else {
            tracing::debug!("student {student_id} already registered to course {course_id}");
        }
        Ok(())
    }

    /// Students attending a course, in the order they registered.
    pub fn attendees(&self, course_id: CourseId) -> Result<Vec<&Student>> {
        let course = self.courses.get(course_id)?;
        course
            .enrolled_students()
            .iter()
            .map(|&id| self.students.get(id))
            .collect()
    }

    /// Courses a student is registered for, by ascending course id.
    pub fn study_plan(&self, student_id: StudentId) -> Result<Vec<&Course>> {
        self.students.get(student_id)?;
        Ok(self.courses.courses_of(student_id).collect())
    }

    // -----------------------------------------------------------------------
    // Exams
    // -----------------------------------------------------------------------

    /// Record an exam grade.
    ///
    /// Both ids must resolve. When the configured grade scale is enforced,
    /// out-of-range grades are rejected. Enrollment in the course is not
    /// required.
    pub fn record_exam(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
        grade: i32,
    ) -> Result<()> {
        self.students.get(student_id)?;
        self.courses.get(course_id)?;

        let scale = self.config.grades;
        if scale.enforce && !scale.contains(grade) {
            tracing::warn!("rejected grade {grade} for student {student_id} in course {course_id}");
            return Err(UniversityError::InvalidGrade {
                grade,
                min: scale.min,
                max: scale.max,
            });
        }

        self.ledger.record(student_id, course_id, grade);
        tracing::debug!("recorded grade {grade} for student {student_id} in course {course_id}");
        Ok(())
    }

    /// Exam results of a student in recording order.
    pub fn exam_results(&self, student_id: StudentId) -> Result<Vec<&ExamResult>> {
        self.students.get(student_id)?;
        Ok(self.ledger.results_for(student_id).collect())
    }

    /// Exam results recorded for a course, in ledger order.
    pub fn course_exam_results(&self, course_id: CourseId) -> Result<Vec<&ExamResult>> {
        self.courses.get(course_id)?;
        Ok(self.ledger.results_for_course(course_id).collect())
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    fn records(&self) -> Records<'_> {
        Records::new(&self.students, &self.courses, &self.ledger)
    }

    /// Average grade of a student; `None` if the student took no exams.
    pub fn student_average(&self, student_id: StudentId) -> Result<Option<f64>> {
        statistics::student_average(&self.records(), student_id)
    }

    /// Average grade for a course; `None` if nobody took its exam.
    pub fn course_average(&self, course_id: CourseId) -> Result<Option<f64>> {
        statistics::course_average(&self.records(), course_id)
    }

    /// The `n` best students by score, ties by ascending id.
    pub fn top_n(&self, n: usize) -> Vec<RankedStudent> {
        statistics::top_n(&self.records(), n, self.config.ranking.bonus_factor)
    }

    /// The students to award, `ranking.size` of them (three by default).
    pub fn best_students(&self) -> Vec<RankedStudent> {
        self.top_n(self.config.ranking.size)
    }
}
