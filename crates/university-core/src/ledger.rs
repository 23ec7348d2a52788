//! Append-only exam ledger.
//!
//! Results are kept in recording order with a per-student index. The ledger
//! accepts any grade and any ids; range and reference checks belong to the
//! caller (see [`crate::University::record_exam`]).

use std::collections::HashMap;

use crate::model::{CourseId, ExamResult, StudentId};

#[derive(Debug, Clone, Default)]
pub struct ExamLedger {
    entries: Vec<ExamResult>,
    by_student: HashMap<StudentId, Vec<usize>>,
}

impl ExamLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result. Repeated attempts for the same course are kept.
    pub fn record(&mut self, student_id: StudentId, course_id: CourseId, grade: i32) {
        let index = self.entries.len();
        self.entries.push(ExamResult::new(student_id, course_id, grade));
        self.by_student.entry(student_id).or_default().push(index);
    }

    /// Results of one student in recording order. Empty if none.
    pub fn results_for(&self, student_id: StudentId) -> impl Iterator<Item = &ExamResult> + '_ {
        self.by_student
            .get(&student_id)
            .into_iter()
            .flatten()
            .map(move |&i| &self.entries[i])
    }

    /// Results for one course across all students, in ledger order.
    pub fn results_for_course(
        &self,
        course_id: CourseId,
    ) -> impl Iterator<Item = &ExamResult> + '_ {
        self.entries.iter().filter(move |r| r.course_id == course_id)
    }

    /// Students with at least one result, by ascending id.
    pub fn examined_students(&self) -> Vec<StudentId> {
        let mut ids: Vec<StudentId> = self.by_student.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Every result in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &ExamResult> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
