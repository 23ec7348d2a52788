//! Averages and the best-student ranking.
//!
//! Every function here is a pure query over a read-only [`Records`] view.
//! Nothing is cached; each call recomputes from the ledger.
//!
//! The ranking score of a student with at least one exam is
//!
//! score = average grade + (exams taken / courses enrolled) * bonus factor
//!
//! A student with exams but no enrolled courses gets no bonus, so the score
//! is the plain average. Students without exams are not ranked.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::Result;
use crate::ledger::ExamLedger;
use crate::model::{CourseId, ExamResult, Student, StudentId};
use crate::registry::{CourseRegistry, StudentRegistry};

/// Read-only view over everything the aggregation queries need.
#[derive(Debug, Clone, Copy)]
pub struct Records<'a> {
    pub students: &'a StudentRegistry,
    pub courses: &'a CourseRegistry,
    pub ledger: &'a ExamLedger,
}

impl<'a> Records<'a> {
    pub fn new(
        students: &'a StudentRegistry,
        courses: &'a CourseRegistry,
        ledger: &'a ExamLedger,
    ) -> Self {
        Self {
            students,
            courses,
            ledger,
        }
    }
}

/// A ranked student with the terms that produced the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStudent {
    pub student: Student,
    /// Mean of every recorded grade, repeated attempts included.
    pub average: f64,
    pub exams_taken: usize,
    pub courses_enrolled: usize,
    pub bonus: f64,
    pub score: f64,
}

/// Arithmetic mean of the grades, or `None` when there are no results.
pub fn mean_grade<'r>(results: impl IntoIterator<Item = &'r ExamResult>) -> Option<f64> {
    let (sum, count) = results
        .into_iter()
        .fold((0i64, 0usize), |(sum, count), r| (sum + r.grade as i64, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

/// Bonus term of the ranking score. Zero when the student attends no course.
pub fn participation_bonus(exams_taken: usize, courses_enrolled: usize, factor: f64) -> f64 {
    if courses_enrolled == 0 {
        return 0.0;
    }
    exams_taken as f64 / courses_enrolled as f64 * factor
}

/// Average grade of a registered student.
///
/// `Ok(None)` means the student exists but has no exams recorded.
pub fn student_average(records: &Records<'_>, student_id: StudentId) -> Result<Option<f64>> {
    records.students.get(student_id)?;
    Ok(mean_grade(records.ledger.results_for(student_id)))
}

/// Average grade over every exam recorded for an active course.
///
/// `Ok(None)` means the course exists but nobody took its exam.
pub fn course_average(records: &Records<'_>, course_id: CourseId) -> Result<Option<f64>> {
    records.courses.get(course_id)?;
    Ok(mean_grade(records.ledger.results_for_course(course_id)))
}

/// Ranking entry for one student, or `None` if the student has no exams or is
/// not registered.
pub fn student_score(
    records: &Records<'_>,
    student_id: StudentId,
    bonus_factor: f64,
) -> Option<RankedStudent> {
    let student = match records.students.get(student_id) {
        Ok(student) => student,
        Err(e) => {
            tracing::warn!("ledger references unregistered student: {e}");
            return None;
        }
    };

    let results: Vec<&ExamResult> = records.ledger.results_for(student_id).collect();
    let average = mean_grade(results.iter().copied())?;
    let exams_taken = results.len();
    let courses_enrolled = records.courses.courses_of(student_id).count();

    if courses_enrolled == 0 {
        tracing::warn!(
            "student {student_id} has {exams_taken} exam(s) but no enrolled course, ranking without bonus"
        );
    }

    let bonus = participation_bonus(exams_taken, courses_enrolled, bonus_factor);

    Some(RankedStudent {
        student: student.clone(),
        average,
        exams_taken,
        courses_enrolled,
        bonus,
        score: average + bonus,
    })
}

/// The `n` best students by descending score.
///
/// Ties are broken by ascending student id. Fewer than `n` entries are
/// returned when fewer students have exams.
pub fn top_n(records: &Records<'_>, n: usize, bonus_factor: f64) -> Vec<RankedStudent> {
    let mut ranked: Vec<RankedStudent> = records
        .ledger
        .examined_students()
        .into_iter()
        .filter_map(|id| student_score(records, id, bonus_factor))
        .collect();

    ranked.sort_by(compare_ranked);
    ranked.truncate(n);

    tracing::debug!("ranked {} student(s), returning top {}", ranked.len(), n);
    ranked
}

fn compare_ranked(a: &RankedStudent, b: &RankedStudent) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.student.id().cmp(&b.student.id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        students: StudentRegistry,
        courses: CourseRegistry,
        ledger: ExamLedger,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                students: StudentRegistry::new(),
                courses: CourseRegistry::new(),
                ledger: ExamLedger::new(),
            }
        }

        fn records(&self) -> Records<'_> {
            Records::new(&self.students, &self.courses, &self.ledger)
        }

        fn enroll(&mut self, student: StudentId, course: CourseId) {
            let s = self.students.get(student).unwrap().clone();
            self.courses.enroll(course, &s).unwrap();
        }
    }

    #[test]
    fn mean_of_grades() {
        let results = [
            ExamResult::new(StudentId(10000), CourseId(10), 20),
            ExamResult::new(StudentId(10000), CourseId(11), 30),
            ExamResult::new(StudentId(10000), CourseId(12), 10),
        ];
        assert_eq!(mean_grade(&results), Some(20.0));
        assert_eq!(mean_grade(std::iter::empty()), None);
    }

    #[test]
    fn average_of_zero_is_not_empty() {
        let results = [ExamResult::new(StudentId(10000), CourseId(10), 0)];
        assert_eq!(mean_grade(&results), Some(0.0));
    }

    #[test]
    fn bonus_without_courses_is_zero() {
        assert_eq!(participation_bonus(3, 0, 10.0), 0.0);
        assert_eq!(participation_bonus(1, 2, 10.0), 5.0);
        assert_eq!(participation_bonus(2, 2, 10.0), 10.0);
    }

    #[test]
    fn student_average_sentinel_and_not_found() {
        let mut fx = Fixture::new();
        let mario = fx.students.register("Mario", "Rossi");
        assert_eq!(student_average(&fx.records(), mario).unwrap(), None);

        fx.ledger.record(mario, CourseId(10), 24);
        assert_eq!(student_average(&fx.records(), mario).unwrap(), Some(24.0));

        assert!(student_average(&fx.records(), StudentId(10001))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn course_average_isolated_per_course() {
        let mut fx = Fixture::new();
        let a = fx.students.register("Anna", "Bianchi");
        let b = fx.students.register("Bruno", "Neri");
        let c1 = fx.courses.register("OOP", "James Gosling");
        let c2 = fx.courses.register("Databases", "Edgar Codd");
        fx.ledger.record(a, c1, 27);
        fx.ledger.record(b, c2, 18);

        assert_eq!(course_average(&fx.records(), c1).unwrap(), Some(27.0));
        assert_eq!(course_average(&fx.records(), c2).unwrap(), Some(18.0));
    }

    #[test]
    fn course_average_empty_vs_missing() {
        let mut fx = Fixture::new();
        let c = fx.courses.register("OOP", "James Gosling");
        assert_eq!(course_average(&fx.records(), c).unwrap(), None);
        assert!(course_average(&fx.records(), CourseId(99))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn ranking_combines_average_and_bonus() {
        let mut fx = Fixture::new();
        let s1 = fx.students.register("Sara", "Uno");
        let s2 = fx.students.register("Sandro", "Due");
        let s3 = fx.students.register("Silvia", "Tre");
        let c1 = fx.courses.register("OOP", "James Gosling");
        let c2 = fx.courses.register("Databases", "Edgar Codd");

        fx.enroll(s1, c1);
        fx.enroll(s1, c2);
        fx.enroll(s2, c1);
        fx.enroll(s3, c1);
        fx.enroll(s3, c2);

        fx.ledger.record(s1, c1, 24);
        fx.ledger.record(s1, c2, 26);
        fx.ledger.record(s2, c1, 20);
        fx.ledger.record(s3, c1, 28);

        let top = top_n(&fx.records(), 3, 10.0);
        let order: Vec<StudentId> = top.iter().map(|r| r.student.id()).collect();
        assert_eq!(order, vec![s1, s3, s2]);

        let scores: Vec<f64> = top.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![35.0, 33.0, 30.0]);
        assert_eq!(top[1].bonus, 5.0);
        assert_eq!(top[1].courses_enrolled, 2);
        assert_eq!(top[1].exams_taken, 1);
    }

    #[test]
    fn ranking_skips_students_without_exams_and_truncates() {
        let mut fx = Fixture::new();
        let a = fx.students.register("Anna", "Bianchi");
        let _idle = fx.students.register("Ivo", "Fermo");
        let c = fx.courses.register("OOP", "James Gosling");
        fx.enroll(a, c);
        fx.ledger.record(a, c, 30);

        let top = top_n(&fx.records(), 3, 10.0);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].student.id(), a);

        assert!(top_n(&fx.records(), 0, 10.0).is_empty());
    }

    #[test]
    fn ranking_ties_break_by_ascending_id() {
        let mut fx = Fixture::new();
        let c = fx.courses.register("OOP", "James Gosling");
        let ids: Vec<StudentId> = ["A", "B", "C"]
            .iter()
            .map(|n| fx.students.register(*n, "Pari"))
            .collect();
        for &id in ids.iter().rev() {
            fx.enroll(id, c);
            fx.ledger.record(id, c, 25);
        }

        let order: Vec<StudentId> = top_n(&fx.records(), 3, 10.0)
            .iter()
            .map(|r| r.student.id())
            .collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn ranking_student_without_courses_uses_average() {
        let mut fx = Fixture::new();
        let lone = fx.students.register("Lone", "Wolf");
        let c = fx.courses.register("OOP", "James Gosling");
        fx.ledger.record(lone, c, 22);

        let top = top_n(&fx.records(), 3, 10.0);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].courses_enrolled, 0);
        assert_eq!(top[0].bonus, 0.0);
        assert_eq!(top[0].score, 22.0);
    }

    #[test]
    fn ranking_ignores_unregistered_ledger_entries() {
        let mut fx = Fixture::new();
        fx.ledger.record(StudentId(42), CourseId(10), 30);
        assert!(top_n(&fx.records(), 3, 10.0).is_empty());
    }
}
