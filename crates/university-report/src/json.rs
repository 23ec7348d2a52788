//! JSON snapshot of a university.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use university_core::{CourseId, RankedStudent, StudentId, University};

/// Serializable snapshot of students, courses, averages, and the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityReport {
    pub name: String,
    #[serde(default)]
    pub rector: Option<String>,
    pub students: Vec<StudentSummary>,
    pub courses: Vec<CourseSummary>,
    pub ranking: Vec<RankingEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    /// Courses the student is registered for.
    pub courses: Vec<CourseId>,
    pub exams_taken: usize,
    /// `None` when no exam was recorded.
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
    pub teacher: String,
    pub attendees: Vec<StudentId>,
    pub exams_taken: usize,
    /// `None` when nobody took the exam.
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub average: f64,
    pub bonus: f64,
    pub score: f64,
}

impl From<&RankedStudent> for RankingEntry {
    fn from(r: &RankedStudent) -> Self {
        Self {
            id: r.student.id(),
            first_name: r.student.first_name().to_string(),
            last_name: r.student.last_name().to_string(),
            average: r.average,
            bonus: r.bonus,
            score: r.score,
        }
    }
}

impl UniversityReport {
    /// Snapshot the current state of a university.
    pub fn from_university(university: &University) -> Result<Self> {
        let mut students = Vec::new();
        for s in university.students() {
            let courses = university
                .study_plan(s.id())?
                .iter()
                .map(|c| c.id())
                .collect();
            students.push(StudentSummary {
                id: s.id(),
                first_name: s.first_name().to_string(),
                last_name: s.last_name().to_string(),
                courses,
                exams_taken: university.exam_results(s.id())?.len(),
                average: university.student_average(s.id())?,
            });
        }

        let mut courses = Vec::new();
        for c in university.courses() {
            courses.push(CourseSummary {
                id: c.id(),
                title: c.title().to_string(),
                teacher: c.teacher_name().to_string(),
                attendees: c.enrolled_students().to_vec(),
                exams_taken: university.course_exam_results(c.id())?.len(),
                average: university.course_average(c.id())?,
            });
        }

        Ok(Self {
            name: university.name().to_string(),
            rector: university.rector().map(|r| r.to_string()),
            students,
            courses,
            ranking: university
                .best_students()
                .iter()
                .map(RankingEntry::from)
                .collect(),
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: UniversityReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
