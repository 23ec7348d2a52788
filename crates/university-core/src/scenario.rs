//! TOML scenario loader.
//!
//! A scenario scripts the calls an embedding application would make on a
//! [`University`]: students, courses, enrollments, and exams. Loading a
//! scenario replays them through the facade in that order.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::UniversityConfig;
use crate::model::{CourseId, StudentId};
use crate::registry::{FIRST_COURSE_ID, FIRST_STUDENT_ID};
use crate::university::University;

/// Parsed scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub university: UniversityHeader,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentEntry>,
    #[serde(default)]
    pub exams: Vec<ExamEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UniversityHeader {
    pub name: String,
    #[serde(default)]
    pub rector: Option<RectorEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RectorEntry {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentEntry {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseEntry {
    pub title: String,
    pub teacher: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EnrollmentEntry {
    pub student: StudentId,
    pub course: CourseId,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExamEntry {
    pub student: StudentId,
    pub course: CourseId,
    pub grade: i32,
}

/// A non-fatal problem found in a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioWarning {
    /// Section and position of the offending entry, e.g. `exams[2]`.
    pub entry: Option<String>,
    pub message: String,
}

/// Parse a scenario from a TOML file.
pub fn parse_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario from {}", path.display()))?;
    parse_scenario_str(&content)
        .with_context(|| format!("failed to parse scenario {}", path.display()))
}

/// Parse a scenario from TOML text.
pub fn parse_scenario_str(content: &str) -> Result<Scenario> {
    let scenario: Scenario = toml::from_str(content).context("invalid scenario TOML")?;
    Ok(scenario)
}

impl Scenario {
    /// Ids the registries will assign to this scenario's students.
    fn student_ids(&self) -> HashSet<StudentId> {
        (0..self.students.len() as u32)
            .map(|i| StudentId(FIRST_STUDENT_ID + i))
            .collect()
    }

    /// Codes the registries will assign to this scenario's courses.
    fn course_ids(&self) -> HashSet<CourseId> {
        (0..self.courses.len() as u32)
            .map(|i| CourseId(FIRST_COURSE_ID + i))
            .collect()
    }

    /// Replay the scenario into a fresh university.
    ///
    /// Stops at the first entry the facade rejects.
    pub fn build(&self, config: UniversityConfig) -> Result<University> {
        let mut university = University::with_config(&self.university.name, config);

        if let Some(rector) = &self.university.rector {
            university.set_rector(&rector.first, &rector.last);
        }
        for s in &self.students {
            university.enroll_student(&s.first, &s.last);
        }
        for c in &self.courses {
            university.activate_course(&c.title, &c.teacher);
        }
        for (i, e) in self.enrollments.iter().enumerate() {
            university
                .register_student_in_course(e.student, e.course)
                .with_context(|| format!("enrollments[{i}] rejected"))?;
        }
        for (i, e) in self.exams.iter().enumerate() {
            university
                .record_exam(e.student, e.course, e.grade)
                .with_context(|| format!("exams[{i}] rejected"))?;
        }

        tracing::debug!(
            "built {} with {} students, {} courses, {} exams",
            university.name(),
            self.students.len(),
            self.courses.len(),
            self.exams.len()
        );
        Ok(university)
    }
}

/// Validate a scenario and return any warnings.
pub fn validate_scenario(scenario: &Scenario, config: &UniversityConfig) -> Vec<ScenarioWarning> {
    let mut warnings = Vec::new();
    let students = scenario.student_ids();
    let courses = scenario.course_ids();

    if scenario.university.name.trim().is_empty() {
        warnings.push(ScenarioWarning {
            entry: None,
            message: "university name is empty".into(),
        });
    }
    if scenario.students.is_empty() {
        warnings.push(ScenarioWarning {
            entry: None,
            message: "scenario has no students".into(),
        });
    }

    let mut seen = HashSet::new();
    for (i, e) in scenario.enrollments.iter().enumerate() {
        let entry = Some(format!("enrollments[{i}]"));
        if !students.contains(&e.student) {
            warnings.push(ScenarioWarning {
                entry: entry.clone(),
                message: format!("student {} will not exist", e.student),
            });
        }
        if !courses.contains(&e.course) {
            warnings.push(ScenarioWarning {
                entry: entry.clone(),
                message: format!("course {} will not exist", e.course),
            });
        }
        if !seen.insert((e.student, e.course)) {
            warnings.push(ScenarioWarning {
                entry,
                message: format!(
                    "student {} is already enrolled in course {}",
                    e.student, e.course
                ),
            });
        }
    }

    for (i, e) in scenario.exams.iter().enumerate() {
        let entry = Some(format!("exams[{i}]"));
        if !students.contains(&e.student) {
            warnings.push(ScenarioWarning {
                entry: entry.clone(),
                message: format!("student {} will not exist", e.student),
            });
        }
        if !courses.contains(&e.course) {
            warnings.push(ScenarioWarning {
                entry: entry.clone(),
                message: format!("course {} will not exist", e.course),
            });
        }
        if !config.grades.contains(e.grade) {
            warnings.push(ScenarioWarning {
                entry: entry.clone(),
                message: format!(
                    "grade {} is outside {}..={}",
                    e.grade, config.grades.min, config.grades.max
                ),
            });
        }
        if !seen.contains(&(e.student, e.course)) {
            warnings.push(ScenarioWarning {
                entry,
                message: format!(
                    "student {} takes the exam of course {} without being enrolled",
                    e.student, e.course
                ),
            });
        }
    }

    warnings
}
