//! The `university query` command.

use std::path::PathBuf;

use anyhow::Result;

use university_core::University;
use university_report::text;

use crate::QueryTarget;

pub fn execute(
    scenario_path: PathBuf,
    config_path: Option<PathBuf>,
    target: QueryTarget,
) -> Result<()> {
    let university = super::load_university(&scenario_path, config_path.as_deref())?;
    let output = render(&university, target)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Render one query result in its text report format.
fn render(university: &University, target: QueryTarget) -> Result<String> {
    let output = match target {
        QueryTarget::Student { id } => text::student_info(university.student(id)?),
        QueryTarget::Course { id } => text::course_info(university.course(id)?),
        QueryTarget::Attendees { course } => text::attendee_list(&university.attendees(course)?),
        QueryTarget::StudyPlan { student } => text::study_plan(&university.study_plan(student)?),
        QueryTarget::StudentAvg { student } => {
            text::student_average(student, university.student_average(student)?)
        }
        QueryTarget::CourseAvg { course } => {
            let avg = university.course_average(course)?;
            text::course_average(university.course(course)?, avg)
        }
        QueryTarget::Top { n } => {
            let ranked = match n {
                Some(n) => university.top_n(n),
                None => university.best_students(),
            };
            text::ranking(&ranked)
        }
    };
    Ok(output)
}
