//! The `university run` command.

use std::path::PathBuf;

use anyhow::Result;

use university_core::RankedStudent;
use university_report::{text, UniversityReport};

pub fn execute(
    scenario_path: PathBuf,
    config_path: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let university = super::load_university(&scenario_path, config_path.as_deref())?;
    tracing::info!(
        "loaded {}: {} students, {} courses",
        university.name(),
        university.students().count(),
        university.courses().count()
    );

    match format.as_str() {
        "json" => {
            let report = UniversityReport::from_university(&university)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            print!("{}", text::full_report(&university)?);
        }
        other => anyhow::bail!("unknown format '{other}', expected text or json"),
    }

    print_summary(&university.best_students());

    if let Some(path) = output {
        UniversityReport::from_university(&university)?.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(ranked: &[RankedStudent]) {
    use comfy_table::{Cell, Table};

    if ranked.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Rank", "Student", "Name", "Average", "Exams/Courses", "Score"]);

    for (i, r) in ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(r.student.id()),
            Cell::new(format!(
                "{} {}",
                r.student.first_name(),
                r.student.last_name()
            )),
            Cell::new(format!("{:.2}", r.average)),
            Cell::new(format!("{}/{}", r.exams_taken, r.courses_enrolled)),
            Cell::new(format!("{:.2}", r.score)),
        ]);
    }

    eprintln!("\n{table}");
}
