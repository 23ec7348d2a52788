//! The `university validate` command.

use std::path::PathBuf;

use anyhow::Result;

use university_core::load_config_from;
use university_core::scenario::{parse_scenario, validate_scenario};

pub fn execute(scenario_path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let scenario = parse_scenario(&scenario_path)?;

    println!(
        "Scenario: {} ({} students, {} courses, {} enrollments, {} exams)",
        scenario.university.name,
        scenario.students.len(),
        scenario.courses.len(),
        scenario.enrollments.len(),
        scenario.exams.len()
    );

    let warnings = validate_scenario(&scenario, &config);
    for w in &warnings {
        let prefix = w
            .entry
            .as_ref()
            .map(|entry| format!("  [{entry}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Scenario valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
