//! The `university init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("university.toml").exists() {
        println!("university.toml already exists, skipping.");
    } else {
        std::fs::write("university.toml", SAMPLE_CONFIG)?;
        println!("Created university.toml");
    }

    std::fs::create_dir_all("scenarios")?;
    let example_path = Path::new("scenarios/example.toml");
    if example_path.exists() {
        println!("scenarios/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SCENARIO)?;
        println!("Created scenarios/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: university validate --scenario scenarios/example.toml");
    println!("  2. Run: university run --scenario scenarios/example.toml");
    println!("  3. Run: university query --scenario scenarios/example.toml top 3");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# university configuration

[grades]
min = 0
max = 30
# Reject exam grades outside [min, max]
enforce = true

[ranking]
# Number of students returned by the award query
size = 3
# score = average + (exams taken / courses enrolled) * bonus_factor
bonus_factor = 10.0
"#;

const EXAMPLE_SCENARIO: &str = r#"[university]
name = "Example University"
rector = { first = "Ada", last = "Lovelace" }

[[students]]
first = "Mario"
last = "Rossi"

[[students]]
first = "Giulia"
last = "Verdi"

[[courses]]
title = "Object Oriented Programming"
teacher = "James Gosling"

[[courses]]
title = "Databases"
teacher = "Edgar Codd"

[[enrollments]]
student = 10000
course = 10

[[enrollments]]
student = 10001
course = 10

[[enrollments]]
student = 10001
course = 11

[[exams]]
student = 10000
course = 10
grade = 27

[[exams]]
student = 10001
course = 11
grade = 30
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use university_core::scenario::{parse_scenario_str, validate_scenario};
    use university_core::UniversityConfig;

    #[test]
    fn templates_are_valid() {
        let config: UniversityConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, UniversityConfig::default());

        let scenario = parse_scenario_str(EXAMPLE_SCENARIO).unwrap();
        assert!(validate_scenario(&scenario, &config).is_empty());
        assert!(scenario.build(config).is_ok());
    }
}
