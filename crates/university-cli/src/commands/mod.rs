pub mod init;
pub mod query;
pub mod run;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use university_core::scenario::parse_scenario;
use university_core::{load_config_from, University};

/// Load the config and replay the scenario into a university.
pub fn load_university(scenario: &Path, config: Option<&Path>) -> Result<University> {
    let config = load_config_from(config)?;
    let scenario = parse_scenario(scenario)?;
    scenario.build(config)
}
