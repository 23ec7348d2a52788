//! University configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "university.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniversityConfig {
    #[serde(default)]
    pub grades: GradeScale,
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// Accepted grade range for recorded exams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeScale {
    #[serde(default = "default_min_grade")]
    pub min: i32,
    #[serde(default = "default_max_grade")]
    pub max: i32,
    /// Reject grades outside `[min, max]` when recording exams.
    #[serde(default = "default_true")]
    pub enforce: bool,
}

impl GradeScale {
    pub fn contains(&self, grade: i32) -> bool {
        (self.min..=self.max).contains(&grade)
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            min: default_min_grade(),
            max: default_max_grade(),
            enforce: true,
        }
    }
}

/// Parameters of the best-student ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// How many students the award query returns.
    #[serde(default = "default_ranking_size")]
    pub size: usize,
    /// Multiplier applied to the exams/courses ratio.
    #[serde(default = "default_bonus_factor")]
    pub bonus_factor: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            size: default_ranking_size(),
            bonus_factor: default_bonus_factor(),
        }
    }
}

fn default_min_grade() -> i32 {
    0
}
fn default_max_grade() -> i32 {
    30
}
fn default_true() -> bool {
    true
}
fn default_ranking_size() -> usize {
    3
}
fn default_bonus_factor() -> f64 {
    10.0
}

/// Load configuration from `university.toml` in the current directory, or
/// defaults if there is none.
pub fn load_config() -> Result<UniversityConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the current directory.
pub fn load_config_from(path: Option<&Path>) -> Result<UniversityConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        local.exists().then_some(local)
    };

    let Some(config_path) = config_path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(UniversityConfig::default());
    };

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config from {}", config_path.display()))?;
    let config: UniversityConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", config_path.display()))?;

    anyhow::ensure!(
        config.grades.min <= config.grades.max,
        "grade scale is empty: min {} is greater than max {}",
        config.grades.min,
        config.grades.max
    );
    anyhow::ensure!(
        config.ranking.bonus_factor.is_finite(),
        "ranking bonus_factor must be a finite number"
    );

    tracing::debug!("loaded config from {}", config_path.display());
    Ok(config)
}
