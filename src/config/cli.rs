use crate::utils::error::{DispatchError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_CONFIG_PATH: &str = "config/datasources.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solution {
    /// Static branching over known data sources
    Solution1,
    /// Configuration-driven lookup through the registry
    Solution2,
}

impl FromStr for Solution {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "solution_1" => Ok(Solution::Solution1),
            "solution_2" => Ok(Solution::Solution2),
            other => Err(DispatchError::InvalidSolution {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solution::Solution1 => f.write_str("solution_1"),
            Solution::Solution2 => f.write_str("solution_2"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "etl-dispatch")]
#[command(about = "A script that accepts data source name")]
pub struct CliConfig {
    /// Please enter solution_1 or solution_2
    #[arg(long, default_value = "solution_2")]
    pub solution: String,

    /// The name of the data source
    #[arg(long, default_value = "datasource_a")]
    pub datasource_name: String,

    /// Path to the data source registry (JSON or TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// List the configured data sources and exit
    #[arg(long)]
    pub list: bool,

    /// Resolve and load the transformer without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn solution(&self) -> Result<Solution> {
        self.solution.parse()
    }

    /// Only the registry-driven solution reads `--config`.
    pub fn validate_registry_path(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        validate_file_extension("config", &self.config, &["json", "toml"])?;
        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("datasource_name", &self.datasource_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["etl-dispatch"]);
        assert_eq!(config.solution().unwrap(), Solution::Solution2);
        assert_eq!(config.datasource_name, "datasource_a");
        assert_eq!(config.config, DEFAULT_CONFIG_PATH);
        assert!(config.validate().is_ok());
        assert!(config.validate_registry_path().is_ok());
    }

    #[test]
    fn test_explicit_arguments() {
        let config = CliConfig::parse_from([
            "etl-dispatch",
            "--solution",
            "solution_1",
            "--datasource-name",
            "datasource_b",
            "--config",
            "registry.toml",
        ]);
        assert_eq!(config.solution().unwrap(), Solution::Solution1);
        assert_eq!(config.datasource_name, "datasource_b");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_solution_is_not_a_parse_error() {
        let config = CliConfig::try_parse_from(["etl-dispatch", "--solution", "solution_3"])
            .expect("clap accepts any solution string");
        assert!(matches!(
            config.solution(),
            Err(DispatchError::InvalidSolution { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_unsupported_config() {
        let config = CliConfig::parse_from(["etl-dispatch", "--config", "registry.yaml"]);
        assert!(config.validate().is_ok());
        assert!(config.validate_registry_path().is_err());

        let config = CliConfig::parse_from(["etl-dispatch", "--datasource-name", " "]);
        assert!(config.validate().is_err());
    }
}
