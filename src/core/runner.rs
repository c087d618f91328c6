use crate::config::cli::{CliConfig, Solution};
use crate::config::registry::Registry;
use crate::core::catalog::TransformerCatalog;
use crate::core::dispatcher::Dispatcher;
use crate::core::static_dispatch::{self, KNOWN_DATA_SOURCES};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// What a CLI invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `--list`: data source name and the type it maps to.
    Listed(Vec<(String, String)>),
    /// `--dry-run`: the transformer was located but not built or run.
    Planned { data_source: String, target: String },
    Transformed { data_source: String },
}

/// Runs one CLI invocation. The solution is checked before anything else so
/// an invalid value is always reported as such.
pub fn run(config: &CliConfig) -> Result<RunOutcome> {
    let solution = config.solution()?;

    match solution {
        Solution::Solution1 => run_static(config, solution),
        Solution::Solution2 => run_registry(config, solution),
    }
}

fn run_static(config: &CliConfig, solution: Solution) -> Result<RunOutcome> {
    if config.list {
        let entries = KNOWN_DATA_SOURCES
            .iter()
            .map(|name| {
                static_dispatch::plan(name)
                    .map(|source| (name.to_string(), source.type_name().to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        return Ok(RunOutcome::Listed(entries));
    }

    config.validate()?;
    let name = config.datasource_name.as_str();

    if config.dry_run {
        let source = static_dispatch::plan(name)?;
        return Ok(RunOutcome::Planned {
            data_source: name.to_string(),
            target: source.type_name().to_string(),
        });
    }

    println!(
        "[{}] Start to transform data without using dynamic import for data source {}",
        solution, name
    );
    static_dispatch::transform_data(name)?;
    Ok(RunOutcome::Transformed {
        data_source: name.to_string(),
    })
}

fn run_registry(config: &CliConfig, solution: Solution) -> Result<RunOutcome> {
    config.validate_registry_path()?;

    // 載入 registry
    tracing::info!("Loading data source registry from: {}", config.config);
    let registry = Registry::load(&config.config)?;
    let dispatcher = Dispatcher::new(registry, TransformerCatalog::builtin()?);

    if config.list {
        let registry = dispatcher.registry();
        let entries = registry
            .data_sources()
            .into_iter()
            .map(|name| {
                let target = registry.get(name).unwrap_or_default();
                (name.to_string(), target.to_string())
            })
            .collect();
        return Ok(RunOutcome::Listed(entries));
    }

    config.validate()?;
    let name = config.datasource_name.as_str();

    if config.dry_run {
        let reference = dispatcher.plan(name)?;
        return Ok(RunOutcome::Planned {
            data_source: name.to_string(),
            target: reference.to_string(),
        });
    }

    println!(
        "[{}] Start to transform data with using dynamic import for data source {}",
        solution, name
    );
    dispatcher.transform_data(name)?;
    Ok(RunOutcome::Transformed {
        data_source: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DispatchError;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(std::iter::once("etl-dispatch").chain(args.iter().copied()))
    }

    fn registry_file(dir: &TempDir) -> String {
        let path = dir.path().join("datasources.json");
        std::fs::write(
            &path,
            r#"{"datasource_a": "solution_2.data_etl.datasource_a.DatasourceA"}"#,
        )
        .unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_static_dry_run_does_not_transform() {
        let outcome = run(&cli(&["--solution", "solution_1", "--dry-run"])).unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Planned {
                data_source: "datasource_a".to_string(),
                target: "DatasourceA".to_string(),
            }
        );
    }

    #[test]
    fn test_static_list_reports_known_sources() {
        match run(&cli(&["--solution", "solution_1", "--list"])).unwrap() {
            RunOutcome::Listed(entries) => {
                let names: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
                assert_eq!(names, KNOWN_DATA_SOURCES.to_vec());
                assert_eq!(entries[0].1, "DatasourceA");
            }
            other => panic!("expected Listed, got {:?}", other),
        }
    }

    #[test]
    fn test_static_solution_ignores_config_path() {
        let outcome = run(&cli(&["--solution", "solution_1", "--config", "x.yaml"])).unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Transformed {
                data_source: "datasource_a".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_solution_reported_first() {
        let err = run(&cli(&["--solution", "bogus", "--datasource-name", " "])).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidSolution { .. }));
    }

    #[test]
    fn test_registry_dry_run_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = registry_file(&temp_dir);

        let outcome = run(&cli(&["--config", path.as_str(), "--dry-run"])).unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Planned {
                data_source: "datasource_a".to_string(),
                target: "solution_2.data_etl.datasource_a.DatasourceA".to_string(),
            }
        );

        let outcome = run(&cli(&["--config", path.as_str(), "--list"])).unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Listed(vec![(
                "datasource_a".to_string(),
                "solution_2.data_etl.datasource_a.DatasourceA".to_string()
            )])
        );
    }

    #[test]
    fn test_registry_transform() {
        let temp_dir = TempDir::new().unwrap();
        let path = registry_file(&temp_dir);

        let outcome = run(&cli(&["--config", path.as_str()])).unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Transformed {
                data_source: "datasource_a".to_string()
            }
        );
    }

    #[test]
    fn test_registry_solution_checks_config_path() {
        let err = run(&cli(&["--config", "x.yaml"])).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidConfigValue { .. }));

        let err = run(&cli(&["--config", "missing/datasources.json"])).unwrap_err();
        assert!(matches!(err, DispatchError::ConfigLoad { .. }));
    }
}
