use crate::domain::model::TypeReference;
use crate::utils::error::{DispatchError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Data source name to type reference mapping. Loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, String>,
}

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

impl Registry {
    /// 從檔案載入 registry，依副檔名選擇 JSON 或 TOML
    pub fn load<P: AsRef<Path>>(source: P) -> Result<Self> {
        let path = source.as_ref();
        let path_display = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| DispatchError::ConfigLoad {
            path: path_display.clone(),
            reason: e.to_string(),
        })?;

        let registry = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(DispatchError::ConfigLoad {
                path: path_display.clone(),
                reason: format!(
                    "unsupported configuration format: {}",
                    other.unwrap_or("<none>")
                ),
            }),
        }
        .map_err(|e| match e {
            DispatchError::ConfigLoad { reason, .. } => DispatchError::ConfigLoad {
                path: path_display.clone(),
                reason,
            },
            other => other,
        })?;

        tracing::debug!(
            "Loaded {} data sources from {}",
            registry.len(),
            path_display
        );
        Ok(registry)
    }

    /// 從 JSON 字串解析 (flat object of strings)
    pub fn from_json_str(content: &str) -> Result<Self> {
        let entries: HashMap<String, String> =
            serde_json::from_str(content).map_err(|e| DispatchError::ConfigLoad {
                path: "<json>".to_string(),
                reason: format!("JSON parsing error: {}", e),
            })?;
        Self::from_entries(Self::substitute_env_vars(entries))
    }

    /// 從 TOML 字串解析 (flat table of strings)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let entries: HashMap<String, String> =
            toml::from_str(content).map_err(|e| DispatchError::ConfigLoad {
                path: "<toml>".to_string(),
                reason: format!("TOML parsing error: {}", e),
            })?;
        Self::from_entries(Self::substitute_env_vars(entries))
    }

    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let registry = Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        };
        registry.validate()?;
        Ok(registry)
    }

    /// 替換已解析值中的環境變數 (例如 ${ETL_NAMESPACE})，未定義的保持原樣
    fn substitute_env_vars(entries: HashMap<String, String>) -> HashMap<String, String> {
        entries
            .into_iter()
            .map(|(name, value)| {
                let value = ENV_VAR_PATTERN
                    .replace_all(&value, |caps: &regex::Captures| {
                        let var_name = &caps[1];
                        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
                    })
                    .into_owned();
                (name, value)
            })
            .collect()
    }

    pub fn resolve(&self, name: &str) -> Result<TypeReference> {
        let value = self
            .entries
            .get(name)
            .ok_or_else(|| DispatchError::UnknownDataSource {
                name: name.to_string(),
                available: self.data_sources().join(", "),
            })?;

        TypeReference::parse(value).map_err(|reason| DispatchError::MalformedReference {
            name: name.to_string(),
            value: value.clone(),
            reason,
        })
    }

    /// Configured data source names, sorted.
    pub fn data_sources(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Validate for Registry {
    fn validate(&self) -> Result<()> {
        for name in self.entries.keys() {
            validate_non_empty_string("data source name", name).map_err(|e| {
                DispatchError::ConfigLoad {
                    path: "<registry>".to_string(),
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(())
    }
}
