use crate::core::DispatchStage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to load configuration '{path}': {reason}")]
    ConfigLoad { path: String, reason: String },

    #[error("Unknown data source '{name}' (available: {available})")]
    UnknownDataSource { name: String, available: String },

    #[error("Malformed type reference for '{name}': '{value}' ({reason})")]
    MalformedReference {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Failed to load type '{reference}': {kind}")]
    TypeLoad {
        reference: String,
        kind: TypeLoadKind,
    },

    #[error("Failed to instantiate '{reference}': {source}")]
    Instantiation {
        reference: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Transformer for data source '{data_source}' failed: {source}")]
    TransformExecution {
        data_source: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Transformer '{namespace}.{type_name}' is already registered")]
    DuplicateRegistration {
        namespace: String,
        type_name: String,
    },

    #[error("Invalid solution '{value}'")]
    InvalidSolution { value: String },

    #[error("Invalid value for {field} '{value}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeLoadKind {
    ModuleNotFound { namespace: String },
    TypeNotFound { namespace: String, type_name: String },
}

impl std::fmt::Display for TypeLoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeLoadKind::ModuleNotFound { namespace } => {
                write!(f, "no module named '{}'", namespace)
            }
            TypeLoadKind::TypeNotFound {
                namespace,
                type_name,
            } => write!(f, "module '{}' has no type '{}'", namespace, type_name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Resolution,
    Loading,
    Execution,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl DispatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DispatchError::ConfigLoad { .. } | DispatchError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            DispatchError::UnknownDataSource { .. } | DispatchError::MalformedReference { .. } => {
                ErrorCategory::Resolution
            }
            DispatchError::TypeLoad { .. }
            | DispatchError::Instantiation { .. }
            | DispatchError::DuplicateRegistration { .. } => ErrorCategory::Loading,
            DispatchError::TransformExecution { .. } => ErrorCategory::Execution,
            DispatchError::InvalidSolution { .. } => ErrorCategory::Usage,
        }
    }

    /// Nothing here is transient: usage and data source mistakes are `High`,
    /// broken configuration or registration is `Critical`.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DispatchError::InvalidSolution { .. }
            | DispatchError::InvalidConfigValue { .. }
            | DispatchError::UnknownDataSource { .. }
            | DispatchError::TransformExecution { .. } => ErrorSeverity::High,
            DispatchError::ConfigLoad { .. }
            | DispatchError::MalformedReference { .. }
            | DispatchError::TypeLoad { .. }
            | DispatchError::Instantiation { .. }
            | DispatchError::DuplicateRegistration { .. } => ErrorSeverity::Critical,
        }
    }

    /// Stage of the dispatch in which the error was raised.
    pub fn stage(&self) -> DispatchStage {
        match self {
            DispatchError::UnknownDataSource { .. } | DispatchError::MalformedReference { .. } => {
                DispatchStage::Resolving
            }
            DispatchError::TypeLoad { .. } => DispatchStage::Loading,
            DispatchError::Instantiation { .. } => DispatchStage::Instantiating,
            DispatchError::TransformExecution { .. } => DispatchStage::Executing,
            DispatchError::ConfigLoad { .. }
            | DispatchError::DuplicateRegistration { .. }
            | DispatchError::InvalidSolution { .. }
            | DispatchError::InvalidConfigValue { .. } => DispatchStage::Idle,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DispatchError::ConfigLoad { path, .. } => {
                format!("Could not read the data source configuration at '{}'", path)
            }
            DispatchError::UnknownDataSource { name, .. } => {
                format!("Data source '{}' is not configured", name)
            }
            DispatchError::MalformedReference { name, value, .. } => format!(
                "Data source '{}' points at '{}', which is not a valid type reference",
                name, value
            ),
            DispatchError::TypeLoad { reference, .. } => {
                format!("No transformer is registered for '{}'", reference)
            }
            DispatchError::Instantiation { reference, .. } => {
                format!("Transformer '{}' could not be created", reference)
            }
            DispatchError::TransformExecution { data_source, .. } => {
                format!("Transforming data source '{}' failed", data_source)
            }
            DispatchError::DuplicateRegistration {
                namespace,
                type_name,
            } => format!(
                "Transformer '{}.{}' was registered twice",
                namespace, type_name
            ),
            DispatchError::InvalidSolution { .. } => {
                "You entered an invalid solution. Please enter solution_1 or solution_2"
                    .to_string()
            }
            DispatchError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DispatchError::ConfigLoad { .. } => {
                "Check that the file exists and is a flat JSON object or TOML table of strings"
                    .to_string()
            }
            DispatchError::UnknownDataSource { available, .. } => {
                format!("Use one of the configured data sources: {}", available)
            }
            DispatchError::MalformedReference { .. } => {
                "Use the form <namespace>.<module>.<TypeName>".to_string()
            }
            DispatchError::TypeLoad { .. } => {
                "Register the transformer in the catalog or fix the configured reference"
                    .to_string()
            }
            DispatchError::Instantiation { .. } => {
                "Check the transformer's constructor and its environment".to_string()
            }
            DispatchError::TransformExecution { .. } => {
                "Inspect the transformer logs for the underlying cause".to_string()
            }
            DispatchError::DuplicateRegistration { .. } => {
                "Register each transformer type exactly once".to_string()
            }
            DispatchError::InvalidSolution { .. } => {
                "Pass --solution solution_1 or --solution solution_2".to_string()
            }
            DispatchError::InvalidConfigValue { .. } => {
                "Fix the command line arguments and try again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
