pub mod config;
pub mod core;
pub mod domain;
pub mod transformers;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::registry::Registry;
pub use crate::core::{catalog::TransformerCatalog, dispatcher::Dispatcher, static_dispatch};
pub use crate::domain::{model::TypeReference, ports::Transformer};
pub use crate::utils::error::{DispatchError, Result};
