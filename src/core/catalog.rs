//! Startup-time registration table standing in for runtime type loading.
//!
//! Transformers are registered under a namespace path (the "module") and a
//! type name. The dispatcher looks the module up first and the type second,
//! so a missing module and a missing type are reported separately.

use crate::domain::ports::{Transformer, TransformerFactory};
use crate::transformers::{DatasourceA, DatasourceB, DatasourceC};
use crate::utils::error::{DispatchError, Result};
use std::collections::HashMap;

/// The types registered under one namespace path.
#[derive(Default)]
pub struct TransformerModule {
    factories: HashMap<String, TransformerFactory>,
}

impl TransformerModule {
    pub fn factory(&self, type_name: &str) -> Option<&TransformerFactory> {
        self.factories.get(type_name)
    }

    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Default)]
pub struct TransformerCatalog {
    modules: HashMap<String, TransformerModule>,
}

impl TransformerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the bundled transformers under `solution_2.data_etl`.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        catalog.register_default::<DatasourceA>("solution_2.data_etl.datasource_a", "DatasourceA")?;
        catalog.register_default::<DatasourceB>("solution_2.data_etl.datasource_b", "DatasourceB")?;
        catalog.register_default::<DatasourceC>("solution_2.data_etl.datasource_c", "DatasourceC")?;
        Ok(catalog)
    }

    pub fn register<F>(&mut self, namespace: &str, type_name: &str, factory: F) -> Result<()>
    where
        F: Fn() -> anyhow::Result<Box<dyn Transformer>> + Send + Sync + 'static,
    {
        let module = self.modules.entry(namespace.to_string()).or_default();
        if module.factories.contains_key(type_name) {
            return Err(DispatchError::DuplicateRegistration {
                namespace: namespace.to_string(),
                type_name: type_name.to_string(),
            });
        }

        module
            .factories
            .insert(type_name.to_string(), Box::new(factory));
        tracing::debug!("Registered transformer {}.{}", namespace, type_name);
        Ok(())
    }

    /// Registers a type built through its `Default` impl.
    pub fn register_default<T>(&mut self, namespace: &str, type_name: &str) -> Result<()>
    where
        T: Transformer + Default + 'static,
    {
        self.register(namespace, type_name, || {
            Ok(Box::new(T::default()) as Box<dyn Transformer>)
        })
    }

    pub fn module(&self, namespace: &str) -> Option<&TransformerModule> {
        self.modules.get(namespace)
    }

    pub fn contains(&self, namespace: &str, type_name: &str) -> bool {
        self.module(namespace)
            .map(|module| module.factories.contains_key(type_name))
            .unwrap_or(false)
    }

    /// Fully-qualified names of every registered type, sorted.
    pub fn available_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .modules
            .iter()
            .flat_map(|(namespace, module)| {
                module
                    .factories
                    .keys()
                    .map(move |type_name| format!("{}.{}", namespace, type_name))
            })
            .collect();
        names.sort_unstable();
        names
    }
}
