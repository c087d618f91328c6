use crate::config::registry::Registry;
use crate::core::catalog::TransformerCatalog;
use crate::domain::model::TypeReference;
use crate::domain::ports::{Transformer, TransformerFactory};
use crate::utils::error::{DispatchError, Result, TypeLoadKind};
use std::fmt;

/// Steps a single `transform_data` call moves through. A failure in any of
/// them aborts the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStage {
    Idle,
    Resolving,
    Loading,
    Instantiating,
    Executing,
    Done,
}

impl fmt::Display for DispatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DispatchStage::Idle => "idle",
            DispatchStage::Resolving => "resolving",
            DispatchStage::Loading => "loading",
            DispatchStage::Instantiating => "instantiating",
            DispatchStage::Executing => "executing",
            DispatchStage::Done => "done",
        };
        f.write_str(name)
    }
}

pub struct Dispatcher {
    registry: Registry,
    catalog: TransformerCatalog,
}

impl Dispatcher {
    pub fn new(registry: Registry, catalog: TransformerCatalog) -> Self {
        Self { registry, catalog }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn catalog(&self) -> &TransformerCatalog {
        &self.catalog
    }

    /// Resolves `name`, builds a fresh transformer for it and runs it.
    pub fn transform_data(&self, name: &str) -> Result<()> {
        let (reference, mut transformer) = self.instantiate(name)?;

        tracing::info!(
            "Start to transform data for data source {} using {}",
            name,
            reference
        );
        tracing::debug!(stage = %DispatchStage::Executing, data_source = name);
        transformer
            .transform()
            .map_err(|source| DispatchError::TransformExecution {
                data_source: name.to_string(),
                source,
            })?;

        tracing::debug!(stage = %DispatchStage::Done, data_source = name);
        Ok(())
    }

    /// Resolves `name` and checks the type is loadable without building it.
    pub fn plan(&self, name: &str) -> Result<TypeReference> {
        let reference = self.resolve(name)?;
        self.load(&reference)?;
        Ok(reference)
    }

    fn instantiate(&self, name: &str) -> Result<(TypeReference, Box<dyn Transformer>)> {
        let reference = self.resolve(name)?;
        let factory = self.load(&reference)?;

        tracing::debug!(stage = %DispatchStage::Instantiating, data_source = name);
        let transformer = factory().map_err(|source| DispatchError::Instantiation {
            reference: reference.to_string(),
            source,
        })?;

        Ok((reference, transformer))
    }

    fn resolve(&self, name: &str) -> Result<TypeReference> {
        tracing::debug!(stage = %DispatchStage::Resolving, data_source = name);
        self.registry.resolve(name)
    }

    fn load(&self, reference: &TypeReference) -> Result<&TransformerFactory> {
        let namespace = reference.namespace_path();
        tracing::debug!(stage = %DispatchStage::Loading, namespace = %namespace);

        let module = self
            .catalog
            .module(&namespace)
            .ok_or_else(|| DispatchError::TypeLoad {
                reference: reference.to_string(),
                kind: TypeLoadKind::ModuleNotFound {
                    namespace: namespace.clone(),
                },
            })?;

        module
            .factory(&reference.type_name)
            .ok_or_else(|| DispatchError::TypeLoad {
                reference: reference.to_string(),
                kind: TypeLoadKind::TypeNotFound {
                    namespace,
                    type_name: reference.type_name.clone(),
                },
            })
    }
}
