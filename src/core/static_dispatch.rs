use crate::domain::ports::Transformer;
use crate::transformers::{DatasourceA, DatasourceB, DatasourceC};
use crate::utils::error::{DispatchError, Result};

pub const KNOWN_DATA_SOURCES: [&str; 3] = ["datasource_a", "datasource_b", "datasource_c"];

/// Transformers wired up at compile time, one per known data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticSource {
    DatasourceA,
    DatasourceB,
    DatasourceC,
}

impl StaticSource {
    pub fn type_name(self) -> &'static str {
        match self {
            StaticSource::DatasourceA => "DatasourceA",
            StaticSource::DatasourceB => "DatasourceB",
            StaticSource::DatasourceC => "DatasourceC",
        }
    }

    fn build(self) -> Box<dyn Transformer> {
        match self {
            StaticSource::DatasourceA => Box::new(DatasourceA),
            StaticSource::DatasourceB => Box::new(DatasourceB),
            StaticSource::DatasourceC => Box::new(DatasourceC),
        }
    }
}

/// Picks the transformer for `name` without building it.
pub fn plan(name: &str) -> Result<StaticSource> {
    match name {
        "datasource_a" => Ok(StaticSource::DatasourceA),
        "datasource_b" => Ok(StaticSource::DatasourceB),
        "datasource_c" => Ok(StaticSource::DatasourceC),
        _ => Err(DispatchError::UnknownDataSource {
            name: name.to_string(),
            available: KNOWN_DATA_SOURCES.join(", "),
        }),
    }
}

/// Dispatch without configuration: every data source is wired up here.
pub fn transform_data(name: &str) -> Result<()> {
    let mut transformer = plan(name)?.build();

    tracing::info!("Start to transform data for data source {}", name);
    transformer
        .transform()
        .map_err(|source| DispatchError::TransformExecution {
            data_source: name.to_string(),
            source,
        })
}
