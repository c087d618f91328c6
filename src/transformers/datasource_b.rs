use crate::domain::ports::Transformer;

#[derive(Debug, Default)]
pub struct DatasourceB;

impl Transformer for DatasourceB {
    fn transform(&mut self) -> anyhow::Result<()> {
        tracing::info!("Transforming data from data source B");
        Ok(())
    }
}
