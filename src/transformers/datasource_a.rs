use crate::domain::ports::Transformer;

#[derive(Debug, Default)]
pub struct DatasourceA;

impl Transformer for DatasourceA {
    fn transform(&mut self) -> anyhow::Result<()> {
        tracing::info!("Transforming data from data source A");
        Ok(())
    }
}
