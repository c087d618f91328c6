use crate::domain::ports::Transformer;

#[derive(Debug, Default)]
pub struct DatasourceC;

impl Transformer for DatasourceC {
    fn transform(&mut self) -> anyhow::Result<()> {
        tracing::info!("Transforming data from data source C");
        Ok(())
    }
}
