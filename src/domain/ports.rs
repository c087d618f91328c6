/// A unit of ETL logic. Implementations are constructed per dispatch and
/// dropped once `transform` returns.
pub trait Transformer: Send {
    fn transform(&mut self) -> anyhow::Result<()>;
}

/// Produces a fresh transformer each time it is called.
pub type TransformerFactory =
    Box<dyn Fn() -> anyhow::Result<Box<dyn Transformer>> + Send + Sync>;
