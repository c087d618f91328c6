// Bundled transformers. Their bodies only report what they were asked to do;
// real extraction and loading live with whoever registers their own types.

pub mod datasource_a;
pub mod datasource_b;
pub mod datasource_c;

pub use datasource_a::DatasourceA;
pub use datasource_b::DatasourceB;
pub use datasource_c::DatasourceC;
