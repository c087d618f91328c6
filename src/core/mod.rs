pub mod catalog;
pub mod dispatcher;
#[cfg(feature = "cli")]
pub mod runner;
pub mod static_dispatch;

pub use crate::domain::model::TypeReference;
pub use crate::domain::ports::{Transformer, TransformerFactory};
pub use crate::utils::error::Result;
pub use dispatcher::DispatchStage;
