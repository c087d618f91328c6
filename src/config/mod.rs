#[cfg(feature = "cli")]
pub mod cli;
pub mod registry;

pub use registry::Registry;
