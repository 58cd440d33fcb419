pub mod config;
pub mod manifest;
pub mod specification;

pub use config::{BackendConfig, BackendProvider, KiroConfig, CONFIG_FILE};
pub use manifest::Manifest;
pub use specification::{SpecSection, Specification};
