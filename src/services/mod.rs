//! Service layer for kiro-lite
//!
//! The operations exposed to callers. Services are shared between the
//! HTTP API and CLI commands so both surfaces behave the same.

pub mod apply_service;
pub mod file_service;
pub mod spec_service;
pub mod tasks_service;

// Re-export commonly used types
pub use apply_service::{apply_task, ApplyResult};
pub use file_service::{delete_file, list_files, read_file, write_file, FileContent};
pub use spec_service::{generate_spec, parse_spec, SpecResult};
pub use tasks_service::extract_tasks;
