pub mod apply;
pub mod file;
pub mod server;
pub mod spec;
pub mod tasks;
