pub mod spec;
pub mod tasks;

pub use spec::{classify_heading, SpecParser};
pub use tasks::{default_tasks, TaskExtractor, DEFAULT_TASKS};
