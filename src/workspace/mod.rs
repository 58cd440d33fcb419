pub mod scaffold;
pub mod store;

pub use scaffold::{ScaffoldEngine, ScaffoldState, NOTES_FILE, SCAFFOLD_FILES};
pub use store::{WorkspaceError, WorkspaceResult, WorkspaceStore};
