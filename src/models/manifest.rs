use serde::{Deserialize, Serialize};

/// Paths reported by a single task application.
///
/// Serialises as `{"created": [...]}` or `{"updated": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Manifest {
    /// Files written into a previously empty workspace
    Created(Vec<String>),
    /// Existing files that were modified
    Updated(Vec<String>),
}

impl Manifest {
    pub fn paths(&self) -> &[String] {
        match self {
            Manifest::Created(paths) | Manifest::Updated(paths) => paths,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Manifest::Created(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Manifest::Created(_) => "created",
            Manifest::Updated(_) => "updated",
        }
    }
}
