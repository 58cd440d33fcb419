//! Task application against the workspace
//!
//! The engine's behaviour depends only on whether the workspace currently
//! holds any file. An empty workspace receives the three-file counter demo;
//! any other workspace gets a line appended to the notes file. The check is a
//! live listing, not a stored flag, so the scaffold is written again only if
//! every file has been deleted in between. Applying is therefore not
//! idempotent: the first call's manifest is not reproduced by a retry.

use super::store::{WorkspaceError, WorkspaceResult, WorkspaceStore};
use crate::models::Manifest;
use tracing::info;

pub const INDEX_HTML: &str = "index.html";
pub const STYLES_CSS: &str = "styles.css";
pub const APP_JS: &str = "app.js";
pub const NOTES_FILE: &str = "README.generated.md";

const INDEX_HTML_TEMPLATE: &str = include_str!("../../templates/scaffold/index.html");
const STYLES_CSS_TEMPLATE: &str = include_str!("../../templates/scaffold/styles.css");
const APP_JS_TEMPLATE: &str = include_str!("../../templates/scaffold/app.js");

/// Scaffold files in the order they are written and reported
pub const SCAFFOLD_FILES: [(&str, &str); 3] = [
    (INDEX_HTML, INDEX_HTML_TEMPLATE),
    (STYLES_CSS, STYLES_CSS_TEMPLATE),
    (APP_JS, APP_JS_TEMPLATE),
];

/// Workspace state the engine dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldState {
    Empty,
    Nonempty,
}

pub struct ScaffoldEngine<'a> {
    store: &'a WorkspaceStore,
}

impl<'a> ScaffoldEngine<'a> {
    pub fn new(store: &'a WorkspaceStore) -> Self {
        Self { store }
    }

    pub fn state(&self) -> ScaffoldState {
        if self.store.is_empty() {
            ScaffoldState::Empty
        } else {
            ScaffoldState::Nonempty
        }
    }

    /// Apply one task description to the workspace
    pub fn apply(&self, task: &str) -> WorkspaceResult<Manifest> {
        match self.state() {
            ScaffoldState::Empty => self.write_scaffold(),
            ScaffoldState::Nonempty => self.record_completion(task),
        }
    }

    fn write_scaffold(&self) -> WorkspaceResult<Manifest> {
        let mut created = Vec::with_capacity(SCAFFOLD_FILES.len());
        for (path, content) in SCAFFOLD_FILES {
            self.store.write(path, content)?;
            created.push(path.to_string());
        }

        info!(files = ?created, "scaffolded empty workspace");
        Ok(Manifest::Created(created))
    }

    /// Read-modify-write of the notes file; unsynchronised
    fn record_completion(&self, task: &str) -> WorkspaceResult<Manifest> {
        let existing = match self.store.read(NOTES_FILE) {
            Ok(content) => content,
            Err(WorkspaceError::NotFound(_)) => String::new(),
            Err(e) => return Err(e),
        };

        let updated = format!("{}- Completed task: {}\n", existing, task);
        self.store.write(NOTES_FILE, &updated)?;

        info!(task, "recorded completed task");
        Ok(Manifest::Updated(vec![NOTES_FILE.to_string()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, WorkspaceStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = WorkspaceStore::open(temp_dir.path()).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_empty_workspace_gets_scaffold() {
        let (_tmp, store) = setup();
        let engine = ScaffoldEngine::new(&store);
        assert_eq!(engine.state(), ScaffoldState::Empty);

        let manifest = engine.apply("x").unwrap();

        assert_eq!(
            manifest,
            Manifest::Created(vec![
                "index.html".to_string(),
                "styles.css".to_string(),
                "app.js".to_string()
            ])
        );
        assert_eq!(store.list(), vec!["app.js", "index.html", "styles.css"]);
        assert_eq!(engine.state(), ScaffoldState::Nonempty);
    }

    #[test]
    fn test_scaffold_forms_counter_page() {
        let (_tmp, store) = setup();
        ScaffoldEngine::new(&store).apply("x").unwrap();

        let html = store.read(INDEX_HTML).unwrap();
        assert!(html.contains("href=\"styles.css\""));
        assert!(html.contains("src=\"app.js\""));
        assert!(html.contains("id=\"btn\""));
        assert!(html.contains("id=\"count\""));

        let js = store.read(APP_JS).unwrap();
        assert!(js.contains("getElementById('btn')"));
        assert!(js.contains("getElementById('count')"));
    }

    #[test]
    fn test_second_apply_appends_note_only() {
        let (_tmp, store) = setup();
        let engine = ScaffoldEngine::new(&store);
        engine.apply("x").unwrap();
        let html_before = store.read(INDEX_HTML).unwrap();
        let css_before = store.read(STYLES_CSS).unwrap();
        let js_before = store.read(APP_JS).unwrap();

        let manifest = engine.apply("y").unwrap();

        assert_eq!(manifest, Manifest::Updated(vec![NOTES_FILE.to_string()]));
        assert_eq!(store.read(NOTES_FILE).unwrap(), "- Completed task: y\n");
        assert_eq!(store.read(INDEX_HTML).unwrap(), html_before);
        assert_eq!(store.read(STYLES_CSS).unwrap(), css_before);
        assert_eq!(store.read(APP_JS).unwrap(), js_before);
    }

    #[test]
    fn test_notes_accumulate_in_order() {
        let (_tmp, store) = setup();
        let engine = ScaffoldEngine::new(&store);
        engine.apply("scaffold").unwrap();

        engine.apply("first").unwrap();
        engine.apply("second").unwrap();

        assert_eq!(
            store.read(NOTES_FILE).unwrap(),
            "- Completed task: first\n- Completed task: second\n"
        );
    }

    #[test]
    fn test_unrelated_workspace_takes_append_branch() {
        let (_tmp, store) = setup();
        store.write("notes/todo.txt", "unrelated").unwrap();

        let manifest = ScaffoldEngine::new(&store).apply("task").unwrap();

        assert!(!manifest.is_created());
        assert_eq!(store.list(), vec![NOTES_FILE, "notes/todo.txt"]);
    }

    #[test]
    fn test_append_preserves_existing_notes() {
        let (_tmp, store) = setup();
        store.write(NOTES_FILE, "# Notes\n").unwrap();

        ScaffoldEngine::new(&store).apply("more").unwrap();

        assert_eq!(
            store.read(NOTES_FILE).unwrap(),
            "# Notes\n- Completed task: more\n"
        );
    }

    #[test]
    fn test_scaffold_fires_again_after_external_clear() {
        let (_tmp, store) = setup();
        let engine = ScaffoldEngine::new(&store);
        engine.apply("a").unwrap();
        engine.apply("b").unwrap();

        store.delete("").unwrap();

        assert!(engine.apply("c").unwrap().is_created());
        assert!(!store.list().contains(&NOTES_FILE.to_string()));
    }
}
