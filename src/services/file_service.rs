//! File service - workspace file operations

use crate::workspace::WorkspaceResult;
use crate::AppContext;
use serde::Serialize;

/// A file path together with its text content
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileContent {
    pub path: String,
    pub content: String,
}

pub fn list_files(ctx: &AppContext) -> Vec<String> {
    ctx.store.list()
}

pub fn read_file(ctx: &AppContext, path: &str) -> WorkspaceResult<FileContent> {
    let content = ctx.store.read(path)?;
    Ok(FileContent {
        path: path.to_string(),
        content,
    })
}

pub fn write_file(ctx: &AppContext, path: &str, content: &str) -> WorkspaceResult<()> {
    ctx.store.write(path, content)
}

pub fn delete_file(ctx: &AppContext, path: &str) -> WorkspaceResult<()> {
    ctx.store.delete(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KiroConfig;
    use crate::orchestrator::SpecGenerator;
    use crate::workspace::WorkspaceError;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> AppContext {
        let config = KiroConfig {
            workspace: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        AppContext::with_generator(config, SpecGenerator::fallback()).unwrap()
    }

    #[test]
    fn test_file_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        write_file(&ctx, "src/main.js", "console.log(1);\n").unwrap();
        assert_eq!(list_files(&ctx), vec!["src/main.js"]);

        let file = read_file(&ctx, "src/main.js").unwrap();
        assert_eq!(
            file,
            FileContent {
                path: "src/main.js".to_string(),
                content: "console.log(1);\n".to_string()
            }
        );

        delete_file(&ctx, "src").unwrap();
        assert!(list_files(&ctx).is_empty());
        assert!(matches!(
            delete_file(&ctx, "src"),
            Err(WorkspaceError::NotFound(_))
        ));
    }

    #[test]
    fn test_unsafe_paths_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        assert!(matches!(
            read_file(&ctx, "../x"),
            Err(WorkspaceError::UnsafePath(_))
        ));
        assert!(matches!(
            write_file(&ctx, "../x", ""),
            Err(WorkspaceError::UnsafePath(_))
        ));
    }
}
