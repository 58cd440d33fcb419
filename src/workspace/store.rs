//! Sandboxed file store rooted at one workspace directory
//!
//! Every operation resolves its relative path against the root first and
//! rejects anything that would land outside it, before touching the disk.

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use walkdir::WalkDir;

/// Errors that can occur in the workspace store
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("unsafe path: {0}")]
    UnsafePath(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Handle to a workspace directory
///
/// Holds no lock: concurrent writers to the same path race and the last
/// whole-file write wins.
#[derive(Debug, Clone)]
pub struct WorkspaceStore {
    root: PathBuf,
}

impl WorkspaceStore {
    /// Open a workspace, creating the root directory if it does not exist
    pub fn open(root: impl AsRef<Path>) -> WorkspaceResult<Self> {
        let root = root.as_ref();
        fs::create_dir_all(root)?;
        let root = root.canonicalize()?;
        debug!(root = %root.display(), "workspace ready");
        Ok(Self { root })
    }

    /// Absolute, canonical workspace root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path against the root
    ///
    /// The joined path is normalised lexically (`.` dropped, `..` popped).
    /// The result must be the root itself or a descendant of it. The deepest
    /// existing ancestor is also canonicalised so a symlink cannot lead out.
    pub fn resolve(&self, rel: &str) -> WorkspaceResult<PathBuf> {
        let unsafe_path = || WorkspaceError::UnsafePath(rel.to_string());

        let normalized = normalize(&self.root.join(rel)).ok_or_else(unsafe_path)?;
        if !normalized.starts_with(&self.root) {
            return Err(unsafe_path());
        }

        let mut existing = normalized.as_path();
        while existing != self.root && fs::symlink_metadata(existing).is_err() {
            existing = existing.parent().ok_or_else(unsafe_path)?;
        }
        if existing.exists() && !existing.canonicalize()?.starts_with(&self.root) {
            return Err(unsafe_path());
        }

        Ok(normalized)
    }

    /// All files under the root, relative, `/`-separated, sorted
    ///
    /// Symlinks are listed when they point at a file inside the workspace;
    /// links to directories are not descended into.
    pub fn list(&self) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                if e.path_is_symlink() {
                    self.is_contained_file(e.path())
                } else {
                    e.file_type().is_file()
                }
            })
            .filter_map(|e| {
                e.path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(|rel| to_slash(rel))
            })
            .collect();

        files.sort();
        files
    }

    fn is_contained_file(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .canonicalize()
                .map(|target| target.starts_with(&self.root))
                .unwrap_or(false)
    }

    /// True when the workspace holds no files
    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Read a file as text; invalid UTF-8 sequences are dropped
    pub fn read(&self, rel: &str) -> WorkspaceResult<String> {
        let path = self.resolve(rel)?;
        if !path.is_file() {
            return Err(WorkspaceError::NotFound(rel.to_string()));
        }

        let bytes = fs::read(&path)?;
        Ok(decode_lossy(&bytes))
    }

    /// Create or overwrite a file, creating missing parent directories
    ///
    /// Content goes to a uniquely named temp file in the target directory and
    /// is persisted over the target, so a reader sees either the old or the
    /// new content and concurrent writers to one path end with the last one.
    pub fn write(&self, rel: &str, content: &str) -> WorkspaceResult<()> {
        let path = self.resolve(rel)?;
        if path == self.root || path.is_dir() {
            return Err(WorkspaceError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("'{}' is a directory", rel),
            )));
        }

        let parent = path
            .parent()
            .ok_or_else(|| WorkspaceError::UnsafePath(rel.to_string()))?;
        fs::create_dir_all(parent)?;

        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&path).map_err(|e| WorkspaceError::Io(e.error))?;

        debug!(path = rel, bytes = content.len(), "wrote workspace file");
        Ok(())
    }

    /// Remove a file, or a directory and everything beneath it
    ///
    /// Deleting the root clears its contents but keeps the directory.
    pub fn delete(&self, rel: &str) -> WorkspaceResult<()> {
        let path = self.resolve(rel)?;

        if path == self.root {
            for entry in fs::read_dir(&self.root)? {
                remove_entry(&entry?.path())?;
            }
            debug!("cleared workspace");
            return Ok(());
        }

        if fs::symlink_metadata(&path).is_err() {
            return Err(WorkspaceError::NotFound(rel.to_string()));
        }

        remove_entry(&path)?;
        debug!(path = rel, "deleted workspace entry");
        Ok(())
    }
}

fn remove_entry(path: &Path) -> std::io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Lexically normalise an absolute path; `None` if `..` climbs above `/`
fn normalize(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    return None;
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    Some(out)
}

fn to_slash(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

fn decode_lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
    }
}
