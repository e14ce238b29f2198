//! Files to blame, as the host describes them.

use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, Result};

/// A working-copy file together with its line count as known by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    relative_path: String,
    path: PathBuf,
    lines: usize,
}

impl InputFile {
    pub fn new(relative_path: impl Into<String>, path: impl Into<PathBuf>, lines: usize) -> Self {
        Self {
            relative_path: relative_path.into(),
            path: path.into(),
            lines,
        }
    }

    /// Resolve `relative_path` under `base_dir` and count its lines on disk.
    pub fn from_disk(base_dir: &Path, relative_path: &str) -> Result<Self> {
        let path = resolve(base_dir, relative_path)?;
        let content = std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AppError::PathNotFound(relative_path.to_string()),
            _ => AppError::Io(e),
        })?;

        Ok(Self::new(relative_path, path, count_lines(&content)))
    }

    /// Path relative to the working-copy root
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Absolute path on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> usize {
        self.lines
    }
}

/// Everything one blame run works on.
#[derive(Debug, Clone)]
pub struct BlameInput {
    pub base_dir: PathBuf,
    pub files: Vec<InputFile>,
}

impl BlameInput {
    pub fn new(base_dir: impl Into<PathBuf>, files: Vec<InputFile>) -> Self {
        Self {
            base_dir: base_dir.into(),
            files,
        }
    }
}

/// Line count as the host counts it: a trailing newline opens one more,
/// empty, line. `\n`, `\r\n` and a lone `\r` each end a line, as they do for
/// svn's annotate.
pub fn count_lines(content: &[u8]) -> usize {
    let mut lines = 1;
    let mut bytes = content.iter().peekable();

    while let Some(&b) = bytes.next() {
        match b {
            b'\n' => lines += 1,
            b'\r' => {
                bytes.next_if_eq(&&b'\n');
                lines += 1;
            }
            _ => {}
        }
    }

    lines
}

/// Join a caller-supplied relative path onto the working-copy root, refusing
/// anything that would leave it.
pub fn resolve(base_dir: &Path, relative_path: &str) -> Result<PathBuf> {
    let relative = Path::new(relative_path);
    let escapes = relative_path.is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if escapes {
        return Err(AppError::InvalidPath(relative_path.to_string()));
    }

    Ok(base_dir.join(relative))
}
