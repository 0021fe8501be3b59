//! `.ssyncignore` loading
//!
//! One pattern per line. Lines are trimmed; blank lines and `#` comments are
//! skipped. Everything else is kept verbatim for rsync.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Name of the ignore file at the sync root
pub const IGNORE_FILE_NAME: &str = ".ssyncignore";

/// The ignore file exists but could not be read.
#[derive(Debug, Error)]
#[error("unable to load {}: {source}", .path.display())]
pub struct IgnoreFileError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Load patterns from `<root>/.ssyncignore`.
///
/// A missing file yields an empty list.
pub fn load_ignore_file(root: &Path) -> Result<Vec<String>, IgnoreFileError> {
    let path = root.join(IGNORE_FILE_NAME);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no ignore file");
            return Ok(Vec::new());
        }
        Err(source) => return Err(IgnoreFileError { path, source }),
    };

    let patterns = parse_ignore_content(&content);
    debug!(path = %path.display(), count = patterns.len(), "loaded ignore file");
    Ok(patterns)
}

/// Extract patterns from ignore file content.
pub fn parse_ignore_content(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
