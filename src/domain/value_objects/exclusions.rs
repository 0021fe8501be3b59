//! Exclusion patterns value object
//!
//! Patterns come from `.ssyncignore` and are passed verbatim to rsync as
//! `--exclude` arguments. The same list also decides which filesystem events
//! are allowed to trigger a re-sync, using three rules:
//!
//! - a pattern containing `*`, `?` or `[` is a shell glob matched against the
//!   final path segment
//! - a pattern starting with `/` must equal the path relative to the root
//! - anything else must equal the final path segment
//!
//! A trailing `/` (rsync's directory marker) is ignored when matching. Braces
//! have no special meaning, matching rsync.

use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};

use super::path::clean_path;

const WILDCARDS: [char; 3] = ['*', '?', '['];

#[derive(Debug, Clone)]
enum Rule {
    Glob(GlobMatcher),
    Rooted(String),
    Name(String),
    /// Invalid glob; never matches.
    Skip,
}

impl Rule {
    fn compile(pattern: &str) -> Self {
        let trimmed = pattern.trim_end_matches('/');

        if trimmed.contains(&WILDCARDS[..]) {
            return match GlobBuilder::new(&literal_braces(trimmed))
                .literal_separator(true)
                .backslash_escape(true)
                .build()
            {
                Ok(glob) => Rule::Glob(glob.compile_matcher()),
                Err(e) => {
                    warn!(pattern, error = %e, "invalid exclusion pattern, skipping");
                    Rule::Skip
                }
            };
        }

        match trimmed.strip_prefix('/') {
            Some(rooted) => Rule::Rooted(rooted.to_string()),
            None => Rule::Name(trimmed.to_string()),
        }
    }

    fn matches(&self, rel: &str, basename: Option<&str>) -> bool {
        match (self, basename) {
            (Rule::Glob(matcher), Some(name)) => matcher.is_match(name),
            (Rule::Rooted(rooted), _) => !rel.is_empty() && rel == rooted,
            (Rule::Name(name), Some(base)) => base == name,
            _ => false,
        }
    }
}

/// Escape `{` and `}` outside character classes.
///
/// Shell globs and rsync's wildmatch have no alternation, so braces match
/// themselves.
fn literal_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '[' => {
                out.push(c);
                if let Some(&neg) = chars.peek() {
                    if neg == '!' || neg == '^' {
                        out.push(neg);
                        chars.next();
                    }
                }
                if chars.peek() == Some(&']') {
                    out.push(']');
                    chars.next();
                }
                for inner in chars.by_ref() {
                    out.push(inner);
                    if inner == ']' {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Exclusion patterns bound to the root they are relative to.
#[derive(Debug, Clone)]
pub struct Exclusions {
    root: PathBuf,
    patterns: Vec<String>,
    rules: Vec<Rule>,
}

impl Exclusions {
    /// Compile `patterns` for matching paths under `root`.
    ///
    /// Invalid globs are logged here once and ignored when matching.
    pub fn new(root: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        let rules = patterns.iter().map(|p| Rule::compile(p)).collect();
        Self {
            root: root.into(),
            patterns,
            rules,
        }
    }

    /// No patterns: nothing is excluded.
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self::new(root, Vec::new())
    }

    /// Re-root the same patterns, e.g. after canonicalizing the watch root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Raw patterns in file order, as given to the transfer tool.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `path` matches any pattern.
    ///
    /// Absolute paths must lie under the root; relative paths are taken as
    /// already relative to it. A path that cannot be made relative is logged
    /// and reported as not excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let Some(rel) = self.relative(path) else {
            warn!(
                path = %path.display(),
                root = %self.root.display(),
                "unable to make path relative to sync root"
            );
            return false;
        };

        let rel_str = slash_joined(&rel);
        let basename = rel.file_name().and_then(|n| n.to_str());
        debug!(rel = %rel_str, "checking exclusions");

        self.rules.iter().any(|rule| rule.matches(&rel_str, basename))
    }

    /// Path relative to the root, used for display and matching.
    pub fn relative(&self, path: &Path) -> Option<PathBuf> {
        if path.is_relative() {
            return Some(clean_path(path));
        }
        let rel = path.strip_prefix(&self.root).ok()?;
        Some(clean_path(rel))
    }
}

fn slash_joined(rel: &Path) -> String {
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    parts.join("/")
}
