//! Lexical path helpers
//!
//! Endpoint resolution must not touch the filesystem (the destination may not
//! exist yet), so paths are cleaned and related purely by their components.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding segment.
///
/// `..` directly under the root is discarded; leading `..` on a relative path
/// is kept. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Compute `target` relative to `base`, inserting `..` where `target` lies
/// outside of `base`.
///
/// Both paths are cleaned first. Returns `None` when one path is absolute and
/// the other is not, since no relative path joins them.
pub fn relative_path(base: &Path, target: &Path) -> Option<PathBuf> {
    let base = clean_path(base);
    let target = clean_path(target);

    if base.is_absolute() != target.is_absolute() {
        return None;
    }

    let base_parts: Vec<_> = base.components().filter(|c| *c != Component::CurDir).collect();
    let target_parts: Vec<_> = target
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Climbing out of a relative base that itself starts with `..` is unknowable.
    if base_parts[common..]
        .iter()
        .any(|c| *c == Component::ParentDir)
    {
        return None;
    }

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &target_parts[common..] {
        rel.push(part.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Some(rel)
}
