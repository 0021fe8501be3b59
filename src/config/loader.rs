//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SsyncError, SsyncResult};

use super::types::Config;

/// Explicit config file path, bypassing the XDG lookup
pub const SSYNC_CONFIG_VAR: &str = "SSYNC_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SsyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SsyncError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the user config (if present) and apply environment overrides.
///
/// A config file that exists but does not parse is an error; the caller
/// treats it as fatal.
pub fn load_or_default() -> SsyncResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match user_config_path() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        _ => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (SSYNC_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    let flag = |name: &str, slot: &mut bool| {
        if let Some(value) = std::env::var(name).ok().and_then(|v| parse_bool(&v)) {
            *slot = value;
        }
    };

    flag("SSYNC_COMPRESS", &mut config.sync.compress);
    flag("SSYNC_VERBOSE", &mut config.sync.verbose);
    flag("SSYNC_PROGRESS", &mut config.sync.progress);
    flag("SSYNC_DELETE", &mut config.sync.delete);
    flag("SSYNC_WATCH", &mut config.watch.enabled);

    if let Ok(changes) = std::env::var("SSYNC_CHANGES") {
        config.watch.changes = changes;
    }

    if let Some(ms) = std::env::var("SSYNC_DEBOUNCE_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
    {
        config.watch.debounce_ms = ms;
    }

    if let Ok(program) = std::env::var("SSYNC_RSYNC") {
        if !program.trim().is_empty() {
            config.sync.rsync = Some(program);
        }
    }

    config
}

/// `~/.config/ssync/config.toml`, or `SSYNC_CONFIG` when set
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(SSYNC_CONFIG_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs_config_dir().map(|dir| dir.join("ssync").join("config.toml"))
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "sync",
        "compress",
        "verbose",
        "progress",
        "delete",
        "rsync",
        "watch",
        "enabled",
        "changes",
        "debounce_ms",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
