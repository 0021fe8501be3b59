//! Filesystem change kinds and the allow-list that selects which of them
//! trigger a re-sync.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default `--changes` value
pub const DEFAULT_CHANGES: &str = "write,remove,chmod,rename";

/// Kind of a filesystem change event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Write,
    Remove,
    Chmod,
    Create,
    Rename,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 5] = [
        ChangeKind::Write,
        ChangeKind::Remove,
        ChangeKind::Chmod,
        ChangeKind::Create,
        ChangeKind::Rename,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Write => "write",
            ChangeKind::Remove => "remove",
            ChangeKind::Chmod => "chmod",
            ChangeKind::Create => "create",
            ChangeKind::Rename => "rename",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ChangeKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| format!("unknown change kind '{}'", s.trim()))
    }
}

/// The set of change kinds that arm the debounce timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeFilter {
    kinds: BTreeSet<ChangeKind>,
}

impl Default for ChangeFilter {
    fn default() -> Self {
        Self::parse(DEFAULT_CHANGES).0
    }
}

impl ChangeFilter {
    pub fn new(kinds: impl IntoIterator<Item = ChangeKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Parse a comma-separated list, case-insensitively.
    ///
    /// Unknown names are returned alongside the filter so the caller can
    /// warn about them; they never abort parsing.
    pub fn parse(list: &str) -> (Self, Vec<String>) {
        let mut kinds = BTreeSet::new();
        let mut unknown = Vec::new();

        for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match item.parse::<ChangeKind>() {
                Ok(kind) => {
                    kinds.insert(kind);
                }
                Err(_) => unknown.push(item.to_string()),
            }
        }

        (Self { kinds }, unknown)
    }

    pub fn allows(&self, kind: ChangeKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = ChangeKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl fmt::Display for ChangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.kinds.iter().map(ChangeKind::as_str).collect();
        f.write_str(&names.join(","))
    }
}
