//! Endpoint value object
//!
//! An endpoint is one side of a sync session. Local endpoints are absolute,
//! cleaned paths. Remote endpoints are `host:~/<path>` addresses where
//! `<path>` is the working directory's position under the user's home
//! directory, so both machines use the same home-relative directory.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use super::path::{clean_path, relative_path};

/// Whether a command-line argument names the local machine.
///
/// Local arguments are empty, `.`, `..`, start with `./` or `../`, or are
/// absolute paths. Anything else is a host specifier (`host`, `user@host`).
pub fn is_local_argument(arg: &str) -> bool {
    arg.is_empty()
        || arg == "."
        || arg == ".."
        || arg.starts_with("./")
        || arg.starts_with("../")
        || Path::new(arg).is_absolute()
}

/// One side of a sync session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    display_name: String,
    transfer_address: String,
    local_path: Option<PathBuf>,
}

impl Endpoint {
    /// Resolve an argument into an endpoint.
    ///
    /// `home_relative` is only consulted for remote arguments and is the path
    /// appended after `~/` in the remote address.
    pub fn resolve(argument: &str, cwd: &Path, home_relative: &Path) -> Self {
        if is_local_argument(argument) {
            Self::local(cwd, argument)
        } else {
            Self::remote(argument, home_relative)
        }
    }

    /// A local endpoint for `argument` resolved against `cwd`.
    pub fn local(cwd: &Path, argument: &str) -> Self {
        let path = if argument.is_empty() || argument == "." {
            clean_path(cwd)
        } else {
            clean_path(&cwd.join(argument))
        };
        let display = path.display().to_string();
        Self {
            display_name: display.clone(),
            transfer_address: display,
            local_path: Some(path),
        }
    }

    /// A remote endpoint on `host` rooted at `~/<home_relative>`.
    pub fn remote(host: &str, home_relative: &Path) -> Self {
        let address = format!("{}:{}", host, remote_home_path(home_relative));
        Self {
            display_name: address.clone(),
            transfer_address: address,
            local_path: None,
        }
    }

    /// Human-readable name for banners and logs
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The string handed to the transfer tool
    pub fn transfer_address(&self) -> &str {
        &self.transfer_address
    }

    pub fn is_local(&self) -> bool {
        self.local_path.is_some()
    }

    /// Local directory, if this endpoint is on this machine
    pub fn local_path(&self) -> Option<&Path> {
        self.local_path.as_deref()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// `~/<rel>` with forward slashes, or `~/` when `rel` is the home directory.
fn remote_home_path(home_relative: &Path) -> String {
    let cleaned = clean_path(home_relative);
    let segments: Vec<String> = cleaned
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        "~/".to_string()
    } else {
        format!("~/{}", segments.join("/"))
    }
}

/// Invalid source/destination combinations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("no local endpoint: one of '{source_arg}' or '{dest_arg}' must be a local path (., ./dir, ../dir or /abs/path)")]
    NoLocalEndpoint { source_arg: String, dest_arg: String },

    #[error("both '{source_arg}' and '{dest_arg}' are local paths; one side must be a remote host")]
    BothLocal { source_arg: String, dest_arg: String },

    #[error("unable to compute path of {path} relative to home directory {home}")]
    NotRelativeToHome { path: PathBuf, home: PathBuf },
}

/// Direction of a session, seen from this machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Local source, remote destination
    Push,
    /// Remote source, local destination
    Pull,
}

/// A validated source/destination pair: exactly one side is local.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPair {
    source: Endpoint,
    destination: Endpoint,
    home_relative: PathBuf,
}

impl EndpointPair {
    /// Classify both arguments and build the pair.
    ///
    /// The remote side's address is derived from the caller's position, `cwd`
    /// relative to `home`, whichever local path was named.
    pub fn resolve(
        source_arg: &str,
        dest_arg: &str,
        cwd: &Path,
        home: &Path,
    ) -> Result<Self, EndpointError> {
        let (local_arg, source_is_local) =
            match (is_local_argument(source_arg), is_local_argument(dest_arg)) {
                (true, false) => (source_arg, true),
                (false, true) => (dest_arg, false),
                (false, false) => {
                    return Err(EndpointError::NoLocalEndpoint {
                        source_arg: source_arg.to_string(),
                        dest_arg: dest_arg.to_string(),
                    })
                }
                (true, true) => {
                    return Err(EndpointError::BothLocal {
                        source_arg: source_arg.to_string(),
                        dest_arg: dest_arg.to_string(),
                    })
                }
            };

        let cwd = clean_path(cwd);
        let home_relative =
            relative_path(home, &cwd).ok_or_else(|| EndpointError::NotRelativeToHome {
                path: cwd.clone(),
                home: home.to_path_buf(),
            })?;

        let local = Endpoint::local(&cwd, local_arg);
        let (source, destination) = if source_is_local {
            (local, Endpoint::remote(dest_arg, &home_relative))
        } else {
            (Endpoint::remote(source_arg, &home_relative), local)
        };

        Ok(Self {
            source,
            destination,
            home_relative,
        })
    }

    pub fn source(&self) -> &Endpoint {
        &self.source
    }

    pub fn destination(&self) -> &Endpoint {
        &self.destination
    }

    /// The working directory's path under home (`.` for home itself)
    pub fn home_relative(&self) -> &Path {
        &self.home_relative
    }

    pub fn direction(&self) -> Direction {
        if self.source.is_local() {
            Direction::Push
        } else {
            Direction::Pull
        }
    }

    /// The local directory of this session: the sync root.
    pub fn local_root(&self) -> &Path {
        self.source
            .local_path()
            .or_else(|| self.destination.local_path())
            .unwrap_or_else(|| Path::new("."))
    }
}
