//! Sync session setup
//!
//! Everything that is decided once per process: the endpoint pair, the
//! exclusion list and the transfer switches. A session is immutable once
//! built and hands out a fresh `SyncInvocation` for every run.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::ports::{SyncInvocation, TransferError, TransferOptions, TransferRunner};
use crate::domain::value_objects::{Direction, EndpointPair, Exclusions};
use crate::error::SsyncResult;
use crate::infrastructure::fs::load_ignore_file;

/// Immutable state shared by every sync in a session.
#[derive(Debug, Clone)]
pub struct SyncSession {
    endpoints: EndpointPair,
    exclusions: Exclusions,
    options: TransferOptions,
}

impl SyncSession {
    /// Resolve the endpoints and load `.ssyncignore` from the local root.
    ///
    /// An invalid endpoint combination is an error. An unreadable ignore
    /// file is logged and the session proceeds without exclusions.
    pub fn resolve(
        source_arg: &str,
        dest_arg: &str,
        cwd: &Path,
        home: &Path,
        options: TransferOptions,
    ) -> SsyncResult<Self> {
        let endpoints = EndpointPair::resolve(source_arg, dest_arg, cwd, home)?;
        let root = endpoints.local_root().to_path_buf();

        let patterns = load_ignore_file(&root).unwrap_or_else(|e| {
            warn!(error = %e, "continuing without exclusions");
            Vec::new()
        });

        Ok(Self::new(endpoints, Exclusions::new(root, patterns), options))
    }

    pub fn new(endpoints: EndpointPair, exclusions: Exclusions, options: TransferOptions) -> Self {
        Self {
            endpoints,
            exclusions,
            options,
        }
    }

    pub fn endpoints(&self) -> &EndpointPair {
        &self.endpoints
    }

    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    pub fn options(&self) -> TransferOptions {
        self.options
    }

    /// Directory to watch, when the source is on this machine.
    pub fn watch_root(&self) -> Option<PathBuf> {
        match self.endpoints.direction() {
            Direction::Push => self.endpoints.source().local_path().map(Path::to_path_buf),
            Direction::Pull => None,
        }
    }

    pub fn invocation(&self) -> SyncInvocation {
        SyncInvocation {
            source: self.endpoints.source().transfer_address().to_string(),
            destination: self.endpoints.destination().transfer_address().to_string(),
            exclusions: self.exclusions.patterns().to_vec(),
            options: self.options,
        }
    }

    /// Run one transfer to completion.
    pub fn sync_once(&self, runner: &dyn TransferRunner) -> Result<(), TransferError> {
        runner.run(&self.invocation())
    }
}
