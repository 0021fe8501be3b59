//! Rsync Transfer
//!
//! Runs rsync as a child process with inherited stdio so its progress output
//! reaches the terminal live.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{SyncInvocation, TransferError, TransferRunner};

/// Program name used when no override is configured
pub const DEFAULT_PROGRAM: &str = "rsync";

/// Transfer runner backed by the rsync binary
#[derive(Debug, Clone)]
pub struct RsyncTransfer {
    program: OsString,
}

impl Default for RsyncTransfer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl RsyncTransfer {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check if the configured binary can be executed
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Build the argument list for one invocation.
    ///
    /// `-a` is always set; `v` and `z` are appended to the same flag. The
    /// source gets a trailing `/` so rsync copies its contents.
    pub fn build_args(invocation: &SyncInvocation) -> Vec<String> {
        let opts = &invocation.options;

        let mut flags = String::from("-a");
        if opts.verbose {
            flags.push('v');
        }
        if opts.compress {
            flags.push('z');
        }

        let mut args = vec![flags];
        if opts.progress {
            args.push("--progress".to_string());
        }
        if opts.delete {
            args.push("--delete".to_string());
        }
        for pattern in &invocation.exclusions {
            args.push("--exclude".to_string());
            args.push(pattern.clone());
        }

        args.push(with_trailing_slash(&invocation.source));
        args.push(invocation.destination.clone());
        args
    }
}

fn with_trailing_slash(source: &str) -> String {
    if source.ends_with('/') {
        source.to_string()
    } else {
        format!("{}/", source)
    }
}

impl TransferRunner for RsyncTransfer {
    fn name(&self) -> &str {
        self.program.to_str().unwrap_or(DEFAULT_PROGRAM)
    }

    fn run(&self, invocation: &SyncInvocation) -> Result<(), TransferError> {
        let args = Self::build_args(invocation);
        debug!(program = self.name(), ?args, "starting transfer");

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| TransferError::Spawn {
                program: self.name().to_string(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(TransferError::Failed {
                program: self.name().to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::TransferOptions;

    fn invocation(options: TransferOptions, exclusions: &[&str]) -> SyncInvocation {
        SyncInvocation {
            source: "/home/alex/app".to_string(),
            destination: "host:~/app".to_string(),
            exclusions: exclusions.iter().map(|s| s.to_string()).collect(),
            options,
        }
    }

    #[test]
    fn default_args() {
        let args = RsyncTransfer::build_args(&invocation(TransferOptions::default(), &[]));
        assert_eq!(args, vec!["-avz", "--progress", "/home/alex/app/", "host:~/app"]);
    }

    #[test]
    fn quiet_uncompressed_mirror() {
        let opts = TransferOptions {
            compress: false,
            verbose: false,
            progress: false,
            delete: true,
        };
        let args = RsyncTransfer::build_args(&invocation(opts, &[]));
        assert_eq!(args, vec!["-a", "--delete", "/home/alex/app/", "host:~/app"]);
    }

    #[test]
    fn compress_without_verbose() {
        let opts = TransferOptions {
            verbose: false,
            ..TransferOptions::default()
        };
        let args = RsyncTransfer::build_args(&invocation(opts, &[]));
        assert_eq!(args[0], "-az");
    }

    #[test]
    fn one_exclude_per_pattern_in_order() {
        let args = RsyncTransfer::build_args(&invocation(
            TransferOptions::default(),
            &["*.swp", "/secret", "bin/"],
        ));
        assert_eq!(
            args,
            vec![
                "-avz",
                "--progress",
                "--exclude",
                "*.swp",
                "--exclude",
                "/secret",
                "--exclude",
                "bin/",
                "/home/alex/app/",
                "host:~/app",
            ]
        );
    }

    #[test]
    fn remote_home_source_keeps_single_slash() {
        let mut inv = invocation(TransferOptions::default(), &[]);
        inv.source = "host:~/".to_string();
        inv.destination = "/home/alex".to_string();
        let args = RsyncTransfer::build_args(&inv);
        assert_eq!(&args[args.len() - 2..], ["host:~/", "/home/alex"]);
    }

    #[test]
    fn missing_binary_reports_spawn_error() {
        let rsync = RsyncTransfer::new("/nonexistent/ssync-test-rsync");
        assert!(!rsync.check_available());
        let err = rsync
            .run(&invocation(TransferOptions::default(), &[]))
            .unwrap_err();
        assert!(matches!(err, TransferError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported_as_failure() {
        let rsync = RsyncTransfer::new("false");
        let err = rsync
            .run(&invocation(TransferOptions::default(), &[]))
            .unwrap_err();
        assert!(matches!(err, TransferError::Failed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        let rsync = RsyncTransfer::new("true");
        assert!(rsync.run(&invocation(TransferOptions::default(), &[])).is_ok());
    }
}
