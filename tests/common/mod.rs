//! Common test utilities for ssync CLI tests.
//!
//! `TestEnv` builds an isolated home directory with a project below it and a
//! fake transfer binary that records every invocation instead of copying.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Project location relative to the fake home
pub const PROJECT_DIR: &str = "src/app";

const FAKE_RSYNC: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "rsync  version 3.2.7 (fake)"
  exit 0
fi
echo "$*" >> "$SSYNC_FAKE_LOG"
exit "${SSYNC_FAKE_EXIT:-0}"
"#;

/// Result of running the ssync binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated home + project + fake rsync.
pub struct TestEnv {
    _home_dir: TempDir,
    /// Canonical home path (tempdirs may sit behind a symlink)
    pub home: PathBuf,
    pub project: PathBuf,
    fake_rsync: PathBuf,
    log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let home_dir = tempfile::tempdir().expect("Failed to create temp home");
        let home = home_dir
            .path()
            .canonicalize()
            .expect("Failed to resolve temp home");

        let project = home.join(PROJECT_DIR);
        fs::create_dir_all(&project).expect("Failed to create project dir");
        fs::write(project.join("main.go"), "package main\n").expect("Failed to seed project");

        let bin = home.join("bin");
        fs::create_dir_all(&bin).expect("Failed to create bin dir");
        let fake_rsync = bin.join("fake-rsync");
        fs::write(&fake_rsync, FAKE_RSYNC).expect("Failed to write fake rsync");
        make_executable(&fake_rsync);

        let log = home.join("rsync.log");

        Self {
            _home_dir: home_dir,
            home,
            project,
            fake_rsync,
            log,
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project.join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.join(".config/ssync/config.toml")
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Command for the ssync binary with every ambient input pinned.
    pub fn command(&self, cwd: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ssync"));
        for (key, _) in std::env::vars_os() {
            if key.to_string_lossy().starts_with("SSYNC_") {
                cmd.env_remove(&key);
            }
        }
        cmd.current_dir(cwd)
            .args(args)
            .env("SSYNC_TEST_HOME", &self.home)
            .env("HOME", &self.home)
            .env("SSYNC_CONFIG", self.config_path())
            .env("SSYNC_RSYNC", &self.fake_rsync)
            .env("SSYNC_FAKE_LOG", &self.log)
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.project, args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = self.command(cwd, args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        TestResult::from_output(cmd.output().expect("Failed to execute ssync"))
    }

    /// One entry per transfer, holding its space-joined arguments.
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Poll until at least `count` transfers ran or `timeout` passed.
    pub fn wait_for_invocations(&self, count: usize, timeout: Duration) -> Vec<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let seen = self.invocations();
            if seen.len() >= count || Instant::now() >= deadline {
                return seen;
            }
            thread::sleep(Duration::from_millis(50));
        }
    }

    pub fn project_display(&self) -> String {
        self.project.display().to_string()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).expect("Failed to stat").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
