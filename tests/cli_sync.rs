//! One-shot sync through a recording fake rsync.

#![cfg(unix)]

mod common;

use common::TestEnv;

#[test]
fn push_sends_project_to_home_relative_remote_path() {
    let env = TestEnv::new();

    let result = env.run(&["--watch=false", "pi@rpi"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.invocations(),
        vec![format!(
            "-avz --progress {}/ pi@rpi:~/src/app",
            env.project_display()
        )]
    );
    assert!(result.stdout.contains(&format!("{} => pi@rpi:~/src/app", env.project_display())));
    assert!(result.stdout.contains("Sync completed successfully."));
    assert!(result.stdout.contains("Sync completed. Watch mode disabled."));
}

#[test]
fn ignore_file_patterns_become_excludes() {
    let env = TestEnv::new();
    env.write_project_file(".ssyncignore", "# editor files\n*.swp\n\n/target\n  node_modules/  \n");

    let result = env.run(&["--watch=false", "pi@rpi"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.invocations(),
        vec![format!(
            "-avz --progress --exclude *.swp --exclude /target --exclude node_modules/ {}/ pi@rpi:~/src/app",
            env.project_display()
        )]
    );
}

#[test]
fn flags_shape_the_transfer() {
    let env = TestEnv::new();

    let result = env.run(&[
        "--watch=false",
        "--compress=false",
        "--verbose=false",
        "--progress=false",
        "--delete",
        "pi@rpi",
    ]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.invocations(),
        vec![format!("-a --delete {}/ pi@rpi:~/src/app", env.project_display())]
    );
}

#[test]
fn sync_from_home_targets_remote_home() {
    let env = TestEnv::new();

    let result = env.run_from_with_env(&env.home, &["--watch=false", "pi@rpi"], &[]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.invocations(),
        vec![format!("-avz --progress {}/ pi@rpi:~/", env.home.display())]
    );
}

#[test]
fn pull_skips_watching() {
    let env = TestEnv::new();

    let result = env.run(&["pi@rpi", "."]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.invocations(),
        vec![format!("-avz --progress pi@rpi:~/src/app/ {}", env.project_display())]
    );
    assert!(result.stdout.contains("watch mode needs a local source"));
}

#[test]
fn pull_into_subdirectory_uses_working_directory_remote_path() {
    let env = TestEnv::new();

    let result = env.run(&["--watch=false", "pi@rpi", "./mirror"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.invocations(),
        vec![format!("-avz --progress pi@rpi:~/src/app/ {}/mirror", env.project_display())]
    );
}

#[test]
fn both_local_is_rejected_before_any_transfer() {
    let env = TestEnv::new();

    let result = env.run(&["--watch=false", ".", "../backup"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Error:"), "{}", result.stderr);
    assert!(env.invocations().is_empty());
}

#[test]
fn both_remote_is_rejected_before_any_transfer() {
    let env = TestEnv::new();

    let result = env.run(&["--watch=false", "box-a", "box-b"]);

    assert_eq!(result.exit_code, 1);
    assert!(env.invocations().is_empty());
}

#[test]
fn failed_transfer_still_exits_zero() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["--watch=false", "pi@rpi"], &[("SSYNC_FAKE_EXIT", "23")]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.invocations().len(), 1);
    assert!(result.stderr.contains("Error:"), "{}", result.stderr);
    assert!(result.stderr.contains("23"), "{}", result.stderr);
}

#[test]
fn config_file_and_env_are_layered_under_flags() {
    let env = TestEnv::new();
    env.write_config("[sync]\ndelete = true\ncompress = false\n\n[watch]\nenabled = false\n");

    let result = env.run_with_env(&["--compress", "pi@rpi"], &[("SSYNC_PROGRESS", "false")]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.invocations(),
        vec![format!("-avz --delete {}/ pi@rpi:~/src/app", env.project_display())]
    );
}

#[test]
fn unparseable_config_is_fatal() {
    let env = TestEnv::new();
    env.write_config("[sync\ndelete = ");

    let result = env.run(&["--watch=false", "pi@rpi"]);

    assert_eq!(result.exit_code, 1);
    assert!(env.invocations().is_empty());
}

#[test]
fn unknown_config_key_is_a_warning() {
    let env = TestEnv::new();
    env.write_config("[sync]\ncompres = false\n");

    let result = env.run(&["--watch=false", "pi@rpi"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("did you mean 'compress'?"), "{}", result.stderr);
    assert_eq!(env.invocations().len(), 1);
}

#[test]
fn unknown_change_kind_is_a_warning() {
    let env = TestEnv::new();

    let result = env.run(&["--watch=false", "--changes", "write,bogus", "pi@rpi"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("unknown change kind 'bogus'"), "{}", result.stderr);
}

#[test]
fn json_mode_emits_events() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "--watch=false", "pi@rpi"]);

    assert!(result.success, "{}", result.combined_output());
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![r#"{"event":"sync_started"}"#, r#"{"event":"sync_complete"}"#]
    );
}
