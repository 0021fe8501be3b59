//! Home directory resolution with test isolation support.
//!
//! The home directory anchors the remote sync root (`host:~/<relative>`), so
//! integration tests must be able to pin it. `dirs::home_dir()` ignores
//! `HOME` on Windows, hence the dedicated override variable.

use std::path::PathBuf;

/// Environment variable overriding the home directory (tests only).
pub const SSYNC_TEST_HOME_VAR: &str = "SSYNC_TEST_HOME";

/// Get the user's home directory.
///
/// Returns `SSYNC_TEST_HOME` when set, otherwise `dirs::home_dir()`.
pub fn ssync_home_dir() -> Option<PathBuf> {
    std::env::var_os(SSYNC_TEST_HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssync_home_dir_respects_test_home_env_var() {
        let test_home = "/test/fake/home";

        // SAFETY: no other test in this crate reads or writes SSYNC_TEST_HOME
        unsafe {
            std::env::set_var(SSYNC_TEST_HOME_VAR, test_home);
        }

        let result = ssync_home_dir();

        unsafe {
            std::env::remove_var(SSYNC_TEST_HOME_VAR);
        }

        assert_eq!(result, Some(PathBuf::from(test_home)));
    }
}
