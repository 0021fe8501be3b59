//! File system helpers

mod home;
mod ignore_file;

pub use home::{ssync_home_dir, SSYNC_TEST_HOME_VAR};
pub use ignore_file::{load_ignore_file, parse_ignore_content, IgnoreFileError, IGNORE_FILE_NAME};
