use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

/// ssync - keep a remote copy of a directory in step with rsync
#[derive(Parser, Debug)]
#[command(name = "ssync")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "ssync [FLAGS] <dest>\n       ssync [FLAGS] <source> <dest>")]
#[command(
    after_help = "A local endpoint is '.', a path starting with './' or '../', or an absolute path.\nAnything else is a remote host; its path mirrors the working directory relative to $HOME."
)]
pub struct Cli {
    /// Source endpoint, or the destination when given alone
    #[arg(value_name = "SOURCE")]
    pub first: String,

    /// Destination endpoint
    #[arg(value_name = "DEST")]
    pub second: Option<String>,

    /// Keep watching the source and re-sync on change
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub watch: Option<bool>,

    /// Comma-separated change kinds that trigger a re-sync
    #[arg(long, value_name = "KINDS")]
    pub changes: Option<String>,

    /// Compress file data during the transfer
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub compress: Option<bool>,

    /// Let rsync list the files it transfers
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub verbose: Option<bool>,

    /// Show rsync progress during the transfer
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub progress: Option<bool>,

    /// Delete destination files that are missing from the source
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub delete: Option<bool>,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Colored output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Diagnostic log level (-d, -dd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// `(source, destination)`; a lone argument is the destination of `.`
    pub fn endpoints(&self) -> (&str, &str) {
        match &self.second {
            Some(dest) => (self.first.as_str(), dest.as_str()),
            None => (".", self.first.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_single_argument_is_destination() {
        let cli = Cli::try_parse_from(["ssync", "pi@rpi"]).unwrap();
        assert_eq!(cli.endpoints(), (".", "pi@rpi"));
        assert_eq!(cli.watch, None);
        assert_eq!(cli.changes, None);
    }

    #[test]
    fn test_cli_two_arguments() {
        let cli = Cli::try_parse_from(["ssync", "pi@rpi", "./backup"]).unwrap();
        assert_eq!(cli.endpoints(), ("pi@rpi", "./backup"));
    }

    #[test]
    fn test_cli_requires_an_endpoint() {
        assert!(Cli::try_parse_from(["ssync"]).is_err());
    }

    #[test]
    fn test_cli_rejects_three_endpoints() {
        assert!(Cli::try_parse_from(["ssync", ".", "a", "b"]).is_err());
    }

    #[test]
    fn test_cli_bool_flag_bare_means_true() {
        let cli = Cli::try_parse_from(["ssync", "--delete", "host"]).unwrap();
        assert_eq!(cli.delete, Some(true));
        assert_eq!(cli.endpoints(), (".", "host"));
    }

    #[test]
    fn test_cli_bool_flag_accepts_false() {
        let cli = Cli::try_parse_from([
            "ssync",
            "--watch=false",
            "--compress=false",
            "--progress=no",
            "host",
        ])
        .unwrap();
        assert_eq!(cli.watch, Some(false));
        assert_eq!(cli.compress, Some(false));
        assert_eq!(cli.progress, Some(false));
        assert_eq!(cli.verbose, None);
    }

    #[test]
    fn test_cli_changes_flag() {
        let cli = Cli::try_parse_from(["ssync", "--changes", "write,create", "host"]).unwrap();
        assert_eq!(cli.changes.as_deref(), Some("write,create"));
    }

    #[test]
    fn test_cli_debug_counts() {
        let cli = Cli::try_parse_from(["ssync", "-dd", "host"]).unwrap();
        assert_eq!(cli.debug, 2);
    }

    #[test]
    fn test_cli_color_and_json() {
        let cli = Cli::try_parse_from(["ssync", "--json", "--color", "never", "host"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.color, ColorWhen::Never);
    }
}
