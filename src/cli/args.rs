//! Command-line argument parsing.

use crate::config::AppConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI (default)
    RunTui(CliOptions),
}

/// Flags that adjust a TUI run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--serve`: start the dev/status server
    pub serve: bool,
    /// `--no-open`: do not open the browser even when serving
    pub no_open: bool,
}

impl CliOptions {
    /// Layer these flags over environment configuration.
    pub fn apply(self, config: AppConfig) -> AppConfig {
        let serve = config.serve || self.serve;
        let open = config.open_browser && !self.no_open;
        config.with_serve(serve).with_open_browser(open)
    }
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use campus_connect::cli::{parse_args, CliCommand};
///
/// let args = vec!["campus-connect".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--serve" => options.serve = true,
            "--no-open" => options.no_open = true,
            other => tracing::debug!(arg = other, "ignoring unknown argument"),
        }
    }
    CliCommand::RunTui(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let argv = std::iter::once("campus-connect")
            .chain(args.iter().copied())
            .map(String::from);
        parse_args(argv)
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
        assert_eq!(parse(&["--serve", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui(CliOptions::default()));
    }

    #[test]
    fn test_parse_serve_flags() {
        assert_eq!(
            parse(&["--serve", "--no-open"]),
            CliCommand::RunTui(CliOptions {
                serve: true,
                no_open: true,
            })
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            CliCommand::RunTui(CliOptions::default())
        );
    }

    #[test]
    fn test_apply_overrides_config() {
        let config = AppConfig::default();
        let applied = CliOptions {
            serve: true,
            no_open: true,
        }
        .apply(config);
        assert!(applied.serve);
        assert!(!applied.open_browser);
    }
}
