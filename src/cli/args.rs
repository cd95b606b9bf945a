//! Command-line argument parsing.
//!
//! Recognised flags:
//!
//! | Flag | Effect |
//! |------|--------|
//! | `--version`, `-V` | Print the version and exit |
//! | `--help`, `-h` | Print usage and exit |
//! | `--data-dir <path>` | Override where state and logs are kept |
//! | `--export-dir <path>` | Override where receipts are written |

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the kiosk (default)
    Run {
        data_dir: Option<PathBuf>,
        export_dir: Option<PathBuf>,
    },
    /// Arguments could not be understood
    Invalid { message: String },
}

/// Parse command-line arguments and return the command to execute.
///
/// The first item is the program name and is skipped. Path flags accept
/// both `--flag value` and `--flag=value`.
///
/// # Examples
///
/// ```
/// use suvidha::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["suvidha".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut data_dir = None;
    let mut export_dir = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--data-dir" | "--export-dir" => {
                let Some(value) = inline.or_else(|| args.next()).filter(|v| !v.is_empty()) else {
                    return CliCommand::Invalid {
                        message: format!("{flag} requires a path"),
                    };
                };
                let slot = if flag == "--data-dir" {
                    &mut data_dir
                } else {
                    &mut export_dir
                };
                *slot = Some(PathBuf::from(value));
            }
            _ => {
                return CliCommand::Invalid {
                    message: format!("unrecognised argument: {arg}"),
                }
            }
        }
    }

    CliCommand::Run {
        data_dir,
        export_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["suvidha".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse(&[]),
            CliCommand::Run {
                data_dir: None,
                export_dir: None,
            }
        );
    }

    #[test]
    fn test_parse_dirs() {
        assert_eq!(
            parse(&["--data-dir", "/srv/kiosk", "--export-dir=/tmp/out"]),
            CliCommand::Run {
                data_dir: Some(PathBuf::from("/srv/kiosk")),
                export_dir: Some(PathBuf::from("/tmp/out")),
            }
        );
    }

    #[test]
    fn test_parse_missing_path() {
        assert!(matches!(parse(&["--data-dir"]), CliCommand::Invalid { .. }));
        assert!(matches!(parse(&["--export-dir="]), CliCommand::Invalid { .. }));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            CliCommand::Invalid {
                message: "unrecognised argument: --unknown".to_string()
            }
        );
    }
}
