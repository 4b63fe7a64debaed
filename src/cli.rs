use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

use crate::config::{DEFAULT_SHARE_COUNT, DEFAULT_THRESHOLD};

/// Where recovery reads its share text from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharesSource {
    Stdin,
    File(PathBuf),
}

/// Maps `-` to standard input and anything else to a file path
fn parse_shares_source(s: &str) -> Result<SharesSource, String> {
    match s {
        "" => Err("path must not be empty (use '-' for standard input)".to_string()),
        "-" => Ok(SharesSource::Stdin),
        path => Ok(SharesSource::File(PathBuf::from(path))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Generate a secret and shares of it
    Generate,
    /// Recover a secret from shares
    Recover,
}

#[derive(Debug, Parser)]
#[command(name = "secret", version)]
#[command(about = "Split a secret into shares with Shamir's secret sharing, or recover it from them")]
pub struct Cli {
    /// Mode of operation
    #[arg(short, long, value_enum, default_value_t = Mode::Generate)]
    pub mode: Mode,

    /// Minimum number of shares required for recovery
    #[arg(
        short = 'k',
        long = "threshold",
        default_value_t = DEFAULT_THRESHOLD,
        allow_negative_numbers = true
    )]
    pub threshold: i64,

    /// How many shares to generate
    #[arg(
        short = 'n',
        long = "shares",
        default_value_t = DEFAULT_SHARE_COUNT,
        allow_negative_numbers = true
    )]
    pub shares: i64,

    /// File to read shares from in recover mode, '-' for standard input
    #[arg(short, long, default_value = "-", value_parser = parse_shares_source)]
    pub secrets: SharesSource,

    /// Split an existing base-62 secret read from standard input instead of generating one
    #[arg(long)]
    pub existing: bool,
}

/// Full help text, shown after usage errors
pub fn usage() -> String {
    let mut help = Cli::command().render_help().to_string();
    help.truncate(help.trim_end().len());
    help.push('\n');
    help
}

/// Renders a command-line parse error. Errors bound for stderr are followed
/// by the usage, the same as validation errors; `--help` and `--version`
/// render as-is.
pub fn error_report(err: &clap::Error) -> String {
    let mut report = err.render().to_string();
    if err.use_stderr() {
        report.push('\n');
        report.push_str(&usage());
    }
    report
}
