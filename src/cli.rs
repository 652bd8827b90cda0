//! Command-line interface for hexlz.
//!
//! This module provides argument parsing and output formatting for the
//! hexlz tool. The CLI contract is strict: exactly one positional hex
//! string on success, and a one-line usage message on stderr with exit
//! status 1 for any wrong argument count. clap parses via
//! `try_parse_from` so parse failures map onto that contract instead of
//! clap's default error rendering and exit status.

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::counter::count_leading_zeros;
use crate::error::HexlzError;
use crate::exit_codes::ExitCode;

/// hexlz - count leading zero bits in a hex string
#[derive(Debug, Parser)]
#[command(name = "hexlz")]
#[command(about = "Count leading zero bits in a hexadecimal string")]
#[command(version)]
pub struct Cli {
    /// Hex string to scan (characters outside 0-9a-fA-F count as zero nibbles)
    pub hex: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialize tracing subscriber for diagnostic logging.
///
/// Diagnostics go to stderr so the stdout result line stays byte-exact.
/// `RUST_LOG` takes precedence; `--verbose` raises the default filter to
/// debug. Initialization failure (already set in tests) is ignored.
fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("hexlz=debug")
            } else {
                EnvFilter::try_new("hexlz=warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

/// Main CLI execution function.
///
/// This function handles ALL output including errors. It returns
/// `Result<(), ExitCode>`:
/// - On success: prints the result line to stdout and returns `Ok(())`
/// - On error: prints the usage line to stderr, returns `Err(ExitCode)`
///
/// main.rs only calls `std::process::exit(code.as_i32())` on error - it
/// does NOT print.
pub fn run() -> Result<(), ExitCode> {
    run_from(std::env::args())
}

/// Run the CLI against an explicit argv (first element is the program name).
///
/// Split out from [`run`] so tests can drive the full argument-handling
/// path without spawning a process.
pub fn run_from<I, T>(args: I) -> Result<(), ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let argv: Vec<String> = args.into_iter().map(Into::into).collect();
    let program = argv
        .first()
        .cloned()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // --help and --version keep clap's rendering and exit 0.
            let _ = err.print();
            return Ok(());
        }
        Err(_) => {
            // Missing positional, extra positionals, unknown flags: the
            // contract collapses all of these into the one usage line.
            let usage = HexlzError::Usage { program };
            eprintln!("{usage}");
            return Err(usage.to_exit_code());
        }
    };

    init_tracing(cli.verbose);

    tracing::debug!(input_len = cli.hex.len(), "scanning hex string");
    let count = count_leading_zeros(&cli.hex);
    tracing::debug!(count, "scan complete");

    println!("Leading zeroes in hex string {}: {count}", cli.hex);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_argument_succeeds() {
        assert!(run_from(["hexlz", "0800"]).is_ok());
    }

    #[test]
    fn empty_hex_string_is_a_valid_argument() {
        assert!(run_from(["hexlz", ""]).is_ok());
    }

    #[test]
    fn zero_arguments_is_a_usage_error() {
        assert_eq!(run_from(["hexlz"]), Err(ExitCode::USAGE));
    }

    #[test]
    fn two_arguments_is_a_usage_error() {
        assert_eq!(run_from(["hexlz", "0800", "0001"]), Err(ExitCode::USAGE));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        assert_eq!(run_from(["hexlz", "--strict", "0800"]), Err(ExitCode::USAGE));
    }

    #[test]
    fn verbose_flag_does_not_count_as_positional() {
        assert!(run_from(["hexlz", "--verbose", "0800"]).is_ok());
    }
}
