//! Command-line options.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use numstats::{OutputMode, Params, DEFAULT_DIGITS, DEFAULT_PERCENTILE};

const USAGE: &str = "numstats [-p pct] [-d dig] [-m] < data";

/// Summary statistics over numbers read from stdin.
///
/// Prints: Num Min Med Avg Pct% Max
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None, args_override_self = true)]
pub struct Opt {
    /// Percentile to report
    #[arg(
        short = 'p',
        long,
        value_name = "PCT",
        default_value_t = DEFAULT_PERCENTILE,
        allow_negative_numbers = true
    )]
    pub percentile: f64,

    /// Digits after the decimal point
    #[arg(short = 'd', long, value_name = "DIGITS", default_value_t = DEFAULT_DIGITS)]
    pub digits: u16,

    /// Machine-readable output: count|min|med|avg|pct|max
    #[arg(short = 'm', long)]
    pub machine: bool,
}

impl Opt {
    pub fn params(&self) -> Params {
        Params {
            percentile: self.percentile,
            digits: self.digits,
            mode: if self.machine {
                OutputMode::Machine
            } else {
                OutputMode::Human
            },
        }
    }
}

/// Why the command line was rejected.
#[derive(Debug)]
pub enum ArgsError {
    /// A token that is not an option; reported with [`usage_error`].
    Unknown(String),
    /// Anything else clap rejects, including `--help` and `--version`.
    Clap(clap::Error),
}

/// Parses the full command line, program name first.
///
/// A bare `--` is an unknown option, not an end-of-options marker.
pub fn parse_args<I, T>(args: I) -> Result<Opt, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.iter().skip(1).any(|a| a == "--") {
        return Err(ArgsError::Unknown("--".to_string()));
    }

    Opt::try_parse_from(args).map_err(|err| match unknown_token(&err) {
        Some(token) => ArgsError::Unknown(token),
        None => ArgsError::Clap(err),
    })
}

/// Returns the offending token if `err` reports an unrecognized argument.
pub fn unknown_token(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(token)) => Some(token.clone()),
        _ => None,
    }
}

pub fn usage_error(token: &str) -> String {
    format!("Error: Unknown option \"{}\". Usage {}", token, USAGE)
}
