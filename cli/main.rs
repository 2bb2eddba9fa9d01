//! numstats command-line driver.
//!
//! Reads whitespace-separated numbers from stdin and prints one line:
//!
//! ```text
//! $ echo 1 2 3 4 5 | numstats
//! Num 5 Min 1.00 Med 3.00 Avg 3.00 95% 4.80 Max 5.00
//! ```
//!
//! Flags:
//!   -p PCT      Percentile to report (default 95)
//!   -d DIGITS   Digits after the decimal point (default 2)
//!   -m          Machine-readable output
//!
//! Set `RUST_LOG=debug` for diagnostics on stderr.

mod opts;

use std::env;
use std::io;
use std::process;

use anyhow::Context;
use log::debug;
use numstats::{read_sample, report};

use crate::opts::{parse_args, usage_error, ArgsError};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = match parse_args(env::args_os()) {
        Ok(opt) => opt,
        // Usage errors go to stdout with status 1
        Err(ArgsError::Unknown(token)) => {
            println!("{}", usage_error(&token));
            process::exit(1);
        }
        Err(ArgsError::Clap(err)) => err.exit(),
    };

    let params = opt.params();
    debug!("{:?}", params);

    let mut values = read_sample(io::stdin().lock()).context("reading numbers from stdin")?;
    let line = report(&mut values, &params)?;
    println!("{}", line);

    Ok(())
}
