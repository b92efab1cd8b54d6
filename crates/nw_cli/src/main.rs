// crates/nw_cli/src/main.rs
//
// Exit codes, typed error mapping, logging setup, and the conversion loop.
// Every input is attempted; a failed conversion does not stop later inputs.

mod args;
mod report;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Bad flags or options file
    pub const VALIDATION: i32 = 2;
    /// At least one input failed to convert (type or range error)
    pub const CONVERSION: i32 = 3;
    pub const IO: i32 = 4;
}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, resolve_options, Args, Mode};
use nw_algo::{coerce, render, to_ordinal, FormattingOptions, WordsError};
#[cfg(feature = "report-json")]
use report::Record;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Options could not be resolved
    Validation(String),
    /// stdin/stdout failures
    Io(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "{m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("nw: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };
    init_logging(args.verbose);

    let rc = match run(&args) {
        Ok(0) => exitcodes::OK,
        Ok(failed) => {
            log::debug!("{failed} input(s) failed to convert");
            exitcodes::CONVERSION
        }
        Err(e) => {
            eprintln!("nw: error: {e}");
            map_error(&e)
        }
    };

    ExitCode::from(rc as u8)
}

fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
    }
}

/// Convert every input; returns how many failed.
fn run(args: &Args) -> Result<usize, MainError> {
    let opts = resolve_options(args).map_err(|e| MainError::Validation(e.to_string()))?;
    log::debug!("options: use_commas={} negative_prefix={:?}", opts.use_commas, opts.negative_prefix);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;

    if args.numbers.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.map_err(|e| MainError::Io(format!("read stdin: {e}")))?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if !convert_one(input, args, &opts, &mut out)? {
                failed += 1;
            }
        }
    } else {
        for input in &args.numbers {
            if !convert_one(input, args, &opts, &mut out)? {
                failed += 1;
            }
        }
    }

    out.flush().map_err(|e| MainError::Io(format!("write stdout: {e}")))?;
    Ok(failed)
}

/// Convert and report one input. `Ok(false)` means the input was rejected.
fn convert_one<W: Write>(
    input: &str,
    args: &Args,
    opts: &FormattingOptions,
    out: &mut W,
) -> Result<bool, MainError> {
    let result: Result<String, WordsError> = match args.mode() {
        Mode::Words(form) => coerce(input).map(|n| render(n, form, opts)),
        Mode::Digits => to_ordinal(input),
    };

    #[cfg(feature = "report-json")]
    if args.json {
        report::write_json(out, &Record::new(input, &result))
            .map_err(|e| MainError::Io(format!("write stdout: {e}")))?;
        return Ok(result.is_ok());
    }

    let written = match &result {
        Ok(words) => report::write_text(out, words),
        Err(e) => {
            if !args.quiet {
                eprintln!("nw: error: {e}");
            }
            Ok(())
        }
    };
    written.map_err(|e| MainError::Io(format!("write stdout: {e}")))?;

    Ok(result.is_ok())
}
