// crates/nw_cli/src/args.rs
//
// CLI argument surface and options resolution.
//
// Rules:
// - NUMBER positionals are converted in order; negative values are positionals,
//   not flags. No positionals → read one number per stdin line.
// - --ordinal XOR --digits
// - --options must be a local JSON file (no scheme://)
// - Precedence: --options file (or built-in defaults) < --legacy/--commas < --negative-prefix

use clap::Parser;
use std::{
    fs,
    path::{Path, PathBuf},
};

use nw_core::{FormattingOptions, WordForm};

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "nw",
    disable_help_subcommand = true,
    about = "Spell integers as English words"
)]
pub struct Args {
    /// Numbers to convert (integers, decimals are truncated). Reads stdin lines when omitted.
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    // --- Output form ---
    /// Ordinal words ("forty-second").
    #[arg(long, conflicts_with = "digits")]
    pub ordinal: bool,
    /// Numeric ordinal ("42nd").
    #[arg(long, conflicts_with = "ordinal")]
    pub digits: bool,

    // --- Formatting ---
    /// Insert a comma after each thousand-scale group.
    #[arg(long)]
    pub commas: bool,
    /// Legacy defaults: commas on, "minus" prefix.
    #[arg(long)]
    pub legacy: bool,
    /// Word(s) placed before negative numbers (default "minus").
    #[arg(long, value_name = "WORD")]
    pub negative_prefix: Option<String>,
    /// JSON file with formatting options (`use_commas`, `negative_prefix`).
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    // --- Reporting ---
    /// Emit one JSON object per input instead of plain text.
    #[cfg(feature = "report-json")]
    #[arg(long)]
    pub json: bool,
    /// Do not print conversion errors on stderr (exit code still reports them).
    #[arg(long)]
    pub quiet: bool,
    /// Debug-level logging (RUST_LOG still applies).
    #[arg(short, long)]
    pub verbose: bool,
}

/// What each input turns into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Words(WordForm),
    Digits,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.digits {
            Mode::Digits
        } else {
            Mode::Words(WordForm::from(self.ordinal))
        }
    }
}

/// Errors surfaced by argument parsing/validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    Usage(String),
    NonLocalPath(String),
    NotFound(String),
    BadOptions(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            Usage(s) => f.write_str(s.trim_end()),
            NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            NotFound(p) => write!(f, "file not found: {p}"),
            BadOptions(s) => write!(f, "invalid options file: {s}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::try_parse().map_err(|e| match e.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => e.exit(),
        _ => CliError::Usage(usage_message(&e.to_string())),
    })?;
    validate(args)
}

/// clap renders "error: <what>\n\nUsage: ..."; main.rs adds its own "nw: error:" prefix.
fn usage_message(rendered: &str) -> String {
    rendered.strip_prefix("error: ").unwrap_or(rendered).to_string()
}

/// Post-parse checks, split out so tests can feed `try_parse_from`.
pub fn validate(args: Args) -> Result<Args, CliError> {
    if let Some(p) = &args.options {
        check_options_path(p)?;
    }
    Ok(args)
}

/// Resolve formatting options from the file (if any) and flags.
pub fn resolve_options(args: &Args) -> Result<FormattingOptions, CliError> {
    let mut opts = match &args.options {
        Some(path) => load_options_file(path)?,
        None if args.legacy => FormattingOptions::legacy(),
        None => FormattingOptions::default(),
    };
    if args.commas || args.legacy {
        opts.use_commas = true;
    }
    if let Some(prefix) = &args.negative_prefix {
        opts.negative_prefix = prefix.clone();
    }
    Ok(opts)
}

fn load_options_file(path: &Path) -> Result<FormattingOptions, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::NotFound(format!("--options {}: {e}", path.display())))?;
    parse_options_json(&text)
}

/// `{}` is valid; missing fields take the strict defaults.
pub fn parse_options_json(text: &str) -> Result<FormattingOptions, CliError> {
    serde_json::from_str(text).map_err(|e| CliError::BadOptions(e.to_string()))
}

/// `--options` must name an existing local file; URL-looking values are refused.
fn check_options_path(p: &Path) -> Result<(), CliError> {
    let shown = p.display().to_string();
    if looks_like_url(&shown) {
        return Err(CliError::NonLocalPath(shown));
    }
    match fs::metadata(p) {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => Err(CliError::NotFound(format!("--options {shown}"))),
    }
}

fn looks_like_url(s: &str) -> bool {
    let s = s.trim();
    s.contains("://")
        || s.split_once(':').is_some_and(|(scheme, _)| {
            matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https" | "file")
        })
}
