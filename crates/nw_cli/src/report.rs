// crates/nw_cli/src/report.rs
//
// Per-input output records: plain text lines, or one JSON object per line
// when built with the `report-json` feature.

use std::io::{self, Write};

#[cfg(feature = "report-json")]
use serde::Serialize;

#[cfg(feature = "report-json")]
use nw_core::WordsError;

#[cfg(feature = "report-json")]
#[derive(Debug, Serialize)]
pub struct Record<'a> {
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorRecord>,
}

#[cfg(feature = "report-json")]
#[derive(Debug, Serialize)]
pub struct ErrorRecord {
    pub kind: &'static str,
    pub message: String,
}

#[cfg(feature = "report-json")]
impl<'a> Record<'a> {
    pub fn new(input: &'a str, result: &'a Result<String, WordsError>) -> Self {
        match result {
            Ok(words) => Record { input, output: Some(words.as_str()), error: None },
            Err(e) => Record {
                input,
                output: None,
                error: Some(ErrorRecord { kind: e.kind().as_str(), message: e.to_string() }),
            },
        }
    }
}

/// Successful conversions go to `out`; failures are left to the caller in text mode.
pub fn write_text<W: Write>(out: &mut W, words: &str) -> io::Result<()> {
    writeln!(out, "{words}")
}

#[cfg(feature = "report-json")]
pub fn write_json<W: Write>(out: &mut W, record: &Record<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")
}
