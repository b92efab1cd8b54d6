//! nw_core — Core types for turning integers into English words.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! workspace (`nw_algo`, `nw_cli`):
//!
//! - Errors: `WordsError` (type / range categories)
//! - Options: `FormattingOptions`, `WordForm`
//! - Input coercion: `NumberInput` → `SafeInt` (truncation + range checks)
//! - Magnitude tiers (`Tier`) and the fixed English vocabulary
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors {
    use thiserror::Error;

    /// Coarse category of a conversion failure.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum ErrorKind {
        /// The input does not describe a finite number.
        Type,
        /// The input is finite but outside the safe integer range.
        Range,
    }

    impl ErrorKind {
        pub fn as_str(self) -> &'static str {
            match self {
                ErrorKind::Type => "type",
                ErrorKind::Range => "range",
            }
        }
    }

    /// Errors raised while coercing input, before any words are produced.
    #[derive(Clone, Debug, Eq, PartialEq, Error)]
    pub enum WordsError {
        #[error("not a finite number: {input}")]
        NotFinite { input: String },

        #[error("input is not a safe number; it's either too large or too small: {input}")]
        OutOfRange { input: String },
    }

    impl WordsError {
        pub fn kind(&self) -> ErrorKind {
            match self {
                WordsError::NotFinite { .. } => ErrorKind::Type,
                WordsError::OutOfRange { .. } => ErrorKind::Range,
            }
        }

        /// The offending input as it was rendered into the message.
        pub fn input(&self) -> &str {
            match self {
                WordsError::NotFinite { input } | WordsError::OutOfRange { input } => input,
            }
        }
    }

    pub type WordsResult<T> = Result<T, WordsError>;
}

pub mod input;
pub mod options;
pub mod tiers;
pub mod vocab;

pub use errors::{ErrorKind, WordsError, WordsResult};
pub use input::{coerce, NumberInput, SafeInt, MAX};
pub use options::{FormattingOptions, WordForm, DEFAULT_NEGATIVE_PREFIX};
pub use tiers::Tier;
