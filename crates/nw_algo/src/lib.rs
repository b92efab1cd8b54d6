// crates/nw_algo/src/lib.rs
//! Public entry points: input → validated `SafeInt` → words.
//!
//! - `to_words`          strict options, cardinal words
//! - `to_words_ordinal`  strict options, ordinal words
//! - `to_words_legacy`   legacy defaults (commas on), form chosen by the caller
//! - `to_ordinal`        digits plus suffix ("21st")
//!
//! All functions are pure; validation finishes before any words are built,
//! so a failing call never yields a partial phrase.

#![forbid(unsafe_code)]

pub mod cardinal;
pub mod ordinal;

pub use cardinal::cardinal;
pub use ordinal::{ordinal_suffix, ordinal_word, ordinal_words};

pub use nw_core::{
    coerce, ErrorKind, FormattingOptions, NumberInput, SafeInt, WordForm, WordsError,
    WordsResult, MAX,
};

/// Spell an already validated number in the requested form.
pub fn render(number: SafeInt, form: WordForm, opts: &FormattingOptions) -> String {
    let words = cardinal(number, opts);
    match form {
        WordForm::Cardinal => words,
        WordForm::Ordinal => ordinal_words(&words),
    }
}

/// Cardinal words, e.g. `to_words(142, &opts) == "one hundred forty-two"`.
pub fn to_words<'a>(input: impl Into<NumberInput<'a>>, opts: &FormattingOptions) -> WordsResult<String> {
    let n = coerce(input)?;
    tracing::trace!(%n, use_commas = opts.use_commas, "to_words");
    Ok(render(n, WordForm::Cardinal, opts))
}

/// Ordinal words, e.g. `to_words_ordinal(42, &opts) == "forty-second"`.
pub fn to_words_ordinal<'a>(input: impl Into<NumberInput<'a>>, opts: &FormattingOptions) -> WordsResult<String> {
    let n = coerce(input)?;
    tracing::trace!(%n, use_commas = opts.use_commas, "to_words_ordinal");
    Ok(render(n, WordForm::Ordinal, opts))
}

/// Backward-compatible call form: legacy defaults (`use_commas = true`,
/// `negative_prefix = "minus"`), with the old boolean "as ordinal" flag
/// accepted through `WordForm::from(bool)`.
pub fn to_words_legacy<'a>(input: impl Into<NumberInput<'a>>, form: impl Into<WordForm>) -> WordsResult<String> {
    let n = coerce(input)?;
    Ok(render(n, form.into(), &FormattingOptions::legacy()))
}

/// Digits plus English ordinal suffix, e.g. `"21st"`, `"-3rd"`.
pub fn to_ordinal<'a>(input: impl Into<NumberInput<'a>>) -> WordsResult<String> {
    let n = coerce(input)?;
    Ok(format!("{n}{}", ordinal_suffix(n.magnitude())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_entry_points() {
        let o = FormattingOptions::default();
        assert_eq!(to_words(0, &o).unwrap(), "zero");
        assert_eq!(to_words("142", &o).unwrap(), "one hundred forty-two");
        assert_eq!(to_words(12.9, &o).unwrap(), "twelve");
        assert_eq!(to_words_ordinal(100, &o).unwrap(), "one hundredth");
        assert_eq!(to_words_ordinal(0, &o).unwrap(), "zeroth");
    }

    #[test]
    fn legacy_matches_strict_with_legacy_options() {
        let legacy = FormattingOptions::legacy();
        for n in [0i64, 12, -7, 1_234, 1_000_000, 9_876_543_210] {
            assert_eq!(to_words_legacy(n, false).unwrap(), to_words(n, &legacy).unwrap());
            assert_eq!(to_words_legacy(n, true).unwrap(), to_words_ordinal(n, &legacy).unwrap());
        }
        assert_eq!(to_words_legacy(12, WordForm::Ordinal).unwrap(), "twelfth");
        assert_eq!(to_words_legacy(1_234, WordForm::Cardinal).unwrap(), "one thousand, two hundred thirty-four");
    }

    #[test]
    fn numeric_ordinals() {
        assert_eq!(to_ordinal(1).unwrap(), "1st");
        assert_eq!(to_ordinal("12").unwrap(), "12th");
        assert_eq!(to_ordinal(-3).unwrap(), "-3rd");
        assert_eq!(to_ordinal(-0.5).unwrap(), "0th");
        assert_eq!(to_ordinal("x").unwrap_err().kind(), ErrorKind::Type);
    }

    #[test]
    fn errors_are_raised_before_conversion() {
        let o = FormattingOptions::default();
        assert_eq!(to_words(f64::NAN, &o).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(to_words("abc", &o).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(to_words(MAX + 1, &o).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(to_words_ordinal(f64::INFINITY, &o).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(to_words_legacy("9007199254740993", true).unwrap_err().kind(), ErrorKind::Range);
    }
}
