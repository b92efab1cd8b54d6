//! Formatting options and output form.
//!
//! Two default sets exist side by side:
//! - `FormattingOptions::default()` — strict entry point: no commas, "minus".
//! - `FormattingOptions::legacy()` — backward-compatible shim: commas on, "minus".

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_NEGATIVE_PREFIX: &str = "minus";

/// Immutable formatting configuration for a single conversion.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormattingOptions {
    /// Append "," to each thousand-scale group word when lower groups follow.
    #[cfg_attr(feature = "serde", serde(alias = "useCommas"))]
    pub use_commas: bool,
    /// Word(s) placed before negative numbers.
    #[cfg_attr(feature = "serde", serde(alias = "negativePrefix"))]
    pub negative_prefix: String,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            use_commas: false,
            negative_prefix: DEFAULT_NEGATIVE_PREFIX.to_string(),
        }
    }
}

impl FormattingOptions {
    /// Defaults applied by the legacy call form.
    pub fn legacy() -> Self {
        Self { use_commas: true, ..Self::default() }
    }

    pub fn with_commas(mut self, on: bool) -> Self {
        self.use_commas = on;
        self
    }

    pub fn with_negative_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.negative_prefix = prefix.into();
        self
    }

    /// Suffix appended after a thousand-scale group word.
    #[inline]
    pub fn group_separator(&self) -> &'static str {
        if self.use_commas { "," } else { "" }
    }
}

/// Which word form a conversion yields.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WordForm {
    #[default]
    Cardinal,
    Ordinal,
}

impl From<bool> for WordForm {
    /// Maps the legacy "as ordinal" flag.
    fn from(as_ordinal: bool) -> Self {
        if as_ordinal { WordForm::Ordinal } else { WordForm::Cardinal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_differ_only_in_commas() {
        let strict = FormattingOptions::default();
        let legacy = FormattingOptions::legacy();
        assert!(!strict.use_commas);
        assert!(legacy.use_commas);
        assert_eq!(strict.negative_prefix, "minus");
        assert_eq!(legacy.negative_prefix, strict.negative_prefix);
    }

    #[test]
    fn builders_override_fields() {
        let o = FormattingOptions::default()
            .with_commas(true)
            .with_negative_prefix("negative");
        assert_eq!(o.group_separator(), ",");
        assert_eq!(o.negative_prefix, "negative");
        assert_eq!(FormattingOptions::default().group_separator(), "");
    }

    #[test]
    fn legacy_flag_maps_to_form() {
        assert_eq!(WordForm::from(true), WordForm::Ordinal);
        assert_eq!(WordForm::from(false), WordForm::Cardinal);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_fills_missing_fields() {
        let o: FormattingOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(o, FormattingOptions::default());

        let o: FormattingOptions = serde_json::from_str(r#"{"useCommas": true}"#).unwrap();
        assert!(o.use_commas);
        assert_eq!(o.negative_prefix, "minus");

        let o: FormattingOptions =
            serde_json::from_str(r#"{"negative_prefix": "negative"}"#).unwrap();
        assert!(!o.use_commas);
        assert_eq!(o.negative_prefix, "negative");
    }
}
