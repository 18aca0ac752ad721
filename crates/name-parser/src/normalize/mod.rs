//! Text normalization module
//!
//! Cleans raw citation, term and name strings before they reach a name
//! parser:
//! - citation trimming
//! - null token detection (`NULL`, `\N`, blank)
//! - term case folding
//! - numeric character reference decoding
//!
//! Absent input always yields absent output. The free functions use the
//! default [`NormalizerConfig`]; build a [`Normalizer`] to use other null tokens.

mod entities;

use lazy_static::lazy_static;

use crate::config::NormalizerConfig;

pub use entities::{decode_numeric_entities, replace_unicode_entities};

lazy_static! {
    static ref DEFAULT_NORMALIZER: Normalizer = Normalizer::default();
}

/// Immutable text normalizer built from a [`NormalizerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    // Lower-cased, trimmed, non-empty
    null_tokens: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

impl Normalizer {
    /// Blank tokens are dropped; the rest are trimmed and lower-cased.
    pub fn new(config: &NormalizerConfig) -> Self {
        let mut null_tokens: Vec<String> = config
            .null_tokens
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        null_tokens.sort();
        null_tokens.dedup();
        Self { null_tokens }
    }

    /// True if `text` is blank or one of the null tokens, ignoring case and
    /// surrounding whitespace.
    pub fn is_null_token(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return true;
        }
        let lower = trimmed.to_lowercase();
        self.null_tokens.iter().any(|t| *t == lower)
    }

    /// See [`normalize_citation`].
    pub fn normalize_citation(&self, text: Option<&str>) -> Option<String> {
        normalize_citation(text)
    }

    /// Trim whitespace and collapse blank or null-token input to `None`.
    ///
    /// The casing of the remaining text is kept. Never returns `Some("")`.
    pub fn trim_to_null(&self, text: Option<&str>) -> Option<String> {
        let trimmed = text?.trim();
        if self.is_null_token(trimmed) {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// [`Normalizer::trim_to_null`] followed by lower-casing.
    pub fn normalize_term(&self, text: Option<&str>) -> Option<String> {
        self.trim_to_null(text).map(|t| t.to_lowercase())
    }

    /// See [`replace_unicode_entities`].
    pub fn replace_unicode_entities(&self, text: Option<&str>) -> Option<String> {
        replace_unicode_entities(text)
    }

    /// Decode numeric entities, then [`Normalizer::trim_to_null`] the result.
    ///
    /// Decoding first lets an encoded blank such as `&#32;` collapse to `None`.
    pub fn preprocess_name(&self, text: Option<&str>) -> Option<String> {
        let decoded = replace_unicode_entities(text)?;
        self.trim_to_null(Some(&decoded))
    }
}

/// Strip leading and trailing whitespace from a citation.
///
/// Internal spacing and punctuation are kept and no null tokens are detected,
/// so a blank citation becomes `Some("")`.
///
/// # Examples
/// ```
/// use name_parser::normalize_citation;
/// assert_eq!(normalize_citation(Some("   Hallo ")), Some("Hallo".to_string()));
/// assert_eq!(normalize_citation(None), None);
/// ```
pub fn normalize_citation(text: Option<&str>) -> Option<String> {
    text.map(|t| t.trim().to_string())
}

/// Trim whitespace and collapse blank, `NULL` or `\N` input to `None`.
///
/// # Examples
/// ```
/// use name_parser::trim_to_null;
/// assert_eq!(trim_to_null(Some("aCcepTed ")), Some("aCcepTed".to_string()));
/// assert_eq!(trim_to_null(Some(" NuLL ")), None);
/// assert_eq!(trim_to_null(Some("\\N")), None);
/// ```
pub fn trim_to_null(text: Option<&str>) -> Option<String> {
    DEFAULT_NORMALIZER.trim_to_null(text)
}

/// Trim, drop null tokens and lower-case a controlled vocabulary term.
///
/// # Examples
/// ```
/// use name_parser::normalize_term;
/// assert_eq!(normalize_term(Some("aCcepTed ")), Some("accepted".to_string()));
/// assert_eq!(normalize_term(Some("null")), None);
/// ```
pub fn normalize_term(text: Option<&str>) -> Option<String> {
    DEFAULT_NORMALIZER.normalize_term(text)
}

/// Decode numeric entities and drop blank or null-token names.
pub fn preprocess_name(text: Option<&str>) -> Option<String> {
    DEFAULT_NORMALIZER.preprocess_name(text)
}
