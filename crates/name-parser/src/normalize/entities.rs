//! Numeric character reference decoding
//!
//! Decodes `&#NNN;` and `&#xHHH;` references to Unicode. Named entities such
//! as `&amp;` are not recognised and stay as they are.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::trace;

lazy_static! {
    // Decimal &#1083; or hex &#x43b; / &#X43B;
    static ref NUMERIC_ENTITY_REGEX: Regex = Regex::new(
        r"&#(?:[xX](?P<hex>[0-9a-fA-F]+)|(?P<dec>[0-9]+));"
    ).unwrap();
}

/// Replace numeric character references with the characters they denote.
///
/// Anything that only looks like a reference (`&#pia;`, `&#12pia;`, `&#;`) or
/// that names no Unicode scalar value (surrogates, values past `U+10FFFF`) is
/// copied through unchanged. Absent input stays absent.
///
/// # Examples
/// ```
/// use name_parser::replace_unicode_entities;
/// assert_eq!(replace_unicode_entities(Some("&#x43b;&#1086;")), Some("ло".to_string()));
/// assert_eq!(replace_unicode_entities(Some("&#12pia;")), Some("&#12pia;".to_string()));
/// assert_eq!(replace_unicode_entities(None), None);
/// ```
pub fn replace_unicode_entities(text: Option<&str>) -> Option<String> {
    text.map(decode_numeric_entities)
}

/// [`replace_unicode_entities`] for text that is known to be present.
pub fn decode_numeric_entities(text: &str) -> String {
    if !text.contains("&#") {
        return text.to_string();
    }

    NUMERIC_ENTITY_REGEX
        .replace_all(text, |caps: &Captures| match entity_char(caps) {
            Some(c) => c.to_string(),
            None => {
                trace!(entity = &caps[0], "leaving undecodable entity");
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn entity_char(caps: &Captures) -> Option<char> {
    let code_point = match caps.name("hex") {
        Some(hex) => u32::from_str_radix(hex.as_str(), 16).ok()?,
        None => caps.name("dec")?.as_str().parse::<u32>().ok()?,
    };
    char::from_u32(code_point)
}
