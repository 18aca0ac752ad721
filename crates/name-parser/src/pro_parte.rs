//! Pro parte identifier lists
//!
//! A name used in several taxon concepts carries all of their ids in one
//! field, separated by `|`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PRO_PARTE_SPLITTER: Regex = Regex::new(r"\|+").unwrap();
}

/// Split a `|`-separated id list. Segments are trimmed and empty ones dropped.
///
/// # Examples
/// ```
/// use name_parser::split_pro_parte_ids;
/// assert_eq!(split_pro_parte_ids("123|456|783942|1|"), vec!["123", "456", "783942", "1"]);
/// ```
pub fn split_pro_parte_ids(text: &str) -> Vec<String> {
    PRO_PARTE_SPLITTER
        .split(text)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
