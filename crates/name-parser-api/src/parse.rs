//! Name type parsing.
//!
//! Parses canonical names back into [`NameType`] values.

use std::str::FromStr;

use thiserror::Error;

use crate::NameType;

/// Error returned for strings that name no [`NameType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown name type: {0:?}")]
pub struct ParseNameTypeError(pub String);

impl FromStr for NameType {
    type Err = ParseNameTypeError;

    /// Case insensitive. Surrounding whitespace is ignored and `-` or a space
    /// may stand in for `_`.
    ///
    /// # Examples
    /// ```
    /// use name_parser_api::NameType;
    /// assert_eq!("hybrid-formula".parse(), Ok(NameType::HybridFormula));
    /// assert!("cultivar".parse::<NameType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        NameType::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| ParseNameTypeError(s.to_string()))
    }
}
