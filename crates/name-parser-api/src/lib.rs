//! name-parser-api: classification of scientific name strings.
//!
//! A [`NameType`] tags how a raw name string should be treated by a name
//! parser. Only a few types can be parsed into structured names; the rest
//! (viruses, hybrid formulas, OTUs, placeholders, non-names) are kept verbatim.
//!
//! # Names
//!
//! Every variant has a canonical upper-snake name used for display and serde:
//! `SCIENTIFIC`, `VIRUS`, `HYBRID_FORMULA`, `INFORMAL`, `OTU`, `PHRASE`,
//! `PLACEHOLDER`, `NO_NAME`.

pub mod name_type;
pub mod parse;

pub use name_type::*;
pub use parse::*;
