//! Text normalization applied before scientific name parsing
//!
//! This crate cleans raw strings from citations, term fields and name
//! strings so a name parser always sees canonical text:
//! - citation trimming
//! - null token collapsing (`NULL`, `\N`, blank input become `None`)
//! - case folding of controlled vocabulary terms
//! - decoding of numeric character references (`&#1083;`, `&#x43b;`)
//! - splitting of pro parte id lists
//!
//! All operations are pure and can be called from any thread.

pub mod config;
pub mod error;
pub mod normalize;
pub mod pro_parte;

pub use config::*;
pub use error::{NormalizeError, Result};
pub use normalize::*;
pub use pro_parte::*;
