//! Core name type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A short classification of scientific name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NameType {
    /// A scientific latin name, possibly with authorship, that is none of the
    /// other types below.
    Scientific,

    /// A virus name.
    Virus,

    /// A hybrid formula (not a hybrid name).
    HybridFormula,

    /// A scientific name with additional notes or shortcomings, e.g. `cf.`
    /// additions, indetermined names like `Abies spec.`, abbreviated genera
    /// like `A. alba Mill` or manuscript names like `Verticordia sp.1`.
    Informal,

    /// Operational Taxonomic Unit, usually a cluster of sequences grouped by
    /// similarity of a marker gene.
    Otu,

    /// A herbarium phrase name such as `Dryandra sp. 1 (A.S.George 16647)`.
    Phrase,

    /// A placeholder like `incertae sedis` or `unknown genus`.
    Placeholder,

    /// Surely not a scientific name of any kind.
    NoName,
}

impl NameType {
    /// All name types in declaration order.
    pub const ALL: [NameType; 8] = [
        Self::Scientific,
        Self::Virus,
        Self::HybridFormula,
        Self::Informal,
        Self::Otu,
        Self::Phrase,
        Self::Placeholder,
        Self::NoName,
    ];

    /// True if a name parser can turn such a name into a structured name.
    pub fn is_parsable(&self) -> bool {
        matches!(self, Self::Scientific | Self::Informal | Self::Phrase)
    }

    /// Canonical upper-snake name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scientific => "SCIENTIFIC",
            Self::Virus => "VIRUS",
            Self::HybridFormula => "HYBRID_FORMULA",
            Self::Informal => "INFORMAL",
            Self::Otu => "OTU",
            Self::Phrase => "PHRASE",
            Self::Placeholder => "PLACEHOLDER",
            Self::NoName => "NO_NAME",
        }
    }
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
