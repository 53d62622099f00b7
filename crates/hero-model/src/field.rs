use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownFieldError;

/// Attributes a raw record may populate on a [`Hero`](crate::Hero).
///
/// Raw keys are matched case-insensitively against the lowercase canonical
/// names returned by [`HeroField::as_str`]. Anything else is not a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroField {
    Name,
    Gender,
    EyeColor,
    Race,
    HairColor,
    Height,
    Publisher,
    SkinColor,
    Alignment,
    Weight,
    Powers,
}

impl HeroField {
    /// Every recognized field in canonical record order.
    pub const ALL: [HeroField; 11] = [
        HeroField::Name,
        HeroField::Gender,
        HeroField::EyeColor,
        HeroField::Race,
        HeroField::HairColor,
        HeroField::Height,
        HeroField::Publisher,
        HeroField::SkinColor,
        HeroField::Alignment,
        HeroField::Weight,
        HeroField::Powers,
    ];

    /// Returns the lowercase canonical key.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroField::Name => "name",
            HeroField::Gender => "gender",
            HeroField::EyeColor => "eyecolor",
            HeroField::Race => "race",
            HeroField::HairColor => "haircolor",
            HeroField::Height => "height",
            HeroField::Publisher => "publisher",
            HeroField::SkinColor => "skincolor",
            HeroField::Alignment => "alignment",
            HeroField::Weight => "weight",
            HeroField::Powers => "powers",
        }
    }

    /// Returns the human-readable label used in search output.
    pub fn label(&self) -> &'static str {
        match self {
            HeroField::Name => "Name",
            HeroField::Gender => "Gender",
            HeroField::EyeColor => "Eye Color",
            HeroField::Race => "Race",
            HeroField::HairColor => "Hair Color",
            HeroField::Height => "Height",
            HeroField::Publisher => "Publisher",
            HeroField::SkinColor => "Skin Color",
            HeroField::Alignment => "Alignment",
            HeroField::Weight => "Weight",
            HeroField::Powers => "Powers",
        }
    }

    /// Look up a raw record key, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        key.to_lowercase().parse().ok()
    }
}

impl fmt::Display for HeroField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HeroField {
    type Err = UnknownFieldError;

    /// Parse an already-lowercased canonical key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeroField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}
