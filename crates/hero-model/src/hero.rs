use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::field::HeroField;
use crate::measurement::Measurement;

/// A raw record as delivered by a data source: field name to JSON value.
pub type RawRecord = serde_json::Map<String, Value>;

/// Presentation label for a missing categorical attribute.
pub const UNKNOWN_LABEL: &str = "unknown";

/// One superhero entry.
///
/// Only `name` and `powers` are always present. Categorical attributes are
/// `None` when the source had nothing usable; the "unknown" label is produced
/// at presentation time by the `*_label` accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub gender: Option<String>,
    pub eyecolor: Option<String>,
    pub race: Option<String>,
    pub haircolor: Option<String>,
    pub height: Option<Measurement>,
    pub publisher: Option<String>,
    pub skincolor: Option<String>,
    pub alignment: Option<String>,
    pub weight: Option<Measurement>,
    #[serde(default)]
    pub powers: Vec<String>,
}

impl Hero {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build a hero from a raw record.
    ///
    /// Keys are matched case-insensitively and unrecognized keys are skipped.
    /// When several keys name the same field, the last one in source order
    /// wins. This never fails: absent or wrong-typed values leave the attribute at
    /// its default (`None`, empty name, empty powers).
    pub fn from_record(record: &RawRecord) -> Self {
        let mut hero = Self::default();
        for (key, value) in record {
            match HeroField::from_key(key) {
                Some(field) => hero.assign(field, value),
                None => trace!(key = %key, "ignoring unrecognized field"),
            }
        }
        hero
    }

    fn assign(&mut self, field: HeroField, value: &Value) {
        match field {
            HeroField::Name => self.name = text_value(field, value).unwrap_or_default(),
            HeroField::Gender => self.gender = text_value(field, value),
            HeroField::EyeColor => self.eyecolor = text_value(field, value),
            HeroField::Race => self.race = text_value(field, value),
            HeroField::HairColor => self.haircolor = text_value(field, value),
            HeroField::Height => self.height = Measurement::from_json(value),
            HeroField::Publisher => self.publisher = text_value(field, value),
            HeroField::SkinColor => self.skincolor = text_value(field, value),
            HeroField::Alignment => self.alignment = text_value(field, value),
            HeroField::Weight => self.weight = Measurement::from_json(value),
            HeroField::Powers => self.powers = power_list(value),
        }
    }

    /// Assign a field from source text, as read from a delimited file.
    ///
    /// Empty text leaves the attribute unset. `Powers` is not a text field
    /// and is ignored here.
    pub fn set_text(&mut self, field: HeroField, text: &str) {
        if text.is_empty() {
            return;
        }
        let owned = Some(text.to_string());
        match field {
            HeroField::Name => self.name = text.to_string(),
            HeroField::Gender => self.gender = owned,
            HeroField::EyeColor => self.eyecolor = owned,
            HeroField::Race => self.race = owned,
            HeroField::HairColor => self.haircolor = owned,
            HeroField::Height => self.height = Some(Measurement::from_text(text)),
            HeroField::Publisher => self.publisher = owned,
            HeroField::SkinColor => self.skincolor = owned,
            HeroField::Alignment => self.alignment = owned,
            HeroField::Weight => self.weight = Some(Measurement::from_text(text)),
            HeroField::Powers => trace!("powers cannot be set from text"),
        }
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(Measurement::from_number(height));
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(Measurement::from_number(weight));
        self
    }

    #[must_use]
    pub fn with_powers<I, S>(mut self, powers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.powers = powers.into_iter().map(Into::into).collect();
        self
    }

    pub fn power_count(&self) -> usize {
        self.powers.len()
    }

    pub fn has_power(&self, power: &str) -> bool {
        self.powers.iter().any(|p| p == power)
    }

    /// Publisher with surrounding whitespace removed; `None` when blank.
    pub fn trimmed_publisher(&self) -> Option<&str> {
        self.publisher
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn gender_label(&self) -> &str {
        self.gender.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    pub fn race_label(&self) -> &str {
        self.race.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    /// Display text for a field; missing values render as an empty string
    /// and powers are joined with `", "`.
    pub fn display_value(&self, field: HeroField) -> String {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let measure =
            |value: &Option<Measurement>| value.as_ref().map(|m| m.raw.clone()).unwrap_or_default();
        match field {
            HeroField::Name => self.name.clone(),
            HeroField::Gender => text(&self.gender),
            HeroField::EyeColor => text(&self.eyecolor),
            HeroField::Race => text(&self.race),
            HeroField::HairColor => text(&self.haircolor),
            HeroField::Height => measure(&self.height),
            HeroField::Publisher => text(&self.publisher),
            HeroField::SkinColor => text(&self.skincolor),
            HeroField::Alignment => text(&self.alignment),
            HeroField::Weight => measure(&self.weight),
            HeroField::Powers => self.powers.join(", "),
        }
    }
}

fn text_value(field: HeroField, value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Null => None,
        other => {
            trace!(field = %field, value = %other, "non-text value treated as missing");
            None
        }
    }
}

fn power_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
