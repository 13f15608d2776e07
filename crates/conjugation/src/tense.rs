use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::HighlightField;

/// The tenses a conjugation table covers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VerbTense {
    Praesens,
    Perfekt,
    Praeteritum,
}

/// Every tense, in table order.
pub const ALL_TENSES: [VerbTense; 3] = [
    VerbTense::Praesens,
    VerbTense::Perfekt,
    VerbTense::Praeteritum,
];

impl VerbTense {
    /// Parses the provided string to a `VerbTense`. Returns `None` if the string doesn't map to any tense.
    pub fn parse(input: &str) -> Option<VerbTense> {
        match input.to_lowercase().as_str() {
            "praesens" | "präsens" | "present" => Some(VerbTense::Praesens),
            "perfekt" | "perfect" => Some(VerbTense::Perfekt),
            "praeteritum" | "präteritum" | "past" => Some(VerbTense::Praeteritum),
            _ => None,
        }
    }

    /// The fields a conjugation in this tense has that can be highlighted.
    pub fn highlight_fields(&self) -> &'static [HighlightField] {
        match self {
            VerbTense::Praesens | VerbTense::Praeteritum => &[
                HighlightField::Reflexive,
                HighlightField::Main,
                HighlightField::Prefix,
            ],
            VerbTense::Perfekt => &[
                HighlightField::Auxiliary,
                HighlightField::Reflexive,
                HighlightField::Partizip,
            ],
        }
    }

    /// The German name of this tense.
    pub fn german_label(&self) -> &'static str {
        match self {
            VerbTense::Praesens => "Präsens",
            VerbTense::Perfekt => "Perfekt",
            VerbTense::Praeteritum => "Präteritum",
        }
    }

    /// The English name of this tense.
    pub fn english_label(&self) -> &'static str {
        match self {
            VerbTense::Praesens => "Present",
            VerbTense::Perfekt => "Perfect",
            VerbTense::Praeteritum => "Past",
        }
    }
}

impl Display for VerbTense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.german_label().fmt(f)
    }
}
