use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{HighlightRange, PersonKey};

/// A verb's conjugations for every person, as supplied by an external generator, along with any irregularity highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbConjugationTable {
    pub input: VerbInput,
    /// Whether the verb's prefix detaches from it (e.g. "abholen")
    #[serde(default)]
    pub is_separable: bool,
    /// The prefix that detaches, e.g. "ab" for "abholen"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separable_prefix: Option<String>,
    #[serde(default)]
    pub is_reflexive: bool,
    /// The conjugations, by person. Persons with no entry are left alone.
    #[serde(default)]
    pub conjugations: BTreeMap<PersonKey, PersonConjugations>,
}

/// What the table was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbInput {
    /// The infinitive as entered, possibly with leading words like "sich" or "sich etwas"
    pub verb: String,
}

/// One person's conjugations in every tense.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonConjugations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub praesens: Option<TenseConjugation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perfekt: Option<PerfektConjugation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub praeteritum: Option<TenseConjugation>,
}

/// A conjugation in a simple tense (Präsens or Präteritum).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenseConjugation {
    /// The conjugated form, e.g. "hole"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    /// The detached prefix of a separable verb, e.g. "ab"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// The reflexive pronoun of a reflexive verb, e.g. "mich"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflexive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<TenseHighlights>,
}

/// A conjugation in the Perfekt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfektConjugation {
    /// The conjugated auxiliary, e.g. "habe" or "bin"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflexive: Option<String>,
    /// The Partizip II, e.g. "abgeholt"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partizip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<TenseHighlights>,
}

/// The fields of a conjugation that can be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightField {
    Main,
    Prefix,
    Auxiliary,
    Partizip,
    Reflexive,
}

impl Display for HighlightField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            HighlightField::Main => "main",
            HighlightField::Prefix => "prefix",
            HighlightField::Auxiliary => "auxiliary",
            HighlightField::Partizip => "partizip",
            HighlightField::Reflexive => "reflexive",
        };

        string.fmt(f)
    }
}

/// Highlighted ranges in each field of a conjugation. A field with no entry matches its regular form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenseHighlights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<Vec<HighlightRange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<HighlightRange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<Vec<HighlightRange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partizip: Option<Vec<HighlightRange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflexive: Option<Vec<HighlightRange>>,
}

impl TenseHighlights {
    /// Gets the ranges highlighted in the provided field, if there are any.
    pub fn get(&self, field: HighlightField) -> Option<&[HighlightRange]> {
        match field {
            HighlightField::Main => self.main.as_deref(),
            HighlightField::Prefix => self.prefix.as_deref(),
            HighlightField::Auxiliary => self.auxiliary.as_deref(),
            HighlightField::Partizip => self.partizip.as_deref(),
            HighlightField::Reflexive => self.reflexive.as_deref(),
        }
    }

    fn entry(&mut self, field: HighlightField) -> &mut Option<Vec<HighlightRange>> {
        match field {
            HighlightField::Main => &mut self.main,
            HighlightField::Prefix => &mut self.prefix,
            HighlightField::Auxiliary => &mut self.auxiliary,
            HighlightField::Partizip => &mut self.partizip,
            HighlightField::Reflexive => &mut self.reflexive,
        }
    }

    /// Sets the ranges highlighted in the provided field, replacing any previous ones.
    pub fn set(&mut self, field: HighlightField, ranges: Vec<HighlightRange>) {
        *self.entry(field) = Some(ranges);
    }

    /// Removes the ranges highlighted in the provided field.
    pub fn remove(&mut self, field: HighlightField) {
        *self.entry(field) = None;
    }

    /// Determines whether no field has any highlights.
    pub fn is_empty(&self) -> bool {
        self.main.is_none()
            && self.prefix.is_none()
            && self.auxiliary.is_none()
            && self.partizip.is_none()
            && self.reflexive.is_none()
    }
}

/// Sets the ranges for `field` in the provided highlights, creating them if needed.
pub(crate) fn set_field_highlights(
    highlights: &mut Option<TenseHighlights>,
    field: HighlightField,
    ranges: Vec<HighlightRange>,
) {
    highlights
        .get_or_insert_with(TenseHighlights::default)
        .set(field, ranges);
}

/// Removes the ranges for `field` from the provided highlights, dropping the highlights entirely if nothing is left.
pub(crate) fn remove_field_highlights(
    highlights: &mut Option<TenseHighlights>,
    field: HighlightField,
) {
    if let Some(existing) = highlights {
        existing.remove(field);
        if existing.is_empty() {
            *highlights = None;
        }
    }
}

impl TenseConjugation {
    /// Creates a conjugation with just a main form.
    pub fn new<T: Into<String>>(main: T) -> TenseConjugation {
        TenseConjugation {
            main: Some(main.into()),
            ..Default::default()
        }
    }

    /// Gets the value of the provided field, if this kind of conjugation has it and it's set.
    pub fn field(&self, field: HighlightField) -> Option<&str> {
        match field {
            HighlightField::Main => self.main.as_deref(),
            HighlightField::Prefix => self.prefix.as_deref(),
            HighlightField::Reflexive => self.reflexive.as_deref(),
            HighlightField::Auxiliary | HighlightField::Partizip => None,
        }
    }
}

impl PerfektConjugation {
    /// Creates a Perfekt conjugation from an auxiliary and a participle.
    pub fn new<A: Into<String>, P: Into<String>>(auxiliary: A, partizip: P) -> PerfektConjugation {
        PerfektConjugation {
            auxiliary: Some(auxiliary.into()),
            partizip: Some(partizip.into()),
            ..Default::default()
        }
    }

    /// Gets the value of the provided field, if this kind of conjugation has it and it's set.
    pub fn field(&self, field: HighlightField) -> Option<&str> {
        match field {
            HighlightField::Auxiliary => self.auxiliary.as_deref(),
            HighlightField::Partizip => self.partizip.as_deref(),
            HighlightField::Reflexive => self.reflexive.as_deref(),
            HighlightField::Main | HighlightField::Prefix => None,
        }
    }
}

impl VerbConjugationTable {
    /// Creates a table for the provided verb with no conjugations.
    pub fn new<T: Into<String>>(verb: T) -> VerbConjugationTable {
        VerbConjugationTable {
            input: VerbInput { verb: verb.into() },
            is_separable: false,
            separable_prefix: None,
            is_reflexive: false,
            conjugations: BTreeMap::new(),
        }
    }

    /// Marks the verb as separable with the provided prefix.
    pub fn with_separable_prefix<T: Into<String>>(mut self, prefix: T) -> VerbConjugationTable {
        self.is_separable = true;
        self.separable_prefix = Some(prefix.into());
        self
    }

    /// Adds conjugations for a person, replacing any previous ones.
    pub fn with_person(
        mut self,
        person: PersonKey,
        conjugations: PersonConjugations,
    ) -> VerbConjugationTable {
        self.conjugations.insert(person, conjugations);
        self
    }

    /// Determines whether every person has an entry.
    pub fn is_complete(&self) -> bool {
        crate::ALL_PERSONS
            .iter()
            .all(|person| self.conjugations.contains_key(person))
    }
}
