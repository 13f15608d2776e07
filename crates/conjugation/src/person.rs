use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The grammatical person categories a German verb is conjugated for.
///
/// The declaration order is the order rows appear in a conjugation table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize,
)]
pub enum PersonKey {
    #[serde(rename = "ich")]
    Ich,
    #[serde(rename = "du")]
    Du,
    /// Formal "Sie" addressing one person
    #[serde(rename = "Sie_sg")]
    SieFormalSingular,
    #[serde(rename = "er_sie_es")]
    ErSieEs,
    #[serde(rename = "wir")]
    Wir,
    #[serde(rename = "ihr")]
    Ihr,
    /// Formal "Sie" addressing several people
    #[serde(rename = "Sie_pl")]
    SieFormalPlural,
    /// Third-person plural "sie"
    #[serde(rename = "sie_pl")]
    SiePlural,
}

/// Every person, in table order.
pub const ALL_PERSONS: [PersonKey; 8] = [
    PersonKey::Ich,
    PersonKey::Du,
    PersonKey::SieFormalSingular,
    PersonKey::ErSieEs,
    PersonKey::Wir,
    PersonKey::Ihr,
    PersonKey::SieFormalPlural,
    PersonKey::SiePlural,
];

/// First, second, or third person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalPerson {
    First,
    Second,
    Third,
}

/// Whether a second-person form is used informally or formally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formality {
    Informal,
    Formal,
}

/// Which half of a conjugation table a person belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
}

impl PersonKey {
    /// Parses the provided key (e.g. `"Sie_sg"`) to a `PersonKey`. Returns `None` if the key doesn't match any person.
    pub fn parse(input: &str) -> Option<PersonKey> {
        ALL_PERSONS
            .into_iter()
            .find(|person| person.key() == input)
    }

    /// The key used for this person in serialized tables.
    pub fn key(&self) -> &'static str {
        match self {
            PersonKey::Ich => "ich",
            PersonKey::Du => "du",
            PersonKey::SieFormalSingular => "Sie_sg",
            PersonKey::ErSieEs => "er_sie_es",
            PersonKey::Wir => "wir",
            PersonKey::Ihr => "ihr",
            PersonKey::SieFormalPlural => "Sie_pl",
            PersonKey::SiePlural => "sie_pl",
        }
    }

    /// The pronoun shown at the start of this person's row.
    pub fn pronoun(&self) -> &'static str {
        match self {
            PersonKey::Ich => "ich",
            PersonKey::Du => "du",
            PersonKey::SieFormalSingular => "Sie",
            PersonKey::ErSieEs => "er / sie / es",
            PersonKey::Wir => "wir",
            PersonKey::Ihr => "ihr",
            PersonKey::SieFormalPlural => "Sie",
            PersonKey::SiePlural => "sie",
        }
    }

    pub fn grammatical_person(&self) -> GrammaticalPerson {
        match self {
            PersonKey::Ich | PersonKey::Wir => GrammaticalPerson::First,
            PersonKey::Du
            | PersonKey::SieFormalSingular
            | PersonKey::Ihr
            | PersonKey::SieFormalPlural => GrammaticalPerson::Second,
            PersonKey::ErSieEs | PersonKey::SiePlural => GrammaticalPerson::Third,
        }
    }

    /// The formality of this person, if it's a second-person form.
    pub fn formality(&self) -> Option<Formality> {
        match self {
            PersonKey::Du | PersonKey::Ihr => Some(Formality::Informal),
            PersonKey::SieFormalSingular | PersonKey::SieFormalPlural => Some(Formality::Formal),
            _ => None,
        }
    }

    pub fn number(&self) -> Number {
        match self {
            PersonKey::Ich | PersonKey::Du | PersonKey::SieFormalSingular | PersonKey::ErSieEs => {
                Number::Singular
            }
            PersonKey::Wir | PersonKey::Ihr | PersonKey::SieFormalPlural | PersonKey::SiePlural => {
                Number::Plural
            }
        }
    }
}

impl Display for PersonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.key().fmt(f)
    }
}
