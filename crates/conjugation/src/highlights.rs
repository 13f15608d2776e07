use std::fmt::Display;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    compute_highlight_ranges, generate_regular_forms,
    segments::normalize,
    table::{remove_field_highlights, set_field_highlights},
    HighlightField, HighlightRange, PersonConjugations, PersonKey, TenseHighlights,
    VerbConjugationTable, VerbTense, ALL_PERSONS,
};

lazy_static! {
    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"\s+").unwrap();
}

/// Finds the word in the provided verb phrase that actually gets conjugated.
///
/// Leading words like "sich" or "sich etwas" are dropped, so "sich etwas abgewöhnen" becomes "abgewöhnen". This just takes
/// the last word, which is wrong for phrases that end in something other than the verb.
pub fn conjugable_infinitive(verb: &str) -> &str {
    WHITESPACE_PATTERN
        .split(verb.trim())
        .last()
        .unwrap_or(verb)
}

/// Highlights every form in the provided table that differs from what the verb's regular form would be.
///
/// Präsens and Präteritum forms get highlights on `main`, and Perfekt forms get highlights on `partizip`. Highlights for a
/// form that turns out to be regular are removed, along with the whole set of highlights for the tense if nothing else is
/// highlighted. Highlights on other fields are left alone.
pub fn attach_highlights(table: &mut VerbConjugationTable) {
    let infinitive = conjugable_infinitive(&table.input.verb);
    debug!(
        "Attaching highlights for {:?} using infinitive {infinitive:?}",
        table.input.verb
    );
    let regular = generate_regular_forms(
        infinitive,
        table.is_separable,
        table.separable_prefix.as_deref(),
    );

    for person in ALL_PERSONS {
        let Some(conjugations) = table.conjugations.get_mut(&person) else {
            debug!("No conjugations for {person}, skipping");
            continue;
        };
        let Some(forms) = regular.get(&person) else {
            continue;
        };

        if let Some(praesens) = conjugations.praesens.as_mut() {
            update_highlights(
                &mut praesens.highlights,
                HighlightField::Main,
                &forms.praesens,
                praesens.main.as_deref(),
            );
        }

        if let Some(perfekt) = conjugations.perfekt.as_mut() {
            update_highlights(
                &mut perfekt.highlights,
                HighlightField::Partizip,
                &forms.partizip_ii,
                perfekt.partizip.as_deref(),
            );
        }

        if let Some(praeteritum) = conjugations.praeteritum.as_mut() {
            update_highlights(
                &mut praeteritum.highlights,
                HighlightField::Main,
                &forms.praeteritum,
                praeteritum.main.as_deref(),
            );
        }
    }
}

/// Replaces or removes the highlights for one field based on how its actual value compares to the regular one.
fn update_highlights(
    highlights: &mut Option<TenseHighlights>,
    field: HighlightField,
    regular: &str,
    actual: Option<&str>,
) {
    let Some(actual) = actual.filter(|actual| !actual.is_empty()) else {
        return;
    };

    match compute_highlight_ranges(regular, actual) {
        Some(ranges) => {
            debug!("{actual:?} differs from regular {regular:?} at {ranges:?}");
            set_field_highlights(highlights, field, ranges);
        }
        None => remove_field_highlights(highlights, field),
    }
}

impl VerbConjugationTable {
    /// Consumes this table and returns it with highlights attached. See `attach_highlights`.
    pub fn with_highlights(mut self) -> VerbConjugationTable {
        attach_highlights(&mut self);
        self
    }
}

/// An error while changing highlights by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// The table has no conjugations for the person.
    MissingPerson(PersonKey),
    /// The person has no conjugation in the tense.
    MissingTense(PersonKey, VerbTense),
    /// Conjugations in the tense don't have the field, e.g. there's no Partizip in the Präsens.
    UnsupportedField(VerbTense, HighlightField),
    /// The field has no value to highlight.
    MissingField(PersonKey, VerbTense, HighlightField),
    /// A range is empty or extends past the end of the field's value.
    InvalidRange {
        person: PersonKey,
        range: HighlightRange,
        len: usize,
    },
}

impl Display for HighlightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighlightError::MissingPerson(person) => write!(f, "no conjugations for {person}"),
            HighlightError::MissingTense(person, tense) => {
                write!(f, "no {tense} conjugation for {person}")
            }
            HighlightError::UnsupportedField(tense, field) => {
                write!(f, "{tense} conjugations have no {field} field")
            }
            HighlightError::MissingField(person, tense, field) => {
                write!(f, "no {field} in the {tense} conjugation for {person}")
            }
            HighlightError::InvalidRange { person, range, len } => write!(
                f,
                "range {range} for {person} doesn't fit in a value with {len} characters"
            ),
        }
    }
}

impl std::error::Error for HighlightError {}

/// Finds the length of a field's value, along with the highlights it belongs to.
fn field_len_and_highlights(
    conjugations: &mut PersonConjugations,
    person: PersonKey,
    tense: VerbTense,
    field: HighlightField,
) -> Result<(usize, &mut Option<TenseHighlights>), HighlightError> {
    if !tense.highlight_fields().contains(&field) {
        return Err(HighlightError::UnsupportedField(tense, field));
    }

    let missing_tense = HighlightError::MissingTense(person, tense);
    let missing_field = HighlightError::MissingField(person, tense, field);
    match tense {
        VerbTense::Praesens | VerbTense::Praeteritum => {
            let slot = if tense == VerbTense::Praesens {
                conjugations.praesens.as_mut()
            } else {
                conjugations.praeteritum.as_mut()
            }
            .ok_or(missing_tense)?;
            let len = slot.field(field).ok_or(missing_field)?.chars().count();
            Ok((len, &mut slot.highlights))
        }
        VerbTense::Perfekt => {
            let slot = conjugations.perfekt.as_mut().ok_or(missing_tense)?;
            let len = slot.field(field).ok_or(missing_field)?.chars().count();
            Ok((len, &mut slot.highlights))
        }
    }
}

/// Replaces the highlights on one field of one person's conjugation. An empty list of ranges removes the field's highlights.
///
/// The Partizip II is the same for every person, so Perfekt `partizip` highlights are applied to every person that has one.
/// Ranges are sorted and merged before being stored. Nothing is changed if any range doesn't fit its value.
pub fn set_highlights(
    table: &mut VerbConjugationTable,
    person: PersonKey,
    tense: VerbTense,
    field: HighlightField,
    ranges: &[HighlightRange],
) -> Result<(), HighlightError> {
    if !table.conjugations.contains_key(&person) {
        return Err(HighlightError::MissingPerson(person));
    }

    let targets: Vec<PersonKey> = if tense == VerbTense::Perfekt && field == HighlightField::Partizip {
        table.conjugations.keys().copied().collect()
    } else {
        vec![person]
    };

    // check every target before changing any of them
    let mut updates = Vec::new();
    for target in targets {
        let Some(conjugations) = table.conjugations.get_mut(&target) else {
            continue;
        };
        match field_len_and_highlights(conjugations, target, tense, field) {
            Ok((len, _)) => {
                if let Some(range) = ranges.iter().find(|range| !range.fits(len)) {
                    return Err(HighlightError::InvalidRange {
                        person: target,
                        range: *range,
                        len,
                    });
                }
                updates.push((target, len));
            }
            Err(e) if target != person => debug!("Not syncing highlights to {target}: {e}"),
            Err(e) => return Err(e),
        }
    }

    for (target, len) in updates {
        let Some(conjugations) = table.conjugations.get_mut(&target) else {
            continue;
        };
        let (_, highlights) = field_len_and_highlights(conjugations, target, tense, field)?;
        let normalized = normalize(ranges, len);
        if normalized.is_empty() {
            remove_field_highlights(highlights, field);
        } else {
            set_field_highlights(highlights, field, normalized);
        }
    }

    Ok(())
}

/// Removes every highlight from the provided table.
pub fn clear_highlights(table: &mut VerbConjugationTable) {
    for conjugations in table.conjugations.values_mut() {
        if let Some(praesens) = conjugations.praesens.as_mut() {
            praesens.highlights = None;
        }
        if let Some(perfekt) = conjugations.perfekt.as_mut() {
            perfekt.highlights = None;
        }
        if let Some(praeteritum) = conjugations.praeteritum.as_mut() {
            praeteritum.highlights = None;
        }
    }
}
