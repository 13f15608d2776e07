use comfy_table::{Cell, ContentArrangement, Table};
use crossterm::style::{style, Color, Stylize};
use itertools::Itertools;

use conjugation::{
    segments::segment, HighlightField, HighlightRange, PersonConjugations, TenseHighlights,
    VerbConjugationTable, VerbTense, ALL_PERSONS,
};

use crate::options::DisplayOptions;

const MAX_WIDTH: u16 = 100;
const MISSING: &str = "–";

/// Transforms the provided conjugation table into a string for display in a terminal.
pub fn table_to_string(table: &VerbConjugationTable, options: &DisplayOptions) -> String {
    let tenses = options.tenses_to_show();

    let mut grid = Table::new();
    grid.set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(MAX_WIDTH)
        .set_header(
            std::iter::once(Cell::new(""))
                .chain(tenses.iter().map(|tense| Cell::new(tense.german_label())))
                .collect::<Vec<Cell>>(),
        );

    for person in ALL_PERSONS {
        let conjugations = table.conjugations.get(&person);
        let mut row = vec![Cell::new(person.pronoun())];
        for tense in &tenses {
            let form = conjugations
                .and_then(|c| tense_to_string(c, *tense, table.is_separable, options))
                .unwrap_or_else(|| MISSING.to_string());
            row.push(Cell::new(form));
        }
        grid.add_row(row);
    }

    format!("{}\n{grid}", title_to_string(table))
}

/// Builds the line shown above a table, e.g. "abholen (trennbar: ab-)".
fn title_to_string(table: &VerbConjugationTable) -> String {
    let verb = style(table.input.verb.clone()).bold();

    let separable_note = if table.is_separable {
        table
            .separable_prefix
            .as_ref()
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| format!("trennbar: {prefix}-"))
    } else {
        None
    };
    let reflexive_note = if table.is_reflexive {
        Some("reflexiv".to_string())
    } else {
        None
    };

    let notes = [separable_note, reflexive_note].join(", ");
    if notes.is_empty() {
        verb.to_string()
    } else {
        format!("{verb} {}", style(format!("({notes})")).dark_grey())
    }
}

/// The fields of a conjugation in the provided tense, in the order they're written in a main clause.
fn display_fields(tense: VerbTense) -> &'static [HighlightField] {
    match tense {
        VerbTense::Praesens | VerbTense::Praeteritum => &[
            HighlightField::Main,
            HighlightField::Reflexive,
            HighlightField::Prefix,
        ],
        VerbTense::Perfekt => &[
            HighlightField::Auxiliary,
            HighlightField::Reflexive,
            HighlightField::Partizip,
        ],
    }
}

/// Writes out one person's conjugation in the provided tense, e.g. "gewöhne mir ab". Returns `None` if there's nothing to show.
fn tense_to_string(
    conjugations: &PersonConjugations,
    tense: VerbTense,
    is_separable: bool,
    options: &DisplayOptions,
) -> Option<String> {
    let fields = display_fields(tense)
        .iter()
        .filter(|field| is_separable || **field != HighlightField::Prefix);

    let words = match tense {
        VerbTense::Praesens | VerbTense::Praeteritum => {
            let conjugation = match tense {
                VerbTense::Praesens => conjugations.praesens.as_ref(),
                _ => conjugations.praeteritum.as_ref(),
            }?;
            fields
                .filter_map(|field| {
                    conjugation.field(*field).map(|value| {
                        field_to_string(value, ranges(&conjugation.highlights, *field), options)
                    })
                })
                .collect::<Vec<String>>()
        }
        VerbTense::Perfekt => {
            let conjugation = conjugations.perfekt.as_ref()?;
            fields
                .filter_map(|field| {
                    conjugation.field(*field).map(|value| {
                        field_to_string(value, ranges(&conjugation.highlights, *field), options)
                    })
                })
                .collect::<Vec<String>>()
        }
    };

    let words = words
        .into_iter()
        .filter(|word| !word.is_empty())
        .collect::<Vec<String>>();
    if words.is_empty() {
        return None;
    }

    Some(words.iter().join(" "))
}

fn ranges(highlights: &Option<TenseHighlights>, field: HighlightField) -> &[HighlightRange] {
    highlights
        .as_ref()
        .and_then(|highlights| highlights.get(field))
        .unwrap_or_default()
}

/// Writes out a single form with its highlighted parts emphasized.
fn field_to_string(value: &str, ranges: &[HighlightRange], options: &DisplayOptions) -> String {
    if !options.show_highlights {
        return value.to_string();
    }

    segment(value, ranges)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                style(segment.text)
                    .on(Color::Yellow)
                    .with(Color::Black)
                    .to_string()
            } else {
                segment.text
            }
        })
        .collect()
}

trait Join<T> {
    fn join(self, between: &str) -> T;
}

impl<const N: usize> Join<String> for [Option<String>; N] {
    fn join(self, between: &str) -> String {
        self.into_iter()
            .flatten()
            .collect::<Vec<String>>()
            .join(between)
    }
}
