use conjugation::*;
use serde_json::json;

/// A table for "fahren" the way a generator would produce it, with no highlights.
fn fahren_json() -> serde_json::Value {
    json!({
        "input": { "verb": "fahren" },
        "isSeparable": false,
        "isReflexive": false,
        "conjugations": {
            "ich": {
                "praesens": { "main": "fahre" },
                "perfekt": { "auxiliary": "bin", "partizip": "gefahren" },
                "praeteritum": { "main": "fuhr" }
            },
            "du": {
                "praesens": { "main": "fährst" },
                "perfekt": { "auxiliary": "bist", "partizip": "gefahren" },
                "praeteritum": { "main": "fuhrst" }
            },
            "Sie_sg": {
                "praesens": { "main": "fahren" },
                "perfekt": { "auxiliary": "sind", "partizip": "gefahren" },
                "praeteritum": { "main": "fuhren" }
            },
            "er_sie_es": {
                "praesens": { "main": "fährt" },
                "perfekt": { "auxiliary": "ist", "partizip": "gefahren" },
                "praeteritum": { "main": "fuhr" }
            },
            "wir": {
                "praesens": { "main": "fahren" },
                "perfekt": { "auxiliary": "sind", "partizip": "gefahren" },
                "praeteritum": { "main": "fuhren" }
            },
            "ihr": {
                "praesens": { "main": "fahrt" },
                "perfekt": { "auxiliary": "seid", "partizip": "gefahren" },
                "praeteritum": { "main": "fuhrt" }
            },
            "Sie_pl": {
                "praesens": { "main": "fahren" },
                "perfekt": { "auxiliary": "sind", "partizip": "gefahren" },
                "praeteritum": { "main": "fuhren" }
            },
            "sie_pl": {
                "praesens": { "main": "fahren" },
                "perfekt": { "auxiliary": "sind", "partizip": "gefahren" },
                "praeteritum": { "main": "fuhren" }
            }
        }
    })
}

#[test]
fn parses_generator_output() {
    let table: VerbConjugationTable = serde_json::from_value(fahren_json()).unwrap();

    assert_eq!("fahren", table.input.verb);
    assert!(table.is_complete());
    assert_eq!(
        Some("fährst"),
        table.conjugations[&PersonKey::Du]
            .praesens
            .as_ref()
            .and_then(|praesens| praesens.main.as_deref())
    );
}

#[test]
fn highlights_are_serialized_as_offset_pairs() {
    let table: VerbConjugationTable = serde_json::from_value(fahren_json()).unwrap();
    let table = table.with_highlights();
    let value = serde_json::to_value(&table).unwrap();

    let du = &value["conjugations"]["du"];
    assert_eq!(json!({ "main": [[1, 2]] }), du["praesens"]["highlights"]);
    assert_eq!(json!({ "partizip": [[6, 8]] }), du["perfekt"]["highlights"]);

    // "fahren" is regular in the Präsens for wir, so there's nothing to highlight
    assert_eq!(None, value["conjugations"]["wir"]["praesens"].get("highlights"));
}

#[test]
fn only_irregular_praesens_forms_are_highlighted() {
    let table: VerbConjugationTable = serde_json::from_value(fahren_json()).unwrap();
    let table = table.with_highlights();

    let highlighted = ALL_PERSONS
        .into_iter()
        .filter(|person| {
            table.conjugations[person]
                .praesens
                .as_ref()
                .is_some_and(|praesens| praesens.highlights.is_some())
        })
        .collect::<Vec<_>>();

    assert_eq!(vec![PersonKey::Du, PersonKey::ErSieEs], highlighted);
}

#[test]
fn highlighting_twice_changes_nothing() {
    let table: VerbConjugationTable = serde_json::from_value(fahren_json()).unwrap();
    let once = table.with_highlights();
    let twice = once.clone().with_highlights();

    assert_eq!(once, twice);
}

#[test]
fn missing_persons_and_tenses_are_tolerated() {
    let value = json!({
        "input": { "verb": "sich etwas abgewöhnen" },
        "isSeparable": true,
        "separablePrefix": "ab",
        "isReflexive": true,
        "conjugations": {
            "ich": {
                "praesens": { "main": "gewöhne", "prefix": "ab", "reflexive": "mir" },
                "perfekt": { "auxiliary": "habe", "reflexive": "mir", "partizip": "abgewöhnt" }
            }
        }
    });
    let mut table: VerbConjugationTable = serde_json::from_value(value).unwrap();
    assert!(!table.is_complete());

    attach_highlights(&mut table);

    let ich = &table.conjugations[&PersonKey::Ich];
    assert_eq!(None, ich.praesens.as_ref().unwrap().highlights);
    assert_eq!(None, ich.perfekt.as_ref().unwrap().highlights);
    assert_eq!(None, ich.praeteritum);
}

#[test]
fn unrelated_highlights_survive_a_round_trip() {
    let value = json!({
        "input": { "verb": "machen" },
        "isSeparable": false,
        "isReflexive": false,
        "conjugations": {
            "ich": {
                "perfekt": {
                    "auxiliary": "habe",
                    "partizip": "gemacht",
                    "highlights": { "auxiliary": [[0, 2]], "partizip": [[0, 1]] }
                }
            }
        }
    });
    let table: VerbConjugationTable = serde_json::from_value(value).unwrap();
    let table = table.with_highlights();
    let value = serde_json::to_value(&table).unwrap();

    assert_eq!(
        json!({ "auxiliary": [[0, 2]] }),
        value["conjugations"]["ich"]["perfekt"]["highlights"]
    );
}

#[test]
fn omitted_flags_default_to_false() {
    let value = json!({
        "input": { "verb": "machen" },
        "conjugations": {}
    });
    let table: VerbConjugationTable = serde_json::from_value(value).unwrap();

    assert_eq!(VerbConjugationTable::new("machen"), table);
}

#[test]
fn edited_partizip_highlights_apply_to_every_person() {
    let table: VerbConjugationTable = serde_json::from_value(fahren_json()).unwrap();
    let mut table = table.with_highlights();

    set_highlights(
        &mut table,
        PersonKey::Ich,
        VerbTense::Perfekt,
        HighlightField::Partizip,
        &[HighlightRange::new(5, 8)],
    )
    .unwrap();

    for conjugations in table.conjugations.values() {
        let highlights = conjugations.perfekt.as_ref().unwrap().highlights.as_ref();
        assert_eq!(
            Some(&[HighlightRange::new(5, 8)][..]),
            highlights.and_then(|h| h.get(HighlightField::Partizip))
        );
    }
}
