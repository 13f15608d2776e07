use std::collections::BTreeMap;

use log::debug;

use crate::{PersonKey, ALL_PERSONS};

/// Prefixes that never detach from their verb. Verbs starting with one of these form their Partizip II without "ge-".
pub const INSEPARABLE_PREFIXES: &[&str] = &["be", "emp", "ent", "er", "ge", "miss", "ver", "zer"];

/// Stem-final consonant clusters that need an "e" inserted before an ending starting with "t" or "st".
pub const EPENTHESIS_CLUSTERS: &[&str] = &["tm", "dm", "chn", "fn", "gn"];

/// Stem-final consonants that need an "e" inserted before an ending starting with "t" or "st".
pub const EPENTHESIS_CONSONANTS: &[&str] = &["t", "d"];

/// The forms a verb would have if it were conjugated completely regularly, for one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularForms {
    /// The Präsens form, e.g. "machst"
    pub praesens: String,
    /// The Partizip II, e.g. "gemacht". The same for every person.
    pub partizip_ii: String,
    /// The Präteritum form, e.g. "machtest"
    pub praeteritum: String,
}

/// Removes the separable prefix from the start of the provided infinitive, if it's there.
///
/// For example, "abholen" with the prefix "ab" becomes "holen".
pub fn base_infinitive<'a>(infinitive: &'a str, separable_prefix: Option<&str>) -> &'a str {
    separable_prefix
        .and_then(|prefix| infinitive.strip_prefix(prefix))
        .unwrap_or(infinitive)
}

/// Finds the stem that endings are attached to for the provided infinitive.
///
/// * machen → mach
/// * abholen (prefix "ab") → hol
/// * handeln → handel, wandern → wander (only the "n" is dropped)
/// * tun → tu
pub fn extract_stem<'a>(infinitive: &'a str, separable_prefix: Option<&str>) -> &'a str {
    let base = base_infinitive(infinitive, separable_prefix);

    if base.ends_with("eln") || base.ends_with("ern") {
        return base.strip_suffix('n').unwrap_or(base);
    }

    if let Some(stem) = base.strip_suffix("en") {
        return stem;
    }

    base.strip_suffix('n').unwrap_or(base)
}

/// Determines whether an "e" needs to be inserted between the provided stem and an ending starting with "t" or "st".
///
/// For example, "arbeit" + "st" would be unpronounceable, so it becomes "arbeitest".
pub fn needs_epenthesis(stem: &str) -> bool {
    let stem = stem.to_lowercase();

    EPENTHESIS_CLUSTERS
        .iter()
        .chain(EPENTHESIS_CONSONANTS)
        .any(|ending| stem.ends_with(ending))
}

/// Determines whether the provided base infinitive starts with an inseparable prefix.
fn has_inseparable_prefix(base_infinitive: &str) -> bool {
    INSEPARABLE_PREFIXES
        .iter()
        .any(|prefix| base_infinitive.starts_with(prefix))
}

/// The regular Präsens ending for the provided person.
fn praesens_ending(person: PersonKey) -> &'static str {
    match person {
        PersonKey::Ich => "e",
        PersonKey::Du => "st",
        PersonKey::SieFormalSingular => "en",
        PersonKey::ErSieEs => "t",
        PersonKey::Wir => "en",
        PersonKey::Ihr => "t",
        PersonKey::SieFormalPlural => "en",
        PersonKey::SiePlural => "en",
    }
}

/// The regular Präteritum ending for the provided person, added after the "-te" suffix.
fn praeteritum_ending(person: PersonKey) -> &'static str {
    match person {
        PersonKey::Ich => "",
        PersonKey::Du => "st",
        PersonKey::SieFormalSingular => "n",
        PersonKey::ErSieEs => "",
        PersonKey::Wir => "n",
        PersonKey::Ihr => "t",
        PersonKey::SieFormalPlural => "n",
        PersonKey::SiePlural => "n",
    }
}

/// Builds the regular Präsens form of the provided stem for the provided person.
pub fn regular_praesens(stem: &str, person: PersonKey) -> String {
    let ending = praesens_ending(person);
    let epenthesis = match person {
        PersonKey::Du | PersonKey::ErSieEs | PersonKey::Ihr => needs_epenthesis(stem),
        _ => false,
    };

    if epenthesis {
        format!("{stem}e{ending}")
    } else {
        format!("{stem}{ending}")
    }
}

/// Builds the regular Partizip II of the provided stem.
///
/// `base_infinitive` is the infinitive without its separable prefix; it decides whether the participle gets "ge-".
pub fn regular_partizip_ii(
    stem: &str,
    separable_prefix: Option<&str>,
    base_infinitive: Option<&str>,
) -> String {
    let suffix = if needs_epenthesis(stem) { "et" } else { "t" };

    // inseparable prefixes take precedence over everything, including separable prefixes
    if base_infinitive.is_some_and(has_inseparable_prefix) {
        let prefix = separable_prefix.unwrap_or_default();
        return format!("{prefix}{stem}{suffix}");
    }

    match separable_prefix {
        Some(prefix) => format!("{prefix}ge{stem}{suffix}"),
        None => format!("ge{stem}{suffix}"),
    }
}

/// Builds the regular Präteritum form of the provided stem for the provided person.
pub fn regular_praeteritum(stem: &str, person: PersonKey) -> String {
    let te_suffix = if needs_epenthesis(stem) { "ete" } else { "te" };
    let ending = praeteritum_ending(person);

    format!("{stem}{te_suffix}{ending}")
}

/// Builds the regular forms of the provided infinitive for every person.
///
/// The separable prefix is only used if `is_separable` is true.
pub fn generate_regular_forms(
    infinitive: &str,
    is_separable: bool,
    separable_prefix: Option<&str>,
) -> BTreeMap<PersonKey, RegularForms> {
    let prefix = separable_prefix.filter(|prefix| is_separable && !prefix.is_empty());
    let base = base_infinitive(infinitive, prefix);
    let stem = extract_stem(infinitive, prefix);
    let partizip_ii = regular_partizip_ii(stem, prefix, Some(base));
    debug!("Regular forms of {infinitive:?} use stem {stem:?} and Partizip II {partizip_ii:?}");

    ALL_PERSONS
        .into_iter()
        .map(|person| {
            let forms = RegularForms {
                praesens: regular_praesens(stem, person),
                partizip_ii: partizip_ii.clone(),
                praeteritum: regular_praeteritum(stem, person),
            };
            (person, forms)
        })
        .collect()
}
