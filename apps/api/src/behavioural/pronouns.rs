//! Pronoun resolution and template substitution for generated narrative.
//!
//! One resolver, one substitution pass. Every narrative template goes
//! through `fill`; no generator builds pronoun strings by hand.
//!
//! Tokens: `{name}`, `{subject}`/`{Subject}`, `{object}`, `{possessive}`/
//! `{Possessive}`, plus verb helpers for subject agreement:
//! `{s}` ("thrive{s}" → "thrives"/"thrive"), `{s_es}` ("push{s_es}" →
//! "pushes"/"push"), and `{is}` ("is"/"are").

use serde::{Deserialize, Serialize};

/// Formatting parameters attached to a narrate call. Not an entity: just
/// the candidate's display name and an informal pronoun string
/// ("she/her", "he/him", "they/them", or anything else).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PronounContext {
    pub display_name: String,
    pub pronouns: Option<String>,
}

impl PronounContext {
    pub fn new(display_name: impl Into<String>, pronouns: Option<String>) -> Self {
        Self {
            display_name: display_name.into(),
            pronouns,
        }
    }
}

/// Resolved grammatical forms for one pronoun choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PronounSet {
    pub subject: &'static str,
    pub object: &'static str,
    pub possessive: &'static str,
    /// "they" conjugates plurally: "they thrive", "they are".
    pub plural: bool,
}

const SHE: PronounSet = PronounSet {
    subject: "she",
    object: "her",
    possessive: "her",
    plural: false,
};

const HE: PronounSet = PronounSet {
    subject: "he",
    object: "him",
    possessive: "his",
    plural: false,
};

/// Neutral fallback for absent, "they/them", or unrecognized input.
const THEY: PronounSet = PronounSet {
    subject: "they",
    object: "them",
    possessive: "their",
    plural: true,
};

/// Resolves an informal pronoun string to grammatical forms.
/// Unrecognized or absent input falls back to they/them, never an error.
pub fn resolve(raw: Option<&str>) -> PronounSet {
    let lowered = match raw {
        Some(s) => s.trim().to_lowercase(),
        None => return THEY,
    };

    // Match the subject segment exactly: "she/her", "she", "she/they" all
    // resolve feminine. A prefix check would send "her/hers" or "hey"
    // masculine just because they begin with "he"; anything that is not
    // exactly "she" or "he" stays neutral.
    match lowered.split('/').next().map(str::trim) {
        Some("she") => SHE,
        Some("he") => HE,
        _ => THEY,
    }
}

/// Substitutes all pronoun tokens in a template.
pub fn fill(template: &str, set: &PronounSet, name: &str) -> String {
    let (verb_s, verb_es, to_be) = if set.plural {
        ("", "", "are")
    } else {
        ("s", "es", "is")
    };

    template
        .replace("{name}", name)
        .replace("{Subject}", &capitalize(set.subject))
        .replace("{subject}", set.subject)
        .replace("{Possessive}", &capitalize(set.possessive))
        .replace("{possessive}", set.possessive)
        .replace("{object}", set.object)
        .replace("{s_es}", verb_es)
        .replace("{s}", verb_s)
        .replace("{is}", to_be)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
