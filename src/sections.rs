use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The thematic sections of the manuscript. Used for the built-in demo
/// transcription and for keying the canned collaborator outputs.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownSection {
    Herbal,
    Astronomical,
    Biological,
    Pharmaceutical,
    Recipes,
}

impl KnownSection {
    /// Short token sample per section, in EVA-style transliteration.
    pub fn demo_tokens(&self) -> &'static [&'static str] {
        match self {
            Self::Herbal => &[
                "qokedy", "chedy", "qo", "kch", "arin", "daiin", "chol", "qokedy", "chedy",
                "arin", "shol", "qo", "kch", "ar",
            ],
            Self::Astronomical => &[
                "okaiin", "otedy", "tar", "qo", "aiin", "okaiin", "tar", "otedy", "arin",
                "okaiin", "qo",
            ],
            Self::Biological => &[
                "shedy", "qokeey", "qokain", "shedy", "kch", "qokeey", "shedy", "qo", "kch",
                "qokain",
            ],
            Self::Pharmaceutical => &[
                "chol", "shol", "cthy", "tar", "chol", "arin", "shol", "cthy", "chol", "tar",
            ],
            Self::Recipes => &[
                "aiin", "daiin", "qo", "saiin", "aiin", "tar", "daiin", "aiin", "kch", "saiin",
            ],
        }
    }
}

/// The default input when no transcription file is supplied: every known
/// section with its demo tokens, in section order.
pub fn builtin_transcription() -> BTreeMap<String, Vec<String>> {
    KnownSection::iter()
        .map(|section| {
            (
                section.to_string(),
                section.demo_tokens().iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

/// The demo expert table matching the default script definitions.
pub fn builtin_feedback() -> BTreeMap<String, String> {
    [
        ("qo", "her"),
        ("kch", "ba"),
        ("arin", "aqua"),
        ("tar", "igni"),
    ]
    .into_iter()
    .map(|(s, t)| (s.to_string(), t.to_string()))
    .collect()
}
