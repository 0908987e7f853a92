//! Languages offered by the Apertium translation pairs.
//!
//! Each variant maps to the code the API expects inside a `langpair`
//! parameter. Parsing accepts either the code or the English name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "af")]
    Afrikaans,
    #[serde(rename = "an")]
    Aragonese,
    #[serde(rename = "ast")]
    Asturian,
    #[serde(rename = "eu")]
    Basque,
    #[serde(rename = "br")]
    Breton,
    #[serde(rename = "bg")]
    Bulgarian,
    #[serde(rename = "ca")]
    Catalan,
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "eo")]
    Esperanto,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "gl")]
    Galician,
    #[serde(rename = "is")]
    Icelandic,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "mk")]
    Macedonian,
    #[serde(rename = "nb")]
    NorwegianBokmal,
    #[serde(rename = "nn")]
    NorwegianNynorsk,
    #[serde(rename = "oc")]
    Occitan,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ro")]
    Romanian,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "cy")]
    Welsh,
}

const ALL: &[Language] = &[
    Language::Afrikaans,
    Language::Aragonese,
    Language::Asturian,
    Language::Basque,
    Language::Breton,
    Language::Bulgarian,
    Language::Catalan,
    Language::Danish,
    Language::Dutch,
    Language::English,
    Language::Esperanto,
    Language::French,
    Language::Galician,
    Language::Icelandic,
    Language::Italian,
    Language::Macedonian,
    Language::NorwegianBokmal,
    Language::NorwegianNynorsk,
    Language::Occitan,
    Language::Portuguese,
    Language::Romanian,
    Language::Spanish,
    Language::Swedish,
    Language::Welsh,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown language '{0}'. Run with --list-languages to see supported codes")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// The code sent to the API.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Afrikaans => "af",
            Self::Aragonese => "an",
            Self::Asturian => "ast",
            Self::Basque => "eu",
            Self::Breton => "br",
            Self::Bulgarian => "bg",
            Self::Catalan => "ca",
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::English => "en",
            Self::Esperanto => "eo",
            Self::French => "fr",
            Self::Galician => "gl",
            Self::Icelandic => "is",
            Self::Italian => "it",
            Self::Macedonian => "mk",
            Self::NorwegianBokmal => "nb",
            Self::NorwegianNynorsk => "nn",
            Self::Occitan => "oc",
            Self::Portuguese => "pt",
            Self::Romanian => "ro",
            Self::Spanish => "es",
            Self::Swedish => "sv",
            Self::Welsh => "cy",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Afrikaans => "Afrikaans",
            Self::Aragonese => "Aragonese",
            Self::Asturian => "Asturian",
            Self::Basque => "Basque",
            Self::Breton => "Breton",
            Self::Bulgarian => "Bulgarian",
            Self::Catalan => "Catalan",
            Self::Danish => "Danish",
            Self::Dutch => "Dutch",
            Self::English => "English",
            Self::Esperanto => "Esperanto",
            Self::French => "French",
            Self::Galician => "Galician",
            Self::Icelandic => "Icelandic",
            Self::Italian => "Italian",
            Self::Macedonian => "Macedonian",
            Self::NorwegianBokmal => "Norwegian Bokmal",
            Self::NorwegianNynorsk => "Norwegian Nynorsk",
            Self::Occitan => "Occitan",
            Self::Portuguese => "Portuguese",
            Self::Romanian => "Romanian",
            Self::Spanish => "Spanish",
            Self::Swedish => "Swedish",
            Self::Welsh => "Welsh",
        }
    }

    #[must_use]
    pub fn all() -> &'static [Language] {
        ALL
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL.iter()
            .copied()
            .find(|lang| {
                lang.code().eq_ignore_ascii_case(wanted) || lang.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
