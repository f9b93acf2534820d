//! Display languages and localized text.
//!
//! Every customer-facing string in the catalog exists in all three shop
//! languages. Language is purely a display parameter: it never participates
//! in entity identity, filtering keys, or persistence keys.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A display language supported by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French, the shop's primary language.
    #[default]
    Fr,
    /// Moroccan Arabic.
    Ar,
    /// English.
    En,
}

impl Language {
    /// All supported languages, primary first.
    pub const ALL: [Language; 3] = [Language::Fr, Language::Ar, Language::En];

    /// Get the language code (e.g., "fr").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Parse a language code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "fr" => Some(Language::Fr),
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Whether this language is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A string in all three shop languages.
///
/// All three translations are mandatory. Legacy data sources sometimes carry
/// a bare string where a mapping is expected; deserialization normalizes that
/// case by replicating the string into every language, so downstream code
/// never has to branch on the shape again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct LocalizedText {
    pub en: String,
    pub fr: String,
    pub ar: String,
}

impl LocalizedText {
    /// Create from explicit translations.
    pub fn new(en: impl Into<String>, fr: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fr: fr.into(),
            ar: ar.into(),
        }
    }

    /// Normalize a bare string into a full mapping.
    pub fn from_single(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            en: text.clone(),
            fr: text.clone(),
            ar: text,
        }
    }

    /// Get the translation for a language.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Fr => &self.fr,
            Language::Ar => &self.ar,
        }
    }

    /// Check that every translation is non-empty.
    pub fn is_complete(&self) -> bool {
        Language::ALL.iter().all(|lang| !self.get(*lang).is_empty())
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Single(String),
            Full { en: String, fr: String, ar: String },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Single(text) => LocalizedText::from_single(text),
            Repr::Full { en, fr, ar } => LocalizedText { en, fr, ar },
        })
    }
}

/// An ordered list of strings in all three shop languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct LocalizedList {
    pub en: Vec<String>,
    pub fr: Vec<String>,
    pub ar: Vec<String>,
}

impl LocalizedList {
    /// Normalize a single list into a full mapping.
    pub fn from_single(items: Vec<String>) -> Self {
        Self {
            en: items.clone(),
            fr: items.clone(),
            ar: items,
        }
    }

    /// Get the list for a language.
    pub fn get(&self, lang: Language) -> &[String] {
        match lang {
            Language::En => &self.en,
            Language::Fr => &self.fr,
            Language::Ar => &self.ar,
        }
    }
}

impl<'de> Deserialize<'de> for LocalizedList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Single(Vec<String>),
            Full {
                en: Vec<String>,
                fr: Vec<String>,
                ar: Vec<String>,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Single(items) => LocalizedList::from_single(items),
            Repr::Full { en, fr, ar } => LocalizedList { en, fr, ar },
        })
    }
}
