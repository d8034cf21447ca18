// Closed language set and localized labels.

use std::collections::HashMap;

/// Supported display languages. The set is closed: adding a language means
/// extending this enum and every label consulted by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, UnsupportedLanguage> {
        match code {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

/// A display string per language, with English as the fallback.
#[derive(Clone, Debug, Default)]
pub struct Label {
    text: HashMap<Language, String>,
    defined: Vec<Language>,
}

impl Label {
    pub fn new() -> Self {
        Label::default()
    }

    /// Convenience constructor for the renderer, which always defines both
    /// supported languages.
    pub fn bilingual(en: &str, es: &str) -> Self {
        let mut label = Label::new();
        label.insert(Language::English, en);
        label.insert(Language::Spanish, es);
        label
    }

    /// Validated entry point: fails for codes outside the supported set.
    pub fn set_text(&mut self, code: &str, text: &str) -> Result<(), UnsupportedLanguage> {
        let lang = Language::from_code(code)?;
        self.insert(lang, text);
        Ok(())
    }

    fn insert(&mut self, lang: Language, text: &str) {
        self.text.insert(lang, text.to_string());
        if !self.defined.contains(&lang) {
            self.defined.push(lang);
        }
    }

    /// Languages recorded so far, in definition order, without duplicates.
    pub fn defined(&self) -> &[Language] {
        &self.defined
    }

    /// Text for `lang`, falling back to English, then to the empty string.
    pub fn get(&self, lang: Language) -> &str {
        if let Some(t) = self.text.get(&lang) {
            return t;
        }
        self.text
            .get(&Language::English)
            .map(String::as_str)
            .unwrap_or("")
    }
}
