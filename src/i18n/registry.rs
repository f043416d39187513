//! Language registry: the languages whose locale files are checked.
//!
//! The registry is a `OnceLock` singleton holding immutable metadata only; the
//! loaded tables themselves are passed around explicitly.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "fi", "sv", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Finnish", "Swedish")
    pub name: &'static str,

    /// Native name of the language (e.g., "Suomi", "Svenska")
    pub native_name: &'static str,

    /// Whether this is the reference language other locales are checked against
    pub is_reference: bool,
}

impl LanguageConfig {
    /// File name of this language's locale file (`<code>.json`)
    pub fn file_name(&self) -> String {
        format!("{}.json", self.code)
    }
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the reference language configuration.
    ///
    /// Returns `None` if the registry does not mark exactly one language as
    /// the reference.
    pub fn reference(&self) -> Option<&LanguageConfig> {
        let mut refs = self.languages.iter().filter(|lang| lang.is_reference);
        match (refs.next(), refs.next()) {
            (Some(lang), None) => Some(lang),
            _ => None,
        }
    }
}

/// Default language configurations: Finnish (reference), English and Swedish.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "fi",
            name: "Finnish",
            native_name: "Suomi",
            is_reference: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_reference: false,
        },
        LanguageConfig {
            code: "sv",
            name: "Swedish",
            native_name: "Svenska",
            is_reference: false,
        },
    ]
}
