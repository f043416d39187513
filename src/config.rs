use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Locale files
    pub locales_dir: PathBuf,
    pub reference_locale: String,
    pub first_target_locale: String,
    pub second_target_locale: String,

    // Report
    pub check_placeholders: bool,
    pub show_summary: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            locales_dir: std::env::var("LOCALES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            reference_locale: match std::env::var("REFERENCE_LOCALE") {
                Ok(code) => code,
                Err(_) => LanguageRegistry::get()
                    .reference()
                    .context("Language registry has no single reference language")?
                    .code
                    .to_string(),
            },
            first_target_locale: std::env::var("FIRST_TARGET_LOCALE")
                .unwrap_or_else(|_| "en".to_string()),
            second_target_locale: std::env::var("SECOND_TARGET_LOCALE")
                .unwrap_or_else(|_| "sv".to_string()),

            check_placeholders: parse_bool_var("CHECK_PLACEHOLDERS", true)?,
            show_summary: parse_bool_var("SHOW_SUMMARY", true)?,
        };

        // Fail early on unknown codes rather than on a missing file
        for code in config.locale_codes() {
            language(code)?;
        }

        Ok(config)
    }

    /// Codes in check order: reference, first target, second target
    pub fn locale_codes(&self) -> [&str; 3] {
        [
            self.reference_locale.as_str(),
            self.first_target_locale.as_str(),
            self.second_target_locale.as_str(),
        ]
    }

    /// Path of the locale file for a registered language code.
    pub fn locale_path(&self, code: &str) -> Result<PathBuf> {
        Ok(self.locales_dir.join(language(code)?.file_name()))
    }
}

fn language(code: &str) -> Result<&'static LanguageConfig> {
    LanguageRegistry::get()
        .get_by_code(code)
        .ok_or_else(|| anyhow!("Unknown language code: '{}'", code))
}

fn parse_bool_var(name: &str, default: bool) -> Result<bool> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .to_lowercase()
            .parse()
            .with_context(|| format!("{} must be true or false, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}
