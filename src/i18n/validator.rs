//! Translation quality validation module.
//!
//! This module checks that a translated string keeps the elements that the
//! application relies on at runtime (i18next `{{placeholders}}`, nested
//! `$t(key)` references, markdown links) and that it is not blank.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static NESTING_REGEX: OnceLock<Regex> = OnceLock::new();
static MARKDOWN_LINK_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate a translation against the reference text.
    ///
    /// This function checks that:
    /// - the translation is not blank when the reference has content (an error)
    /// - `{{placeholder}}` names are preserved
    /// - `$t(key)` nested references are preserved
    /// - the number of markdown links is unchanged
    ///
    /// # Arguments
    /// * `reference` - The text in the reference language
    /// * `translated` - The text in the target language
    pub fn validate(reference: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if translated.trim().is_empty() {
            if !reference.trim().is_empty() {
                report.errors.push("Translation is blank".to_string());
            }
            return report;
        }

        let ref_placeholders = Self::extract_placeholders(reference);
        let trans_placeholders = Self::extract_placeholders(translated);
        if ref_placeholders != trans_placeholders {
            report.warnings.push(format!(
                "Placeholder mismatch: reference has {:?}, translation has {:?}",
                ref_placeholders, trans_placeholders
            ));
        }

        let ref_nested = Self::extract_nested_keys(reference);
        let trans_nested = Self::extract_nested_keys(translated);
        if ref_nested != trans_nested {
            report.warnings.push(format!(
                "Nested key mismatch: reference has {:?}, translation has {:?}",
                ref_nested, trans_nested
            ));
        }

        let ref_links = Self::count_markdown_links(reference);
        let trans_links = Self::count_markdown_links(translated);
        if ref_links != trans_links {
            report.warnings.push(format!(
                "Markdown link count mismatch: reference has {}, translation has {}",
                ref_links, trans_links
            ));
        }

        report
    }

    /// Extract `{{name}}` interpolation names; formatting after a comma is ignored
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{\{\s*-?\s*([A-Za-z0-9_.]+)\s*(?:,[^}]*)?\}\}").expect("valid regex")
        });

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Extract `$t(key)` nesting references
    fn extract_nested_keys(text: &str) -> BTreeSet<String> {
        let regex = NESTING_REGEX
            .get_or_init(|| Regex::new(r"\$t\(\s*([A-Za-z0-9_.:]+)").expect("valid regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    fn count_markdown_links(text: &str) -> usize {
        let regex = MARKDOWN_LINK_REGEX
            .get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"));

        regex.find_iter(text).count()
    }
}
