//! Consistency checking between a reference locale and two target locales.
//!
//! The scan walks the reference table in document order and writes a
//! side-by-side report. It stops on the first group missing from either target
//! and on the first word missing from the second target; a word missing from
//! only the first target is reported and the scan goes on.

use crate::i18n::{CheckMetrics, LanguageTable, TranslationValidator};
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Column widths of the comparison row (reference, first target, second target).
pub const COLUMN_WIDTHS: [usize; 3] = [40, 40, 20];

/// Which of the two compared tables a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    First,
    Second,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::First => f.write_str("first target"),
            Target::Second => f.write_str("second target"),
        }
    }
}

/// Findings that end the scan.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A reference group is absent from at least one target
    #[error("group not found: {group}")]
    GroupMissing { group: String },

    /// A reference word is absent from a target
    #[error("word not found {group}:{word} in {target}")]
    WordMissing {
        group: String,
        word: String,
        target: Target,
    },

    /// The report could not be written
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl CheckError {
    /// Whether this is an inconsistency between the locales rather than an I/O failure.
    pub fn is_finding(&self) -> bool {
        matches!(self, CheckError::GroupMissing { .. } | CheckError::WordMissing { .. })
    }
}

/// Optional parts of the report.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    /// Run the translation validator on every complete row
    pub validate: bool,

    /// List keys present in a target but not in the reference
    pub report_extra: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            validate: true,
            report_extra: true,
        }
    }
}

/// Compares two target tables against a reference table.
pub struct ConsistencyChecker<'a> {
    reference: &'a LanguageTable,
    first: &'a LanguageTable,
    second: &'a LanguageTable,
    options: CheckOptions,
}

impl<'a> ConsistencyChecker<'a> {
    pub fn new(
        reference: &'a LanguageTable,
        first: &'a LanguageTable,
        second: &'a LanguageTable,
    ) -> Self {
        Self {
            reference,
            first,
            second,
            options: CheckOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CheckOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the scan, writing the report to `out`.
    ///
    /// # Returns
    /// * `Ok(CheckMetrics)` when every reference group and word was examined
    /// * `Err(CheckError)` on the first fatal finding; its console message has
    ///   already been written to `out`
    pub fn check<W: Write>(&self, out: &mut W) -> Result<CheckMetrics, CheckError> {
        let mut metrics = CheckMetrics::new();

        for (group, words) in self.reference.groups() {
            writeln!(out)?;
            writeln!(out, "{}", group)?;

            let (first_words, second_words) =
                match (self.first.group(group), self.second.group(group)) {
                    (Some(first), Some(second)) => (first, second),
                    _ => {
                        writeln!(out, "Error! group not found {}", group)?;
                        error!("Group '{}' is missing from a target locale", group);
                        return Err(CheckError::GroupMissing {
                            group: group.to_string(),
                        });
                    }
                };
            metrics.record_group();

            for (word, reference_text) in words {
                let first_text = first_words.get(word);
                if first_text.is_none() {
                    writeln!(
                        out,
                        "Error! word not found {}:{}    {}",
                        group,
                        word,
                        Target::First
                    )?;
                    warn!("Word '{}:{}' is missing from the first target", group, word);
                    metrics.record_first_target_miss();
                }

                let Some(second_text) = second_words.get(word) else {
                    writeln!(
                        out,
                        "Error! word not found {}:{}    {}",
                        group,
                        word,
                        Target::Second
                    )?;
                    error!("Word '{}:{}' is missing from the second target", group, word);
                    return Err(CheckError::WordMissing {
                        group: group.to_string(),
                        word: word.to_string(),
                        target: Target::Second,
                    });
                };

                // First-target misses have already been reported; there is no row to print.
                let Some(first_text) = first_text else {
                    continue;
                };

                debug!("Comparing {}:{}", group, word);
                writeln!(out, "  {}", word)?;
                writeln!(out, "{}", format_row(reference_text, first_text, second_text))?;
                metrics.record_row();

                if self.options.validate {
                    self.write_validation(
                        out,
                        &mut metrics,
                        reference_text,
                        first_text,
                        Target::First,
                    )?;
                    self.write_validation(
                        out,
                        &mut metrics,
                        reference_text,
                        second_text,
                        Target::Second,
                    )?;
                }
            }
        }

        if self.options.report_extra {
            self.write_extra_keys(out, &mut metrics)?;
        }

        Ok(metrics)
    }

    fn write_validation<W: Write>(
        &self,
        out: &mut W,
        metrics: &mut CheckMetrics,
        reference_text: &str,
        translated: &str,
        target: Target,
    ) -> io::Result<()> {
        let report = TranslationValidator::validate(reference_text, translated);
        for message in &report.errors {
            writeln!(out, "      error ({}): {}", target, message)?;
        }
        for message in &report.warnings {
            writeln!(out, "      warning ({}): {}", target, message)?;
        }
        metrics.record_validation_issues(report.errors.len() + report.warnings.len());
        Ok(())
    }

    /// List groups and words that exist only in a target.
    fn write_extra_keys<W: Write>(
        &self,
        out: &mut W,
        metrics: &mut CheckMetrics,
    ) -> io::Result<()> {
        let mut extras = Vec::new();

        for (target, table) in [(Target::First, self.first), (Target::Second, self.second)] {
            for (group, words) in table.groups() {
                match self.reference.group(group) {
                    None => extras.push(format!("Extra in {}: {}", target, group)),
                    Some(reference_words) => extras.extend(
                        words
                            .keys()
                            .filter(|word| !reference_words.contains_key(*word))
                            .map(|word| format!("Extra in {}: {}:{}", target, group, word)),
                    ),
                }
            }
        }

        if extras.is_empty() {
            return Ok(());
        }

        warn!("{} keys exist only in target locales", extras.len());
        writeln!(out)?;
        for line in extras {
            writeln!(out, "{}", line)?;
            metrics.record_extra_key();
        }
        Ok(())
    }
}

/// Run a scan with default options.
pub fn check<W: Write>(
    reference: &LanguageTable,
    first: &LanguageTable,
    second: &LanguageTable,
    out: &mut W,
) -> Result<CheckMetrics, CheckError> {
    ConsistencyChecker::new(reference, first, second).check(out)
}

/// Format one comparison row: each column left aligned and padded to its width.
pub fn format_row(reference: &str, first: &str, second: &str) -> String {
    format!(
        "    {:<w0$} {:<w1$} {:<w2$}",
        reference,
        first,
        second,
        w0 = COLUMN_WIDTHS[0],
        w1 = COLUMN_WIDTHS[1],
        w2 = COLUMN_WIDTHS[2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::parse_language_table;

    fn table(json: &str) -> LanguageTable {
        parse_language_table(json).expect("valid table")
    }

    fn run(
        reference: &LanguageTable,
        first: &LanguageTable,
        second: &LanguageTable,
    ) -> (Result<CheckMetrics, CheckError>, String) {
        let mut out = Vec::new();
        let result = ConsistencyChecker::new(reference, first, second)
            .with_options(CheckOptions {
                validate: false,
                report_extra: false,
            })
            .check(&mut out);
        (result, String::from_utf8(out).expect("utf8 output"))
    }

    // ==================== Row Formatting Tests ====================

    #[test]
    fn test_format_row_pads_columns() {
        let row = format_row("Hei", "Hej", "Hello");
        let expected = format!("    {:<41}{:<41}{:<20}", "Hei", "Hej", "Hello");
        assert_eq!(row, expected);
        assert_eq!(row.len(), 4 + 40 + 1 + 40 + 1 + 20);
    }

    #[test]
    fn test_format_row_long_values_are_not_truncated() {
        let long = "x".repeat(50);
        let row = format_row(&long, "b", "c");
        assert!(row.contains(&long));
    }

    #[test]
    fn test_format_row_pads_by_characters() {
        let row = format_row("Hyvää päivää", "Hej", "Hello");
        assert_eq!(row.chars().count(), 4 + 40 + 1 + 40 + 1 + 20);
    }

    // ==================== Scan Tests ====================

    #[test]
    fn test_matching_tables_print_one_row_per_word() {
        let reference = table(
            r#"{"greetings": {"hello": "Hei", "bye": "Moi"}, "menu": {"open": "Avaa"}}"#,
        );
        let first = table(
            r#"{"greetings": {"hello": "Hello", "bye": "Bye"}, "menu": {"open": "Open"}}"#,
        );
        let second = table(
            r#"{"greetings": {"hello": "Hej", "bye": "Hejdå"}, "menu": {"open": "Öppna"}}"#,
        );

        let (result, output) = run(&reference, &first, &second);
        let metrics = result.expect("scan should complete");

        assert_eq!(metrics.rows_printed(), 3);
        assert_eq!(metrics.groups_checked(), 2);
        assert!(!output.contains("Error!"));
        assert!(output.contains(&format_row("Avaa", "Open", "Öppna")));
    }

    #[test]
    fn test_output_layout() {
        let reference = table(r#"{"greetings": {"hello": "Hei"}}"#);
        let first = table(r#"{"greetings": {"hello": "Hej"}}"#);
        let second = table(r#"{"greetings": {"hello": "Hello"}}"#);

        let (result, output) = run(&reference, &first, &second);
        assert!(result.is_ok());

        let expected = format!("\ngreetings\n  hello\n{}\n", format_row("Hei", "Hej", "Hello"));
        assert_eq!(output, expected);
    }

    #[test]
    fn test_group_missing_from_second_target_stops_scan() {
        let reference = table(
            r#"{"greetings": {"hello": "Hei"}, "farewells": {"bye": "Moi"}, "menu": {"open": "Avaa"}}"#,
        );
        let first = table(
            r#"{"greetings": {"hello": "Hello"}, "farewells": {"bye": "Bye"}, "menu": {"open": "Open"}}"#,
        );
        let second = table(r#"{"greetings": {"hello": "Hej"}, "menu": {"open": "Öppna"}}"#);

        let (result, output) = run(&reference, &first, &second);

        match result {
            Err(CheckError::GroupMissing { group }) => assert_eq!(group, "farewells"),
            other => panic!("expected GroupMissing, got {:?}", other),
        }
        assert_eq!(output.matches("group not found").count(), 1);
        assert!(output.trim_end().ends_with("Error! group not found farewells"));
        assert!(!output.contains("menu"));
    }

    #[test]
    fn test_group_missing_from_first_target_stops_scan() {
        let reference = table(r#"{"farewells": {"bye": "Moi"}}"#);
        let first = table(r#"{}"#);
        let second = table(r#"{"farewells": {"bye": "Hejdå"}}"#);

        let (result, output) = run(&reference, &first, &second);

        assert!(matches!(result, Err(CheckError::GroupMissing { .. })));
        assert!(output.contains("Error! group not found farewells"));
    }

    #[test]
    fn test_word_missing_from_first_target_continues() {
        let reference = table(
            r#"{"greetings": {"hello": "Hei", "bye": "Moi"}, "menu": {"open": "Avaa"}}"#,
        );
        let first = table(r#"{"greetings": {"bye": "Bye"}, "menu": {"open": "Open"}}"#);
        let second = table(
            r#"{"greetings": {"hello": "Hej", "bye": "Hejdå"}, "menu": {"open": "Öppna"}}"#,
        );

        let (result, output) = run(&reference, &first, &second);
        let metrics = result.expect("first-target miss is not fatal");

        assert!(output.contains("Error! word not found greetings:hello    first target"));
        assert_eq!(metrics.first_target_misses(), 1);
        assert_eq!(metrics.rows_printed(), 2);
        assert!(output.contains(&format_row("Avaa", "Open", "Öppna")));
    }

    #[test]
    fn test_word_missing_from_first_target_still_checks_second() {
        let reference = table(r#"{"greetings": {"hello": "Hei"}}"#);
        let first = table(r#"{"greetings": {}}"#);
        let second = table(r#"{"greetings": {}}"#);

        let (result, output) = run(&reference, &first, &second);

        assert!(matches!(
            result,
            Err(CheckError::WordMissing { target: Target::Second, .. })
        ));
        let first_pos = output.find("first target").expect("first target warning");
        let second_pos = output.find("second target").expect("second target error");
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_word_missing_from_second_target_stops_scan() {
        let reference = table(
            r#"{"greetings": {"hello": "Hei", "bye": "Moi"}, "menu": {"open": "Avaa"}}"#,
        );
        let first = table(
            r#"{"greetings": {"hello": "Hello", "bye": "Bye"}, "menu": {"open": "Open"}}"#,
        );
        let second = table(r#"{"greetings": {"bye": "Hejdå"}, "menu": {"open": "Öppna"}}"#);

        let (result, output) = run(&reference, &first, &second);

        match result {
            Err(CheckError::WordMissing { group, word, target }) => {
                assert_eq!(group, "greetings");
                assert_eq!(word, "hello");
                assert_eq!(target, Target::Second);
            }
            other => panic!("expected WordMissing, got {:?}", other),
        }
        assert!(output
            .trim_end()
            .ends_with("Error! word not found greetings:hello    second target"));
        assert!(!output.contains("bye"));
        assert!(!output.contains("menu"));
    }

    #[test]
    fn test_empty_reference_completes() {
        let empty = LanguageTable::new();
        let (result, output) = run(&empty, &empty, &empty);

        assert_eq!(result.expect("should complete").rows_printed(), 0);
        assert!(output.is_empty());
    }

    // ==================== Optional Report Tests ====================

    #[test]
    fn test_validation_issues_are_printed_under_row() {
        let reference = table(r#"{"chat": {"greet": "Hei {{name}}"}}"#);
        let first = table(r#"{"chat": {"greet": "Hello"}}"#);
        let second = table(r#"{"chat": {"greet": "Hej {{name}}"}}"#);

        let mut out = Vec::new();
        let metrics = ConsistencyChecker::new(&reference, &first, &second)
            .check(&mut out)
            .expect("should complete");
        let output = String::from_utf8(out).unwrap();

        assert_eq!(metrics.validation_issues(), 1);
        assert!(output.contains("      warning (first target): Placeholder mismatch"));
        assert!(!output.contains("warning (second target)"));
    }

    #[test]
    fn test_blank_translation_is_printed_as_error() {
        let reference = table(r#"{"common": {"save": "Tallenna"}}"#);
        let first = table(r#"{"common": {"save": "Save"}}"#);
        let second = table(r#"{"common": {"save": "  "}}"#);

        let mut out = Vec::new();
        let metrics = ConsistencyChecker::new(&reference, &first, &second)
            .check(&mut out)
            .expect("blank translations are not fatal");
        let output = String::from_utf8(out).unwrap();

        assert_eq!(metrics.validation_issues(), 1);
        assert!(output.contains("      error (second target): Translation is blank"));
        assert!(!output.contains("warning"));
    }

    #[test]
    fn test_extra_keys_are_listed() {
        let reference = table(r#"{"greetings": {"hello": "Hei"}}"#);
        let first = table(r#"{"greetings": {"hello": "Hello", "hi": "Hi"}}"#);
        let second = table(r#"{"greetings": {"hello": "Hej"}, "legacy": {"old": "Gammal"}}"#);

        let mut out = Vec::new();
        let metrics = check(&reference, &first, &second, &mut out).expect("should complete");
        let output = String::from_utf8(out).unwrap();

        assert_eq!(metrics.extra_keys(), 2);
        assert!(output.contains("Extra in first target: greetings:hi"));
        assert!(output.contains("Extra in second target: legacy"));
    }

    #[test]
    fn test_extra_keys_skipped_after_fatal_finding() {
        let reference = table(r#"{"greetings": {"hello": "Hei"}}"#);
        let first = table(r#"{"greetings": {"hello": "Hello"}, "legacy": {"old": "Old"}}"#);
        let second = table(r#"{}"#);

        let mut out = Vec::new();
        let result = check(&reference, &first, &second, &mut out);
        let output = String::from_utf8(out).unwrap();

        assert!(result.is_err());
        assert!(!output.contains("Extra in"));
    }

    #[test]
    fn test_target_display() {
        assert_eq!(Target::First.to_string(), "first target");
        assert_eq!(Target::Second.to_string(), "second target");
    }

    #[test]
    fn test_is_finding() {
        let group = CheckError::GroupMissing {
            group: "farewells".to_string(),
        };
        let output = CheckError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));

        assert!(group.is_finding());
        assert!(!output.is_finding());
    }

    #[test]
    fn test_check_error_display() {
        let err = CheckError::WordMissing {
            group: "greetings".to_string(),
            word: "hello".to_string(),
            target: Target::Second,
        };
        assert_eq!(err.to_string(), "word not found greetings:hello in second target");
    }
}
