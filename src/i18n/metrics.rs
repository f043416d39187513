//! Check metrics module.
//!
//! Counters collected during a consistency scan, and the summary report
//! printed once the scan completes.

use serde::Serialize;

/// Counters for a single consistency scan.
#[derive(Debug, Clone, Default)]
pub struct CheckMetrics {
    /// Groups that were present in every table
    groups_checked: usize,

    /// Words present in every table (one comparison row each)
    rows_printed: usize,

    /// Words missing from the first target (non-fatal)
    first_target_misses: usize,

    /// Validator errors and warnings across all rows
    validation_issues: usize,

    /// Groups or words present in a target but not in the reference
    extra_keys: usize,
}

impl CheckMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a group that exists in all three tables.
    pub fn record_group(&mut self) {
        self.groups_checked += 1;
    }

    /// Record a printed comparison row.
    pub fn record_row(&mut self) {
        self.rows_printed += 1;
    }

    /// Record a word missing from the first target.
    pub fn record_first_target_miss(&mut self) {
        self.first_target_misses += 1;
    }

    /// Record validator errors and warnings for one row.
    pub fn record_validation_issues(&mut self, count: usize) {
        self.validation_issues += count;
    }

    /// Record a key found only in a target.
    pub fn record_extra_key(&mut self) {
        self.extra_keys += 1;
    }

    pub fn groups_checked(&self) -> usize {
        self.groups_checked
    }

    pub fn rows_printed(&self) -> usize {
        self.rows_printed
    }

    pub fn first_target_misses(&self) -> usize {
        self.first_target_misses
    }

    pub fn validation_issues(&self) -> usize {
        self.validation_issues
    }

    pub fn extra_keys(&self) -> usize {
        self.extra_keys
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let words_checked = self.rows_printed + self.first_target_misses;
        let coverage = if words_checked > 0 {
            (self.rows_printed as f64 / words_checked as f64) * 100.0
        } else {
            100.0
        };

        MetricsReport {
            groups_checked: self.groups_checked,
            words_checked,
            rows_printed: self.rows_printed,
            first_target_misses: self.first_target_misses,
            coverage,
            validation_issues: self.validation_issues,
            extra_keys: self.extra_keys,
        }
    }
}

/// Summary of a completed scan.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of groups checked
    pub groups_checked: usize,

    /// Number of reference words examined
    pub words_checked: usize,

    /// Number of words present in all three tables
    pub rows_printed: usize,

    /// Number of words missing from the first target
    pub first_target_misses: usize,

    /// Share of reference words present in all tables, as a percentage (0-100)
    pub coverage: f64,

    /// Number of validator errors and warnings
    pub validation_issues: usize,

    /// Number of keys present only in a target
    pub extra_keys: usize,
}

impl std::fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Checked {} groups, {} words: {} complete ({:.1}%), {} missing from first target, {} validation issues, {} extra keys",
            self.groups_checked,
            self.words_checked,
            self.rows_printed,
            self.coverage,
            self.first_target_misses,
            self.validation_issues,
            self.extra_keys
        )
    }
}
