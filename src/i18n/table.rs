//! In-memory representation of a locale file.
//!
//! A locale file is a two-level JSON object: group name -> word key ->
//! translation. Both levels keep the document order of the source file, so
//! the checker walks groups and words exactly as they appear on disk.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Translations of a single group, keyed by word.
pub type WordTable = IndexMap<String, String>;

/// All groups of one language, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTable {
    groups: IndexMap<String, WordTable>,
}

impl LanguageTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&WordTable> {
        self.groups.get(name)
    }

    /// Check whether the table has a group with this name
    pub fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Look up a single translation.
    pub fn translation(&self, group: &str, word: &str) -> Option<&str> {
        self.groups
            .get(group)
            .and_then(|words| words.get(word))
            .map(String::as_str)
    }

    /// Iterate over `(group, words)` pairs in document order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &WordTable)> {
        self.groups.iter().map(|(name, words)| (name.as_str(), words))
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of words across all groups.
    pub fn word_count(&self) -> usize {
        self.groups.values().map(IndexMap::len).sum()
    }
}

impl FromIterator<(String, WordTable)> for LanguageTable {
    fn from_iter<I: IntoIterator<Item = (String, WordTable)>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}
