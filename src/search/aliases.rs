//! English → native-script word aliases
//!
//! Loaded from `native,english` lines. Used as a fallback when a search word
//! misses the inverted index, and as the vocabulary for autocomplete.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use super::loader;
use crate::error::LoadError;

/// English → native word map plus the pairs it was loaded from
#[derive(Debug, Default, Clone)]
pub struct AliasMap {
    english_to_native: HashMap<String, String>,

    /// Every `(native, english)` pair in file order, overwritten ones included
    pairs: Vec<(String, String)>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load aliases from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let reader = loader::open(path)?;
        Self::read(reader, path)
    }

    /// Load aliases from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        Self::read(reader, Path::new("<reader>"))
    }

    fn read<R: BufRead>(reader: R, origin: &Path) -> Result<Self, LoadError> {
        let mut aliases = Self::new();
        for item in loader::lines(reader, origin) {
            let (line_no, line) = item?;
            let (native, english) = loader::parse_alias(&line, line_no)?;
            aliases.insert(native, english);
        }
        debug!(
            source = %origin.display(),
            pairs = aliases.pairs.len(),
            aliases = aliases.len(),
            "aliases loaded"
        );
        Ok(aliases)
    }

    /// Record a pair. A later pair for the same English word wins.
    pub fn insert(&mut self, native: impl Into<String>, english: impl Into<String>) {
        let native = native.into();
        let english = english.into();
        self.english_to_native.insert(english.clone(), native.clone());
        self.pairs.push((native, english));
    }

    /// Native-script counterpart of an English word
    pub fn translate(&self, english: &str) -> Option<&str> {
        self.english_to_native.get(english).map(String::as_str)
    }

    /// All loaded `(native, english)` pairs in file order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, e)| (n.as_str(), e.as_str()))
    }

    /// Number of distinct English words
    pub fn len(&self) -> usize {
        self.english_to_native.len()
    }

    pub fn is_empty(&self) -> bool {
        self.english_to_native.is_empty()
    }
}
