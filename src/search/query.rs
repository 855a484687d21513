//! Query façade over the record index, alias map and trie
//!
//! A `SearchIndex` is built once at startup and never mutated afterwards.
//! Every query takes `&self`, so one instance behind an `Arc` serves any
//! number of concurrent requests without locking.

use std::path::Path;

use tracing::{debug, info};

use super::{AliasMap, RecordIndex, Trie};
use crate::error::LoadError;
use crate::types::{IndexStats, Record, SearchResult, SearchResults};

/// Read-only search index over the catalogue
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: RecordIndex,
    aliases: AliasMap,
    trie: Trie,
}

impl SearchIndex {
    /// Build the index from the corpus file and the alias file.
    ///
    /// Any unreadable file or malformed line fails the whole build.
    pub fn load(
        corpus_path: impl AsRef<Path>,
        aliases_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let corpus_path = corpus_path.as_ref();
        let aliases_path = aliases_path.as_ref();

        let records = RecordIndex::load(corpus_path)?;
        let aliases = AliasMap::load(aliases_path)?;
        let index = Self::from_parts(records, aliases);

        let stats = index.stats();
        info!(
            corpus = %corpus_path.display(),
            aliases = %aliases_path.display(),
            records = stats.record_count,
            words = stats.word_count,
            alias_count = stats.alias_count,
            trie_words = stats.trie_words,
            duplicates = stats.duplicate_numbers,
            "search index built"
        );
        Ok(index)
    }

    /// Assemble an index from loaded parts.
    ///
    /// Both words of every alias pair go into the autocomplete trie, so a
    /// prefix completes within the script it was typed in.
    pub fn from_parts(records: RecordIndex, aliases: AliasMap) -> Self {
        let mut trie = Trie::new();
        for (native, english) in aliases.pairs() {
            for word in [native, english] {
                if !word.is_empty() {
                    trie.insert(word);
                }
            }
        }
        Self {
            records,
            aliases,
            trie,
        }
    }

    /// Records matching `word` exactly.
    ///
    /// On a miss the word is translated through the alias map and looked up
    /// again. The returned `query` is the word that was looked up last, so
    /// it is the native form whenever a translation happened. Lower-casing
    /// is left to the caller.
    pub fn search(&self, word: &str) -> SearchResults {
        if let Some(records) = self.records.lookup(word) {
            return Self::collect(word, records);
        }

        let Some(native) = self.aliases.translate(word) else {
            debug!(word, "no records and no alias");
            return SearchResults::empty(word);
        };

        debug!(word, native, "retrying through alias");
        match self.records.lookup(native) {
            Some(records) => Self::collect(native, records),
            None => SearchResults::empty(native),
        }
    }

    fn collect<'a>(query: &str, records: impl Iterator<Item = &'a Record>) -> SearchResults {
        SearchResults {
            query: query.to_string(),
            results: records.map(Record::to_result).collect(),
        }
    }

    /// Indexed words starting with `prefix`, in the script typed.
    /// No alias translation is applied.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        self.trie.completions_of(prefix)
    }

    /// A single record by sequence number
    pub fn record(&self, number: u32) -> Option<SearchResult> {
        self.records.get(number).map(Record::to_result)
    }

    /// All question words present in the inverted index, unordered
    pub fn indexed_words(&self) -> Vec<&str> {
        self.records.words()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            record_count: self.records.len(),
            word_count: self.records.word_count(),
            alias_count: self.aliases.len(),
            trie_words: self.trie.len(),
            trie_nodes: self.trie.node_count(),
            duplicate_numbers: self.records.duplicate_numbers(),
        }
    }
}
