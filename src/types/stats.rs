//! Index statistics

use serde::Serialize;

/// Size counters of a built search index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    #[serde(rename = "recordCount")]
    pub record_count: usize,
    #[serde(rename = "wordCount")]
    pub word_count: usize,
    #[serde(rename = "aliasCount")]
    pub alias_count: usize,
    #[serde(rename = "trieWords")]
    pub trie_words: usize,
    #[serde(rename = "trieNodes")]
    pub trie_nodes: usize,
    /// Corpus lines whose number was already taken by an earlier line
    #[serde(rename = "duplicateNumbers")]
    pub duplicate_numbers: usize,
}
