//! Record index: corpus records and the word → records inverted index
//!
//! Built once from the corpus file and read-only afterwards. Records are
//! kept in source order and the inverted index refers to them by position,
//! so every word's record list follows file order.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::{debug, warn};

use super::loader;
use crate::error::LoadError;
use crate::types::Record;

/// Position of a record in source order
type RecordId = usize;

/// Records of the corpus plus an inverted index over their question words
#[derive(Debug, Default, Clone)]
pub struct RecordIndex {
    /// All records, in corpus order
    records: Vec<Record>,

    /// number → latest record carrying that number
    by_number: HashMap<u32, RecordId>,

    /// question word (case preserved) → records containing it
    inverted_index: HashMap<String, Vec<RecordId>>,

    /// Lines whose number had already been seen
    duplicate_numbers: usize,
}

impl RecordIndex {
    /// Create a new empty record index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a corpus file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let reader = loader::open(path)?;
        Self::read(reader, path)
    }

    /// Build the index from any buffered reader holding corpus lines
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        Self::read(reader, Path::new("<reader>"))
    }

    fn read<R: BufRead>(reader: R, origin: &Path) -> Result<Self, LoadError> {
        let mut index = Self::new();
        for item in loader::lines(reader, origin) {
            let (line_no, line) = item?;
            let record = loader::parse_record(&line, line_no)?;
            index.add_record(record);
        }
        debug!(
            source = %origin.display(),
            records = index.len(),
            words = index.word_count(),
            "corpus loaded"
        );
        Ok(index)
    }

    /// Add one record, indexing it under each of its question words
    pub fn add_record(&mut self, record: Record) {
        let id = self.records.len();

        if let Some(previous) = self.by_number.insert(record.number, id) {
            self.duplicate_numbers += 1;
            warn!(
                number = record.number,
                previous_chapter = self.records[previous].chapter,
                chapter = record.chapter,
                "duplicate record number, later record replaces earlier one in number lookup"
            );
        }

        for word in &record.question_words {
            if word.is_empty() {
                continue;
            }
            let list = self.inverted_index.entry(word.clone()).or_default();
            // A word repeated within one record still lists it once
            if list.last() != Some(&id) {
                list.push(id);
            }
        }

        self.records.push(record);
    }

    /// Records whose question words contain `word`, in corpus order.
    /// `None` when the word is not indexed.
    pub fn lookup(&self, word: &str) -> Option<impl Iterator<Item = &Record> + '_> {
        self.inverted_index
            .get(word)
            .map(|ids| ids.iter().map(move |&id| &self.records[id]))
    }

    /// Whether `word` is an indexed question word
    pub fn contains_word(&self, word: &str) -> bool {
        self.inverted_index.contains_key(word)
    }

    /// Record by sequence number (the latest one on duplicates)
    pub fn get(&self, number: u32) -> Option<&Record> {
        self.by_number.get(&number).map(|&id| &self.records[id])
    }

    /// All records in corpus order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// All indexed question words, unordered
    pub fn words(&self) -> Vec<&str> {
        self.inverted_index.keys().map(String::as_str).collect()
    }

    /// Number of records loaded, duplicates included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct indexed words
    pub fn word_count(&self) -> usize {
        self.inverted_index.len()
    }

    pub fn duplicate_numbers(&self) -> usize {
        self.duplicate_numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CORPUS: &str = "\
1#1#What is the soul?#It is eternal.#soul,eternal
1#2#What is karma?#Matter bound to the soul.#karma,soul#soul
2#3#What is moksha?#Liberation.\\nFreedom from karma.#moksha
";

    fn numbers<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<u32> {
        records.map(|r| r.number).collect()
    }

    #[test]
    fn test_load_from_reader() {
        let index = RecordIndex::from_reader(CORPUS.as_bytes()).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.word_count(), 4);
        assert_eq!(index.get(2).unwrap().answer_words, vec!["soul"]);
        assert_eq!(index.get(3).unwrap().chapter, 2);
    }

    #[test]
    fn test_lookup_keeps_corpus_order() {
        let index = RecordIndex::from_reader(CORPUS.as_bytes()).unwrap();
        assert_eq!(numbers(index.lookup("soul").unwrap()), vec![1, 2]);
        assert_eq!(numbers(index.lookup("moksha").unwrap()), vec![3]);
        assert!(index.lookup("nirvana").is_none());
    }

    #[test]
    fn test_every_question_word_is_indexed() {
        let index = RecordIndex::from_reader(CORPUS.as_bytes()).unwrap();
        for record in index.records() {
            for word in &record.question_words {
                let found = numbers(index.lookup(word).unwrap());
                assert!(found.contains(&record.number), "{} missing {}", word, record.number);
            }
        }
    }

    #[test]
    fn test_answer_words_are_not_searchable() {
        let index = RecordIndex::from_reader("1#9#q#a#alpha#beta\n".as_bytes()).unwrap();
        assert!(index.contains_word("alpha"));
        assert!(!index.contains_word("beta"));
    }

    #[test]
    fn test_lookup_is_case_preserving() {
        let index = RecordIndex::from_reader("1#1#q#a#Soul\n".as_bytes()).unwrap();
        assert!(index.lookup("Soul").is_some());
        assert!(index.lookup("soul").is_none());
    }

    #[test]
    fn test_duplicate_numbers_are_counted() {
        let corpus = "1#5#first#a#alpha\n2#5#second#b#beta\n";
        let index = RecordIndex::from_reader(corpus.as_bytes()).unwrap();

        assert_eq!(index.duplicate_numbers(), 1);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(5).unwrap().question, "second");
        // Both records stay reachable by word
        assert_eq!(index.lookup("alpha").unwrap().count(), 1);
        assert_eq!(index.lookup("beta").unwrap().count(), 1);
    }

    #[test]
    fn test_repeated_word_in_one_record() {
        let index = RecordIndex::from_reader("1#1#q#a#soul,soul\n".as_bytes()).unwrap();
        assert_eq!(index.lookup("soul").unwrap().count(), 1);
    }

    #[test]
    fn test_malformed_line_fails_whole_load() {
        let corpus = "1#1#q#a#soul\n1#2#broken\n";
        let err = RecordIndex::from_reader(corpus.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingFields { line: 2, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CORPUS.as_bytes()).unwrap();

        let index = RecordIndex::load(file.path()).unwrap();
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RecordIndex::load("/no/such/corpus.txt").unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert_eq!(path, Path::new("/no/such/corpus.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
