//! Question/answer record types

use serde::{Deserialize, Serialize};

/// One question/answer unit of the catalogue, parsed from a single corpus line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub chapter: u32,
    pub number: u32,
    pub question: String,
    pub answer: String,
    /// Tokens the record is matched on when searching
    #[serde(rename = "questionWords", default)]
    pub question_words: Vec<String>,
    /// Cross-reference tokens found in the answer (sixth corpus field)
    #[serde(rename = "answerWords", default, skip_serializing_if = "Vec::is_empty")]
    pub answer_words: Vec<String>,
}

impl Record {
    /// Create a record without answer words
    pub fn new(
        chapter: u32,
        number: u32,
        question: impl Into<String>,
        answer: impl Into<String>,
        question_words: Vec<String>,
    ) -> Self {
        Self {
            chapter,
            number,
            question: question.into(),
            answer: answer.into(),
            question_words,
            answer_words: Vec::new(),
        }
    }

    /// Project this record to the shape handed out to callers
    pub fn to_result(&self) -> SearchResult {
        SearchResult {
            chapter: self.chapter,
            number: self.number,
            question: self.question.clone(),
            answer: self.answer.clone(),
        }
    }
}

/// Read view of a record, without its word lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "Chapter")]
    pub chapter: u32,
    #[serde(rename = "Number")]
    pub number: u32,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Answer")]
    pub answer: String,
}

impl SearchResult {
    /// Answer with literal `\n` escapes rendered as paragraph breaks
    pub fn answer_html(&self) -> String {
        self.answer.replace("\\n", "<br><br>")
    }
}

/// Outcome of a word search
///
/// `query` is the word that was actually matched, which differs from the
/// caller's input when the lookup went through the alias map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(rename = "Query")]
    pub query: String,
    #[serde(rename = "Results", default)]
    pub results: Vec<SearchResult>,
}

impl SearchResults {
    /// Empty result set for a query that matched nothing
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
