//! Line parsers for the corpus and alias source files
//!
//! Corpus lines look like `chapter#number#question#answer#qwords[#awords]`,
//! alias lines like `native,english`. Word lists are comma separated with
//! no escaping.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LoadError;
use crate::types::Record;

pub const FIELD_DELIMITER: char = '#';
pub const WORD_DELIMITER: char = ',';

const MIN_RECORD_FIELDS: usize = 5;
const MIN_ALIAS_FIELDS: usize = 2;

/// Open a source file for line-by-line reading
pub(crate) fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LoadError::io(path, e))
}

/// Yield `(line_number, line)` for every non-blank line, numbered from 1
pub(crate) fn lines<'a, R: BufRead + 'a>(
    reader: R,
    origin: &'a Path,
) -> impl Iterator<Item = Result<(usize, String), LoadError>> + 'a {
    reader
        .lines()
        .enumerate()
        .map(move |(idx, line)| {
            line.map(|l| (idx + 1, l))
                .map_err(|e| LoadError::io(origin, e))
        })
        .filter(|item| match item {
            Ok((_, line)) => !line.trim().is_empty(),
            Err(_) => true,
        })
}

/// Parse one corpus line into a record
pub fn parse_record(line: &str, line_no: usize) -> Result<Record, LoadError> {
    let line = line.trim_end_matches('\r');
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < MIN_RECORD_FIELDS {
        return Err(LoadError::MissingFields {
            line: line_no,
            expected: MIN_RECORD_FIELDS,
            found: fields.len(),
        });
    }

    let chapter = parse_number(fields[0], "chapter", line_no)?;
    let number = parse_number(fields[1], "number", line_no)?;

    let mut record = Record::new(
        chapter,
        number,
        fields[2],
        fields[3],
        split_words(fields[4]),
    );
    if let Some(answer_words) = fields.get(5) {
        record.answer_words = split_words(answer_words);
    }
    Ok(record)
}

/// Parse one alias line into `(native, english)`
pub fn parse_alias(line: &str, line_no: usize) -> Result<(String, String), LoadError> {
    let line = line.trim_end_matches('\r');
    let fields: Vec<&str> = line.split(WORD_DELIMITER).collect();
    if fields.len() < MIN_ALIAS_FIELDS {
        return Err(LoadError::MissingFields {
            line: line_no,
            expected: MIN_ALIAS_FIELDS,
            found: fields.len(),
        });
    }
    Ok((fields[0].trim().to_string(), fields[1].trim().to_string()))
}

fn parse_number(value: &str, field: &'static str, line_no: usize) -> Result<u32, LoadError> {
    value
        .trim()
        .parse()
        .map_err(|source| LoadError::InvalidNumber {
            line: line_no,
            field,
            value: value.to_string(),
            source,
        })
}

/// Split a comma separated word list, dropping empty tokens
pub fn split_words(csv: &str) -> Vec<String> {
    csv.split(WORD_DELIMITER)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}
