use std::{
    fs,
    path::Path,
};

use crate::core::{
    ChistometroError,
    JokeRecord,
};

pub const COLUMN_DECADE: &str = "decada";
pub const COLUMN_EDITION: &str = "edicion";
pub const COLUMN_PERFORMER: &str = "show_name";
pub const COLUMN_TEXT: &str = "text";

pub fn read_corpus_csv(path: &Path) -> Result<Vec<JokeRecord>, ChistometroError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ChistometroError::DataUnavailable(format!("{}: {}", path.display(), e))
    })?;
    parse_corpus_csv(&content)
}

pub fn parse_corpus_csv(content: &str) -> Result<Vec<JokeRecord>, ChistometroError> {
    let mut rows = split_rows(content).into_iter();

    let header = rows
        .next()
        .ok_or_else(|| ChistometroError::DataUnavailable("empty corpus file".to_string()))?;

    let decade_idx = column_index(&header, COLUMN_DECADE)?;
    let edition_idx = column_index(&header, COLUMN_EDITION)?;
    let performer_idx = column_index(&header, COLUMN_PERFORMER)?;
    let text_idx = column_index(&header, COLUMN_TEXT)?;

    let mut records = Vec::new();
    for (ord, row) in rows.enumerate() {
        if row.len() != header.len() {
            return Err(ChistometroError::MalformedRow {
                row: ord + 2, // 1-based, counting the header line
                reason: format!("expected {} fields, found {}", header.len(), row.len()),
            });
        }

        records.push(JokeRecord {
            decade: row[decade_idx].clone(),
            edition: row[edition_idx].clone(),
            performer: row[performer_idx].clone(),
            text: row[text_idx].clone(),
        });
    }

    Ok(records)
}

fn column_index(header: &[String], name: &str) -> Result<usize, ChistometroError> {
    header
        .iter()
        .position(|column| column == name)
        .ok_or_else(|| ChistometroError::MissingColumn(name.to_string()))
}

/// Splits CSV content into rows of fields. Quoted fields may contain commas,
/// doubled quotes and line breaks; a fully blank trailing line is not a row.
fn split_rows(content: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                if field.is_empty() && row.is_empty() {
                    continue; // blank line
                }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
