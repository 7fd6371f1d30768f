//src/import.rs
//
// Bulk import of exercise names from files or pasted text. Each parser
// turns raw content into an ordered list of candidate names; duplicates
// and case variants are left untouched here, de-duplication belongs to
// the registry.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    /// Rejected before any read attempt. Carries the offending extension.
    #[error("unsupported format, use .xlsx, .xls, .csv or .txt")]
    UnsupportedFormat(String),
    #[error("failed to read the file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to read the workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("failed to parse the delimited text: {0}")]
    Delimited(#[from] csv::Error),
    #[error("paste a list with at least one name (one per line or comma-separated)")]
    EmptyInput,
}

/// How raw import content should be tokenized into candidate names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// First column of the first worksheet of an xlsx/xls workbook.
    Spreadsheet,
    /// Comma-separated lines; only the first cell of each line counts.
    DelimitedText,
    /// One name per line; commas are part of the name.
    PlainText,
    /// Free-form clipboard text, split on newlines and commas alike.
    PastedList,
}

impl ImportFormat {
    /// Dispatches on the file extension. Unknown extensions are rejected
    /// here, before anything is read from disk.
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xls" => Ok(Self::Spreadsheet),
            "csv" => Ok(Self::DelimitedText),
            "txt" | "" => Ok(Self::PlainText),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

/// One candidate per non-blank line, trimmed. Lines are not split on
/// commas in this mode.
#[must_use]
pub fn parse_plain_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// First cell of each record, trimmed; records whose first cell is empty
/// are skipped. Quoting is handled by the reader.
pub fn parse_delimited_text(text: &str) -> Result<Vec<String>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(first) = record.get(0) {
            let first = first.trim();
            if !first.is_empty() {
                names.push(first.to_string());
            }
        }
    }
    Ok(names)
}

/// First column of the first worksheet only; later sheets are ignored.
/// Rows with an empty or absent first cell are skipped, not errors.
pub fn parse_spreadsheet(bytes: &[u8]) -> Result<Vec<String>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(Vec::new());
    };
    let range = range?;
    let mut names = Vec::new();
    for row in range.rows() {
        match row.first() {
            None | Some(Data::Empty) => {}
            Some(cell) => {
                let value = cell.to_string();
                let value = value.trim();
                if !value.is_empty() {
                    names.push(value.to_string());
                }
            }
        }
    }
    Ok(names)
}

/// Clipboard tokenization: split on newlines and commas alike, trim,
/// drop empties. Flatter than [`parse_delimited_text`] on purpose.
#[must_use]
pub fn parse_pasted_list(text: &str) -> Vec<String> {
    text.split(|c| c == '\n' || c == '\r' || c == ',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Reads and parses a file according to its extension.
pub fn candidates_from_file(path: &Path) -> Result<Vec<String>, ImportError> {
    match ImportFormat::from_path(path)? {
        ImportFormat::Spreadsheet => {
            let bytes = fs::read(path)?;
            parse_spreadsheet(&bytes)
        }
        ImportFormat::DelimitedText => {
            let text = fs::read_to_string(path)?;
            parse_delimited_text(&text)
        }
        ImportFormat::PlainText | ImportFormat::PastedList => {
            let text = fs::read_to_string(path)?;
            Ok(parse_plain_text(&text))
        }
    }
}
