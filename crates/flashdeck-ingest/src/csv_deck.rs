use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use flashdeck_model::{Deck, DeckBuilder, EntryId, WordEntry};

use crate::error::{IngestError, Result};
use crate::report::{IngestReport, SkipReason, SkippedRow};

/// Largest deck a single import may produce.
pub const DEFAULT_MAX_ENTRIES: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    pub max_entries: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }
}

/// Header row plus data rows, empty lines already removed.
#[derive(Debug, Default)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// A line holding a single empty field. Separator-only or whitespace-only
/// lines are data and get skipped later as missing terms.
fn is_empty_line(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(str::is_empty)
}

fn read_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut table = RawTable::default();
    let mut seen_header = false;
    for record in reader.records() {
        let record = record?;
        if is_empty_line(&record) {
            continue;
        }
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if seen_header {
            table.rows.push(row);
        } else {
            table.headers = row;
            seen_header = true;
        }
    }
    Ok(table)
}

fn term(row: &[String], idx: usize) -> Option<&str> {
    row.get(idx)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn build_report(table: RawTable, options: &IngestOptions) -> Result<IngestReport> {
    if table.rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    if table.headers.len() < 2 {
        return Err(IngestError::InsufficientColumns {
            found: table.headers.len(),
        });
    }
    let columns = [table.headers[0].clone(), table.headers[1].clone()];
    debug!(
        term1 = %columns[0],
        term2 = %columns[1],
        rows = table.rows.len(),
        "using first two columns as term pair"
    );

    let mut builder = DeckBuilder::new();
    let mut skipped = Vec::new();
    for (idx, row) in table.rows.iter().enumerate() {
        let row_number = idx + 1;
        let (Some(term1), Some(term2)) = (term(row, 0), term(row, 1)) else {
            warn!(row = row_number, "skipping row: missing data");
            skipped.push(SkippedRow {
                row: row_number,
                reason: SkipReason::MissingTerm,
            });
            continue;
        };
        let entry = WordEntry::new(term1, term2);
        let id: EntryId = entry.id().clone();
        if !builder.insert(entry) {
            warn!(row = row_number, %id, "skipping duplicate: {term1} - {term2}");
            skipped.push(SkippedRow {
                row: row_number,
                reason: SkipReason::Duplicate { id },
            });
        }
    }

    if builder.is_empty() {
        return Err(IngestError::NoValidEntries);
    }
    if builder.len() > options.max_entries {
        return Err(IngestError::TooManyEntries {
            count: builder.len(),
            max: options.max_entries,
        });
    }

    let deck = builder.build();
    info!(
        entries = deck.len(),
        skipped = skipped.len(),
        "parsed word list"
    );
    Ok(IngestReport {
        deck,
        columns,
        skipped,
    })
}

pub fn parse_reader_with_options<R: Read>(
    reader: R,
    options: &IngestOptions,
) -> Result<IngestReport> {
    let table = read_table(reader)?;
    build_report(table, options)
}

pub fn parse_reader_with_report<R: Read>(reader: R) -> Result<IngestReport> {
    parse_reader_with_options(reader, &IngestOptions::default())
}

pub fn parse_reader<R: Read>(reader: R) -> Result<Deck> {
    parse_reader_with_report(reader).map(|report| report.deck)
}

pub fn parse_text_with_options(text: &str, options: &IngestOptions) -> Result<IngestReport> {
    parse_reader_with_options(text.as_bytes(), options)
}

pub fn parse_text_with_report(text: &str) -> Result<IngestReport> {
    parse_text_with_options(text, &IngestOptions::default())
}

/// Parse pasted word-list text into a deck.
pub fn parse_text(text: &str) -> Result<Deck> {
    parse_text_with_report(text).map(|report| report.deck)
}

pub fn parse_file_with_report(path: &Path) -> Result<IngestReport> {
    let file = File::open(path).map_err(|source| IngestError::io(path, source))?;
    let _span = tracing::info_span!("ingest", path = %path.display()).entered();
    parse_reader_with_report(file)
}

/// Parse a word-list file into a deck.
pub fn parse_file(path: &Path) -> Result<Deck> {
    parse_file_with_report(path).map(|report| report.deck)
}
