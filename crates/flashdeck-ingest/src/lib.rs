#![deny(unsafe_code)]

pub mod csv_deck;
pub mod error;
pub mod report;

pub use csv_deck::{
    DEFAULT_MAX_ENTRIES, IngestOptions, parse_file, parse_file_with_report, parse_reader,
    parse_reader_with_options, parse_reader_with_report, parse_text, parse_text_with_options,
    parse_text_with_report,
};
pub use error::{IngestError, Result};
pub use report::{IngestReport, SkipReason, SkippedRow};
