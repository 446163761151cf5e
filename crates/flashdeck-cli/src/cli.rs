//! CLI argument definitions for flashdeck.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use flashdeck_model::StudyMode;

#[derive(Parser)]
#[command(
    name = "flashdeck",
    version,
    about = "Flashdeck - study vocabulary flashcards from a CSV word list",
    long_about = "Study vocabulary flashcards from a two-column CSV word list.\n\n\
                  The first row names the two languages; every following row is one\n\
                  word pair. Learned marks last for the current session only."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Read settings from this file instead of the default location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a word list and report skipped rows.
    Check(CheckArgs),

    /// Show the deck overview, optionally filtered.
    List(ListArgs),

    /// Run an interactive study session.
    Study(StudyArgs),

    /// Show where settings are read from and their resolved values.
    Config,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV word list (`-` reads standard input).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ListArgs {
    /// CSV word list (`-` reads standard input).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only show entries whose terms contain this text (case-insensitive).
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show entries not yet marked learned.
    #[arg(long = "unlearned")]
    pub unlearned: bool,
}

#[derive(Parser)]
pub struct StudyArgs {
    /// CSV word list.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Card direction: l1-to-l2, l2-to-l1, or mixed (default from settings).
    #[arg(long = "mode", value_name = "MODE")]
    pub mode: Option<StudyMode>,

    /// Randomize the card order.
    #[arg(long = "shuffle")]
    pub shuffle: bool,

    /// Only study entries not yet marked learned.
    #[arg(long = "unlearned-only")]
    pub unlearned_only: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn study_args(argv: &[&str]) -> StudyArgs {
        let cli = Cli::try_parse_from(argv).expect("valid arguments");
        match cli.command {
            Command::Study(args) => args,
            _ => panic!("expected study command"),
        }
    }

    #[test]
    fn mode_uses_study_mode_names() {
        let args = study_args(&["flashdeck", "study", "words.csv", "--mode", "l2-to-l1"]);
        assert_eq!(args.mode, Some(StudyMode::L2ToL1));
        let args = study_args(&["flashdeck", "study", "words.csv", "--mode", "MIXED"]);
        assert_eq!(args.mode, Some(StudyMode::Mixed));
    }

    #[test]
    fn mode_defaults_to_none() {
        let args = study_args(&["flashdeck", "study", "words.csv", "--shuffle"]);
        assert_eq!(args.mode, None);
        assert!(args.shuffle);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result = Cli::try_parse_from(["flashdeck", "study", "words.csv", "--mode", "sideways"]);
        assert!(result.is_err());
    }
}
