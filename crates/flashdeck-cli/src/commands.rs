use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use flashdeck_cli::render::{deck_table, listing_summary, skipped_table};
use flashdeck_cli::session::run_session;
use flashdeck_cli::settings::{Settings, settings_path};
use flashdeck_core::{Action, Store, StudySession};
use flashdeck_ingest::{IngestReport, parse_file_with_report, parse_reader_with_report};

use crate::cli::{CheckArgs, ListArgs, StudyArgs};

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn load_report(path: &Path) -> Result<IngestReport> {
    if is_stdin(path) {
        parse_reader_with_report(io::stdin().lock()).context("read word list from stdin")
    } else {
        parse_file_with_report(path).with_context(|| format!("load {}", path.display()))
    }
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let report = load_report(&args.file)?;
    println!(
        "{} entries loaded ({} / {})",
        report.deck.len(),
        report.columns[0],
        report.columns[1]
    );
    if report.skipped.is_empty() {
        println!("No rows skipped.");
    } else {
        println!(
            "{} rows skipped ({} missing data, {} duplicates):",
            report.skipped.len(),
            report.missing_count(),
            report.duplicate_count()
        );
        println!("{}", skipped_table(&report.skipped));
    }
    Ok(())
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let IngestReport { deck, columns, .. } = load_report(&args.file)?;
    let mut store = Store::new();
    store.dispatch(Action::LoadDeck(deck));
    if let Some(search) = &args.search {
        store.dispatch(Action::SetSearch(search.clone()));
    }
    if args.unlearned {
        store.dispatch(Action::ToggleUnlearnedFilter);
    }
    let state = store.state();
    let visible = state.visible_entries();
    println!(
        "{}",
        deck_table(&visible, [columns[0].as_str(), columns[1].as_str()])
    );
    println!("{}", listing_summary(visible.len(), state.stats()));
    Ok(())
}

pub fn run_study(args: &StudyArgs, settings: &Settings) -> Result<()> {
    if is_stdin(&args.file) {
        bail!("study reads commands from stdin; pass the word list as a file");
    }
    let report = load_report(&args.file)?;
    let span = info_span!("study", file = %args.file.display());
    let _guard = span.enter();

    let mode = args.mode.unwrap_or(settings.study.mode);
    let shuffle = args.shuffle || settings.study.shuffle;
    let only_unlearned = args.unlearned_only || settings.study.only_unlearned;

    let mut store = Store::new();
    store.dispatch(Action::LoadDeck(report.deck));
    if settings.display.dark_mode {
        store.dispatch(Action::ToggleDarkMode);
    }
    if only_unlearned {
        store.dispatch(Action::ToggleUnlearnedFilter);
    }
    store.dispatch(Action::StartSession { mode, shuffle });
    if !store.state().has_session() {
        bail!("no cards to study");
    }
    info!(
        mode = %mode,
        shuffle,
        cards = store.state().session().map_or(0, StudySession::len),
        "session started"
    );
    println!("Press ? for help, q to finish.");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let applied = run_session(&mut store, stdin.lock(), &mut stdout)
        .context("study session input")?;
    info!(commands = applied, "session finished");
    Ok(())
}

pub fn run_config(explicit: Option<&Path>, settings: &Settings) -> Result<()> {
    let path = explicit.map(Path::to_path_buf).or_else(settings_path);
    match path {
        Some(path) => {
            let status = if path.exists() { "" } else { " (not found, using defaults)" };
            println!("Settings file: {}{status}", path.display());
        }
        None => println!("Settings file: unavailable on this platform"),
    }
    let text = toml::to_string_pretty(settings).context("serialize settings")?;
    println!();
    print!("{text}");
    Ok(())
}
