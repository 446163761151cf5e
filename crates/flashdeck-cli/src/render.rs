//! Terminal rendering of decks, import reports, and cards.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use flashdeck_core::{CardView, DeckStats, StudySession};
use flashdeck_ingest::{SkipReason, SkippedRow};
use flashdeck_model::WordEntry;

/// Card colours for the light and dark themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub prompt: Color,
    pub answer: Color,
    pub muted: Color,
    pub learned: Color,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                prompt: Color::White,
                answer: Color::Cyan,
                muted: Color::Grey,
                learned: Color::Yellow,
            }
        } else {
            Self {
                prompt: Color::Black,
                answer: Color::DarkBlue,
                muted: Color::DarkGrey,
                learned: Color::DarkYellow,
            }
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Numbered listing of entries under the deck's own column names.
pub fn deck_table(entries: &[&WordEntry], columns: [&str; 2]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell(columns[0]),
        header_cell(columns[1]),
        header_cell("Learned"),
    ]);
    apply_table_style(&mut table);
    for (idx, entry) in entries.iter().enumerate() {
        let learned = if entry.is_learned() {
            Cell::new("★")
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(entry.term1()),
            Cell::new(entry.term2()),
            learned,
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    table
}

pub fn skip_reason_label(reason: &SkipReason) -> String {
    match reason {
        SkipReason::MissingTerm => "missing data".to_string(),
        SkipReason::Duplicate { id } => format!("duplicate of {id}"),
    }
}

pub fn skipped_table(skipped: &[SkippedRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Reason")]);
    apply_table_style(&mut table);
    for row in skipped {
        table.add_row(vec![
            Cell::new(row.row),
            Cell::new(skip_reason_label(&row.reason)).fg(Color::Yellow),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

pub fn listing_summary(shown: usize, stats: DeckStats) -> String {
    format!(
        "{shown} cards shown • {} / {} learned",
        stats.learned, stats.total
    )
}

pub fn session_header(session: &StudySession) -> String {
    let progress = session.progress();
    format!(
        "{}  {} / {}",
        session.mode().label(),
        progress.position,
        progress.total
    )
}

/// Text-mode progress bar, `width` cells wide.
pub fn progress_bar(session: &StudySession, width: usize) -> String {
    let percent = session.progress().percent();
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn card_table(card: &CardView<'_>, dark_mode: bool) -> Table {
    let palette = Palette::for_mode(dark_mode);
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_width(60);

    let marker = if card.is_learned() {
        Cell::new("★ learned").fg(palette.learned)
    } else {
        Cell::new("☆").fg(palette.muted)
    };
    table.add_row(vec![marker]);
    if card.show_answer {
        table.add_row(vec![Cell::new(card.prompt()).fg(palette.muted)]);
        table.add_row(vec![
            Cell::new(card.answer())
                .fg(palette.answer)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![Cell::new("f to flip back").fg(palette.muted)]);
    } else {
        table.add_row(vec![
            Cell::new(card.prompt())
                .fg(palette.prompt)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![Cell::new("f to reveal answer").fg(palette.muted)]);
    }
    align_column(&mut table, 0, CellAlignment::Center);
    table
}

pub fn help_table(bindings: &[(&str, &str)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Action")]);
    apply_table_style(&mut table);
    for (key, action) in bindings {
        table.add_row(vec![Cell::new(key).add_attribute(Attribute::Bold), Cell::new(action)]);
    }
    table
}

pub fn session_summary(stats: DeckStats) -> String {
    format!("Session ended. {} / {} learned.", stats.learned, stats.total)
}
