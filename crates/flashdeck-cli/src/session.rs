//! Line-driven study loop.

use std::io::{self, BufRead, Write};

use rand::Rng;
use tracing::debug;

use flashdeck_core::{Action, AppState, Store};

use crate::render::{card_table, help_table, progress_bar, session_header, session_summary};
use crate::shortcuts::{HELP, Shortcut, shortcut_for};

const PROGRESS_WIDTH: usize = 30;

/// Draw the current card of a running session. Draws nothing otherwise.
pub fn write_card<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    let (Some(session), Some(card)) = (state.session(), state.current_card()) else {
        return Ok(());
    };
    writeln!(
        out,
        "{}  {}",
        session_header(session),
        progress_bar(session, PROGRESS_WIDTH)
    )?;
    writeln!(out, "{}", card_table(&card, state.dark_mode()))?;
    Ok(())
}

/// Read commands from `input` until the session ends or input runs out.
///
/// End of input ends the session. Returns the number of commands applied.
pub fn run_session<R, I, W>(store: &mut Store<R>, input: I, out: &mut W) -> io::Result<usize>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut applied = 0;
    write_card(out, store.state())?;
    for line in input.lines() {
        let line = line?;
        match shortcut_for(&line, store.state()) {
            Some(Shortcut::Dispatch(action)) => {
                store.dispatch(action);
                applied += 1;
            }
            Some(Shortcut::Help) => {
                writeln!(out, "{}", help_table(HELP))?;
                continue;
            }
            None => {
                writeln!(out, "unknown key {:?}, press ? for help", line.trim())?;
                continue;
            }
        }
        if !store.state().has_session() {
            break;
        }
        write_card(out, store.state())?;
    }
    if store.state().has_session() {
        debug!("input closed, ending session");
        store.dispatch(Action::EndSession);
    }
    writeln!(out, "{}", session_summary(store.state().stats()))?;
    out.flush()?;
    Ok(applied)
}
