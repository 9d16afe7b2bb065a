//! Key handling for the interactive page.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyModifiers, poll, read};

use crate::exits::reset_terminal;
use crate::options::{CharClass, PasswordOptions};
use crate::terminal::{PageGuard, clear};

use super::page::draw;
use super::state::{Action, Page, update};

// Poll granularity; also paces toast expiry checks.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the page loop until the user quits.
pub fn run() {
    let mut guard = match PageGuard::new() {
        Ok(g) => g,
        Err(_) => {
            // Not a terminal we can drive. Behave like the CLI default.
            println!("{}", crate::pass::generate(&PasswordOptions::default()));
            return;
        }
    };

    let mut page = Page::new(PasswordOptions::default());
    draw(&page);

    loop {
        let had_toast = page.toast_visible();

        let event = if poll(POLL_INTERVAL).unwrap_or(false) {
            match read() {
                Ok(ev) => Some(ev),
                Err(_) => break,
            }
        } else {
            None
        };

        let action = match event {
            Some(Event::Key(key)) => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    // Reset BEFORE exit: process::exit skips destructors.
                    guard.release();
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('1') => Some(Action::Toggle(CharClass::Lowercase)),
                KeyCode::Char('2') => Some(Action::Toggle(CharClass::Uppercase)),
                KeyCode::Char('3') => Some(Action::Toggle(CharClass::Numbers)),
                KeyCode::Char('4') => Some(Action::Toggle(CharClass::Specials)),
                KeyCode::Left | KeyCode::Char('-') => Some(Action::NudgeLength(-1)),
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                    Some(Action::NudgeLength(1))
                }
                KeyCode::Char('r') | KeyCode::Enter | KeyCode::Char(' ') => {
                    Some(Action::Regenerate)
                }
                KeyCode::Char('c') => Some(Action::Copy),
                _ => None,
            },
            Some(Event::Resize(..)) => {
                draw(&page);
                None
            }
            _ => None,
        };

        match action {
            Some(action) => {
                page = update(page, action);
                draw(&page);
            }
            None => {
                // No input: only the toast can change.
                page = update(page, Action::Tick);
                if had_toast && !page.toast_visible() {
                    draw(&page);
                }
            }
        }
    }

    page.wipe();
    guard.release();
    clear();
}
