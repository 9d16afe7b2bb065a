//! Page state and the unidirectional update function.
//!
//! The page is a single immutable value. Key handling maps events to
//! [`Action`]s; [`update`] consumes the old page and returns the next one,
//! recomputing password and strength together on any option change.

use std::time::{Duration, Instant};

use zeroize::Zeroize;

use crate::clipboard;
use crate::options::{CharClass, PasswordOptions};
use crate::pass::{self, StrengthLevel};

/// How long the "Password copied" toast stays up.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Everything the card shows.
pub struct Page {
    pub options: PasswordOptions,
    pub password: String,
    pub strength: StrengthLevel,
    pub toast_until: Option<Instant>,
}

/// One user intent, mapped from a key press (or the poll timer for `Tick`).
pub enum Action {
    Toggle(CharClass),
    NudgeLength(isize),
    Regenerate,
    Copy,
    Tick,
}

impl Page {
    pub fn new(options: PasswordOptions) -> Self {
        Self {
            password: pass::generate(&options),
            strength: pass::estimate(&options),
            options,
            toast_until: None,
        }
    }

    pub fn toast_visible(&self) -> bool {
        self.toast_until.is_some_and(|until| Instant::now() < until)
    }

    /// Wipe the password. Call before letting the page go on exit.
    pub fn wipe(&mut self) {
        self.password.zeroize();
    }
}

/// Apply one action and return the next page.
pub fn update(page: Page, action: Action) -> Page {
    match action {
        Action::Toggle(class) => {
            let next = page.options.toggled(class);
            rebuild(page, next)
        }
        Action::NudgeLength(delta) => {
            let length = page.options.length.saturating_add_signed(delta);
            let next = page.options.with_length(length);
            if next == page.options {
                return page;
            }
            rebuild(page, next)
        }
        Action::Regenerate => {
            let options = page.options;
            rebuild(page, options)
        }
        Action::Copy => {
            let toast_until = if clipboard::copy(&page.password) {
                Some(Instant::now() + TOAST_DURATION)
            } else {
                // Clipboard failure is a no-op: no toast, password unchanged.
                None
            };
            Page { toast_until, ..page }
        }
        Action::Tick => {
            if page.toast_until.is_some() && !page.toast_visible() {
                Page {
                    toast_until: None,
                    ..page
                }
            } else {
                page
            }
        }
    }
}

/// New page for `options`: fresh password, fresh strength, toast dropped.
/// The replaced password is wiped.
fn rebuild(mut page: Page, options: PasswordOptions) -> Page {
    page.wipe();
    Page {
        password: pass::generate(&options),
        strength: pass::estimate(&options),
        options,
        toast_until: None,
    }
}
