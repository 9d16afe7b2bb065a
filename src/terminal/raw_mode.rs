//! Raw mode RAII guard.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::flush;

/// Guard for the interactive page: raw mode on, cursor hidden. Both are
/// restored when the guard drops, including on panic.
pub struct PageGuard {
    active: bool,
}

impl PageGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        print!("\x1b[?25l");
        flush();
        Ok(Self { active: true })
    }

    /// Manually restore the terminal (also happens on drop).
    pub fn release(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            print!("\x1b[?25h");
            flush();
            self.active = false;
        }
    }
}

impl Drop for PageGuard {
    fn drop(&mut self) {
        self.release();
    }
}
