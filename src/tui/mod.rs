//! Interactive single-card page.

mod input;
mod page;
mod state;
mod text;

pub use text::print_help;

/// Run interactive mode.
pub fn run() {
    input::run();
}
