//! Card rendering.

use crate::options::CharClass;
use crate::pass::strength;
use crate::terminal::{
    BOLD, GREEN, RESET, box_bottom, box_line, box_line_center, box_rule, box_top, clear, flush,
    meter, print_centered,
};

use super::state::Page;

const METER_WIDTH: usize = 24;

fn class_label(class: CharClass) -> &'static str {
    match class {
        CharClass::Lowercase => "Lowercase (a-z)",
        CharClass::Uppercase => "Uppercase (A-Z)",
        CharClass::Numbers => "Numbers (0-9)",
        CharClass::Specials => "Special characters",
    }
}

/// Redraw the whole card from the current page value.
pub fn draw(page: &Page) {
    clear();

    // Toast row is always reserved so the card does not jump.
    if page.toast_visible() {
        print_centered(&format!("{GREEN}✓ Password copied{RESET}"));
    } else {
        print!("\r\n");
    }

    box_top("passcard");
    box_line("");
    box_line_center(&format!("{BOLD}{}{RESET}", page.password));
    box_line("");

    box_rule();
    let level = page.strength;
    box_line(&format!(
        "Strength  {} {}{}{}",
        meter(level.fill_percent(), level.color(), METER_WIDTH),
        level.color(),
        level.label(),
        RESET,
    ));
    box_line(&format!(
        "Length    {:<2}  \u{2190}/\u{2192}        Entropy  {:.0} bits",
        page.options.length,
        strength::entropy_bits(&page.options),
    ));

    box_rule();
    for (i, &class) in CharClass::ALL.iter().enumerate() {
        let mark = if page.options.class_enabled(class) {
            'x'
        } else {
            ' '
        };
        box_line(&format!("[{}] {}  {}", mark, i + 1, class_label(class)));
    }
    box_bottom();

    print_centered("[1-4] toggle  [c] copy  [r] regenerate  [q] quit");
    flush();
}
