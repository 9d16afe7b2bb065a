//! Terminal output utilities.
//!
//! Box drawing for the card, the strength meter, and ANSI helpers. All line
//! output ends with `\r\n` so the same helpers work inside raw mode.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[32m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Print box top with optional title: ┌─ Title ──────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("\r┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        print!("\r┌{}{}┐\r\n", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        print!("\r│ {}{} │\r\n", content, " ".repeat(inner_width - display_len));
    } else {
        print!("\r│ {} │\r\n", content);
    }
}

/// Print centered box content line.
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total = inner_width - display_len;
        let left = total / 2;
        print!(
            "\r│ {}{}{} │\r\n",
            " ".repeat(left),
            content,
            " ".repeat(total - left)
        );
    } else {
        print!("\r│ {} │\r\n", content);
    }
}

/// Print a horizontal rule within the box: ├──────────────────┤
pub fn box_rule() {
    print!("\r├{}┤\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Print box bottom: └──────────────────────────────────┘
pub fn box_bottom() {
    print!("\r└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option row: flag column plus wrapped description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 22;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    match lines.first() {
        Some(first) => box_line(&format!("{}{}", flag_padded, first)),
        None => box_line(&flag_padded),
    }
    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        box_line(&format!("{}{}", indent, line));
    }
}

/// Print centered text outside the box (matching box width).
pub fn print_centered(text: &str) {
    let width = console_width(text);
    let padding = BOX_WIDTH.saturating_sub(width) / 2;
    print!("\r{}{}\r\n", " ".repeat(padding), text);
    flush();
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Render a one-line meter: colored filled blocks, dim empty blocks.
pub fn meter(percent: u8, color: &str, width: usize) -> String {
    let filled = (percent as usize * width) / 100;
    format!(
        "{}{}{}{}{}",
        color,
        "█".repeat(filled),
        DIM,
        "░".repeat(width - filled),
        RESET
    )
}
