//! Help screen, shared by the CLI and the page.

use crate::options::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{box_bottom, box_line, box_opt, box_rule, box_top};

pub fn print_help() {
    box_top("passcard");
    box_line("Generates a random password from the enabled character");
    box_line("classes. Run without arguments for the interactive page.");
    box_rule();
    box_opt(
        "-l, --length <n>",
        &format!("password length ({MIN_LENGTH}-{MAX_LENGTH}, default 16)"),
    );
    box_opt("    --upper", "enable uppercase letters");
    box_opt("    --numbers", "enable digits");
    box_opt("    --special", "enable special characters");
    box_opt("    --no-lower", "disable lowercase letters");
    box_opt("-a, --all", "enable all four classes");
    box_opt("-b, --board", "copy to clipboard instead of printing");
    box_opt("-e, --estimate", "also print the strength estimate");
    box_opt("-q, --quiet", "suppress warnings and confirmations");
    box_opt("-h, --help", "show this help");
    box_opt("-v, --version", "show version");
    box_bottom();
}
