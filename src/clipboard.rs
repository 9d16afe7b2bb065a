//! System clipboard copy.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

/// Copy `text` to the system clipboard. Returns false when the clipboard is
/// unavailable or the copy fails; callers treat that as a no-op.
pub fn copy(text: &str) -> bool {
    let Ok(mut ctx) = ClipboardContext::new() else {
        return false;
    };

    match ctx.set_contents(text.to_owned()) {
        Ok(()) => {
            // Read-back keeps lazy clipboard managers from dropping the
            // contents when the context is released.
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            true
        }
        Err(_) => false,
    }
}
