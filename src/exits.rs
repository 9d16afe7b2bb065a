//! Exit handling: signal handlers and terminal cleanup.
//!
//! The interactive page runs in raw mode with the cursor hidden, so every
//! exit path has to restore the terminal. atexit covers normal returns and
//! `process::exit`; the signal handlers route SIGINT/SIGTERM/SIGHUP through
//! the same cleanup.

use crossterm::terminal::disable_raw_mode;

/// Cleanup registered with atexit - runs on any exit path.
extern "C" fn cleanup_on_exit() {
    let _ = disable_raw_mode();
    // Restore style and cursor, but only when stdout is a TTY.
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                b"\x1b[0m\x1b[?25h\r\n".as_ptr() as *const libc::c_void,
                11,
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Drop back out of raw mode and clear any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    let _ = std::io::Write::flush(&mut std::io::stdout());
}
