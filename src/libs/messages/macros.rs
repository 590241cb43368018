//! Output macros for user-facing messages.
//!
//! Every macro takes anything that implements `Display` (usually a
//! [`Message`](super::Message)) and routes it to one of two sinks:
//!
//! - **Normal mode**: `println!`, or `eprintln!` for errors
//! - **Debug mode**: the matching `tracing` level, so prompts and status lines
//!   interleave with the debug events emitted while the entry is built
//!
//! Debug mode is on when `LOGBOOK_DEBUG` or `RUST_LOG` is set. The check runs
//! once per process.
//!
//! ```rust
//! use logbook::{msg_print, msg_success};
//! use logbook::libs::messages::Message;
//!
//! msg_print!(Message::WeekRange("2025.03.10".into(), "2025.03.14".into()));
//! msg_success!(Message::ConfigSaved, true);
//! ```
//!
//! Passing `true` as the second argument surrounds the line with blank lines.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("LOGBOOK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_route {
    ($level:ident, $out:ident, $prefix:expr, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $out!("{}{}", $prefix, $msg);
        }
    };
    ($level:ident, $out:ident, $prefix:expr, $msg:expr, spaced) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("\n{}{}\n", $prefix, $msg);
        } else {
            $out!("\n{}{}\n", $prefix, $msg);
        }
    };
}

/// Prints a plain message.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "", $msg, spaced)
    };
}

/// Prints a message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "✅ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "✅ ", $msg, spaced)
    };
}

/// Prints a message with a ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg, spaced)
    };
}

/// Prints a message with a ⚠️ prefix. Used for recoverable input mistakes.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_route!(warn, println, "⚠️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(warn, println, "⚠️ ", $msg, spaced)
    };
}

/// Prints a message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "ℹ️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "ℹ️ ", $msg, spaced)
    };
}
