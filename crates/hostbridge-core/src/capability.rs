//! Injected host capabilities
//!
//! The bridge never reaches for ambient globals; the wall clock and the
//! user-facing display are handed to it as explicit dependencies so tests
//! can substitute both.

use std::io::{self, BufRead, IsTerminal, Write};

use chrono::{DateTime, Local};
use colored::Colorize;

use crate::timestamp::Timestamp;

/// Time abstraction for testability
///
/// This trait allows tests to control time, enabling deterministic
/// testing of time-dependent behavior.
pub trait Clock: Send + Sync {
    /// Get the current local datetime
    fn now_local(&self) -> DateTime<Local>;

    /// Get the current time formatted for display. Sampled fresh on every
    /// call, never cached.
    fn timestamp(&self) -> Timestamp {
        Timestamp::from_datetime(self.now_local())
    }
}

/// Real clock implementation using system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests
#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now_local(&self) -> DateTime<Local> {
        self.0
    }
}

/// The user-facing surface that can present an error dialog.
///
/// `show_error` blocks the calling thread until the user dismisses the
/// dialog, per platform convention. It reports nothing back: the embedded
/// application's contract defines no failure states for it, and the bridge
/// adds none.
pub trait DisplaySurface: Send + Sync {
    /// Present `message` to the user, verbatim, blocking until dismissed
    fn show_error(&self, message: &str);
}

/// Terminal-backed display surface.
///
/// Renders the error in red and waits for Enter when stdin is a tty; in a
/// headless process there is nothing to dismiss, so it just prints.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDisplay;

impl DisplaySurface for TerminalDisplay {
    fn show_error(&self, message: &str) {
        println!("{} {}", "✗".red().bold(), message.red());

        let stdin = io::stdin();
        if stdin.is_terminal() {
            print!("{}", "[press Enter to dismiss]".dimmed());
            let _ = io::stdout().flush();
            let mut line = String::new();
            let _ = stdin.lock().read_line(&mut line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn system_clock_produces_parseable_timestamps() {
        let ts = SystemClock.timestamp();
        assert!(!ts.as_str().is_empty());
        assert!(ts.parse().is_ok());
    }

    #[test]
    fn fixed_clock_is_deterministic() {
        let dt = Local.with_ymd_and_hms(2026, 8, 30, 14, 3, 7).unwrap();
        let clock = FixedClock(dt);
        assert_eq!(clock.timestamp(), clock.timestamp());
        assert_eq!(clock.timestamp().parse().unwrap(), dt);
    }

    #[test]
    fn successive_system_samples_are_non_decreasing() {
        let a = SystemClock.timestamp().parse().unwrap();
        let b = SystemClock.timestamp().parse().unwrap();
        assert!(b >= a);
    }
}
