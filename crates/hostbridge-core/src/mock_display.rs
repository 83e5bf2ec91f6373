//! Mock display surface for testing
//!
//! Records every shown message so tests can assert on exact delivery
//! without a terminal. Lives in the library (not behind `cfg(test)`) so
//! downstream crates can test against it too.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use hostbridge_core::{DisplaySurface, MockDisplay};
//!
//! let display = Arc::new(MockDisplay::new());
//! display.show_error("boom");
//! assert_eq!(display.shown(), vec!["boom".to_string()]);
//! ```

use std::sync::Mutex;

use crate::capability::DisplaySurface;

/// A display surface that records instead of rendering
#[derive(Debug, Default)]
pub struct MockDisplay {
    shown: Mutex<Vec<String>>,
}

impl MockDisplay {
    /// Create a new mock display with no recorded messages
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages shown so far, in display order
    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }

    /// How many times the display was invoked
    pub fn shown_count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }
}

impl DisplaySurface for MockDisplay {
    fn show_error(&self, message: &str) {
        self.shown.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let display = MockDisplay::new();
        display.show_error("first");
        display.show_error("second");
        assert_eq!(display.shown(), vec!["first", "second"]);
        assert_eq!(display.shown_count(), 2);
    }

    #[test]
    fn records_empty_string_verbatim() {
        let display = MockDisplay::new();
        display.show_error("");
        assert_eq!(display.shown(), vec![String::new()]);
    }
}
