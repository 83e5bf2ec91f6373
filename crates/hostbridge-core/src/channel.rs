//! Channel names shared with the embedded application.
//!
//! These are the wire names the application emits on and listens to; they
//! must match the application's side byte for byte.

/// Inbound: the application asks the host to display an error dialog.
/// Carries one text string.
pub const SHOW_ERROR: &str = "showError";

/// Inbound: the application asks the host for the current time.
/// Carries no payload.
pub const GET_NOW: &str = "getNow";

/// Outbound: the host reports the formatted current time.
/// Carries one text string.
pub const NOW: &str = "now";
