//! # Hostbridge Core
//!
//! Capability traits, channel types, and the in-process message port that
//! connect an embedded application to its host.
//!
//! The embedded application is opaque: the host reaches it only through
//! named message channels. This crate provides the pieces the bridge is
//! assembled from:
//!
//! ## Key Traits
//!
//! - [`MessagePort`]: the `on`/`emit` interface the application exposes
//! - [`Clock`]: time abstraction for testability
//! - [`DisplaySurface`]: the user-facing surface for blocking error dialogs
//!
//! ## Key Types
//!
//! - [`InProcessPort`]: in-memory port with synchronous in-order delivery
//! - [`Payload`]: the value a channel carries (nothing, or one text string)
//! - [`Timestamp`]: formatted wall-clock time, sampled fresh per request

pub mod capability;
pub mod channel;
pub mod error;
pub mod mock_display;
pub mod payload;
pub mod port;
pub mod timestamp;

// Re-export main types
pub use capability::{Clock, DisplaySurface, FixedClock, SystemClock, TerminalDisplay};
pub use error::{PortError, PortResult};
pub use mock_display::MockDisplay;
pub use payload::Payload;
pub use port::{Handler, InProcessPort, MessagePort, PortReceiver};
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp};
