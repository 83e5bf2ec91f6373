//! # Hostbridge
//!
//! The bridge component: relays `showError` and `getNow` requests from an
//! embedded application to the host's display and clock capabilities, and
//! reports the formatted time back on the `now` channel.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use hostbridge::Bridge;
//! use hostbridge_core::{channel, InProcessPort, MessagePort, Payload};
//!
//! let port = Arc::new(InProcessPort::new());
//! let bridge = Bridge::new();
//! bridge.attach(port.clone());
//!
//! // The application side:
//! let mut now_rx = port.subscribe(channel::NOW);
//! port.emit(channel::GET_NOW, Payload::Empty);
//! let stamp = now_rx.try_recv().unwrap().unwrap();
//! assert!(!stamp.into_text().is_empty());
//! ```

pub mod bridge;
pub mod config;

pub use bridge::{Bridge, BridgeBuilder};
pub use config::AppConfig;
