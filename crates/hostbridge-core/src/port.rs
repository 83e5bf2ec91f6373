//! Message-passing port between the host and the embedded application
//!
//! The embedded application is reachable only through named channels. The
//! [`MessagePort`] trait is the registration/emission interface both sides
//! share; [`InProcessPort`] is the in-memory implementation used in
//! production wiring and in tests alike.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use hostbridge_core::{InProcessPort, MessagePort, Payload};
//!
//! let port = InProcessPort::new();
//! port.on("greet", Arc::new(|payload: Payload| {
//!     println!("hello, {}", payload.into_text());
//! }));
//! port.emit("greet", Payload::text("world"));
//! ```

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::broadcast;

use crate::error::{PortError, PortResult};
use crate::payload::Payload;

/// A registered channel handler
pub type Handler = Arc<dyn Fn(Payload) + Send + Sync>;

/// Registration/emission interface over named channels.
///
/// Delivery is synchronous and in-order on the emitting thread: handlers
/// for a channel run in registration order, and `emit` returns only after
/// every handler has. Handlers may themselves emit; the registry is never
/// locked across a handler call.
pub trait MessagePort: Send + Sync {
    /// Register a handler for a named channel
    fn on(&self, channel: &str, handler: Handler);

    /// Deliver a payload to every handler of a named channel.
    ///
    /// A channel with no handlers is not an error; the payload is dropped.
    fn emit(&self, channel: &str, payload: Payload);
}

/// In-memory port implementation.
///
/// Besides handler delivery, every emission is fanned out to broadcast
/// subscribers (see [`InProcessPort::subscribe`]), which lets observers
/// await a channel's traffic without registering a handler on it.
pub struct InProcessPort {
    /// Handlers per channel, invoked in registration order
    handlers: DashMap<String, Vec<Handler>>,
    /// Broadcast fan-out per channel, created lazily on first subscribe
    taps: DashMap<String, broadcast::Sender<Payload>>,
    /// Buffer size for each channel's subscriber queue
    capacity: usize,
}

impl InProcessPort {
    /// Create a port with the default subscriber buffer size
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a port with a specific subscriber buffer size
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handlers: DashMap::new(),
            taps: DashMap::new(),
            capacity,
        }
    }

    /// Subscribe to a channel's traffic.
    ///
    /// Every payload emitted on `channel` after this call is delivered to
    /// the returned receiver, in emission order.
    pub fn subscribe(&self, channel: &str) -> PortReceiver {
        let rx = {
            let entry = self
                .taps
                .entry(channel.to_string())
                .or_insert_with(|| broadcast::channel(self.capacity).0);
            entry.value().subscribe()
        };
        PortReceiver { rx }
    }
}

impl Default for InProcessPort {
    fn default() -> Self {
        Self::new()
    }
}

impl MessagePort for InProcessPort {
    fn on(&self, channel: &str, handler: Handler) {
        self.handlers
            .entry(channel.to_string())
            .or_default()
            .push(handler);
        tracing::debug!(channel, "handler registered");
    }

    fn emit(&self, channel: &str, payload: Payload) {
        // Snapshot the handler list so no registry lock is held while
        // handlers run; a handler may re-enter emit (the time handler
        // replies on `now` from inside `getNow`).
        let snapshot: Vec<Handler> = self
            .handlers
            .get(channel)
            .map(|h| h.value().clone())
            .unwrap_or_default();

        if snapshot.is_empty() {
            tracing::debug!(channel, "emit with no registered handlers");
        } else {
            tracing::debug!(channel, handlers = snapshot.len(), "dispatching");
        }

        for handler in &snapshot {
            handler(payload.clone());
        }

        if let Some(tap) = self.taps.get(channel) {
            // Send only fails when every subscriber is gone; traffic on an
            // unwatched channel is not an error.
            let _ = tap.send(payload);
        }
    }
}

/// Receiving side of a channel subscription
pub struct PortReceiver {
    rx: broadcast::Receiver<Payload>,
}

impl PortReceiver {
    /// Await the next payload on the channel
    pub async fn recv(&mut self) -> PortResult<Payload> {
        self.rx.recv().await.map_err(|e| match e {
            broadcast::error::RecvError::Closed => PortError::ChannelClosed,
            broadcast::error::RecvError::Lagged(n) => PortError::Lagged(n),
        })
    }

    /// Non-blocking variant; `Ok(None)` when nothing is waiting
    pub fn try_recv(&mut self) -> PortResult<Option<Payload>> {
        match self.rx.try_recv() {
            Ok(p) => Ok(Some(p)),
            Err(broadcast::error::TryRecvError::Empty) => Ok(None),
            Err(broadcast::error::TryRecvError::Closed) => Err(PortError::ChannelClosed),
            Err(broadcast::error::TryRecvError::Lagged(n)) => Err(PortError::Lagged(n)),
        }
    }
}
