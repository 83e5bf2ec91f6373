//! The bridge between the embedded application's channels and the host

use std::sync::Arc;

use hostbridge_core::{
    Clock, DisplaySurface, MessagePort, Payload, SystemClock, TerminalDisplay, channel,
};

use crate::config::AppConfig;

/// Relays the embedded application's requests to the host.
///
/// Two inbound channels are handled: `showError` (present a message on the
/// display surface, blocking until dismissed) and `getNow` (sample the
/// clock and reply on the outbound `now` channel). Both handlers are
/// stateless one-shot reactions; the bridge keeps no state between
/// invocations and the two operations share nothing.
///
/// One bridge is constructed per process and owns its capabilities for the
/// process lifetime. Capabilities are injected, never ambient.
pub struct Bridge {
    display: Arc<dyn DisplaySurface>,
    clock: Arc<dyn Clock>,
}

impl Bridge {
    /// Builder for capability injection
    pub fn builder() -> BridgeBuilder {
        BridgeBuilder::default()
    }

    /// Bridge with the host defaults: terminal display, system clock
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// The initialization value for the embedded application: the
    /// formatted timestamp at startup, under the `now` key.
    pub fn startup_config(&self) -> AppConfig {
        AppConfig::at_startup(self.clock.as_ref())
    }

    /// Register the two channel handlers on `port`.
    ///
    /// The handlers hold only a weak reference back to the port, so
    /// attaching does not keep the port alive.
    pub fn attach(&self, port: Arc<dyn MessagePort>) {
        let display = Arc::clone(&self.display);
        port.on(
            channel::SHOW_ERROR,
            Arc::new(move |payload: Payload| {
                let message = payload.into_text();
                tracing::debug!(len = message.len(), "showError request");
                display.show_error(&message);
            }),
        );

        let clock = Arc::clone(&self.clock);
        let reply_port = Arc::downgrade(&port);
        port.on(
            channel::GET_NOW,
            Arc::new(move |_payload| {
                let stamp = clock.timestamp();
                tracing::debug!(%stamp, "getNow request");
                // The port owns this handler, so the upgrade succeeds
                // whenever it runs.
                if let Some(port) = reply_port.upgrade() {
                    port.emit(channel::NOW, Payload::text(stamp));
                }
            }),
        );
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Bridge`]
#[derive(Default)]
pub struct BridgeBuilder {
    display: Option<Arc<dyn DisplaySurface>>,
    clock: Option<Arc<dyn Clock>>,
}

impl BridgeBuilder {
    /// Inject the display surface
    pub fn display(mut self, display: Arc<dyn DisplaySurface>) -> Self {
        self.display = Some(display);
        self
    }

    /// Inject the clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the bridge, defaulting any capability not injected
    pub fn build(self) -> Bridge {
        Bridge {
            display: self.display.unwrap_or_else(|| Arc::new(TerminalDisplay)),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostbridge_core::{InProcessPort, MockDisplay};

    fn wired_bridge() -> (Bridge, Arc<InProcessPort>, Arc<MockDisplay>) {
        let display = Arc::new(MockDisplay::new());
        let bridge = Bridge::builder().display(display.clone()).build();
        let port = Arc::new(InProcessPort::new());
        bridge.attach(port.clone());
        (bridge, port, display)
    }

    #[test]
    fn show_error_forwards_verbatim() {
        let (_bridge, port, display) = wired_bridge();
        port.emit(channel::SHOW_ERROR, Payload::text("boom"));
        assert_eq!(display.shown(), vec!["boom"]);
    }

    #[test]
    fn get_now_replies_on_now() {
        let (_bridge, port, _display) = wired_bridge();
        let mut now_rx = port.subscribe(channel::NOW);

        port.emit(channel::GET_NOW, Payload::Empty);

        let reply = now_rx.try_recv().unwrap().unwrap();
        assert!(!reply.into_text().is_empty());
    }

    #[test]
    fn operations_do_not_interfere() {
        let (_bridge, port, display) = wired_bridge();
        let mut now_rx = port.subscribe(channel::NOW);

        port.emit(channel::GET_NOW, Payload::Empty);
        port.emit(channel::SHOW_ERROR, Payload::text("late"));

        assert_eq!(display.shown_count(), 1);
        assert!(now_rx.try_recv().unwrap().is_some());
        assert!(now_rx.try_recv().unwrap().is_none());
    }
}
