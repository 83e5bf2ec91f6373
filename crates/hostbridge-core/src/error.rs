//! Error types for hostbridge-core

use thiserror::Error;

/// Errors on the subscription side of a port.
///
/// Handler delivery itself reports no failures: the application's contract
/// defines none for the two bridged operations.
#[derive(Debug, Error)]
pub enum PortError {
    /// The emitting side of the channel is gone
    #[error("channel closed")]
    ChannelClosed,

    /// The subscriber fell behind and missed messages
    #[error("subscriber lagged, {0} messages skipped")]
    Lagged(u64),
}

/// Result type for port operations
pub type PortResult<T> = Result<T, PortError>;
