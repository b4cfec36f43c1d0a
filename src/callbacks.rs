//! Callback bindings between a protocol provider and the owning client core
//!
//! A protocol implementation never sees individual client objects; it raises
//! events through [`TransportEvents`] and the client core routes them to the
//! right registration.

use crate::{ClientId, InboundMessage, OutboundMessage, Result};
use std::sync::Arc;

/// Connection state of the shared transport, as reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// The connection is up and authenticated against the hub
    Authenticated,
    /// The connection is down
    Disconnected(DisconnectReason),
}

/// Why the shared connection went down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectReason {
    /// Credentials were rejected or expired
    ExpiredCredentials,
    /// The configured retry policy gave up
    RetryExpired,
    /// No network path to the hub
    NoNetwork,
    /// The hub or the wire protocol reported an error
    CommunicationError,
}

/// Events a protocol implementation raises back into the client core
pub trait TransportEvents: Send + Sync {
    /// A message arrived for the given registered client
    fn message_received(&self, client: ClientId, message: InboundMessage);

    /// The shared connection changed state
    fn connection_status(&self, status: ConnectionStatus);

    /// An outbound message completed, delivered or abandoned
    fn send_complete(&self, client: ClientId, message: OutboundMessage, delivered: bool);
}

/// The owning client core, as seen from the transport layer
pub trait ClientCore: Send + Sync {
    /// Callback bindings handed to the protocol provider.
    ///
    /// Construction of a shared transport aborts if these cannot be
    /// supplied.
    fn transport_callbacks(&self) -> Result<Arc<dyn TransportEvents>>;
}
