//! Protocol provider traits - the polymorphism boundary
//!
//! One implementation of these traits exists per wire protocol. The shared
//! handle binds a provider once at construction and drives it through these
//! traits without knowing which protocol is behind them.

use crate::{ClientId, DeviceConfig, Result, TransportConfig, TransportEvents};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// A wire protocol provider: the paired create/destroy operations for its
/// lower-layer connections.
///
/// A connection must be torn down through the same provider that created
/// it; the shared handle keeps its provider for exactly that reason.
#[async_trait]
pub trait TransportProtocol: Send + Sync {
    /// Short protocol identifier, e.g. "mqtt" or "amqp"
    fn name(&self) -> &'static str;

    /// Open a lower-layer connection for `config`, delivering events
    /// through `events`
    async fn create(
        &self,
        config: &TransportConfig,
        events: Arc<dyn TransportEvents>,
    ) -> Result<Arc<dyn LowerTransport>>;

    /// Tear down a connection previously returned by `create` on this same
    /// provider. Failures inside the provider are not observable here.
    async fn destroy(&self, lower: Arc<dyn LowerTransport>);
}

/// One live lower-layer connection.
///
/// Callers sharing a connection must serialize these operations with the
/// lock exposed by the shared handle; implementations are not required to
/// tolerate interleaved operation sequences.
#[async_trait]
pub trait LowerTransport: Send + Sync {
    /// Host name of the hub endpoint this connection talks to
    async fn hostname(&self) -> Result<String>;

    /// Configure a named connection option
    async fn set_option(&self, name: &str, value: OptionValue) -> Result<()>;

    /// Attach a device client to the connection
    async fn register(&self, client: ClientId, device: DeviceConfig) -> Result<()>;

    /// Detach a previously registered device client
    async fn unregister(&self, client: ClientId) -> Result<()>;

    /// Start message delivery for the given client
    async fn subscribe(&self, client: ClientId) -> Result<()>;

    /// Stop message delivery for the given client
    async fn unsubscribe(&self, client: ClientId) -> Result<()>;

    /// Advance the protocol state machine one step: flush queued sends,
    /// poll for inbound traffic
    async fn do_work(&self);

    /// Configure retry behavior for the connection
    async fn set_retry_policy(&self, policy: RetryPolicy, timeout: Duration) -> Result<()>;

    /// Query the state of the outbound queue
    async fn send_status(&self) -> Result<SendStatus>;
}

/// Retry behavior applied when the connection drops or an operation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// Never retry
    None,
    /// Retry immediately, without delay
    Immediate,
    /// Retry on a fixed interval
    Interval { seconds: u64 },
    /// Back off linearly between attempts
    LinearBackoff,
    /// Back off exponentially between attempts
    ExponentialBackoff,
    /// Back off exponentially with jitter
    ExponentialBackoffWithJitter,
    /// Retry after a random delay
    Random,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::ExponentialBackoffWithJitter
    }
}

/// State of a connection's outbound queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendStatus {
    /// Nothing is waiting to be sent
    Idle,
    /// Messages are queued or in flight
    Busy,
}

/// Dynamically typed value for a named connection option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionValue {
    /// Textual option, e.g. a certificate
    Text(String),
    /// Numeric option, e.g. a timeout in seconds
    Number(u64),
    /// Boolean option, e.g. a feature toggle
    Flag(bool),
}
