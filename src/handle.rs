//! The shared transport handle

use crate::{
    ClientCore, LowerTransport, Result, TransportConfig, TransportError, TransportProtocol,
};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, error, instrument};

/// One physical hub connection shared by any number of device clients.
///
/// The handle owns three things for its entire lifetime: the lower-layer
/// connection opened through the protocol provider, the lock callers use to
/// serialize operations against that connection, and the provider binding
/// itself, kept so that teardown goes through the same implementation that
/// opened the connection. Either all three exist, or construction failed
/// and no handle exists at all.
pub struct SharedTransport {
    lower: Arc<dyn LowerTransport>,
    lock: Arc<Mutex<()>>,
    protocol: Arc<dyn TransportProtocol>,
}

impl SharedTransport {
    /// Open a shared connection to `<hub_name>.<hub_suffix>` over the given
    /// protocol.
    ///
    /// The connection is opened device-agnostic; individual devices attach
    /// afterwards through the lower transport while holding the shared
    /// lock. On any failure, everything acquired so far is released in
    /// reverse order and an error is returned; no partially constructed
    /// handle ever escapes.
    #[instrument(skip(protocol, core))]
    pub async fn create(
        protocol: Arc<dyn TransportProtocol>,
        hub_name: &str,
        hub_suffix: &str,
        core: &dyn ClientCore,
    ) -> Result<Self> {
        if hub_name.is_empty() || hub_suffix.is_empty() {
            error!(
                "Invalid hub identity, name [{}], suffix [{}]",
                hub_name, hub_suffix
            );
            return Err(TransportError::InvalidArgument(
                "hub name and suffix are required".to_string(),
            ));
        }

        let events = match core.transport_callbacks() {
            Ok(events) => events,
            Err(e) => {
                error!("Failure getting transport callbacks: {}", e);
                return Err(e);
            }
        };

        let config = TransportConfig::shared(hub_name, hub_suffix);

        let lower = match protocol.create(&config, events).await {
            Ok(lower) => lower,
            Err(e) => {
                error!("Lower layer transport not created: {}", e);
                return Err(e);
            }
        };

        // Lock exists only after a connection does.
        let lock = Arc::new(Mutex::new(()));

        debug!(
            "Shared transport created over {} to {}",
            protocol.name(),
            config.fully_qualified_name()
        );

        Ok(Self {
            lower,
            lock,
            protocol,
        })
    }

    /// Tear down the shared connection.
    ///
    /// The lock is released first, then the connection is destroyed through
    /// the same provider that created it. Consuming `self` makes a second
    /// destroy on the same handle unrepresentable. Must not be called while
    /// another caller still holds the lock or the connection.
    pub async fn destroy(self) {
        let Self {
            lower,
            lock,
            protocol,
        } = self;
        drop(lock);
        protocol.destroy(lower).await;
        debug!("Shared transport destroyed");
    }

    /// The lock serializing access to the shared connection.
    ///
    /// The handle never takes this lock itself; callers acquire it, issue a
    /// sequence of operations against
    /// [`lower_transport`](Self::lower_transport), and release the guard.
    pub fn lock(&self) -> Arc<Mutex<()>> {
        Arc::clone(&self.lock)
    }

    /// Acquire the shared lock, yielding a guard that is held across a
    /// sequence of operations and released on every exit path when dropped.
    pub async fn acquire(&self) -> OwnedMutexGuard<()> {
        Arc::clone(&self.lock).lock_owned().await
    }

    /// The lower-layer connection this handle owns
    pub fn lower_transport(&self) -> Arc<dyn LowerTransport> {
        Arc::clone(&self.lower)
    }

    /// Identifier of the protocol the connection was created through
    pub fn protocol_name(&self) -> &'static str {
        self.protocol.name()
    }
}
