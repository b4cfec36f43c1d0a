//! Client identity and the registry of clients sharing a transport

use crate::DeviceConfig;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Opaque identity of one device client sharing a transport.
///
/// Equality is identity equality: two ids compare equal only if they refer
/// to the same registration, never because their device configurations look
/// alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Allocate a fresh identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One client's registration against the shared transport
#[derive(Debug, Clone)]
pub struct RegisteredClient {
    /// The client's identity
    pub id: ClientId,
    /// The device it registered as
    pub device: DeviceConfig,
}

/// Lookup of registered clients, keyed by identity.
///
/// The registry answers "is this client already associated with the shared
/// transport" when an event must be routed back to exactly one of the
/// clients multiplexed over it. Membership only; no ordering guarantee.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    clients: HashMap<ClientId, RegisteredClient>,
}

impl ClientRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
        }
    }

    /// Associate a device with the shared transport under a fresh identity
    pub fn register(&mut self, device: DeviceConfig) -> ClientId {
        let id = ClientId::new();
        debug!("Registering client {} for device {}", id, device.device_id);
        self.clients.insert(id, RegisteredClient { id, device });
        id
    }

    /// Insert a registration under its own identity, returning any entry it replaced
    pub fn insert(&mut self, client: RegisteredClient) -> Option<RegisteredClient> {
        self.clients.insert(client.id, client)
    }

    /// Whether the given client is associated with the shared transport
    pub fn contains(&self, id: &ClientId) -> bool {
        self.clients.contains_key(id)
    }

    /// Look up a registration by identity
    pub fn get(&self, id: &ClientId) -> Option<&RegisteredClient> {
        self.clients.get(id)
    }

    /// Detach a client, returning its registration if it was present
    pub fn remove(&mut self, id: &ClientId) -> Option<RegisteredClient> {
        let removed = self.clients.remove(id);
        if removed.is_some() {
            debug!("Removed client {}", id);
        }
        removed
    }

    /// Number of registered clients
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether no clients are registered
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Iterate over registered identities
    pub fn ids(&self) -> impl Iterator<Item = &ClientId> {
        self.clients.keys()
    }
}
