//! Message values crossing the transport boundary
//!
//! Payloads are opaque bytes; encoding and delivery are the protocol
//! provider's concern.

use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A message delivered from the hub to one registered client
#[derive(Debug, Clone, Default)]
pub struct InboundMessage {
    /// Opaque payload
    pub payload: Bytes,
    /// Application properties attached to the message
    pub properties: HashMap<String, String>,
}

impl InboundMessage {
    /// Create a message from raw payload bytes
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            properties: HashMap::new(),
        }
    }

    /// Attach an application property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A message queued for delivery to the hub
#[derive(Debug, Clone, Default)]
pub struct OutboundMessage {
    /// Opaque payload
    pub payload: Bytes,
    /// Application properties attached to the message
    pub properties: HashMap<String, String>,
}

impl OutboundMessage {
    /// Create a message from raw payload bytes
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            properties: HashMap::new(),
        }
    }

    /// Attach an application property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Shared reference to a list of messages waiting to be sent
pub type OutboundQueue = Arc<Mutex<Vec<OutboundMessage>>>;
