//! Shared Hub Transport - Core Module
//!
//! This crate provides the shared transport handle that lets any number of
//! device clients multiplex over one physical connection to a hub. The
//! handle owns the lower-layer connection, the lock that serializes access
//! to it, and the protocol binding that makes the handle work with any wire
//! protocol implementation.

pub mod callbacks;
pub mod config;
pub mod error;
pub mod handle;
pub mod message;
pub mod protocol;
pub mod registry;

pub use callbacks::*;
pub use config::*;
pub use error::*;
pub use handle::*;
pub use message::*;
pub use protocol::*;
pub use registry::*;

/// Re-export common types
pub mod prelude {
    pub use crate::{
        callbacks::{ClientCore, ConnectionStatus, TransportEvents},
        config::{DeviceConfig, TransportConfig},
        error::{Result, TransportError},
        handle::SharedTransport,
        protocol::{LowerTransport, RetryPolicy, SendStatus, TransportProtocol},
        registry::{ClientId, ClientRegistry},
    };
    pub use async_trait::async_trait;
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
