//! The data-feed reading returned by an API3 proxy.

use alloy_primitives::{I256, U256};

/// A single `(value, timestamp)` reading of an API3 data-feed proxy.
///
/// Readings are ephemeral: the adapter fetches one fresh from the proxy on
/// every query and never caches or stores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProxyReading {
    /// The feed value, 18-decimal fixed point by API3 convention.
    pub value: I256,
    /// The timestamp the feed value was last updated at.
    pub timestamp: U256,
}

impl ProxyReading {
    /// Creates a new reading from its parts.
    pub const fn new(value: I256, timestamp: U256) -> Self {
        Self { value, timestamp }
    }
}
