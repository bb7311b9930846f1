//! Error types for the legacy aggregator view.

use alloy_primitives::U256;

/// Failures of the legacy aggregator surface.
///
/// `E` is the upstream proxy's own error type; it propagates unchanged, the
/// adapter adds no retry or fallback logic. No variant is ever converted into
/// a default or zero answer.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AggregatorError<E> {
    /// The proxy address supplied at construction is the zero address.
    /// Permanent: the adapter cannot come into existence.
    #[error("API3 proxy address is zero")]
    ProxyAddressIsZero,

    /// The queried round id is not the current block height. Recoverable by
    /// retrying with the current round id; historical rounds do not exist.
    #[error("round id is not current")]
    RoundIdIsNotCurrent,

    /// The current block height does not fit the `uint80` round id width.
    #[error("block number {0} is not castable to a uint80 round id")]
    BlockNumberNotCastable(U256),

    /// The wrapped proxy's `read()` failed.
    #[error("API3 proxy read failed: {0}")]
    Proxy(#[source] E),
}
