//! Synthetic round identifiers and the legacy round-data shape.
//!
//! The wrapped API3 proxy has no notion of discrete rounds, so the adapter
//! fabricates them per call: the round id is the current block height, cast
//! into the `uint80` width the legacy interface uses. The cast is checked,
//! never truncating; a block height beyond `2^80 - 1` is an error.

use crate::reading::ProxyReading;
use alloy_primitives::{aliases::U80, I256, U256};

/// The legacy round identifier width (`uint80`).
pub type RoundId = U80;

/// The largest block height representable as a [`RoundId`] (`2^80 - 1`).
pub const MAX_SYNTHETIC_ROUND: U256 = U256::from_limbs([u64::MAX, 0xffff, 0, 0]);

/// Block height does not fit the `uint80` round id width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("block number {block_number} is not castable to a uint80 round id")]
pub struct RoundIdOverflow {
    /// The block height that overflowed.
    pub block_number: U256,
}

/// Casts a block height into a [`RoundId`].
///
/// Fails with [`RoundIdOverflow`] when the height exceeds `2^80 - 1`; the
/// value is never silently truncated.
pub fn round_id_from_block_number(block_number: U256) -> Result<RoundId, RoundIdOverflow> {
    if block_number > MAX_SYNTHETIC_ROUND {
        return Err(RoundIdOverflow { block_number });
    }
    let limbs = block_number.as_limbs();
    Ok(RoundId::from_limbs([limbs[0], limbs[1]]))
}

/// Widens a [`RoundId`] back into the block height it was derived from.
pub fn block_number_from_round_id(round_id: RoundId) -> U256 {
    let limbs = round_id.as_limbs();
    U256::from_limbs([limbs[0], limbs[1], 0, 0])
}

/// The 5-tuple answered by `getRoundData`/`latestRoundData`.
///
/// Approximated from a proxy reading rather than recorded history:
/// `started_at` and `updated_at` both carry the reading's timestamp, and
/// `answered_in_round` equals `round_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundData {
    /// The synthetic round id (current block height).
    pub round_id: RoundId,
    /// The proxy's current value.
    pub answer: I256,
    /// The proxy's current timestamp.
    pub started_at: U256,
    /// The proxy's current timestamp.
    pub updated_at: U256,
    /// Equals `round_id`.
    pub answered_in_round: RoundId,
}

impl RoundData {
    /// Approximates round data for `round_id` from a live proxy reading.
    pub const fn approximate(round_id: RoundId, reading: ProxyReading) -> Self {
        Self {
            round_id,
            answer: reading.value,
            started_at: reading.timestamp,
            updated_at: reading.timestamp,
            answered_in_round: round_id,
        }
    }
}
