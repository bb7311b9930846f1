//! Fixed values of the legacy `AggregatorV2V3Interface` surface.
//!
//! Downstream consumers are built against these exact constants, so they are
//! part of the wire contract and must never change.

use alloy_primitives::U256;

/// The decimal precision the adapter declares, fixed at 18.
///
/// API3 dAPIs use 18-decimal fixed point, so this matches the usual case.
/// The adapter does NOT rescale answers: if the wrapped proxy uses a
/// different precision, its values are passed through unchanged and this
/// constant still reads 18.
pub const DECIMALS: u8 = 18;

/// The interface revision reported by `version()`.
pub const VERSION: U256 = U256::from_limbs([4913, 0, 0, 0]);

/// The description reported by `description()`, fixed to the empty string.
///
/// The adapter wraps exactly one proxy and carries no feed metadata of its
/// own.
pub const DESCRIPTION: &str = "";
