//! Primitive types shared across the API3 aggregator adapter.
//!
//! This crate provides the data model used by the adapter and its tooling:
//!
//! - [`ProxyReading`]: the `(value, timestamp)` pair returned by an API3
//!   data-feed proxy's `read()`.
//! - [`RoundId`] and [`RoundData`]: the legacy Chainlink-style round shape,
//!   synthesized per call from the current block height.
//! - [`constants`]: the fixed values of the legacy `AggregatorV2V3Interface`
//!   surface (`decimals`, `version`, `description`).

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod constants;
pub mod reading;
pub mod round;

pub use constants::{DECIMALS, DESCRIPTION, VERSION};
pub use reading::ProxyReading;
pub use round::{
    block_number_from_round_id, round_id_from_block_number, RoundData, RoundId, RoundIdOverflow,
    MAX_SYNTHETIC_ROUND,
};
