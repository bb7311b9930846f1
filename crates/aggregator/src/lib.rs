//! Legacy aggregator view over an API3 data-feed proxy.
//!
//! Consumers written against the Chainlink-style `AggregatorV2V3Interface`
//! expect discrete, incrementing rounds. An API3 proxy exposes only a live
//! `read()` returning `(value, timestamp)` with no round concept. This crate
//! bridges the two:
//!
//! - [`PartialAggregator`]: answers every legacy query from a fresh proxy
//!   reading, synthesizing the round id from the current block height.
//! - [`Api3ReaderProxy`] / [`ChainContext`]: the seams to the upstream feed
//!   and to the chain state the adapter reacts to.
//! - [`AggregatorError`]: the typed failure surface (zero proxy address,
//!   non-current round id, `uint80` overflow, upstream read failure).
//!
//! Because rounds are derived rather than stored, the adapter refuses any
//! round id other than the current block height: it has no history and never
//! attempts to reconstruct one.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod abi;
pub mod aggregator;
pub mod error;

pub use aggregator::{Api3ReaderProxy, ChainContext, PartialAggregator};
pub use error::AggregatorError;
