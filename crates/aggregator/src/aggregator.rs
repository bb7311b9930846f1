//! The legacy-interface adapter itself.
//!
//! [`PartialAggregator`] is effectively stateless: it holds only the
//! immutable proxy reference set at construction, and every query is a pure
//! read against the current chain state and the current proxy state. Chain
//! state is supplied per call through [`ChainContext`], the same way core
//! logic elsewhere is written generic over the database it reads from.

use crate::error::AggregatorError;
use alloy_primitives::{Address, I256, U256};
use api3_adapter_primitives::{
    block_number_from_round_id, constants, round_id_from_block_number, ProxyReading, RoundData,
    RoundId,
};

/// The upstream API3 data-feed proxy the adapter wraps.
///
/// `read()` is the sole outward call the adapter makes; its failure
/// propagates to the caller unchanged.
pub trait Api3ReaderProxy {
    /// The proxy's own failure type.
    type Error: std::error::Error;

    /// The on-chain address of the proxy contract.
    fn proxy_address(&self) -> Address;

    /// Fetches the current `(value, timestamp)` reading.
    fn read(&self) -> Result<ProxyReading, Self::Error>;
}

impl<T: Api3ReaderProxy + ?Sized> Api3ReaderProxy for &T {
    type Error = T::Error;

    fn proxy_address(&self) -> Address {
        (**self).proxy_address()
    }

    fn read(&self) -> Result<ProxyReading, Self::Error> {
        (**self).read()
    }
}

/// The chain state a query reacts to.
pub trait ChainContext {
    /// The current block height.
    fn block_number(&self) -> U256;
}

impl<T: ChainContext + ?Sized> ChainContext for &T {
    fn block_number(&self) -> U256 {
        (**self).block_number()
    }
}

/// A read-only `AggregatorV2V3Interface` view over exactly one API3 proxy.
///
/// Round semantics are fabricated per call: the round id is the current
/// block height, `startedAt`/`updatedAt` both carry the proxy reading's
/// timestamp, and `answeredInRound` equals the round id. Queries for any
/// other round id are rejected; the adapter has no history.
#[derive(Clone, Copy, Debug)]
pub struct PartialAggregator<P> {
    api3_proxy: P,
}

impl<P: Api3ReaderProxy> PartialAggregator<P> {
    /// Wraps `api3_proxy`, which is immutable for the adapter's lifetime.
    ///
    /// Fails with [`AggregatorError::ProxyAddressIsZero`] when the proxy
    /// reports the zero address; such an adapter never comes into existence.
    pub fn new(api3_proxy: P) -> Result<Self, AggregatorError<P::Error>> {
        if api3_proxy.proxy_address().is_zero() {
            return Err(AggregatorError::ProxyAddressIsZero);
        }
        Ok(Self { api3_proxy })
    }

    /// The address of the wrapped proxy.
    pub fn proxy_address(&self) -> Address {
        self.api3_proxy.proxy_address()
    }

    /// `latestAnswer()`: the proxy's current value, passed through without
    /// rescaling or rounding.
    pub fn latest_answer(&self) -> Result<I256, AggregatorError<P::Error>> {
        Ok(self.read()?.value)
    }

    /// `latestTimestamp()`: the proxy's current timestamp.
    pub fn latest_timestamp(&self) -> Result<U256, AggregatorError<P::Error>> {
        Ok(self.read()?.timestamp)
    }

    /// `latestRound()`: the current block height as a round id.
    pub fn latest_round<C: ChainContext>(
        &self,
        chain: &C,
    ) -> Result<RoundId, AggregatorError<P::Error>> {
        current_round_id(chain)
    }

    /// `getAnswer(roundId)`: the current value, answered only for the
    /// current block height.
    pub fn get_answer<C: ChainContext>(
        &self,
        chain: &C,
        round_id: U256,
    ) -> Result<I256, AggregatorError<P::Error>> {
        ensure_round_id_is_current(chain, round_id)?;
        Ok(self.read()?.value)
    }

    /// `getTimestamp(roundId)`: the current timestamp, answered only for the
    /// current block height.
    pub fn get_timestamp<C: ChainContext>(
        &self,
        chain: &C,
        round_id: U256,
    ) -> Result<U256, AggregatorError<P::Error>> {
        ensure_round_id_is_current(chain, round_id)?;
        Ok(self.read()?.timestamp)
    }

    /// `getRoundData(roundId)`: approximated round data, answered only for
    /// the current block height.
    pub fn get_round_data<C: ChainContext>(
        &self,
        chain: &C,
        round_id: RoundId,
    ) -> Result<RoundData, AggregatorError<P::Error>> {
        ensure_round_id_is_current(chain, block_number_from_round_id(round_id))?;
        Ok(RoundData::approximate(round_id, self.read()?))
    }

    /// `latestRoundData()`: approximated round data at the current block
    /// height. Fails only when the height does not fit the round id width
    /// or when the proxy read fails.
    pub fn latest_round_data<C: ChainContext>(
        &self,
        chain: &C,
    ) -> Result<RoundData, AggregatorError<P::Error>> {
        let round_id = current_round_id(chain)?;
        Ok(RoundData::approximate(round_id, self.read()?))
    }

    /// `decimals()`: fixed at 18 regardless of the wrapped proxy's actual
    /// precision; see [`constants::DECIMALS`].
    pub const fn decimals(&self) -> u8 {
        constants::DECIMALS
    }

    /// `description()`: fixed to the empty string.
    pub const fn description(&self) -> &'static str {
        constants::DESCRIPTION
    }

    /// `version()`: the fixed interface revision, 4913.
    pub const fn version(&self) -> U256 {
        constants::VERSION
    }

    fn read(&self) -> Result<ProxyReading, AggregatorError<P::Error>> {
        self.api3_proxy.read().map_err(AggregatorError::Proxy)
    }
}

fn current_round_id<C: ChainContext, E>(chain: &C) -> Result<RoundId, AggregatorError<E>> {
    round_id_from_block_number(chain.block_number())
        .map_err(|err| AggregatorError::BlockNumberNotCastable(err.block_number))
}

fn ensure_round_id_is_current<C: ChainContext, E>(
    chain: &C,
    round_id: U256,
) -> Result<(), AggregatorError<E>> {
    if round_id != chain.block_number() {
        return Err(AggregatorError::RoundIdIsNotCurrent);
    }
    Ok(())
}
