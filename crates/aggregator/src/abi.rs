//! Solidity interface bindings.
//!
//! Pins the bit-exact ABI of both sides of the bridge: the upstream API3
//! proxy the adapter reads from, and the legacy aggregator surface it
//! presents. Downstream consumers resolve methods by selector, so these
//! signatures must match the deployed interfaces exactly.

use alloy_sol_types::sol;

sol! {
    /// The upstream API3 data-feed proxy. `read()` is the sole call the
    /// adapter makes outward.
    interface IApi3ReaderProxy {
        function read() external view returns (int256 value, uint256 timestamp);
    }
}

sol! {
    /// The legacy Chainlink-style aggregator interface the adapter serves.
    interface AggregatorV2V3Interface {
        function latestAnswer() external view returns (int256);
        function latestTimestamp() external view returns (uint256);
        function latestRound() external view returns (uint256);
        function getAnswer(uint256 roundId) external view returns (int256);
        function getTimestamp(uint256 roundId) external view returns (uint256);

        function decimals() external view returns (uint8);
        function description() external view returns (string memory);
        function version() external view returns (uint256);

        function getRoundData(uint80 _roundId)
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );

        function latestRoundData()
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_legacy_signatures_are_pinned() {
        assert_eq!(
            AggregatorV2V3Interface::latestRoundDataCall::SIGNATURE,
            "latestRoundData()"
        );
        assert_eq!(
            AggregatorV2V3Interface::getRoundDataCall::SIGNATURE,
            "getRoundData(uint80)"
        );
        assert_eq!(
            AggregatorV2V3Interface::getAnswerCall::SIGNATURE,
            "getAnswer(uint256)"
        );
        assert_eq!(IApi3ReaderProxy::readCall::SIGNATURE, "read()");
    }

    #[test]
    fn test_legacy_selectors_are_pinned() {
        // Well-known AggregatorV2V3Interface selectors.
        assert_eq!(
            AggregatorV2V3Interface::latestRoundDataCall::SELECTOR,
            [0xfe, 0xaf, 0x96, 0x8c]
        );
        assert_eq!(
            AggregatorV2V3Interface::decimalsCall::SELECTOR,
            [0x31, 0x3c, 0xe5, 0x67]
        );
        assert_eq!(
            AggregatorV2V3Interface::latestAnswerCall::SELECTOR,
            [0x50, 0xd2, 0x5b, 0xcd]
        );
        assert_eq!(
            AggregatorV2V3Interface::versionCall::SELECTOR,
            [0x54, 0xfd, 0x4d, 0x50]
        );
        assert_eq!(IApi3ReaderProxy::readCall::SELECTOR, [0x57, 0xde, 0x26, 0xa4]);
    }
}
