//! API3 aggregator adapter CLI
//!
//! Deploys the adapter contract deterministically and inspects the legacy
//! aggregator view it serves. Arguments fall back to environment variables
//! (`PROXY_ADDRESS`, `RPC_URL`, `PRIVATE_KEY`) so the commands slot into
//! deploy pipelines unchanged.

use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use anyhow::Context;
use api3_adapter_aggregator::{Api3ReaderProxy, ChainContext, PartialAggregator};
use api3_adapter_deploy::{deploy_deterministically, deployment_address, DeployOutcome};
use api3_adapter_primitives::ProxyReading;
use clap::{Args, Parser, Subcommand};
use std::convert::Infallible;
use tracing::info;

// The aggregator crate binds this interface without alloy's `rpc` feature,
// so it is re-bound here with `#[sol(rpc)]` to get the provider-backed
// caller. `test_proxy_binding_matches_library` keeps the two in lockstep.
alloy::sol! {
    #[sol(rpc)]
    interface IApi3ReaderProxy {
        function read() external view returns (int256 value, uint256 timestamp);
    }
}

#[derive(Parser)]
#[command(name = "api3-adapter", about = "API3 aggregator adapter tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the deterministic deployment address for a proxy. Offline.
    Address(ProxyArgs),
    /// Deploy the adapter via the CREATE2 factory. Idempotent: a second run
    /// against the same proxy is a no-op.
    Deploy(DeployArgs),
    /// Read the proxy over RPC and print the round data the adapter answers,
    /// without deploying anything.
    Preview(PreviewArgs),
}

#[derive(Args)]
struct ProxyArgs {
    /// Address of the API3 data-feed proxy to wrap.
    #[arg(long, env = "PROXY_ADDRESS", value_name = "ADDRESS")]
    proxy_address: Address,
}

#[derive(Args)]
struct DeployArgs {
    #[command(flatten)]
    proxy: ProxyArgs,

    /// JSON-RPC endpoint of the target chain.
    #[arg(long, env = "RPC_URL", value_name = "URL")]
    rpc_url: String,

    /// Hex-encoded private key of the deployer account.
    #[arg(long, env = "PRIVATE_KEY", value_name = "KEY", hide_env_values = true)]
    private_key: String,
}

#[derive(Args)]
struct PreviewArgs {
    #[command(flatten)]
    proxy: ProxyArgs,

    /// JSON-RPC endpoint of the target chain.
    #[arg(long, env = "RPC_URL", value_name = "URL")]
    rpc_url: String,
}

/// One observation of the chain: a proxy reading pinned to the block height
/// it was fetched against. Lets the adapter core answer off-chain exactly as
/// the deployed contract would have at that height.
struct ChainSnapshot {
    proxy_address: Address,
    reading: ProxyReading,
    block_number: U256,
}

impl Api3ReaderProxy for ChainSnapshot {
    type Error = Infallible;

    fn proxy_address(&self) -> Address {
        self.proxy_address
    }

    fn read(&self) -> Result<ProxyReading, Infallible> {
        Ok(self.reading)
    }
}

impl ChainContext for ChainSnapshot {
    fn block_number(&self) -> U256 {
        self.block_number
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run(Cli::parse()).await {
        println!("Error: {err:?}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Address(args) => {
            println!(
                "Api3PartialAggregatorV2V3Interface for {} is expected to be deployed at {}",
                args.proxy_address,
                deployment_address(args.proxy_address)
            );
        }
        Command::Deploy(args) => {
            let signer: PrivateKeySigner =
                args.private_key.parse().context("invalid private key")?;
            let provider = ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer))
                .on_http(args.rpc_url.parse().context("invalid RPC URL")?);
            let chain_id = provider.get_chain_id().await?;
            info!(target: "api3::cli", chain_id, "deploying adapter");

            let proxy_address = args.proxy.proxy_address;
            match deploy_deterministically(&provider, proxy_address).await? {
                DeployOutcome::Deployed(address) => println!(
                    "Api3PartialAggregatorV2V3Interface for {proxy_address} is deployed at {address} on chain {chain_id}"
                ),
                DeployOutcome::AlreadyDeployed(address) => println!(
                    "Api3PartialAggregatorV2V3Interface for {proxy_address} was already deployed at {address} on chain {chain_id}"
                ),
            }
        }
        Command::Preview(args) => {
            let provider =
                ProviderBuilder::new().on_http(args.rpc_url.parse().context("invalid RPC URL")?);
            let proxy_address = args.proxy.proxy_address;

            // Fetch the height first and pin the read to it, so the reading
            // and the synthesized round id describe the same block.
            let block_number = provider.get_block_number().await?;
            let proxy = IApi3ReaderProxy::new(proxy_address, &provider);
            let reading = proxy
                .read()
                .block(block_number.into())
                .call()
                .await
                .context("proxy read failed")?;

            let snapshot = ChainSnapshot {
                proxy_address,
                reading: ProxyReading::new(reading.value, reading.timestamp),
                block_number: U256::from(block_number),
            };
            let aggregator = PartialAggregator::new(&snapshot)?;
            let data = aggregator.latest_round_data(&snapshot)?;

            println!("latestRoundData for {proxy_address} at block {block_number}:");
            println!("  roundId          {}", data.round_id);
            println!("  answer           {}", data.answer);
            println!("  startedAt        {}", data.started_at);
            println!("  updatedAt        {}", data.updated_at);
            println!("  answeredInRound  {}", data.answered_in_round);
            println!("  decimals         {}", aggregator.decimals());
            println!("  version          {}", aggregator.version());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_address_command_parses_flag() {
        let cli = Cli::parse_from([
            "api3-adapter",
            "address",
            "--proxy-address",
            "0xf5c140bcb4814dfec311f38f6789e867918c2f47",
        ]);
        match cli.command {
            Command::Address(args) => assert_eq!(
                args.proxy_address,
                address!("f5c140bcb4814dfec311f38f6789e867918c2f47")
            ),
            _ => panic!("expected address command"),
        }
    }

    #[test]
    fn test_deploy_command_parses_flags() {
        let cli = Cli::parse_from([
            "api3-adapter",
            "deploy",
            "--proxy-address",
            "0xf5c140bcb4814dfec311f38f6789e867918c2f47",
            "--rpc-url",
            "http://localhost:8545",
            "--private-key",
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        ]);
        match cli.command {
            Command::Deploy(args) => {
                assert_eq!(args.rpc_url, "http://localhost:8545");
                assert_eq!(
                    args.proxy.proxy_address,
                    address!("f5c140bcb4814dfec311f38f6789e867918c2f47")
                );
            }
            _ => panic!("expected deploy command"),
        }
    }

    #[test]
    fn test_proxy_binding_matches_library() {
        use alloy::sol_types::SolCall;
        use api3_adapter_aggregator::abi;

        assert_eq!(
            IApi3ReaderProxy::readCall::SIGNATURE,
            abi::IApi3ReaderProxy::readCall::SIGNATURE
        );
        assert_eq!(
            IApi3ReaderProxy::readCall::SELECTOR,
            abi::IApi3ReaderProxy::readCall::SELECTOR
        );
    }

    #[test]
    fn test_snapshot_answers_like_the_contract() {
        let snapshot = ChainSnapshot {
            proxy_address: address!("f5c140bcb4814dfec311f38f6789e867918c2f47"),
            reading: ProxyReading::new(
                alloy::primitives::I256::try_from(123i64).unwrap(),
                U256::from(456u64),
            ),
            block_number: U256::from(1000u64),
        };

        let aggregator = PartialAggregator::new(&snapshot).unwrap();
        let data = aggregator.latest_round_data(&snapshot).unwrap();

        assert_eq!(data.round_id, api3_adapter_primitives::RoundId::from(1000u64));
        assert_eq!(data.answer, alloy::primitives::I256::try_from(123i64).unwrap());
        assert_eq!(data.started_at, U256::from(456u64));
    }
}
