//! Deterministic deployment of the API3 aggregator adapter.
//!
//! The adapter contract is deployed through the well-known CREATE2 factory
//! with a fixed salt, so its address is a pure function of the wrapped proxy
//! address — predictable before deployment and identical on every chain that
//! carries the factory.
//!
//! - [`resolver`]: the offline half — init code and address derivation, no
//!   network dependency, unit-testable as plain functions.
//! - [`deployer`]: the network half — idempotent deployment orchestration
//!   behind the mockable [`DeploymentChain`] boundary.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod deployer;
pub mod resolver;

pub use deployer::{deploy_deterministically, DeployError, DeployOutcome, DeploymentChain};
pub use resolver::{
    deployment_address, factory_calldata, init_code, ADAPTER_CREATION_CODE,
    CREATE2_FACTORY_ADDRESS, DEPLOYMENT_SALT,
};
