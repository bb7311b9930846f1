//! Idempotent deployment orchestration.
//!
//! The network-dependent half of deterministic deployment, kept behind the
//! [`DeploymentChain`] boundary so the flow is unit-testable without a live
//! chain. Any alloy [`Provider`] implements the boundary.
//!
//! Deployment is idempotent: if the predicted address already carries code,
//! nothing is submitted. Success is only ever reported after confirming
//! non-empty code at the target, so a competing deployment by another actor
//! is indistinguishable from our own succeeding — and a factory that fails
//! to install code is never silently treated as success.

use crate::resolver::{deployment_address, factory_calldata, CREATE2_FACTORY_ADDRESS};
use alloy::{
    network::TransactionBuilder, providers::Provider, rpc::types::TransactionRequest,
};
use alloy_primitives::{Address, Bytes, B256};
use async_trait::async_trait;
use tracing::{debug, info};

/// Errors of the deployment flow.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// The CREATE2 factory has no code on this chain.
    #[error("CREATE2 factory has no code at {0}")]
    FactoryNotDeployed(Address),

    /// The deployment transaction reverted.
    #[error("deployment transaction {0} reverted")]
    TransactionReverted(B256),

    /// The deployment transaction was included but the target address still
    /// has no code.
    #[error("no code at {0} after the deployment transaction was included")]
    CodeMissingAfterDeployment(Address),

    /// An RPC transport failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result of [`deploy_deterministically`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The adapter was deployed by this invocation.
    Deployed(Address),
    /// The adapter already had code at the predicted address; nothing was
    /// submitted.
    AlreadyDeployed(Address),
}

impl DeployOutcome {
    /// The adapter address, deployed either way.
    pub const fn address(&self) -> Address {
        match self {
            Self::Deployed(address) | Self::AlreadyDeployed(address) => *address,
        }
    }
}

/// The chain operations the deployment flow needs.
///
/// Implemented for every alloy [`Provider`]; tests substitute an in-memory
/// chain.
#[async_trait]
pub trait DeploymentChain {
    /// The code currently deployed at `address` (empty if none).
    async fn code_at(&self, address: Address) -> Result<Bytes, DeployError>;

    /// Sends `calldata` to `factory` as a raw transaction and waits for
    /// inclusion.
    async fn send_to_factory(&self, factory: Address, calldata: Bytes) -> Result<(), DeployError>;
}

#[async_trait]
impl<P: Provider> DeploymentChain for P {
    async fn code_at(&self, address: Address) -> Result<Bytes, DeployError> {
        self.get_code_at(address)
            .await
            .map_err(|err| DeployError::Transport(err.to_string()))
    }

    async fn send_to_factory(&self, factory: Address, calldata: Bytes) -> Result<(), DeployError> {
        let tx = TransactionRequest::default()
            .with_to(factory)
            .with_input(calldata);
        let receipt = self
            .send_transaction(tx)
            .await
            .map_err(|err| DeployError::Transport(err.to_string()))?
            .get_receipt()
            .await
            .map_err(|err| DeployError::Transport(err.to_string()))?;
        if !receipt.status() {
            return Err(DeployError::TransactionReverted(receipt.transaction_hash));
        }
        Ok(())
    }
}

/// Deploys the adapter for `proxy_address` at its deterministic address.
///
/// Re-invoking after a successful deployment is a no-op reported as
/// [`DeployOutcome::AlreadyDeployed`].
pub async fn deploy_deterministically<C>(
    chain: &C,
    proxy_address: Address,
) -> Result<DeployOutcome, DeployError>
where
    C: DeploymentChain + ?Sized,
{
    if chain.code_at(CREATE2_FACTORY_ADDRESS).await?.is_empty() {
        return Err(DeployError::FactoryNotDeployed(CREATE2_FACTORY_ADDRESS));
    }

    let adapter_address = deployment_address(proxy_address);
    if !chain.code_at(adapter_address).await?.is_empty() {
        debug!(target: "api3::deploy", adapter = %adapter_address, "adapter already has code");
        return Ok(DeployOutcome::AlreadyDeployed(adapter_address));
    }

    chain
        .send_to_factory(CREATE2_FACTORY_ADDRESS, factory_calldata(proxy_address))
        .await?;

    // The transaction succeeding is not enough: only non-empty code at the
    // predicted address counts as a deployment.
    if chain.code_at(adapter_address).await?.is_empty() {
        return Err(DeployError::CodeMissingAfterDeployment(adapter_address));
    }

    info!(
        target: "api3::deploy",
        proxy = %proxy_address,
        adapter = %adapter_address,
        "adapter deployed"
    );
    Ok(DeployOutcome::Deployed(adapter_address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{init_code, DEPLOYMENT_SALT};
    use alloy_primitives::{address, bytes};
    use std::{collections::HashMap, sync::Mutex};

    const PROXY: Address = address!("f5c140bcb4814dfec311f38f6789e867918c2f47");

    /// In-memory stand-in for a chain carrying the CREATE2 factory.
    struct MockChain {
        code: Mutex<HashMap<Address, Bytes>>,
        sent: Mutex<Vec<Bytes>>,
        /// Whether the factory actually installs code when called.
        factory_installs_code: bool,
    }

    impl MockChain {
        fn with_factory() -> Self {
            let mut code = HashMap::new();
            code.insert(CREATE2_FACTORY_ADDRESS, bytes!("fe"));
            Self {
                code: Mutex::new(code),
                sent: Mutex::new(Vec::new()),
                factory_installs_code: true,
            }
        }

        fn without_factory() -> Self {
            Self {
                code: Mutex::new(HashMap::new()),
                sent: Mutex::new(Vec::new()),
                factory_installs_code: true,
            }
        }

        fn with_broken_factory() -> Self {
            let mut chain = Self::with_factory();
            chain.factory_installs_code = false;
            chain
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl DeploymentChain for MockChain {
        async fn code_at(&self, address: Address) -> Result<Bytes, DeployError> {
            Ok(self
                .code
                .lock()
                .unwrap()
                .get(&address)
                .cloned()
                .unwrap_or_default())
        }

        async fn send_to_factory(
            &self,
            factory: Address,
            calldata: Bytes,
        ) -> Result<(), DeployError> {
            self.sent.lock().unwrap().push(calldata.clone());
            if self.factory_installs_code {
                // Behave like the factory: split salt ‖ init_code and
                // install code at the CREATE2 address.
                let (salt, code) = calldata.split_at(32);
                let target =
                    factory.create2_from_code(B256::from_slice(salt), code);
                self.code
                    .lock()
                    .unwrap()
                    .insert(target, bytes!("60016001"));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_deploys_at_predicted_address() {
        let chain = MockChain::with_factory();

        let outcome = deploy_deterministically(&chain, PROXY).await.unwrap();

        assert_eq!(
            outcome,
            DeployOutcome::Deployed(deployment_address(PROXY))
        );
        assert_eq!(chain.sent_count(), 1);
        // Exactly the payload the factory expects.
        let sent = chain.sent.lock().unwrap()[0].clone();
        assert_eq!(&sent[..32], DEPLOYMENT_SALT.as_slice());
        assert_eq!(&sent[32..], &init_code(PROXY)[..]);
    }

    #[tokio::test]
    async fn test_redeployment_is_a_no_op() {
        let chain = MockChain::with_factory();

        let first = deploy_deterministically(&chain, PROXY).await.unwrap();
        let second = deploy_deterministically(&chain, PROXY).await.unwrap();

        assert_eq!(first, DeployOutcome::Deployed(deployment_address(PROXY)));
        assert_eq!(
            second,
            DeployOutcome::AlreadyDeployed(deployment_address(PROXY))
        );
        assert_eq!(second.address(), first.address());
        assert_eq!(chain.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_fails_without_factory() {
        let chain = MockChain::without_factory();

        let err = deploy_deterministically(&chain, PROXY).await.unwrap_err();

        assert!(matches!(
            err,
            DeployError::FactoryNotDeployed(address) if address == CREATE2_FACTORY_ADDRESS
        ));
        assert_eq!(chain.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_code_after_deployment_is_not_success() {
        let chain = MockChain::with_broken_factory();

        let err = deploy_deterministically(&chain, PROXY).await.unwrap_err();

        assert!(matches!(
            err,
            DeployError::CodeMissingAfterDeployment(address)
                if address == deployment_address(PROXY)
        ));
        assert_eq!(chain.sent_count(), 1);
    }
}
