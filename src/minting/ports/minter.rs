//! Minter port for turning planted trees into tokens.

use crate::garden::domain::OwnerAddress;
use crate::minting::domain::MintReceipt;
use crate::tree::domain::TreeId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for mint operations.
pub type BonsaiMintResult<T> = Result<T, MintError>;

/// Contract for minting a bonsai token against a planted tree.
///
/// The token commits to the tree's content identity; chain selection,
/// signing, and gas policy stay behind the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BonsaiMinter: Send + Sync {
    /// Mints a token for the tree to the owner's wallet.
    ///
    /// # Errors
    ///
    /// Returns [`MintError::Rejected`] when the contract refuses the mint
    /// and [`MintError::Chain`] for transport or chain failures.
    async fn mint(&self, owner: &OwnerAddress, tree_id: &TreeId) -> BonsaiMintResult<MintReceipt>;
}

/// Errors returned by minter implementations.
#[derive(Debug, Clone, Error)]
pub enum MintError {
    /// The contract refused the mint.
    #[error("mint rejected: {reason}")]
    Rejected {
        /// Contract-supplied refusal reason.
        reason: String,
    },

    /// Chain or transport failure.
    #[error("chain error: {0}")]
    Chain(Arc<dyn std::error::Error + Send + Sync>),
}

impl MintError {
    /// Wraps a chain error.
    pub fn chain(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Chain(Arc::new(err))
    }
}
