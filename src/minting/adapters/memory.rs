//! In-process minter that records mints instead of reaching a chain.

use crate::garden::domain::OwnerAddress;
use crate::minting::{
    domain::{MintReceipt, MintingDomainError},
    ports::{BonsaiMintResult, BonsaiMinter, MintError},
};
use crate::tree::domain::TreeId;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe minter double that records every successful mint.
///
/// Receipts are deterministic, derived from the mint's position in the
/// recorded sequence.
#[derive(Debug, Clone, Default)]
pub struct RecordingMinter {
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    minted: Vec<(OwnerAddress, TreeId)>,
}

impl RecordingMinter {
    /// Creates a minter with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the owner and tree of every recorded mint, oldest first.
    #[must_use]
    pub fn minted(&self) -> Vec<(OwnerAddress, TreeId)> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .minted
            .clone()
    }
}

#[async_trait]
impl BonsaiMinter for RecordingMinter {
    async fn mint(&self, owner: &OwnerAddress, tree_id: &TreeId) -> BonsaiMintResult<MintReceipt> {
        let mut state = self
            .state
            .write()
            .map_err(|err| MintError::chain(std::io::Error::other(err.to_string())))?;
        state.minted.push((owner.clone(), tree_id.clone()));

        let sequence = state.minted.len();
        MintReceipt::new(format!("0x{sequence:064x}")).map_err(|err: MintingDomainError| {
            MintError::chain(std::io::Error::other(err.to_string()))
        })
    }
}
