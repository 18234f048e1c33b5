//! Port contracts for bonsai minting.

pub mod minter;

pub use minter::{BonsaiMintResult, BonsaiMinter, MintError};

#[cfg(test)]
pub use minter::MockBonsaiMinter;
