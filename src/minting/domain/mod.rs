//! Domain model for bonsai token minting.

mod error;
mod metadata;
mod receipt;


pub use error::MintingDomainError;
pub use metadata::{TokenAttribute, TokenMetadata, render_token_metadata};
pub use receipt::MintReceipt;
