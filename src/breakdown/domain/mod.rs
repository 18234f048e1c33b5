//! Domain model for task decomposition requests.

mod error;
mod request;


pub use error::BreakdownDomainError;
pub use request::BreakdownRequest;
