//! In-memory adapters for garden ports.

mod repository;

pub use repository::InMemoryTreeRecordRepository;
