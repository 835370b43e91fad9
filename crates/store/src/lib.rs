//! Storage collaborator for the order lifecycle engine.
//!
//! The engine talks to storage through the [`CommerceStore`] trait. Every
//! engine operation maps to at most one [`CommerceStore::commit_order`]
//! call, which applies the order write and its stock adjustments as a
//! single atomic unit: either everything commits, or nothing is observed.

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{CommerceStore, CommitOptions, StockAdjustment};

/// Convenience result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
