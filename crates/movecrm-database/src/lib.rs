//! # movecrm-database
//!
//! Record store implementations for MoveCRM: PostgreSQL repositories built
//! on sqlx, an in-process memory store, and the factory that picks one
//! from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;

pub use connection::DatabasePool;
pub use memory::MemoryRecordStore;
pub use stores::RecordStores;
