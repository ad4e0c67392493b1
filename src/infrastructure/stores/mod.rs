// Key-value store adapters

pub mod file_store;
pub mod memory_store;
pub mod postgres_store;

pub use file_store::FileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
pub use postgres_store::PostgresKeyValueStore;
