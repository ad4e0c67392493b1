// Repository implementations (data access layer)
// Both persist whole JSON collections through a `KeyValueStore`

mod collection;
pub mod kv_group_repository;
pub mod kv_player_repository;

pub use kv_group_repository::KvGroupRepository;
pub use kv_player_repository::KvPlayerRepository;
