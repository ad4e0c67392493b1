// Repository and storage port definitions

pub mod group_repository;
pub mod key_value_store;
pub mod player_repository;

pub use group_repository::GroupRepository;
pub use key_value_store::KeyValueStore;
pub use player_repository::PlayerRepository;
