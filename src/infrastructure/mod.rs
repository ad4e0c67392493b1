// Infrastructure layer module
// Key-value store adapters and the repositories built on top of them

pub mod repositories;
pub mod stores;
