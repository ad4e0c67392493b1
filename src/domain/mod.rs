// Domain layer module exports
// Domain is independent of infrastructure concerns: repositories and the
// key-value store are traits here, implemented in `infrastructure`

pub mod collections;
pub mod errors;
pub mod player;
pub mod repositories;

pub use errors::{RosterError, RosterResult, StorageError};
