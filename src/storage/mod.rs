pub mod json_backend;

use crate::{domain::TrackerState, errors::StorageError};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Abstraction over persistence backends holding one serialized state
/// snapshot under a fixed key.
///
/// `load` distinguishes "no snapshot yet" (`Ok(None)`, caller keeps its
/// seeded state) from a snapshot that exists but cannot be read (`Err`).
/// `save` replaces the whole snapshot; there are no incremental updates.
pub trait StateStore: Send + Sync {
    fn load(&self) -> Result<Option<TrackerState>>;
    fn save(&self, state: &TrackerState) -> Result<()>;
}

pub use json_backend::JsonStateStore;
