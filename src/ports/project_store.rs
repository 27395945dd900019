use crate::domain::Project;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No saved snapshot found")]
    NotFound,

    #[error("Failed to read snapshot: {0}")]
    Read(String),

    #[error("Failed to write snapshot: {0}")]
    Write(String),

    #[error("Invalid snapshot format: {0}")]
    InvalidFormat(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-collection persistence: one snapshot in, one snapshot out. There is
/// no incremental variant; restore either yields the full collection or
/// fails without a partial result.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectStore: Send + Sync {
    fn load(&self) -> StoreResult<Vec<Project>>;
    fn save(&self, projects: &[Project]) -> StoreResult<()>;
}
