use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Task is already taken by {0}")]
    AlreadyTaken(String),

    #[error("Project title is not unique: {0}")]
    DuplicateTitle(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
