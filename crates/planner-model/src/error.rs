use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid teacher id: {0:?}")]
    InvalidTeacherId(String),
    #[error("invalid subject id: {0:?}")]
    InvalidSubjectId(String),
    #[error("invalid classroom id: {0:?}")]
    InvalidClassroomId(String),
    #[error("invalid assignment id: {0:?}")]
    InvalidAssignmentId(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
