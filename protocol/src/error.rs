use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Unknown difficulty {0:?}, expected easy, normal or hard")]
    UnknownDifficulty(String),
    #[error("Missing command option {0:?}")]
    MissingOption(&'static str),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;
