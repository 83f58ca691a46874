use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
