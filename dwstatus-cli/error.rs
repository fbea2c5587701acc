use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DwStatusError {
    #[error("invalid register value: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DwStatusError>;
