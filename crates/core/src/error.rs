use rtscope_api::UnknownNodeKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RtscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Index file too small: {size} bytes")]
    TooSmall { size: u64 },
    #[error("Invalid index format: {0}")]
    InvalidFormat(String),
    #[error("Out of bounds: reading {width} bytes at offset {offset} in a {len}-byte index")]
    OutOfBounds { offset: i64, width: usize, len: usize },
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RtscopeError {
    pub(crate) fn out_of_bounds(offset: usize, width: usize, len: usize) -> Self {
        RtscopeError::OutOfBounds {
            offset: offset as i64,
            width,
            len,
        }
    }
}

impl From<UnknownNodeKind> for RtscopeError {
    fn from(err: UnknownNodeKind) -> Self {
        RtscopeError::InvalidFormat(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RtscopeError>;
