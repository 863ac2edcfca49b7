use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("hole punching is not supported on this platform")]
    Unsupported,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    NonZeroByte(#[from] NonZeroByte),
}

pub type PubResult<T> = Result<T, Error>;

/// A byte that wasn't zero where only zeroes were expected. The offset is relative to the buffer
/// passed to the write that contained it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("non-zero byte ({value}) at {offset}")]
pub struct NonZeroByte {
    pub value: u8,
    pub offset: usize,
}

impl From<NonZeroByte> for io::Error {
    fn from(value: NonZeroByte) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, value)
    }
}

impl NonZeroByte {
    /// Recovers the validation failure from an io::Error produced by a zero validating writer.
    pub fn from_io_error(err: &io::Error) -> Option<Self> {
        err.get_ref()?.downcast_ref::<Self>().copied()
    }
}
