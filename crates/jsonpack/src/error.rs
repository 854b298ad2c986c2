use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Pack format/argument mismatch; `position` is a byte offset into the format.
    #[error("construction at offset {position}: {message}")]
    Construction { position: usize, message: String },

    /// Builder input with an empty key; `index` is the member's position in the object.
    #[error("construction: empty key at member {index}")]
    EmptyKey { index: usize },

    #[error("serialization: {0}")]
    Serialization(String),

    /// A JSON kind outside the integer/string model.
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

impl Error {
    pub(crate) fn construction(position: usize, message: impl Into<String>) -> Self {
        Error::Construction { position, message: message.into() }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
