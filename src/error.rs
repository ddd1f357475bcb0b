//! Error types for write-operation encoding.
use bson;
use std::{error, fmt, io, result};

/// A type for results generated by encoding operations, where the error type
/// is hard-wired to `Error`.
pub type Result<T> = result::Result<T, Error>;

/// The error type for write-operation encoding.
#[derive(Debug)]
pub enum Error {
    /// A caller-supplied argument was unusable, such as a malformed
    /// namespace or a batch mixing operation kinds.
    ArgumentError(String),
    /// A wire message could not be parsed.
    MessageError(String),
    /// The BSON layer failed to serialize a document.
    EncoderError(bson::EncoderError),
    /// The BSON layer failed to deserialize a document.
    DecoderError(bson::DecoderError),
    /// The output buffer rejected a write.
    IoError(io::Error),
}

impl<'a> From<&'a str> for Error {
    fn from(s: &str) -> Error {
        Error::ArgumentError(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::ArgumentError(s)
    }
}

impl From<bson::EncoderError> for Error {
    fn from(err: bson::EncoderError) -> Error {
        Error::EncoderError(err)
    }
}

impl From<bson::DecoderError> for Error {
    fn from(err: bson::DecoderError) -> Error {
        Error::DecoderError(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ArgumentError(ref inner) => inner.fmt(fmt),
            Error::MessageError(ref inner) => inner.fmt(fmt),
            Error::EncoderError(ref inner) => inner.fmt(fmt),
            Error::DecoderError(ref inner) => inner.fmt(fmt),
            Error::IoError(ref inner) => inner.fmt(fmt),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::EncoderError(ref inner) => Some(inner),
            Error::DecoderError(ref inner) => Some(inner),
            Error::IoError(ref inner) => Some(inner),
            Error::ArgumentError(_) | Error::MessageError(_) => None,
        }
    }
}
