use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO failure")]
    IoError(#[from] io::Error),
    /// A value wouldn't fit the field it packs into. Always a defect in the
    /// upstream geometry or metrics, never recoverable.
    #[error("{what} {value} does not fit its declared width")]
    OutOfBounds { what: String, value: String },
}

impl Error {
    pub(crate) fn out_of_bounds(what: impl Into<String>, value: impl ToString) -> Error {
        Error::OutOfBounds {
            what: what.into(),
            value: value.to_string(),
        }
    }
}
