use http::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("invalid header name: {source}")]
    InvalidName {
        #[from]
        source: InvalidHeaderName,
    },

    #[error("invalid header value: {source}")]
    InvalidValue {
        #[from]
        source: InvalidHeaderValue,
    },
}

impl HeaderError {
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, HeaderError::InvalidName { .. })
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self, HeaderError::InvalidValue { .. })
    }
}
