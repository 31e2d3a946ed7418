use std::io;

use thiserror::Error;

/// Errors raised while building a filter chain.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("response must lie strictly between 0 and 1 (got {0})")]
    InvalidResponse(f32),
    #[error("a filter cascade needs at least one pole")]
    NoPoles,
    #[error("a filter cascade supports at most {max} poles (got {requested})")]
    TooManyPoles { requested: usize, max: usize },
}

/// Errors raised by the streaming loop. End of input is not one of them.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to read sample {index}")]
    Read {
        index: u64,
        #[source]
        source: io::Error,
    },
    #[error("failed to write sample {index}")]
    Write {
        index: u64,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while reading configuration overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}
