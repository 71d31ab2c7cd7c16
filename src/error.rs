use thiserror::Error;

/// Errors raised by construction and the few operations that can reject input.
///
/// Lookups never fail: a miss is reported through `Option` or the nearest node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot build a coding tree from an empty alphabet")]
    EmptyAlphabet,

    #[error("symbol frequencies overflow a 64-bit count")]
    FrequencyOverflow,

    #[error("{operation} is not supported")]
    Unsupported { operation: &'static str },

    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("symbol is not part of the coding alphabet")]
    UnknownSymbol,

    #[error("bit stream does not decode to whole symbols")]
    InvalidCode,
}

pub type Result<T> = std::result::Result<T, Error>;
