use thiserror::Error;

/// Errors produced by the Huffman engine.
///
/// Unencodable symbols and single-symbol trees are not errors: the former are
/// skipped and reported on the evaluation, the latter get a one-bit code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// Empty text or empty frequency table passed to tree construction.
    #[error("cannot build a Huffman code from empty input")]
    InvalidInput,

    /// A supplied code map cannot be used for encoding or decoding.
    #[error("invalid code map: {0}")]
    InvalidCodeMap(String),

    /// A code string was empty or contained something other than `0` and `1`.
    #[error("invalid code {0:?}: expected a non-empty string of 0 and 1")]
    InvalidCode(String),

    /// The bit stream followed a path that no code in the map takes.
    #[error("no code matches the bits ending at position {position}")]
    UnknownCode {
        /// Index of the offending bit
        position: usize,
    },

    /// The bit stream ended in the middle of a codeword.
    #[error("bit stream ends inside a codeword starting at position {position}")]
    TruncatedCode {
        /// Index of the first bit of the unfinished codeword
        position: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffmanError>;
