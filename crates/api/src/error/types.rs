//! Error type definitions for format-preserving encryption

/// Primary error type for format-preserving encryption
///
/// Every variant is raised synchronously by the operation that first
/// observes the problem; nothing is retried or coerced internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The alphabet contains the same symbol twice
    DuplicateSymbol {
        symbol: char,
        /// Index of the first occurrence
        first: usize,
        /// Index of the repeated occurrence
        second: usize,
    },

    /// The alphabet size is outside the supported range
    RadixOutOfRange {
        radix: usize,
        min: u32,
        max: u32,
    },

    /// The key is not 16, 24 or 32 bytes long
    InvalidKeyLength {
        actual: usize,
    },

    /// A fixed-length tweak has the wrong size
    InvalidTweakLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A variable-length tweak exceeds its configured maximum
    TweakTooLong {
        max: usize,
        actual: usize,
    },

    /// The message length is outside the domain of the cipher
    MessageLengthOutOfRange {
        len: usize,
        min_len: usize,
        max_len: usize,
    },

    /// The input contains a symbol that is not in the alphabet
    InvalidSymbol {
        symbol: char,
        position: usize,
    },

    /// A numeral does not name any symbol of the alphabet
    IndexOutOfRange {
        index: usize,
        radix: usize,
    },

    /// The underlying block primitive failed
    PrimitiveError {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for format-preserving encryption
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a PrimitiveError
    pub fn primitive(context: &'static str, message: impl Into<String>) -> Self {
        Self::PrimitiveError {
            context,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateSymbol { symbol, first, second } => {
                write!(f, "Duplicate symbol {:?} in alphabet at positions {} and {}",
                    symbol, first, second)
            },
            Self::RadixOutOfRange { radix, min, max } => {
                write!(f, "Radix {} out of range (expected {}..={})", radix, min, max)
            },
            Self::InvalidKeyLength { actual } => {
                write!(f, "Invalid key length: expected 16, 24 or 32 bytes, got {}", actual)
            },
            Self::InvalidTweakLength { context, expected, actual } => {
                write!(f, "{}: invalid tweak length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::TweakTooLong { max, actual } => {
                write!(f, "Tweak too long: {} bytes exceeds maximum of {}", actual, max)
            },
            Self::MessageLengthOutOfRange { len, min_len, max_len } => {
                write!(f, "Message length {} out of range (expected {}..={})",
                    len, min_len, max_len)
            },
            Self::InvalidSymbol { symbol, position } => {
                write!(f, "Invalid symbol {:?} at position {}", symbol, position)
            },
            Self::IndexOutOfRange { index, radix } => {
                write!(f, "Index {} out of range for radix {}", index, radix)
            },
            Self::PrimitiveError { context, message } => {
                write!(f, "Block primitive error: {}: {}", context, message)
            },
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
        }
    }
}
