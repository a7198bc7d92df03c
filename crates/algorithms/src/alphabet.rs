//! Bidirectional mapping between symbols and numerals
//!
//! An alphabet is an ordered set of distinct Unicode scalar values. The
//! position of a symbol is its numeral, so the alphabet size is the radix
//! every other component works in.

use std::collections::HashMap;
use std::fmt;

use crate::error::{validate, Error, Result};
use dfpe_params::alphabets::{ALPHANUMERIC, ASCII_LOWERCASE, ASCII_UPPERCASE, BASE36, DIGITS};
use dfpe_params::fpe::{MAX_RADIX, MIN_RADIX};

/// An ordered set of unique symbols
#[derive(Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, u16>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order
    ///
    /// Fails with `RadixOutOfRange` when there are fewer than 2 or more
    /// than 65535 symbols, and with `DuplicateSymbol` when a character
    /// appears twice. The size is checked first: an oversized alphabet
    /// reports `RadixOutOfRange` even if it also repeats a symbol.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        validate::radix(symbols.len(), MIN_RADIX, MAX_RADIX)?;

        let mut index = HashMap::with_capacity(symbols.len());
        for (second, &symbol) in symbols.iter().enumerate() {
            // radix was bounded above, every position fits in u16
            if let Some(first) = index.insert(symbol, second as u16) {
                return Err(Error::DuplicateSymbol {
                    symbol,
                    first: first as usize,
                    second,
                });
            }
        }

        Ok(Self { symbols, index })
    }

    /// The decimal digits `0-9`
    pub fn digits() -> Self {
        Self::standard(DIGITS)
    }

    /// The lowercase ASCII letters `a-z`
    pub fn lowercase() -> Self {
        Self::standard(ASCII_LOWERCASE)
    }

    /// The uppercase ASCII letters `A-Z`
    pub fn uppercase() -> Self {
        Self::standard(ASCII_UPPERCASE)
    }

    /// Digits then lowercase letters (radix 36)
    pub fn base36() -> Self {
        Self::standard(BASE36)
    }

    /// Digits, lowercase then uppercase letters (radix 62)
    pub fn alphanumeric() -> Self {
        Self::standard(ALPHANUMERIC)
    }

    // Only for the constant alphabets, which are distinct ASCII.
    fn standard(symbols: &'static str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u16))
            .collect();
        Self { symbols, index }
    }

    /// Number of symbols
    pub fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Whether `symbol` belongs to this alphabet
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Maps each character of `text` to its numeral
    ///
    /// Fails with `InvalidSymbol` on the first character that is not in the
    /// alphabet; `position` counts characters, not bytes.
    pub fn to_indices(&self, text: &str) -> Result<Vec<u16>> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.index
                    .get(&symbol)
                    .copied()
                    .ok_or(Error::InvalidSymbol { symbol, position })
            })
            .collect()
    }

    /// Maps numerals back to symbols
    ///
    /// A numeral at or above the radix means the caller produced it
    /// incorrectly and fails with `IndexOutOfRange`.
    pub fn to_symbols(&self, indices: &[u16]) -> Result<String> {
        indices
            .iter()
            .map(|&i| {
                self.symbols
                    .get(i as usize)
                    .copied()
                    .ok_or(Error::IndexOutOfRange {
                        index: i as usize,
                        radix: self.symbols.len(),
                    })
            })
            .collect()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("radix", &self.symbols.len())
            .finish()
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = Error;

    fn try_from(symbols: &str) -> Result<Self> {
        Self::new(symbols)
    }
}
