use std::{collections::HashSet, fmt::Display, str::FromStr};

use crate::error::{ShallengeError, ShallengeResult};

/// The ordered symbols a password is made of.
/// The index of a symbol is its digit value when enumerating passwords,
/// so the order given at construction is kept as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<String>,
}

impl Alphabet {
    /// Creates a new alphabet from a list of symbols.
    /// A symbol can be longer than one character, but it cannot be empty.
    pub fn new<I, S>(symbols: I) -> ShallengeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();

        if symbols.is_empty() {
            return Err(ShallengeError::EmptyAlphabet);
        }

        if let Some(i) = symbols.iter().position(String::is_empty) {
            return Err(ShallengeError::EmptySymbol(i));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for symbol in &symbols {
            if !seen.insert(symbol.as_str()) {
                return Err(ShallengeError::DuplicateSymbol(symbol.clone()));
            }
        }

        Ok(Self { symbols })
    }

    /// Creates an alphabet where every character of `chars` is a symbol.
    pub fn from_chars(chars: &str) -> ShallengeResult<Self> {
        Self::new(chars.chars().map(String::from))
    }

    /// The lowercase latin letters, from `a` to `z`.
    pub fn lowercase() -> Self {
        Self {
            symbols: ('a'..='z').map(String::from).collect(),
        }
    }

    /// Returns the number of symbols, which is the base of the enumeration.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false, an alphabet cannot be built without symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol used for the digit `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone {
        self.symbols.iter().map(String::as_str)
    }

    /// Returns the length in bytes of the longest symbol.
    pub fn max_symbol_len(&self) -> usize {
        self.symbols.iter().map(String::len).max().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            f.write_str(symbol)?;
        }

        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = ShallengeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_chars(s)
    }
}
