use std::ops::Range;

use crate::{
    alphabet::Alphabet,
    enumerator::EnumerationCursor,
    error::{ShallengeError, ShallengeResult},
    DEFAULT_PASSWORD_LENGTH,
};

/// A builder for a password space.
#[derive(Clone, Debug)]
pub struct PasswordSpecBuilder {
    alphabet: Alphabet,
    length: u32,
}

impl Default for PasswordSpecBuilder {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            length: DEFAULT_PASSWORD_LENGTH,
        }
    }
}

impl PasswordSpecBuilder {
    /// Creates a new PasswordSpecBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alphabet the passwords are made of.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;

        self
    }

    /// Sets the number of symbols in each password.
    pub fn length(mut self, length: u32) -> Self {
        self.length = length;

        self
    }

    /// Builds a PasswordSpec with the specified parameters.
    pub fn build(self) -> ShallengeResult<PasswordSpec> {
        if self.length == 0 {
            return Err(ShallengeError::ZeroLength);
        }

        // the counter is a u64, so the whole space has to fit in it
        let base = self.alphabet.len() as u64;
        let total = base
            .checked_pow(self.length)
            .ok_or(ShallengeError::Space {
                base,
                length: self.length,
            })?;

        Ok(PasswordSpec {
            alphabet: self.alphabet,
            length: self.length,
            total,
        })
    }
}

/// All the passwords of a fixed length over an alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordSpec {
    alphabet: Alphabet,
    length: u32,
    total: u64,
}

impl PasswordSpec {
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The number of symbols in each password.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The size of the search space, `|alphabet|^length`.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The base of the numbering system used to enumerate the passwords.
    #[inline]
    pub fn base(&self) -> u64 {
        self.alphabet.len() as u64
    }

    /// Returns a cursor over every password of the space.
    pub fn iter(&self) -> EnumerationCursor<'_> {
        EnumerationCursor::new(self)
    }

    /// Returns a cursor over the passwords whose state is in `range`.
    /// The range is clamped to the search space.
    pub fn range(&self, range: Range<u64>) -> EnumerationCursor<'_> {
        EnumerationCursor::with_range(self, range)
    }

    /// The maximum size in bytes of a password.
    pub(crate) fn max_password_len(&self) -> usize {
        self.alphabet.max_symbol_len() * self.length as usize
    }
}

impl<'a> IntoIterator for &'a PasswordSpec {
    type Item = String;
    type IntoIter = EnumerationCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub fn build_test_spec() -> PasswordSpec {
    PasswordSpecBuilder::new()
        .alphabet(Alphabet::from_chars("abc").unwrap())
        .length(3)
        .build()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use crate::{alphabet::Alphabet, ctx::PasswordSpecBuilder, error::ShallengeError};

    #[test]
    fn test_default_spec() {
        let spec = PasswordSpecBuilder::new().build().unwrap();
        assert_eq!(26, spec.base());
        assert_eq!(6, spec.length());
        assert_eq!(308_915_776, spec.total());
    }

    #[test]
    fn test_total_is_exact() {
        let spec = PasswordSpecBuilder::new()
            .alphabet(Alphabet::from_chars("xy").unwrap())
            .length(2)
            .build()
            .unwrap();
        assert_eq!(4, spec.total());

        // 2^64 does not fit, 2^63 does
        let spec = PasswordSpecBuilder::new()
            .alphabet(Alphabet::from_chars("01").unwrap())
            .length(63)
            .build()
            .unwrap();
        assert_eq!(1 << 63, spec.total());
    }

    #[test]
    fn test_single_symbol_alphabet() {
        let spec = PasswordSpecBuilder::new()
            .alphabet(Alphabet::new(["ab"]).unwrap())
            .length(3)
            .build()
            .unwrap();
        assert_eq!(1, spec.total());
        assert_eq!(6, spec.max_password_len());
    }

    #[test]
    fn test_overflow_is_rejected() {
        let result = PasswordSpecBuilder::new()
            .alphabet(Alphabet::from_chars("01").unwrap())
            .length(64)
            .build();
        assert!(matches!(
            result,
            Err(ShallengeError::Space {
                base: 2,
                length: 64
            })
        ));

        let result = PasswordSpecBuilder::new().length(14).build();
        assert!(matches!(result, Err(ShallengeError::Space { .. })));
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let result = PasswordSpecBuilder::new().length(0).build();
        assert!(matches!(result, Err(ShallengeError::ZeroLength)));
    }
}
