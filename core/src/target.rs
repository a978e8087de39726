use crate::{
    error::{ShallengeError, ShallengeResult},
    hash::HashFunction,
};

/// A salted digest to find the preimage of.
/// The digest and the salt are raw bytes, decoded from the challenge record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    id: String,
    digest: Vec<u8>,
    salt: Vec<u8>,
    hash_function: HashFunction,
}

impl Target {
    /// Creates a new target.
    /// Fails if the digest size doesn't match the output size of `hash_function`.
    pub fn new(
        id: impl Into<String>,
        digest: Vec<u8>,
        salt: Vec<u8>,
        hash_function: HashFunction,
    ) -> ShallengeResult<Self> {
        let expected = hash_function.digest_size();
        if digest.len() != expected {
            return Err(ShallengeError::DigestLength {
                expected,
                actual: digest.len(),
            });
        }

        Ok(Self {
            id: id.into(),
            digest,
            salt,
            hash_function,
        })
    }

    /// Creates a new target from a hex-encoded digest and salt.
    pub fn from_hex(
        id: impl Into<String>,
        digest: &str,
        salt: &str,
        hash_function: HashFunction,
    ) -> ShallengeResult<Self> {
        let digest = hex::decode(digest).map_err(|source| ShallengeError::Hex {
            field: "hash",
            source,
        })?;
        let salt = hex::decode(salt).map_err(|source| ShallengeError::Hex {
            field: "salt",
            source,
        })?;

        Self::new(id, digest, salt, hash_function)
    }

    /// The opaque identifier of the challenge this target comes from.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Checks if `Hash(salt || candidate)` is the digest of this target.
    /// Use a [`Matcher`](crate::Matcher) to test many candidates.
    pub fn matches(&self, candidate: &str) -> bool {
        self.hash_function
            .digest(&[self.salt.as_slice(), candidate.as_bytes()])
            == self.digest
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::ShallengeError, hash::HashFunction, target::Target};

    #[test]
    fn test_matches_without_salt() {
        let digest = HashFunction::Sha2_256.digest(&[b"abcdef".as_slice()]);
        let target = Target::new("id", digest, Vec::new(), HashFunction::Sha2_256).unwrap();

        assert!(target.matches("abcdef"));
        assert!(!target.matches("abcdeg"));
    }

    #[test]
    fn test_salt_comes_first() {
        let digest = HashFunction::Sha2_256.digest(&[b"salt".as_slice(), b"pass"]);
        let target = Target::new("id", digest, b"salt".to_vec(), HashFunction::Sha2_256).unwrap();
        assert!(target.matches("pass"));

        let digest = HashFunction::Sha2_256.digest(&[b"pass".as_slice(), b"salt"]);
        let target = Target::new("id", digest, b"salt".to_vec(), HashFunction::Sha2_256).unwrap();
        assert!(!target.matches("pass"));
    }

    #[test]
    fn test_from_hex() {
        let target = Target::from_hex(
            "6b2c7e3a",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            "",
            HashFunction::Sha2_256,
        )
        .unwrap();

        assert_eq!("6b2c7e3a", target.id());
        assert!(target.salt().is_empty());
        assert!(target.matches("abc"));
    }

    #[test]
    fn test_rejects_bad_digests() {
        let result = Target::from_hex("id", "zz", "", HashFunction::Sha2_256);
        assert!(matches!(
            result,
            Err(ShallengeError::Hex { field: "hash", .. })
        ));

        let result = Target::from_hex("id", "00", "0", HashFunction::Sha2_256);
        assert!(matches!(
            result,
            Err(ShallengeError::Hex { field: "salt", .. })
        ));

        let result = Target::from_hex("id", "0011", "", HashFunction::Sha2_256);
        assert!(matches!(
            result,
            Err(ShallengeError::DigestLength {
                expected: 32,
                actual: 2
            })
        ));
    }
}
