use std::{fmt::Display, str::FromStr};

use digest::{Digest, DynDigest};
use md4::Md4;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::error::ShallengeError;

/// All the supported hash functions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Md4,
    Md5,
    Sha1,
    Sha2_224,
    #[default]
    Sha2_256,
    Sha2_384,
    Sha2_512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl HashFunction {
    pub const ALL: [HashFunction; 11] = [
        Self::Md4,
        Self::Md5,
        Self::Sha1,
        Self::Sha2_224,
        Self::Sha2_256,
        Self::Sha2_384,
        Self::Sha2_512,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
    ];

    /// Returns a fresh hasher for this hash function.
    pub fn hasher(&self) -> Box<dyn DynDigest + Send + Sync> {
        match self {
            Self::Md4 => Box::new(Md4::new()),
            Self::Md5 => Box::new(Md5::new()),
            Self::Sha1 => Box::new(Sha1::new()),
            Self::Sha2_224 => Box::new(Sha224::new()),
            Self::Sha2_256 => Box::new(Sha256::new()),
            Self::Sha2_384 => Box::new(Sha384::new()),
            Self::Sha2_512 => Box::new(Sha512::new()),
            Self::Sha3_224 => Box::new(Sha3_224::new()),
            Self::Sha3_256 => Box::new(Sha3_256::new()),
            Self::Sha3_384 => Box::new(Sha3_384::new()),
            Self::Sha3_512 => Box::new(Sha3_512::new()),
        }
    }

    /// Gets the digest size in bytes.
    pub fn digest_size(&self) -> usize {
        match self {
            Self::Md4 => <Md4 as Digest>::output_size(),
            Self::Md5 => <Md5 as Digest>::output_size(),
            Self::Sha1 => <Sha1 as Digest>::output_size(),
            Self::Sha2_224 => <Sha224 as Digest>::output_size(),
            Self::Sha2_256 => <Sha256 as Digest>::output_size(),
            Self::Sha2_384 => <Sha384 as Digest>::output_size(),
            Self::Sha2_512 => <Sha512 as Digest>::output_size(),
            Self::Sha3_224 => <Sha3_224 as Digest>::output_size(),
            Self::Sha3_256 => <Sha3_256 as Digest>::output_size(),
            Self::Sha3_384 => <Sha3_384 as Digest>::output_size(),
            Self::Sha3_512 => <Sha3_512 as Digest>::output_size(),
        }
    }

    /// Hashes the concatenation of `parts`.
    pub fn digest(&self, parts: &[&[u8]]) -> Vec<u8> {
        let mut hasher = self.hasher();
        for part in parts {
            hasher.update(part);
        }

        hasher.finalize().into_vec()
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Md4 => "md4",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha2_224 => "sha2-224",
            Self::Sha2_256 => "sha2-256",
            Self::Sha2_384 => "sha2-384",
            Self::Sha2_512 => "sha2-512",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
        }
    }
}

impl Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFunction {
    type Err = ShallengeError;

    /// Parses names like `sha2-256`, `SHA-256`, `sha256` or `sha2_256`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        let hash_function = match normalized.as_str() {
            "md4" => Self::Md4,
            "md5" => Self::Md5,
            "sha1" => Self::Sha1,
            "sha224" | "sha2224" => Self::Sha2_224,
            "sha256" | "sha2256" => Self::Sha2_256,
            "sha384" | "sha2384" => Self::Sha2_384,
            "sha512" | "sha2512" => Self::Sha2_512,
            "sha3224" => Self::Sha3_224,
            "sha3256" => Self::Sha3_256,
            "sha3384" => Self::Sha3_384,
            "sha3512" => Self::Sha3_512,
            _ => return Err(ShallengeError::UnsupportedHash(s.to_owned())),
        };

        Ok(hash_function)
    }
}
