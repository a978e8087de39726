use thiserror::Error;

pub type ShallengeResult<T> = std::result::Result<T, ShallengeError>;

#[derive(Error, Debug)]
pub enum ShallengeError {
    #[error("The alphabet should contain at least one symbol")]
    EmptyAlphabet,

    #[error("The alphabet symbol at index {0} is empty")]
    EmptySymbol(usize),

    #[error("The alphabet symbol {0:?} appears more than once")]
    DuplicateSymbol(String),

    #[error("The password length should be at least 1")]
    ZeroLength,

    #[error("Shallenge only supports spaces up to 2^64, but {base}^{length} is larger")]
    Space { base: u64, length: u32 },

    #[error("The hash function {0:?} is not supported")]
    UnsupportedHash(String),

    #[error("The hashing backend failed to produce a digest")]
    Digest,

    #[error("The target digest is {actual} bytes long but the hash function produces {expected} bytes")]
    DigestLength { expected: usize, actual: usize },

    #[error("The challenge field {field:?} is not valid hexadecimal")]
    Hex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Failed to parse the challenge record")]
    Json(#[from] serde_json::Error),

    #[error("Unable to start the worker threads")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
