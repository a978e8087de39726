use digest::DynDigest;

use crate::{
    error::{ShallengeError, ShallengeResult},
    target::Target,
};

/// Tests candidates against a target without allocating.
/// The hasher is reset after every candidate, so the result of a call
/// never depends on the previous ones.
pub struct Matcher {
    target: Target,
    hasher: Box<dyn DynDigest + Send + Sync>,
    digest: Vec<u8>,
}

impl Matcher {
    /// Creates a new matcher for the target.
    pub fn new(target: Target) -> Self {
        let hasher = target.hash_function().hasher();
        let digest = vec![0; hasher.output_size()];

        Self {
            target,
            hasher,
            digest,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Returns true if `Hash(salt || candidate)` equals the target digest.
    #[inline]
    pub fn matches(&mut self, candidate: &str) -> ShallengeResult<bool> {
        self.hasher.update(self.target.salt());
        self.hasher.update(candidate.as_bytes());
        self.hasher
            .finalize_into_reset(&mut self.digest)
            .map_err(|_| ShallengeError::Digest)?;

        Ok(self.digest == self.target.digest())
    }
}

impl Clone for Matcher {
    fn clone(&self) -> Self {
        Self::new(self.target.clone())
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
