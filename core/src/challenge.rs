use serde::{Deserialize, Serialize};

use crate::{error::ShallengeResult, hash::HashFunction, target::Target};

/// A challenge as sent by the challenge service.
/// The hash and the salt are hex-encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub hash: String,
    pub salt: String,
}

impl Challenge {
    /// Parses a challenge from its JSON representation.
    pub fn from_json(json: &str) -> ShallengeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes the challenge into a target for `hash_function`.
    pub fn into_target(self, hash_function: HashFunction) -> ShallengeResult<Target> {
        Target::from_hex(self.id, &self.hash, &self.salt, hash_function)
    }
}
