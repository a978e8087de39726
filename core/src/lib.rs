//! Brute force of salted password hashes.
//!
//! A [`PasswordSpec`] describes every password of a fixed length over an
//! [`Alphabet`]. Its passwords are enumerated in a fixed order by
//! [`produce`], and a [`Cracker`] tests them with a [`Matcher`] until one
//! hashes to the [`Target`] digest.

pub mod alphabet;
pub mod challenge;
pub mod crack;
pub mod ctx;
pub mod enumerator;
pub mod error;
pub mod event;
pub mod hash;
pub mod matcher;
mod parallel;
pub mod target;

pub use {
    alphabet::Alphabet,
    challenge::Challenge,
    crack::{run, Cracker, CrackerBuilder, MatchResult},
    ctx::{PasswordSpec, PasswordSpecBuilder},
    enumerator::{partition, produce, produce_into, EnumerationCursor},
    error::{ShallengeError, ShallengeResult},
    event::{Event, Progress},
    hash::HashFunction,
    matcher::Matcher,
    target::Target,
};

/// The default password length.
pub const DEFAULT_PASSWORD_LENGTH: u32 = 6;

/// The default alphabet.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// The default number of candidates between two progress events.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000_000;

/// The default number of candidates a worker claims at once.
/// Small enough for the workers to stop quickly once the password is found.
pub const DEFAULT_BATCH_SIZE: u64 = 1 << 16;

/// The default number of worker threads.
pub const DEFAULT_THREADS: usize = 1;
