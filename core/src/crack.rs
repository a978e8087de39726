use std::time::Instant;

use tracing::debug;

use crate::{
    ctx::PasswordSpec,
    error::ShallengeResult,
    event::{Event, Progress},
    matcher::Matcher,
    parallel::run_parallel,
    DEFAULT_BATCH_SIZE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_THREADS,
};

/// The outcome of a crack that ran to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// The password matching the target.
    Found(String),
    /// Every candidate was tested and none matched.
    Exhausted,
}

impl MatchResult {
    pub fn password(&self) -> Option<&str> {
        match self {
            Self::Found(password) => Some(password),
            Self::Exhausted => None,
        }
    }
}

/// Tests every candidate of `spec` from the state `start`, in order,
/// until `test` returns true.
///
/// `progress` receives an [`Event::Started`] first, then an [`Event::Progress`]
/// every time the number of candidates tried is a multiple of `interval`
/// (0 disables progress events). The progress event of a candidate is sent before
/// it is tested. The first error returned by `test` or `progress` aborts the run.
pub fn run<T, P>(
    spec: &PasswordSpec,
    start: u64,
    interval: u64,
    mut test: T,
    mut progress: P,
) -> ShallengeResult<MatchResult>
where
    T: FnMut(&str) -> ShallengeResult<bool>,
    P: FnMut(Event) -> ShallengeResult<()>,
{
    let total = spec.total();
    let started = Instant::now();
    let mut cursor = spec.range(start..total);
    let mut candidate = String::with_capacity(spec.max_password_len());

    progress(Event::Started {
        total,
        start: cursor.state(),
    })?;

    while cursor.next_into(&mut candidate) {
        let tried = cursor.state();

        if interval != 0 && tried % interval == 0 {
            progress(Event::Progress(Progress {
                last: candidate.clone(),
                tried,
                remaining: total - tried,
                elapsed: started.elapsed(),
            }))?;
        }

        if test(&candidate)? {
            return Ok(MatchResult::Found(candidate));
        }
    }

    Ok(MatchResult::Exhausted)
}

/// A builder for a cracker.
#[derive(Clone, Debug)]
pub struct CrackerBuilder {
    progress_interval: u64,
    start_at: u64,
    threads: usize,
    batch_size: u64,
}

impl Default for CrackerBuilder {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            start_at: 0,
            threads: DEFAULT_THREADS,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl CrackerBuilder {
    /// Creates a new CrackerBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of candidates between two progress events.
    /// 0 disables progress events.
    pub fn progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval;

        self
    }

    /// Skips the first `start_at` candidates.
    /// This is the `tried` count of a previous run to resume it.
    pub fn start_at(mut self, start_at: u64) -> Self {
        self.start_at = start_at;

        self
    }

    /// Sets the number of worker threads.
    /// 1 runs the crack on the calling thread, 0 uses one thread per CPU.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;

        self
    }

    /// Sets the number of candidates a worker tests before checking if it should stop.
    /// Only used with several threads.
    pub fn batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size.max(1);

        self
    }

    /// Builds a cracker for the password space.
    pub fn build(self, spec: PasswordSpec) -> Cracker {
        Cracker {
            start_at: self.start_at.min(spec.total()),
            spec,
            progress_interval: self.progress_interval,
            threads: self.threads,
            batch_size: self.batch_size,
        }
    }
}

/// Searches a password space for the preimage of a target.
#[derive(Clone, Debug)]
pub struct Cracker {
    spec: PasswordSpec,
    progress_interval: u64,
    start_at: u64,
    threads: usize,
    batch_size: u64,
}

impl Cracker {
    pub fn spec(&self) -> &PasswordSpec {
        &self.spec
    }

    pub fn progress_interval(&self) -> u64 {
        self.progress_interval
    }

    pub fn start_at(&self) -> u64 {
        self.start_at
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Searches for the password matching the target of `matcher`.
    pub fn crack<P>(&self, matcher: &Matcher, progress: P) -> ShallengeResult<MatchResult>
    where
        P: Fn(Event) -> ShallengeResult<()> + Sync,
    {
        debug!(
            id = matcher.target().id(),
            hash = %matcher.target().hash_function(),
            total = self.spec.total(),
            start = self.start_at,
            threads = self.threads,
            "starting crack"
        );

        let result = if self.threads == 1 {
            let mut matcher = matcher.clone();
            run(
                &self.spec,
                self.start_at,
                self.progress_interval,
                |candidate| matcher.matches(candidate),
                progress,
            )
        } else {
            run_parallel(
                self,
                || {
                    let mut matcher = matcher.clone();
                    move |candidate: &str| matcher.matches(candidate)
                },
                progress,
            )
        }?;

        debug!(found = result.password().is_some(), "crack finished");

        Ok(result)
    }
}
