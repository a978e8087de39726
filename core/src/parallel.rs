//! Multithreaded search of a password space.
//!
//! Workers claim contiguous batches of states from a shared counter.
//! A worker checks the stop flag before claiming a batch, so once a password is
//! found (or an error occurs) the other workers stop after their current batch.

use std::{
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
    time::Instant,
};

use rayon::ThreadPoolBuilder;
use tracing::trace;

use crate::{
    crack::{Cracker, MatchResult},
    ctx::PasswordSpec,
    error::ShallengeResult,
    event::{Event, Progress},
};

/// State shared by all the workers of a crack.
struct Shared {
    /// The first state of the next batch to claim.
    next: AtomicU64,
    /// The number of candidates tested, batches are counted once finished.
    tried: AtomicU64,
    /// Set when a worker found the password or failed.
    stop: AtomicBool,
    started: Instant,
}

impl Shared {
    /// Claims the next batch, or returns None if the space is exhausted.
    fn claim(&self, batch_size: u64, total: u64) -> Option<(u64, u64)> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                (next < total).then(|| next.saturating_add(batch_size).min(total))
            })
            .ok()
            .map(|start| (start, start.saturating_add(batch_size).min(total)))
    }
}

/// Searches the space of `cracker` with a pool of worker threads.
/// `make_test` is called once per worker to build its own test function.
pub(crate) fn run_parallel<F, T, P>(
    cracker: &Cracker,
    make_test: F,
    progress: P,
) -> ShallengeResult<MatchResult>
where
    F: Fn() -> T + Sync,
    T: FnMut(&str) -> ShallengeResult<bool>,
    P: Fn(Event) -> ShallengeResult<()> + Sync,
{
    let spec = cracker.spec();
    let total = spec.total();
    let start = cracker.start_at();

    let pool = ThreadPoolBuilder::new()
        .num_threads(cracker.threads())
        .thread_name(|i| format!("shallenge-worker-{i}"))
        .build()?;

    let shared = Shared {
        next: AtomicU64::new(start),
        tried: AtomicU64::new(start),
        stop: AtomicBool::new(false),
        started: Instant::now(),
    };

    progress(Event::Started { total, start })?;

    let results = pool.broadcast(|ctx| {
        trace!(worker = ctx.index(), "worker started");
        let result = worker(
            spec,
            &shared,
            cracker.batch_size(),
            cracker.progress_interval(),
            make_test(),
            &progress,
        );

        if !matches!(result, Ok(None)) {
            shared.stop.store(true, Ordering::Relaxed);
        }

        result
    });

    let mut found = None;
    for result in results {
        if let Some(password) = result? {
            found.get_or_insert(password);
        }
    }

    Ok(found.map_or(MatchResult::Exhausted, MatchResult::Found))
}

/// Tests batches until the space is exhausted or another worker asks to stop.
fn worker<T, P>(
    spec: &PasswordSpec,
    shared: &Shared,
    batch_size: u64,
    interval: u64,
    mut test: T,
    progress: &P,
) -> ShallengeResult<Option<String>>
where
    T: FnMut(&str) -> ShallengeResult<bool>,
    P: Fn(Event) -> ShallengeResult<()>,
{
    let total = spec.total();
    let mut candidate = String::with_capacity(spec.max_password_len());

    while !shared.stop.load(Ordering::Relaxed) {
        let Some((batch_start, batch_end)) = shared.claim(batch_size, total) else {
            break;
        };

        let mut cursor = spec.range(batch_start..batch_end);
        while cursor.next_into(&mut candidate) {
            if test(&candidate)? {
                return Ok(Some(candidate));
            }
        }

        let batch_len = batch_end - batch_start;
        let before = shared.tried.fetch_add(batch_len, Ordering::Relaxed);
        let tried = before + batch_len;

        if interval != 0 && before / interval != tried / interval {
            progress(Event::Progress(Progress {
                last: candidate.clone(),
                tried,
                remaining: total - tried,
                elapsed: shared.started.elapsed(),
            }))?;
        }
    }

    Ok(None)
}
