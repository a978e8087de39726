use std::{fs, time::Instant};

use anyhow::{Context, Result};
use human_repr::{HumanCount, HumanDuration};
use tracing::{info, warn};

use shallenge_core::{
    Challenge, CrackerBuilder, Event, MatchResult, Matcher, PasswordSpecBuilder,
    ShallengeResult, Target,
};

use crate::{Crack, SearchArgs};

pub fn crack(args: Crack) -> Result<MatchResult> {
    let hash_function = args.search.hash_function.into();

    let target = match &args.challenge {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Unable to read the challenge at {}", path.display()))?;

            Challenge::from_json(&json)
                .context("Unable to parse the challenge")?
                .into_target(hash_function)?
        }
        None => Target::from_hex(
            args.id,
            args.hash.as_deref().unwrap_or_default(),
            &args.salt,
            hash_function,
        )?,
    };

    let result = search(&args.search, target)?;

    match &result {
        MatchResult::Found(password) => println!("{password}"),
        MatchResult::Exhausted => eprintln!("No password found for the given digest"),
    }

    Ok(result)
}

/// Searches the password space described by `args` for the password of `target`.
pub fn search(args: &SearchArgs, target: Target) -> Result<MatchResult> {
    let spec = PasswordSpecBuilder::new()
        .alphabet(args.alphabet.clone())
        .length(args.length)
        .build()
        .context("Invalid password space")?;

    info!(
        id = target.id(),
        hash = %hex::encode(target.digest()),
        salt = %hex::encode(target.salt()),
        "got target"
    );

    let cracker = CrackerBuilder::new()
        .progress_interval(args.progress_interval)
        .start_at(args.start_at)
        .threads(args.threads)
        .batch_size(args.batch_size)
        .build(spec);

    let started = Instant::now();
    let result = cracker.crack(&Matcher::new(target), log_event)?;
    let elapsed = started.elapsed().as_secs_f64().human_duration();

    match &result {
        MatchResult::Found(password) => info!(%elapsed, "valid password found: {password}"),
        MatchResult::Exhausted => warn!(%elapsed, "every password was tested, none matched"),
    }

    Ok(result)
}

fn log_event(event: Event) -> ShallengeResult<()> {
    match event {
        Event::Started { total, start } => {
            info!(
                start,
                "got {} passwords to test",
                total.human_count_bare()
            );
        }
        Event::Progress(progress) => {
            info!(
                last = %progress.last,
                tried = progress.tried,
                remains = progress.remaining,
                elapsed = %progress.elapsed.as_secs_f64().human_duration(),
                "{:.2}% done",
                progress.ratio() * 100.
            );
        }
    }

    Ok(())
}
