use anyhow::{Context, Result};
use tracing::info;

use shallenge_core::MatchResult;

use crate::{crack::search, service::ChallengeService, Challenge};

pub fn challenge(args: Challenge) -> Result<MatchResult> {
    let service = ChallengeService::new(&args.origin)?;

    let challenge = service.generate()?;
    let id = challenge.id.clone();
    let target = challenge.into_target(args.search.hash_function.into())?;

    let result = search(&args.search, target)?;

    let MatchResult::Found(password) = &result else {
        eprintln!("No password found for challenge {id}");
        return Ok(result);
    };

    println!("{password}");

    if args.no_submit {
        return Ok(result);
    }

    let flag = service
        .submit(&id, password)
        .with_context(|| format!("Unable to submit the answer of challenge {id}"))?;

    info!(%id, "answer accepted");
    println!("{flag}");

    Ok(result)
}
