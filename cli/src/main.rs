mod challenge;
mod crack;
mod service;

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{value_parser, ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::{error, Level};

use shallenge_core::{
    Alphabet, HashFunction, MatchResult, DEFAULT_ALPHABET, DEFAULT_BATCH_SIZE,
    DEFAULT_PASSWORD_LENGTH, DEFAULT_PROGRESS_INTERVAL, DEFAULT_THREADS,
};

use challenge::challenge;
use crack::crack;
use service::DEFAULT_ORIGIN;

/// Exit code when every password was tested without success.
const EXIT_EXHAUSTED: u8 = 1;

/// Exit code when the crack could not run.
const EXIT_ERROR: u8 = 2;

/// All the hash functions supported.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum HashFunctionArg {
    Md4,
    Md5,
    Sha1,
    Sha2_224,
    Sha2_256,
    Sha2_384,
    Sha2_512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl From<HashFunctionArg> for HashFunction {
    fn from(arg: HashFunctionArg) -> Self {
        match arg {
            HashFunctionArg::Md4 => HashFunction::Md4,
            HashFunctionArg::Md5 => HashFunction::Md5,
            HashFunctionArg::Sha1 => HashFunction::Sha1,
            HashFunctionArg::Sha2_224 => HashFunction::Sha2_224,
            HashFunctionArg::Sha2_256 => HashFunction::Sha2_256,
            HashFunctionArg::Sha2_384 => HashFunction::Sha2_384,
            HashFunctionArg::Sha2_512 => HashFunction::Sha2_512,
            HashFunctionArg::Sha3_224 => HashFunction::Sha3_224,
            HashFunctionArg::Sha3_256 => HashFunction::Sha3_256,
            HashFunctionArg::Sha3_384 => HashFunction::Sha3_384,
            HashFunctionArg::Sha3_512 => HashFunction::Sha3_512,
        }
    }
}

/// Brute force salted password hashes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Show more logs. Can be repeated.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only show warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    Crack(Crack),
    Challenge(Challenge),
}

/// The password space and how to search it.
#[derive(Args, Clone)]
pub struct SearchArgs {
    /// The characters a password is made of.
    /// Their order is the enumeration order.
    #[arg(short, long, default_value = DEFAULT_ALPHABET)]
    alphabet: Alphabet,

    /// The length of the password.
    #[arg(short, long, value_parser = value_parser!(u32).range(1..=64), default_value_t = DEFAULT_PASSWORD_LENGTH)]
    length: u32,

    /// The hash function used to compute the digest.
    #[arg(long = "hash-function", value_enum, default_value_t = HashFunctionArg::Sha2_256)]
    hash_function: HashFunctionArg,

    /// The number of worker threads. 0 uses one thread per CPU.
    #[arg(short = 'j', long, default_value_t = DEFAULT_THREADS)]
    threads: usize,

    /// Log the progress every time this number of passwords is tested. 0 disables it.
    #[arg(short, long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,

    /// Skip the first passwords.
    /// Use the `tried` count of a previous run to resume it.
    #[arg(short, long, default_value_t = 0)]
    start_at: u64,

    /// The number of passwords a worker tests before checking if the password was found.
    #[arg(long, value_parser = value_parser!(u64).range(1..), default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: u64,
}

/// Find the password of a salted digest.
#[derive(Args)]
pub struct Crack {
    /// The digest to attack, in hexadecimal.
    #[arg(long, value_parser = check_hex, required_unless_present = "challenge")]
    hash: Option<String>,

    /// The salt prepended to the password, in hexadecimal.
    #[arg(long, value_parser = check_hex, default_value = "")]
    salt: String,

    /// An identifier for the target, only used in the logs.
    #[arg(long, default_value = "local")]
    id: String,

    /// A JSON challenge file with the `id`, `hash` and `salt` fields.
    #[arg(short, long, conflicts_with = "hash")]
    challenge: Option<PathBuf>,

    #[command(flatten)]
    search: SearchArgs,
}

/// Fetch a challenge from the challenge service, crack it and submit the answer.
#[derive(Args)]
pub struct Challenge {
    /// The origin of the challenge service.
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Only print the password, don't submit it.
    #[arg(long)]
    no_submit: bool,

    #[command(flatten)]
    search: SearchArgs,
}

/// Checks if the string is valid hexadecimal.
fn check_hex(hex: &str) -> Result<String> {
    hex::decode(hex).context("The value is not valid hexadecimal")?;
    Ok(hex.to_owned())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let outcome = match cli.commands {
        Commands::Crack(args) => crack(args),
        Commands::Challenge(args) => challenge(args),
    };

    match outcome {
        Ok(MatchResult::Found(_)) => ExitCode::SUCCESS,
        Ok(MatchResult::Exhausted) => ExitCode::from(EXIT_EXHAUSTED),
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use shallenge_core::{HashFunction, DEFAULT_PROGRESS_INTERVAL};

    use crate::{Cli, Commands};

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_crack_defaults() {
        let cli = Cli::try_parse_from(["shallenge", "crack", "--hash", "00ff"]).unwrap();
        let Commands::Crack(args) = cli.commands else {
            panic!("expected the crack command");
        };

        assert_eq!(Some("00ff"), args.hash.as_deref());
        assert_eq!("", args.salt);
        assert_eq!(26, args.search.alphabet.len());
        assert_eq!(6, args.search.length);
        assert_eq!(1, args.search.threads);
        assert_eq!(DEFAULT_PROGRESS_INTERVAL, args.search.progress_interval);
        assert_eq!(
            HashFunction::Sha2_256,
            HashFunction::from(args.search.hash_function)
        );
    }

    #[test]
    fn test_crack_rejects_bad_arguments() {
        for args in [
            vec!["shallenge", "crack"],
            vec!["shallenge", "crack", "--hash", "xyz"],
            vec!["shallenge", "crack", "--hash", "00", "--length", "0"],
            vec!["shallenge", "crack", "--hash", "00", "--alphabet", "aa"],
            vec!["shallenge", "crack", "--hash", "00", "--challenge", "c.json"],
        ] {
            assert!(Cli::try_parse_from(args).is_err());
        }
    }

    #[test]
    fn test_hash_function_names() {
        let cli = Cli::try_parse_from([
            "shallenge",
            "challenge",
            "--hash-function",
            "sha3-512",
            "-j",
            "0",
        ])
        .unwrap();
        let Commands::Challenge(args) = cli.commands else {
            panic!("expected the challenge command");
        };

        assert_eq!(
            HashFunction::Sha3_512,
            HashFunction::from(args.search.hash_function)
        );
        assert_eq!(0, args.search.threads);
        assert!(!args.no_submit);
    }
}
