//! Prints random strings matching a regular expression.
//!
//! Run with: `regex-gen [OPTIONS] <PATTERN>`

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use regex_gen::{Pattern, MAX_REPEAT};

#[derive(Parser)]
#[command(name = "regex-gen")]
#[command(about = "Generates random strings matching a regular expression")]
#[command(version)]
struct Cli {
    /// Regular expression to generate from
    pattern: String,

    /// Extra repetitions allowed for `*`, `+` and `{n,}`
    #[arg(short = 'r', long, env = "REGEX_GEN_MAX_REPEAT", default_value_t = MAX_REPEAT)]
    max_repeat: u32,

    /// Fail if a generated string grows past this many bytes
    #[arg(long, env = "REGEX_GEN_MAX_LEN")]
    max_len: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of strings to print, one per line
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Restrict classes like `\w` and `\d` to ASCII
    #[arg(long)]
    ascii: bool,

    /// Case insensitive matching
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Print the parsed pattern instead of generating
    #[arg(long)]
    ast: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut builder = Pattern::builder();
    builder
        .unicode(!cli.ascii)
        .case_insensitive(cli.ignore_case)
        .max_repeat(cli.max_repeat);
    if let Some(len) = cli.max_len {
        builder.max_len(len);
    }
    let pattern = builder
        .build(&cli.pattern)
        .with_context(|| format!("invalid pattern {:?}", cli.pattern))?;
    debug!(%pattern, "parsed");

    if cli.ast {
        println!("{}", pattern);
        return Ok(());
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(count = cli.count, seed = ?cli.seed, "generating");

    for i in 0..cli.count {
        let s: String = pattern
            .generate(&mut rng)
            .with_context(|| format!("failed to generate string {} for {:?}", i + 1, cli.pattern))?;
        println!("{}", s);
    }
    Ok(())
}
