use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use esgen_core::{GeneratorConfig, MembershipProbability, OutputFormat};

#[derive(Parser)]
#[command(name = "esgen", about = "Random enumerated-set fixture generator")]
struct Cli {
    /// JSON file with generator settings; flags override it
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of keys, 0..N-1
    #[arg(long, value_name = "N")]
    max_size: Option<u64>,

    /// Chance each key is a member, in [0, 1]
    #[arg(long, value_name = "P")]
    probability: Option<MembershipProbability>,

    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum)]
    format: Option<CliFormat>,
}

#[derive(ValueEnum, Clone, Copy)]
enum CliFormat {
    Go,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Go => OutputFormat::Go,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: Cli) -> Result<GeneratorConfig> {
    let mut cfg = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(n) = cli.max_size {
        cfg.max_size = n;
    }
    if let Some(p) = cli.probability {
        cfg.membership_probability = p.get();
    }
    if let Some(seed) = cli.seed {
        cfg.seed = Some(seed);
    }
    if let Some(f) = cli.format {
        cfg.format = f.into();
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    init_logging();
    let cfg = resolve_config(Cli::parse())?;
    tracing::info!(
        max_size = cfg.max_size,
        probability = cfg.membership_probability,
        seed = ?cfg.seed,
        format = ?cfg.format,
        "generating enum set"
    );

    let text = cfg.generate()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    // the rendered text ends in a newline already; one more leaves a blank line
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
