use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sluice stormwater drainage design calculators.
#[derive(Parser)]
#[command(
    name = "sluice",
    version,
    about = "Stormwater drainage design calculators"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Solve the spread and depth of a composite gutter for a target flow.
    Gutter(GutterArgs),
    /// Interception of a grate inlet on a continuous grade (HEC-22).
    InletGrade(InletGradeArgs),
    /// Capacity of a grate inlet in a sag (HEC-22).
    InletSag(InletSagArgs),
    /// Monte Carlo of lifespan-average peak discharge with wildfire effects.
    Wildfire(WildfireArgs),
    /// Sensitivity of the wildfire outcome to the fire effect duration.
    Sweep(SweepArgs),
    /// Monte Carlo comparison of time of concentration methods.
    Tc(TcArgs),
    /// Rainfall intensity table from a gridded depth-duration-frequency file.
    Idf(IdfArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the result as a JSON report to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `gutter` subcommand.
#[derive(clap::Args)]
pub struct GutterArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override the target flow (m³/s) from config.
    #[arg(short, long)]
    pub flow: Option<f64>,

    /// Extrapolate past the sampled spread range instead of failing.
    #[arg(long)]
    pub extrapolate: bool,
}

/// Arguments for the `inlet-grade` subcommand.
#[derive(clap::Args)]
pub struct InletGradeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override the grate type from config (e.g. "P-1-7/8", "Curved Vane").
    #[arg(short, long)]
    pub grate: Option<String>,

    /// Override the spread from config.
    #[arg(short, long)]
    pub spread: Option<f64>,
}

/// Arguments for the `inlet-sag` subcommand.
#[derive(clap::Args)]
pub struct InletSagArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override the grate type from config.
    #[arg(short, long)]
    pub grate: Option<String>,

    /// Override the design flow from config.
    #[arg(short, long)]
    pub flow: Option<f64>,

    /// Override the depth at the curb from config.
    #[arg(short, long)]
    pub depth: Option<f64>,
}

/// Arguments for the `wildfire` subcommand.
#[derive(clap::Args)]
pub struct WildfireArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the number of trials from config.
    #[arg(short = 'n', long)]
    pub trials: Option<usize>,

    /// Run trials in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Write one row per trial to this delimited file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the per-year breakdown of the first trial to this delimited file.
    #[arg(long)]
    pub years: Option<PathBuf>,
}

/// Arguments for the `sweep` subcommand.
#[derive(clap::Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the number of trials from config.
    #[arg(short = 'n', long)]
    pub trials: Option<usize>,

    /// Effect durations in years, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    pub durations: Option<Vec<usize>>,
}

/// Arguments for the `tc` subcommand.
#[derive(clap::Args)]
pub struct TcArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the number of iterations from config.
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// Methods to run, comma separated; the whole catalog when omitted.
    #[arg(short, long, value_delimiter = ',')]
    pub methods: Option<Vec<String>>,

    /// Use the extended catalog (adds the overland, lag, velocity and
    /// rational variants).
    #[arg(long)]
    pub extended: bool,
}

/// Arguments for the `idf` subcommand.
#[derive(clap::Args)]
pub struct IdfArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Gridded precipitation file (columns lat, lon, RP, duration, precip_mm).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Latitude of the site (degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the site (degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Return period (years); lists the available ones when omitted.
    #[arg(short, long)]
    pub return_period: Option<f64>,
}
