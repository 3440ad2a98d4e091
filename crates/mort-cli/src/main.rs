//! CLI frontend for Mortimer, the Dark Carnival's death oracle.

mod commands;

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mort",
    about = "Mortimer, the Dark Carnival's death oracle",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consult Mortimer about your demise
    Consult(ConsultArgs),

    /// List the fate tables in match priority order
    Tables,
}

/// Answers and output options for a consultation.
///
/// Required answers left off the command line are asked for on stdin.
#[derive(Args)]
pub struct ConsultArgs {
    /// Your name
    #[arg(long)]
    pub name: Option<String>,

    /// Your age in years
    #[arg(long)]
    pub age: Option<String>,

    /// City or region where you reside
    #[arg(long)]
    pub location: Option<String>,

    /// How you earn your living
    #[arg(long)]
    pub occupation: Option<String>,

    /// What occupies your free time
    #[arg(long)]
    pub hobbies: Option<String>,

    /// What terrifies your mortal heart (optional)
    #[arg(long)]
    pub fears: Option<String>,

    /// RNG seed for a reproducible reading
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Print the prediction as JSON only
    #[arg(long)]
    pub json: bool,

    /// Also print the death certificate
    #[arg(short, long)]
    pub certificate: bool,

    /// Save the prediction as JSON to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Consult(args) => commands::consult::run(&args),
        Commands::Tables => commands::tables::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
