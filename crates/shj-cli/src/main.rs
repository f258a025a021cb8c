//! CLI frontend for the Shan Hai Jing creature gacha.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::Options;

#[derive(Parser)]
#[command(
    name = "shj",
    about = "Shan Hai Jing: draw and collect creatures of the Classic of Mountains and Seas",
    version,
    propagate_version = true
)]
struct Cli {
    /// Collection state file
    #[arg(long, global = true, default_value = "shanjing-collection.json")]
    state: PathBuf,

    /// Catalog JSON file (default: the built-in Shan Hai Jing catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// RNG seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a single creature
    Draw,

    /// Draw several creatures at once
    Pull {
        /// Number of draws (default: the configured batch size)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// List every creature and whether it has been discovered
    Bestiary {
        /// Only show one rarity (common, rare, epic, legendary, mythical)
        #[arg(short, long)]
        rarity: Option<String>,

        /// Filter by English or Chinese name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the full lore card of a discovered creature
    Show {
        /// Creature id (e.g. nine-tailed-fox)
        id: String,
    },

    /// Show collection progress
    Progress,

    /// Show the chance of drawing each rarity
    Odds,

    /// Forget every discovery and reset the draw counter
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = Options {
        state: cli.state,
        catalog: cli.catalog,
        seed: cli.seed,
    };

    let result = match cli.command {
        Commands::Draw => commands::draw::run(&opts),
        Commands::Pull { count } => commands::pull::run(&opts, count),
        Commands::Bestiary { rarity, search } => {
            commands::bestiary::run(&opts, rarity.as_deref(), search.as_deref())
        }
        Commands::Show { id } => commands::show::run(&opts, &id),
        Commands::Progress => commands::progress::run(&opts),
        Commands::Odds => commands::odds::run(&opts),
        Commands::Reset { yes } => commands::reset::run(&opts, yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
