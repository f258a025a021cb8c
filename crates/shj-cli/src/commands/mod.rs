pub mod bestiary;
pub mod draw;
pub mod odds;
pub mod progress;
pub mod pull;
pub mod reset;
pub mod show;

use std::fs;
use std::path::PathBuf;

use colored::{ColoredString, Colorize};

use shj_core::{Catalog, CollectionEngine, DrawResult, EngineConfig, JsonFileStore, Rarity};

/// Options shared by every subcommand.
pub struct Options {
    pub state: PathBuf,
    pub catalog: Option<PathBuf>,
    pub seed: Option<u64>,
}

type Engine = CollectionEngine<JsonFileStore>;

/// Load the catalog and open the collection stored at `opts.state`.
fn open_engine(opts: &Options) -> Result<Engine, String> {
    let catalog = match &opts.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read catalog {}: {e}", path.display()))?;
            Catalog::from_json(&json).map_err(|e| e.to_string())?
        }
        None => Catalog::builtin().map_err(|e| e.to_string())?,
    };

    let mut config = EngineConfig::default();
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }

    let engine = CollectionEngine::open(catalog, JsonFileStore::new(&opts.state), config);
    Ok(engine)
}

/// Warn when the last save did not reach disk.
fn report_unsaved(engine: &Engine, opts: &Options) {
    if engine.is_dirty() {
        eprintln!(
            "warning: progress could not be saved to {}",
            opts.state.display()
        );
    }
}

/// Rarity name in the card palette colour.
fn rarity_label(rarity: Rarity) -> ColoredString {
    let (r, g, b) = match rarity {
        Rarity::Common => (156, 163, 175),
        Rarity::Rare => (96, 165, 250),
        Rarity::Epic => (192, 132, 252),
        Rarity::Legendary => (251, 191, 36),
        Rarity::Mythical => (248, 113, 113),
    };
    rarity.as_str().truecolor(r, g, b)
}

/// Print one draw result as a short card line.
fn print_result(result: &DrawResult) {
    let c = &result.creature;
    let marker = if result.is_new {
        format!("  {}", "NEW!".bold())
    } else {
        String::new()
    };
    println!(
        "  {} {}  [{}]{}",
        c.name.bold(),
        c.name_cn,
        rarity_label(c.rarity),
        marker
    );
    if !c.description.is_empty() {
        println!("    {}", c.description.dimmed());
    }
}
