use comfy_table::{ContentArrangement, Table};
use shj_core::{BestiaryFilter, Rarity};

use super::{Options, open_engine, rarity_label};

pub fn run(opts: &Options, rarity: Option<&str>, search: Option<&str>) -> Result<(), String> {
    let engine = open_engine(opts)?;

    let mut filter = BestiaryFilter::new();
    if let Some(rarity_str) = rarity {
        let rarity = rarity_str
            .parse::<Rarity>()
            .map_err(|e| e.to_string())?;
        filter = filter.with_rarity(rarity);
    }
    if let Some(query) = search {
        filter = filter.with_search(query);
    }

    let entries = engine.bestiary(&filter);
    if entries.is_empty() {
        println!("  No creatures match your filters.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Chinese", "Rarity", "Element"]);

    for entry in &entries {
        let c = entry.creature;
        let rarity = rarity_label(c.rarity).to_string();
        if entry.unlocked {
            table.add_row(vec![
                c.id.clone(),
                c.name.clone(),
                c.name_cn.clone(),
                rarity,
                c.element.to_string(),
            ]);
        } else {
            table.add_row(vec![
                "???".to_string(),
                "???".to_string(),
                "???".to_string(),
                rarity,
                "?".to_string(),
            ]);
        }
    }

    println!("{table}");
    println!();
    println!(
        "  {}/{} discovered ({}%)",
        engine.unlocked_count(),
        engine.total_creatures(),
        engine.progress_percent()
    );

    Ok(())
}
