use comfy_table::{ContentArrangement, Table};

use super::{Options, open_engine, rarity_label};

pub fn run(opts: &Options) -> Result<(), String> {
    let engine = open_engine(opts)?;
    let catalog = engine.catalog();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rarity", "Weight", "Chance", "Creatures"]);

    for (rarity, chance) in catalog.rarity_odds() {
        table.add_row(vec![
            rarity_label(rarity).to_string(),
            catalog.rarity_weight(rarity).to_string(),
            format!("{chance:.1}%"),
            catalog.members(rarity).count().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
