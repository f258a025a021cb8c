use colored::Colorize;

use super::{Options, open_engine, rarity_label};

pub fn run(opts: &Options, id: &str) -> Result<(), String> {
    let engine = open_engine(opts)?;
    let creature = engine.creature_by_id(id).map_err(|e| e.to_string())?;

    if !engine.is_unlocked(id) {
        println!(
            "  ??? [{}] has not been discovered yet. Keep drawing!",
            rarity_label(creature.rarity)
        );
        return Ok(());
    }

    println!(
        "  {} {} [{}]",
        creature.name.bold(),
        creature.name_cn,
        rarity_label(creature.rarity)
    );
    println!();

    if !creature.description.is_empty() {
        println!("  {}", creature.description);
        println!();
    }

    println!("  element:    {}", creature.element);
    if !creature.origin.is_empty() {
        println!("  origin:     {}", creature.origin);
    }
    if !creature.abilities.is_empty() {
        println!("  abilities:  {}", creature.abilities.join(", "));
    }

    if !creature.lore.is_empty() {
        println!();
        println!("  {}", "Lore".dimmed());
        println!("  {}", creature.lore);
    }

    Ok(())
}
