use shj_core::Rarity;

use super::{Options, open_engine, rarity_label};

pub fn run(opts: &Options) -> Result<(), String> {
    let engine = open_engine(opts)?;

    println!(
        "  Discovered: {}/{} ({}%)",
        engine.unlocked_count(),
        engine.total_creatures(),
        engine.progress_percent()
    );
    println!("  Draws:      {}", engine.draw_count());
    match engine.last_draw_time() {
        Some(at) => println!("  Last draw:  {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("  Last draw:  never"),
    }

    println!();
    for rarity in Rarity::ALL {
        let members: Vec<_> = engine.catalog().members(rarity).collect();
        if members.is_empty() {
            continue;
        }
        let found = members.iter().filter(|c| engine.is_unlocked(&c.id)).count();
        println!(
            "  {:<10} {}/{}",
            rarity_label(rarity),
            found,
            members.len()
        );
    }

    Ok(())
}
