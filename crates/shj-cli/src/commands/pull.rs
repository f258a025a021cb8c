use super::{Options, open_engine, print_result, report_unsaved};

pub fn run(opts: &Options, count: Option<usize>) -> Result<(), String> {
    let mut engine = open_engine(opts)?;
    let results = match count {
        Some(n) => engine.draw_multiple(n),
        None => engine.draw_batch(),
    }
    .map_err(|e| e.to_string())?;

    if results.is_empty() {
        println!("  Nothing drawn.");
        return Ok(());
    }

    for result in &results {
        print_result(result);
    }

    let new = results.iter().filter(|r| r.is_new).count();
    println!();
    println!(
        "  {} draw{}, {} new",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        new
    );
    println!(
        "  {}/{} discovered ({}%)",
        engine.unlocked_count(),
        engine.total_creatures(),
        engine.progress_percent()
    );

    report_unsaved(&engine, opts);
    Ok(())
}
