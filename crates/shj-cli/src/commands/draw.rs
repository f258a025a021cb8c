use super::{Options, open_engine, print_result, report_unsaved};

pub fn run(opts: &Options) -> Result<(), String> {
    let mut engine = open_engine(opts)?;
    let result = engine.draw().map_err(|e| e.to_string())?;

    print_result(&result);
    println!();
    println!(
        "  {}/{} discovered, {} draws",
        engine.unlocked_count(),
        engine.total_creatures(),
        engine.draw_count()
    );

    report_unsaved(&engine, opts);
    Ok(())
}
