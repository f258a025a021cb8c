use super::{Options, open_engine, report_unsaved};

pub fn run(opts: &Options, confirmed: bool) -> Result<(), String> {
    if !confirmed {
        return Err("reset erases every discovery; re-run with --yes to confirm".into());
    }

    let mut engine = open_engine(opts)?;
    engine.reset();
    println!("  Collection reset. 0/{} discovered.", engine.total_creatures());

    report_unsaved(&engine, opts);
    Ok(())
}
