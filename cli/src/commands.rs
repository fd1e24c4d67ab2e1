use std::error::Error;
use std::path::Path;

use fflsplit_core::{DirectorCodes, Outcome, ScanResult, Selection, extract_to_file, scan_file};
use tracing::warn;

pub fn list(path: &Path) -> Result<(), Box<dyn Error>> {
    let scan = scan_file(path, DirectorCodes::load())?;
    print_fights(&scan);
    Ok(())
}

pub fn extract(path: &Path, keep: &str) -> Result<(), Box<dyn Error>> {
    let scan = scan_file(path, DirectorCodes::load())?;

    let selection = if keep.trim().eq_ignore_ascii_case("all") {
        Selection::all(scan.fights.len())
    } else {
        let selection = Selection::parse(keep);
        for bad in &selection.rejected {
            warn!(token = %bad.token, "skipping unparseable selection token");
        }
        selection
    };

    let kept = selection
        .indices
        .iter()
        .filter(|&&i| i < scan.fights.len())
        .count();
    let dest = extract_to_file(&scan, &selection, path)?;
    println!(
        "kept {kept} of {} fights, wrote {}",
        scan.fights.len(),
        dest.display()
    );
    Ok(())
}

pub fn config() -> Result<(), Box<dyn Error>> {
    let codes = DirectorCodes::load();
    match DirectorCodes::config_path() {
        Some(path) => println!("config file: {}", path.display()),
        None => println!("config file location unavailable"),
    }
    println!("start codes: {}", codes.start.join(", "));
    println!("kill codes:  {}", codes.kill.join(", "));
    println!("wipe codes:  {}", codes.wipe.join(", "));
    Ok(())
}

fn print_fights(scan: &ScanResult) {
    if scan.fights.is_empty() {
        println!("no fights found");
        return;
    }

    println!(
        "{:>3}  {:<8}  {:<4}  {:<10}  {:<28}  {:>5}  {:>5}",
        "#", "start", "end", "length", "map", "D", "D-"
    );
    for (index, fight) in scan.fights.iter().enumerate() {
        let outcome = match fight.outcome {
            Outcome::Kill => "kill",
            Outcome::Wipe => "wipe",
        };
        println!(
            "{index:>3}  {:<8}  {outcome:<4}  {:<10}  {:<28}  {:>2}/{:<2}  {:>2}/{:<2}",
            fight.start_time_label,
            fight.duration_label(),
            fight.map_name,
            fight.self_deaths,
            fight.party_deaths,
            fight.self_debuffs,
            fight.party_debuffs,
        );
    }
    println!("\n{} fights total", scan.fights.len());
}
