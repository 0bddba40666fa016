//! `pds-scraper missions` – list the mission catalog.

use pds_core::mission::catalog;

pub fn run_missions() {
    println!("{:<10} {:>6}  {}", "KEY", "NAIF", "NAMES");
    for entry in catalog() {
        println!(
            "{:<10} {:>6}  {}",
            entry.mission.key(),
            entry.naif_id,
            entry.aliases.join(", ")
        );
    }
}
