//! `pds-scraper mission <name>` – print the archive key for a mission name.

use pds_core::mission::{resolve_mission, MissionKey};

pub fn run_mission(name: &str) {
    let key = resolve_mission(name);
    match &key {
        MissionKey::Known(m) => println!("{} ({})", key, m.display_name()),
        MissionKey::Unlisted(_) => {
            tracing::info!("mission {:?} not in catalog; passing through", name);
            println!("{} (not in catalog)", key);
        }
    }
}
