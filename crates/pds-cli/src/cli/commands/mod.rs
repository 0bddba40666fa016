//! CLI command handlers, one per file.

mod check_url;
mod mission;
mod missions;
mod scrape;

pub use check_url::run_check_url;
pub use mission::run_mission;
pub use missions::run_missions;
pub use scrape::{run_scrape, ScrapeArgs};

use pds_core::config::ScraperConfig;

/// Whether to probe the node. `--check` and `--no-check` override the config.
pub fn check_reachable(cfg: &ScraperConfig, check: bool, no_check: bool) -> bool {
    if check {
        true
    } else if no_check {
        false
    } else {
        cfg.check_reachable
    }
}
