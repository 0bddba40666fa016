//! `pds-scraper scrape <sol>` – resolve the archive location for a sol.

use anyhow::Result;
use pds_core::archive::{scrape_sol, ProductSelection, SolRequest};
use pds_core::config::ScraperConfig;
use pds_core::url_check::UrlValidator;

use super::check_reachable;

/// Arguments of the `scrape` subcommand, before config defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct ScrapeArgs {
    pub sol: u32,
    pub node_name: Option<String>,
    pub mission: Option<String>,
    pub dl_edrs: bool,
    pub dl_rdrs: bool,
    pub dl_meshes: bool,
    pub check: bool,
    pub no_check: bool,
}

impl ScrapeArgs {
    /// Fills missing or blank node and mission from the config.
    pub fn into_request(self, cfg: &ScraperConfig) -> SolRequest {
        SolRequest {
            sol: self.sol,
            node_name: non_blank(self.node_name).unwrap_or_else(|| cfg.default_node.clone()),
            mission: non_blank(self.mission).unwrap_or_else(|| cfg.default_mission.clone()),
            products: ProductSelection {
                edrs: self.dl_edrs,
                rdrs: self.dl_rdrs,
                meshes: self.dl_meshes,
            },
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

pub fn run_scrape(cfg: &ScraperConfig, args: ScrapeArgs) -> Result<()> {
    let check = check_reachable(cfg, args.check, args.no_check);
    let request = args.into_request(cfg);
    let validator = UrlValidator::from_config(cfg);
    let plan = scrape_sol(&validator, &request, check)?;
    println!("Accessing data from {}...", plan.base_url);
    Ok(())
}
