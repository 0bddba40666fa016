//! `pds-scraper check-url <value>` – validate a node name.

use anyhow::Result;
use pds_core::config::ScraperConfig;
use pds_core::url_check::{Scheme, UrlValidator};

pub fn run_check_url(
    cfg: &ScraperConfig,
    value: &str,
    check_reachable: bool,
    scheme: Option<Scheme>,
) -> Result<()> {
    let mut validator = UrlValidator::from_config(cfg);
    if let Some(scheme) = scheme {
        validator = validator.with_scheme(scheme);
    }
    let url = validator.validate(value, check_reachable)?;
    println!("{}", url);
    Ok(())
}
