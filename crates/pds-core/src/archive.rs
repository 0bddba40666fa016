//! Archive URL composition for a sol.
//!
//! Joins a validated node URL with a resolved mission key to get the mission's
//! data directory on a PDS imaging node. `scrape_sol` is the entry point the
//! CLI drives: it resolves where the sol's products live and reports what was
//! requested. Listing and downloading products happen elsewhere.

use crate::config::{DEFAULT_MISSION, DEFAULT_NODE};
use crate::mission::resolve_mission;
use crate::probe::Probe;
use crate::url_check::{NotFoundError, UrlValidator};

/// Which product kinds to fetch for a sol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductSelection {
    /// Experiment Data Records (raw images).
    pub edrs: bool,
    /// Reduced Data Records (processed images).
    pub rdrs: bool,
    /// Terrain meshes.
    pub meshes: bool,
}

impl ProductSelection {
    pub fn is_empty(&self) -> bool {
        !(self.edrs || self.rdrs || self.meshes)
    }
}

/// One sol's worth of work: where to look and what to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolRequest {
    pub sol: u32,
    pub node_name: String,
    pub mission: String,
    pub products: ProductSelection,
}

impl SolRequest {
    /// Request for `sol` against the JPL imaging node and Mars 2020, with no products selected.
    pub fn new(sol: u32) -> Self {
        Self {
            sol,
            node_name: DEFAULT_NODE.to_string(),
            mission: DEFAULT_MISSION.to_string(),
            products: ProductSelection::default(),
        }
    }
}

/// Resolved target of a sol request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapePlan {
    pub sol: u32,
    /// Mission data directory on the node, e.g. `https://pds-imaging.jpl.nasa.gov/mars2020`.
    pub base_url: String,
    pub products: ProductSelection,
}

/// Returns `<node-url>/<mission-key>` for the given node and mission names.
///
/// The mission segment goes at the end of the node's path, ahead of any query
/// or fragment. Fails only if the node name is malformed or, when
/// `check_reachable` is set, unreachable. Mission names never fail to resolve.
pub fn data_url<P: Probe>(
    validator: &UrlValidator<P>,
    node_name: &str,
    mission: &str,
    check_reachable: bool,
) -> Result<String, NotFoundError> {
    let node_url = validator.validate(node_name, check_reachable)?;
    let mission_key = resolve_mission(mission);
    Ok(append_segment(node_url.as_str(), mission_key.as_str()))
}

/// Appends `/<segment>` to the path of `url`, keeping any `?query` or `#fragment` last.
fn append_segment(url: &str, segment: &str) -> String {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    let split = url[after_scheme..]
        .find(['?', '#'])
        .map(|i| i + after_scheme)
        .unwrap_or(url.len());
    let (path, tail) = url.split_at(split);
    format!("{}/{}{}", path.trim_end_matches('/'), segment, tail)
}

/// Resolves the archive location for one sol.
pub fn scrape_sol<P: Probe>(
    validator: &UrlValidator<P>,
    request: &SolRequest,
    check_reachable: bool,
) -> Result<ScrapePlan, NotFoundError> {
    let base_url = data_url(
        validator,
        &request.node_name,
        &request.mission,
        check_reachable,
    )?;
    tracing::info!(sol = request.sol, "accessing data from {}", base_url);

    if request.products.is_empty() {
        tracing::warn!(
            sol = request.sol,
            "no product kinds selected (EDRs, RDRs, meshes); nothing to fetch"
        );
    }

    Ok(ScrapePlan {
        sol: request.sol,
        base_url,
        products: request.products,
    })
}
