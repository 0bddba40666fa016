pub mod config;
pub mod logging;

pub mod archive;
pub mod mission;
pub mod probe;
pub mod url_check;

pub use archive::{data_url, scrape_sol, ProductSelection, ScrapePlan, SolRequest};
pub use mission::{resolve_mission, Mission, MissionKey};
pub use url_check::{validate_url, NotFoundError, Scheme, UrlValidator, ValidatedUrl};
