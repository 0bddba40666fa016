//! Node name validation.
//!
//! Turns a free-form node string (full URL or bare host) into a well-formed
//! URL, promoting bare hosts with a configurable scheme, and optionally
//! confirms the result answers a HEAD request with HTTP 200.

mod error;
mod grammar;

pub use error::NotFoundError;
pub use grammar::{classify, HostForm};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ScraperConfig;
use crate::probe::{CurlProbe, Probe, ProbeError, ProbeOptions};

/// URL schemes the grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    #[default]
    Https,
    Ftp,
    Ftps,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::Ftp => "ftp",
            Scheme::Ftps => "ftps",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            "ftp" => Ok(Scheme::Ftp),
            "ftps" => Ok(Scheme::Ftps),
            other => Err(format!("unsupported scheme: {other}")),
        }
    }
}

/// A URL that passed validation. Starts with a supported scheme and a valid host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(String);

impl ValidatedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for ValidatedUrl {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Validates node strings. Holds the scheme used for bare hosts and the
/// probe used for reachability checks.
#[derive(Debug, Clone)]
pub struct UrlValidator<P = CurlProbe> {
    scheme: Scheme,
    probe: P,
}

impl Default for UrlValidator<CurlProbe> {
    fn default() -> Self {
        Self::new(CurlProbe::default())
    }
}

impl UrlValidator<CurlProbe> {
    /// Validator using the scheme and probe timeouts from `cfg`.
    pub fn from_config(cfg: &ScraperConfig) -> Self {
        let options = cfg
            .probe
            .as_ref()
            .map(ProbeOptions::from)
            .unwrap_or_default();
        Self::new(CurlProbe::new(options)).with_scheme(cfg.default_scheme)
    }
}

impl<P: Probe> UrlValidator<P> {
    pub fn new(probe: P) -> Self {
        Self {
            scheme: Scheme::default(),
            probe,
        }
    }

    /// Scheme prefixed onto bare hosts (default `https`).
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Validates `value` and, when `check_reachable` is set, probes the result once.
    ///
    /// Full URLs are returned unchanged; bare hosts get `<scheme>://` prefixed.
    /// No network access happens unless `check_reachable` is true.
    pub fn validate(
        &self,
        value: &str,
        check_reachable: bool,
    ) -> Result<ValidatedUrl, NotFoundError> {
        let candidate = match classify(value) {
            HostForm::FullUrl => value.to_string(),
            HostForm::BareHost => format!("{}://{}", self.scheme, value),
            HostForm::Invalid => {
                return Err(NotFoundError::MalformedHost {
                    value: value.to_string(),
                })
            }
        };

        if check_reachable {
            self.ensure_reachable(&candidate)?;
        }
        Ok(ValidatedUrl(candidate))
    }

    fn ensure_reachable(&self, url: &str) -> Result<(), NotFoundError> {
        let unreachable = |source| NotFoundError::Unreachable {
            url: url.to_string(),
            source,
        };
        match self.probe.head_status(url) {
            Ok(200) => Ok(()),
            Ok(code) => Err(unreachable(ProbeError::Status(code))),
            Err(e) => Err(unreachable(e)),
        }
    }
}

/// Validates `value` with the default scheme (`https`) and default probe timeouts.
pub fn validate_url(value: &str, check_reachable: bool) -> Result<ValidatedUrl, NotFoundError> {
    UrlValidator::<CurlProbe>::default().validate(value, check_reachable)
}
