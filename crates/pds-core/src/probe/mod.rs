//! HTTP HEAD reachability probing.
//!
//! Uses the curl crate (libcurl) to send one header-only request, follow
//! redirects, and report the final response code. Callers decide which codes
//! count as reachable.

mod error;

pub use error::{FailureKind, ProbeError};

use std::time::Duration;

use crate::config::ProbeConfig;

/// Something that can report the final HEAD status of a URL.
///
/// The validator only needs this one capability from the network, which keeps
/// it testable without live hosts.
pub trait Probe {
    /// Sends one HEAD request (following redirects) and returns the final
    /// HTTP status code.
    fn head_status(&self, url: &str) -> Result<u32, ProbeError>;
}

impl<P: Probe + ?Sized> Probe for &P {
    fn head_status(&self, url: &str) -> Result<u32, ProbeError> {
        (**self).head_status(url)
    }
}

/// Transport timeouts for a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<&ProbeConfig> for ProbeOptions {
    fn from(cfg: &ProbeConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

/// libcurl-backed probe. Runs in the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlProbe {
    options: ProbeOptions,
}

impl CurlProbe {
    pub fn new(options: ProbeOptions) -> Self {
        Self { options }
    }
}

impl Probe for CurlProbe {
    fn head_status(&self, url: &str) -> Result<u32, ProbeError> {
        tracing::debug!(url, "probing with HEAD");

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(true)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;
        easy.perform()?;

        let code = easy.response_code()?;
        tracing::debug!(url, code, "probe finished");
        Ok(code)
    }
}
