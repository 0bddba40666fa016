//! Host and URL grammars.
//!
//! The host grammar is the classic Django 1.3 URL validator: a multi-label
//! domain name, `localhost`, or a dotted quad, optionally followed by a port
//! and a path or query. Matching is case-insensitive.

use once_cell::sync::Lazy;
use regex::Regex;

const HOST: &str = concat!(
    r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
    r"|localhost",
    r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
);

const PORT_AND_PATH: &str = r"(?::\d+)?(?:/?|[/?]\S+)";

static FULL_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?:http|ftp)s?://{HOST}{PORT_AND_PATH}$"))
        .expect("valid full URL regex")
});

static BARE_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^{HOST}{PORT_AND_PATH}$")).expect("valid bare host regex")
});

/// Which grammar, if any, a node string satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostForm {
    /// Scheme, host, optional port and path.
    FullUrl,
    /// Host with optional port and path, but no scheme.
    BareHost,
    /// Neither.
    Invalid,
}

/// Classifies `value`. A full URL wins over a bare host.
pub fn classify(value: &str) -> HostForm {
    if FULL_URL.is_match(value) {
        HostForm::FullUrl
    } else if BARE_HOST.is_match(value) {
        HostForm::BareHost
    } else {
        HostForm::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_urls() {
        for v in [
            "https://pds-imaging.jpl.nasa.gov",
            "http://pds-imaging.jpl.nasa.gov/data/mars2020/",
            "ftp://example.com:21/pub",
            "FTPS://EXAMPLE.COM",
            "http://localhost:8080/path?x=1",
            "https://127.0.0.1",
            "https://example.com.",
        ] {
            assert_eq!(classify(v), HostForm::FullUrl, "{v}");
        }
    }

    #[test]
    fn bare_hosts() {
        for v in [
            "pds-imaging.jpl.nasa.gov",
            "PDS-Imaging.JPL.NASA.gov",
            "127.0.0.1",
            "localhost",
            "localhost:8080/path",
            "example.com/data/msl",
            "this-host-should-not-exist.invalid",
        ] {
            assert_eq!(classify(v), HostForm::BareHost, "{v}");
        }
    }

    #[test]
    fn invalid_inputs() {
        for v in [
            "not a url!!",
            "",
            "nodots",
            "https://",
            "gopher://example.com",
            "-bad.example.com",
            "example.com/has space",
            "https://example.com:port",
        ] {
            assert_eq!(classify(v), HostForm::Invalid, "{v}");
        }
    }

    #[test]
    fn label_length_limit() {
        let ok = format!("{}.com", "a".repeat(63));
        let too_long = format!("{}.com", "a".repeat(64));
        assert_eq!(classify(&ok), HostForm::BareHost);
        assert_eq!(classify(&too_long), HostForm::Invalid);
    }
}
