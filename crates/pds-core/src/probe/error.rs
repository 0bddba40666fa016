//! Probe failure type.

use std::fmt;

/// Why a reachability probe did not confirm the URL.
#[derive(Debug)]
pub enum ProbeError {
    /// Curl reported an error (DNS, connect, TLS, timeout, ...).
    Transport(curl::Error),
    /// The final response after redirects was not HTTP 200.
    Status(u32),
}

/// Coarse classification of a probe failure, for messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connect or total timeout elapsed.
    Timeout,
    /// Host did not resolve or refused the connection.
    Connection,
    /// Server answered with a status other than 200.
    Http(u32),
    /// Any other transport error.
    Other,
}

impl ProbeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeError::Status(code) => FailureKind::Http(*code),
            ProbeError::Transport(e) if e.is_operation_timedout() => FailureKind::Timeout,
            ProbeError::Transport(e)
                if e.is_couldnt_connect()
                    || e.is_couldnt_resolve_host()
                    || e.is_couldnt_resolve_proxy()
                    || e.is_got_nothing()
                    || e.is_recv_error()
                    || e.is_send_error() =>
            {
                FailureKind::Connection
            }
            ProbeError::Transport(_) => FailureKind::Other,
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Transport(e) => write!(f, "{}", e),
            ProbeError::Status(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Transport(e) => Some(e),
            ProbeError::Status(_) => None,
        }
    }
}

impl From<curl::Error> for ProbeError {
    fn from(e: curl::Error) -> Self {
        ProbeError::Transport(e)
    }
}
