//! Validation failure type.

use thiserror::Error;

use crate::probe::ProbeError;

/// A node string could not be turned into a usable archive URL.
///
/// Both variants describe a node that "was not found": the first because the
/// string is not a URL or hostname at all, the second because the host did
/// not answer the reachability probe.
#[derive(Debug, Error)]
pub enum NotFoundError {
    #[error("{value:?} does not describe a URL or hostname")]
    MalformedHost { value: String },

    #[error("{url} could not be found.")]
    Unreachable {
        url: String,
        #[source]
        source: ProbeError,
    },
}

impl NotFoundError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, NotFoundError::MalformedHost { .. })
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, NotFoundError::Unreachable { .. })
    }
}
