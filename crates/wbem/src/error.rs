//! WBEM error types

use automation::{AutomationError, Fault};
use thiserror::Error;

use crate::narrow::ObjectKind;

/// Result type for WBEM operations
pub type Result<T> = std::result::Result<T, WbemError>;

/// Errors raised by the typed scripting API
///
/// `InvalidArgument` is always raised before anything is sent to the
/// service. The other variants are remote failures and carry the service's
/// fault verbatim.
#[derive(Error, Debug)]
pub enum WbemError {
    /// An argument was rejected locally
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Resolution, invocation or decoding of a remote call failed
    #[error(transparent)]
    Automation(#[from] AutomationError),

    /// The returned object does not support the expected interface
    #[error("object does not support {expected}: {source}")]
    Narrowing {
        expected: ObjectKind,
        source: AutomationError,
    },
}

impl WbemError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether this error was raised locally, before any remote call
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Whether this error came from the remote side
    pub fn is_remote(&self) -> bool {
        !self.is_local()
    }

    /// The remote fault, if the service reported one
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Automation(err) | Self::Narrowing { source: err, .. } => err.fault(),
        }
    }
}
