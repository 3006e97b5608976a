//! Automation error types

use std::fmt;
use thiserror::Error;

use super::variant::VariantKind;

/// Result type for transport-level operations
pub type FaultResult<T> = std::result::Result<T, Fault>;

/// Result type for automation calls
pub type Result<T> = std::result::Result<T, AutomationError>;

/// A failure reported by the remote side (or by the transport on its behalf).
///
/// The code is an HRESULT and is carried verbatim; nothing in this crate
/// reinterprets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fault {
    /// HRESULT reported by the remote side
    pub code: u32,
    /// Optional description (EXCEPINFO text, transport detail, ...)
    pub description: Option<String>,
}

impl Fault {
    /// Create a fault with only an HRESULT
    pub fn new(code: u32) -> Self {
        Self { code, description: None }
    }

    /// Create a fault with a description
    pub fn with_description(code: u32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: Some(description.into()),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "0x{:08x} ({})", self.code, desc),
            None => write!(f, "0x{:08x}", self.code),
        }
    }
}

impl std::error::Error for Fault {}

/// Errors raised while performing an automation call
#[derive(Error, Debug)]
pub enum AutomationError {
    /// The member name could not be resolved to a DISPID
    #[error("cannot resolve member '{name}': {fault}")]
    UnknownName { name: String, fault: Fault },

    /// The member was resolved but the invocation failed
    #[error("invocation of '{name}' failed: {fault}")]
    Invocation { name: String, fault: Fault },

    /// Reading a property failed
    #[error("reading property '{name}' failed: {fault}")]
    Property { name: String, fault: Fault },

    /// A value was expected but the call returned nothing
    #[error("'{name}' returned no value, expected {expected}")]
    MissingValue { name: String, expected: &'static str },

    /// The returned value has the wrong wire type
    #[error("'{name}' returned {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: VariantKind,
    },
}

impl AutomationError {
    /// The remote fault carried by this error, if any
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Self::UnknownName { fault, .. }
            | Self::Invocation { fault, .. }
            | Self::Property { fault, .. } => Some(fault),
            _ => None,
        }
    }
}

/// HRESULT codes commonly seen on automation and WMI calls
pub mod hresult {
    /// Unspecified error
    pub const E_FAIL: u32 = 0x80004005;
    /// Unknown member name
    pub const DISP_E_UNKNOWNNAME: u32 = 0x80020006;
    /// Member not found
    pub const DISP_E_MEMBERNOTFOUND: u32 = 0x80020003;
    /// Object is not connected to the server
    pub const RPC_E_DISCONNECTED: u32 = 0x80010108;
    /// Call timed out
    pub const RPC_E_TIMEOUT: u32 = 0x8001011F;
    /// WMI: object not found
    pub const WBEM_E_NOT_FOUND: u32 = 0x80041002;
    /// WMI: invalid parameter
    pub const WBEM_E_INVALID_PARAMETER: u32 = 0x80041008;
    /// WMI: operation not supported
    pub const WBEM_E_NOT_SUPPORTED: u32 = 0x8004100C;
    /// WMI: invalid query
    pub const WBEM_E_INVALID_QUERY: u32 = 0x80041017;
    /// WMI: the wait for an event timed out
    pub const WBEMERR_TIMEDOUT: u32 = 0x80043001;
}
