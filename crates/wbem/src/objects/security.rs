//! SWbemSecurity

use std::fmt;

use automation::{FromVariant, RemoteHandle, Variant};

use crate::bridge::property_value;
use crate::error::Result;

/// Security settings attached to a scripting object
#[derive(Debug)]
pub struct Security {
    handle: RemoteHandle,
}

scripting_object!(Security);

impl Security {
    /// COM impersonation level
    pub fn impersonation_level(&self) -> Result<ImpersonationLevel> {
        property_value(&self.handle, "ImpersonationLevel")
    }

    /// COM authentication level
    pub fn authentication_level(&self) -> Result<AuthenticationLevel> {
        property_value(&self.handle, "AuthenticationLevel")
    }
}

/// RPC_C_IMP_LEVEL_*
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpersonationLevel {
    Anonymous,
    Identify,
    Impersonate,
    Delegate,
    /// A level this crate has no name for
    Other(i32),
}

impl From<i32> for ImpersonationLevel {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Anonymous,
            2 => Self::Identify,
            3 => Self::Impersonate,
            4 => Self::Delegate,
            other => Self::Other(other),
        }
    }
}

impl From<ImpersonationLevel> for i32 {
    fn from(level: ImpersonationLevel) -> Self {
        match level {
            ImpersonationLevel::Anonymous => 1,
            ImpersonationLevel::Identify => 2,
            ImpersonationLevel::Impersonate => 3,
            ImpersonationLevel::Delegate => 4,
            ImpersonationLevel::Other(value) => value,
        }
    }
}

/// RPC_C_AUTHN_LEVEL_*
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthenticationLevel {
    Default,
    None,
    Connect,
    Call,
    Pkt,
    PktIntegrity,
    PktPrivacy,
    /// A level this crate has no name for
    Other(i32),
}

impl From<i32> for AuthenticationLevel {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Default,
            1 => Self::None,
            2 => Self::Connect,
            3 => Self::Call,
            4 => Self::Pkt,
            5 => Self::PktIntegrity,
            6 => Self::PktPrivacy,
            other => Self::Other(other),
        }
    }
}

impl From<AuthenticationLevel> for i32 {
    fn from(level: AuthenticationLevel) -> Self {
        match level {
            AuthenticationLevel::Default => 0,
            AuthenticationLevel::None => 1,
            AuthenticationLevel::Connect => 2,
            AuthenticationLevel::Call => 3,
            AuthenticationLevel::Pkt => 4,
            AuthenticationLevel::PktIntegrity => 5,
            AuthenticationLevel::PktPrivacy => 6,
            AuthenticationLevel::Other(value) => value,
        }
    }
}

macro_rules! level_from_variant {
    ($ty:ty) => {
        impl FromVariant for $ty {
            const EXPECTED: &'static str = "VT_I4";

            fn from_variant(name: &str, value: Option<Variant>) -> automation::Result<Self> {
                i32::from_variant(name, value).map(Self::from)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Other(value) => write!(f, "{}", value),
                    known => write!(f, "{:?}", known),
                }
            }
        }
    };
}

level_from_variant!(ImpersonationLevel);
level_from_variant!(AuthenticationLevel);
