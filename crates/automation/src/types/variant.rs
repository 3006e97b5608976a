//! Automation VARIANT model
//!
//! Only the variant types the scripting object model actually exchanges are
//! represented. `Omitted` is the optional-parameter marker (VT_ERROR carrying
//! DISP_E_PARAMNOTFOUND): the remote side reads it as "use your default",
//! which is not the same thing as an explicit empty string or zero.

use std::fmt;

use super::error::{AutomationError, Result};
use super::identifiers::ObjectId;

/// An encoded automation value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Optional parameter not supplied
    Omitted,
    /// VT_NULL
    Null,
    /// VT_BOOL
    Bool(bool),
    /// VT_I4
    I4(i32),
    /// VT_BSTR
    Bstr(String),
    /// VT_DISPATCH: reference to another remote object
    Dispatch(ObjectId),
}

/// Wire type of a variant, used in diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantKind {
    Omitted,
    Null,
    Bool,
    I4,
    Bstr,
    Dispatch,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Omitted => "VT_ERROR (omitted)",
            Self::Null => "VT_NULL",
            Self::Bool => "VT_BOOL",
            Self::I4 => "VT_I4",
            Self::Bstr => "VT_BSTR",
            Self::Dispatch => "VT_DISPATCH",
        };
        f.write_str(name)
    }
}

impl Variant {
    /// Wire type of this value
    pub fn kind(&self) -> VariantKind {
        match self {
            Self::Omitted => VariantKind::Omitted,
            Self::Null => VariantKind::Null,
            Self::Bool(_) => VariantKind::Bool,
            Self::I4(_) => VariantKind::I4,
            Self::Bstr(_) => VariantKind::Bstr,
            Self::Dispatch(_) => VariantKind::Dispatch,
        }
    }

    /// Check for the optional-parameter marker
    pub fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }

    /// Encode an optional string; `None` and `""` both mean "not specified"
    pub fn optional_text(value: Option<&str>) -> Self {
        match value {
            Some(text) if !text.is_empty() => Self::Bstr(text.to_string()),
            _ => Self::Omitted,
        }
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::Bstr(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Self::Bstr(value)
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Self::I4(value)
    }
}

impl From<ObjectId> for Variant {
    fn from(value: ObjectId) -> Self {
        Self::Dispatch(value)
    }
}

impl<T: Into<Variant>> From<Option<T>> for Variant {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Omitted, Into::into)
    }
}

/// Decoding of a primitive return value.
///
/// `value` is `None` when the remote side returned nothing at all, which is
/// distinct from returning an empty string or VT_NULL.
pub trait FromVariant: Sized {
    /// Name of the expected type, for diagnostics
    const EXPECTED: &'static str;

    /// Decode the value returned by member `name`
    fn from_variant(name: &str, value: Option<Variant>) -> Result<Self>;
}

fn mismatch<T: FromVariant>(name: &str, found: Option<Variant>) -> AutomationError {
    match found {
        Some(value) => AutomationError::TypeMismatch {
            name: name.to_string(),
            expected: T::EXPECTED,
            found: value.kind(),
        },
        None => AutomationError::MissingValue {
            name: name.to_string(),
            expected: T::EXPECTED,
        },
    }
}

impl FromVariant for Variant {
    const EXPECTED: &'static str = "a value";

    fn from_variant(name: &str, value: Option<Variant>) -> Result<Self> {
        value.ok_or_else(|| mismatch::<Self>(name, None))
    }
}

impl FromVariant for bool {
    const EXPECTED: &'static str = "VT_BOOL";

    fn from_variant(name: &str, value: Option<Variant>) -> Result<Self> {
        match value {
            Some(Variant::Bool(b)) => Ok(b),
            other => Err(mismatch::<Self>(name, other)),
        }
    }
}

impl FromVariant for i32 {
    const EXPECTED: &'static str = "VT_I4";

    fn from_variant(name: &str, value: Option<Variant>) -> Result<Self> {
        match value {
            Some(Variant::I4(v)) => Ok(v),
            other => Err(mismatch::<Self>(name, other)),
        }
    }
}

impl FromVariant for i64 {
    const EXPECTED: &'static str = "VT_I4";

    fn from_variant(name: &str, value: Option<Variant>) -> Result<Self> {
        i32::from_variant(name, value).map(i64::from)
    }
}

impl FromVariant for u32 {
    const EXPECTED: &'static str = "non-negative VT_I4";

    fn from_variant(name: &str, value: Option<Variant>) -> Result<Self> {
        match value {
            Some(Variant::I4(v)) if v >= 0 => Ok(v as u32),
            other => Err(mismatch::<Self>(name, other)),
        }
    }
}

impl FromVariant for String {
    const EXPECTED: &'static str = "VT_BSTR";

    fn from_variant(name: &str, value: Option<Variant>) -> Result<Self> {
        match value {
            Some(Variant::Bstr(s)) => Ok(s),
            other => Err(mismatch::<Self>(name, other)),
        }
    }
}

impl<T: FromVariant> FromVariant for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_variant(name: &str, value: Option<Variant>) -> Result<Self> {
        match value {
            None | Some(Variant::Null) => Ok(None),
            some => T::from_variant(name, some).map(Some),
        }
    }
}
