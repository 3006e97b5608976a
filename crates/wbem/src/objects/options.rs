//! Optional parameters of the scripting operations
//!
//! Every field defaults to "not specified", which is sent as the omitted
//! marker. Empty strings count as not specified too.

use crate::flags::{AssociatorsFlag, ExecQueryFlag, ReferencesFlag};

use super::{NamedValueSet, Object};

/// Optional parameters of `AssociatorsOf` / `Associators_`
#[derive(Clone, Copy, Debug, Default)]
pub struct AssociatorsOptions<'a> {
    /// Association class the endpoints must be linked through
    pub assoc_class: Option<&'a str>,
    /// Class the endpoints must belong to or derive from
    pub result_class: Option<&'a str>,
    /// Role the endpoints play in the association
    pub result_role: Option<&'a str>,
    /// Role the source object plays in the association
    pub role: Option<&'a str>,
    /// Return class definitions of the endpoints instead of instances
    pub classes_only: Option<bool>,
    /// Return schema associations only
    pub schema_only: Option<bool>,
    /// Qualifier the association class must carry
    pub required_assoc_qualifier: Option<&'a str>,
    /// Qualifier the endpoints must carry
    pub required_qualifier: Option<&'a str>,
    pub flags: &'a [AssociatorsFlag],
    pub context: Option<&'a NamedValueSet>,
}

/// Optional parameters of `ReferencesTo` / `References_`
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferencesOptions<'a> {
    /// Association class the references must belong to
    pub result_class: Option<&'a str>,
    /// Role the source object plays in the association
    pub role: Option<&'a str>,
    pub classes_only: Option<bool>,
    pub schema_only: Option<bool>,
    pub required_qualifier: Option<&'a str>,
    pub flags: &'a [ReferencesFlag],
    pub context: Option<&'a NamedValueSet>,
}

/// Optional parameters of `ExecQuery`
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecQueryOptions<'a> {
    /// Query language; only "WQL" is accepted
    pub language: Option<&'a str>,
    pub flags: &'a [ExecQueryFlag],
    pub context: Option<&'a NamedValueSet>,
}

/// Optional parameters of `ExecNotificationQuery`
#[derive(Clone, Copy, Debug, Default)]
pub struct NotificationQueryOptions<'a> {
    /// Query language; only "WQL" is accepted
    pub language: Option<&'a str>,
    /// Must be 48 (return immediately, forward only) when given
    pub flags: Option<i32>,
    pub context: Option<&'a NamedValueSet>,
}

/// Optional parameters of `ExecMethod` / `ExecMethod_`
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecMethodOptions<'a> {
    /// Input parameters object
    pub in_parameters: Option<&'a Object>,
    /// Reserved, must be zero when given
    pub flags: Option<i32>,
    pub context: Option<&'a NamedValueSet>,
}

/// Optional parameters of `Delete` / `Delete_`
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteOptions<'a> {
    /// Reserved, must be zero when given
    pub flags: Option<i32>,
    pub context: Option<&'a NamedValueSet>,
}

/// Flags and context, for operations that take nothing else optional
#[derive(Debug)]
pub struct CallOptions<'a, F> {
    pub flags: &'a [F],
    pub context: Option<&'a NamedValueSet>,
}

impl<F> Default for CallOptions<'_, F> {
    fn default() -> Self {
        Self {
            flags: &[],
            context: None,
        }
    }
}

impl<F> Clone for CallOptions<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for CallOptions<'_, F> {}
