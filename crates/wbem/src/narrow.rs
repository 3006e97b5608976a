//! Narrowing of untyped object references into typed wrappers
//!
//! The set of wrapper types is closed. Each kind lists the members its
//! wrapper relies on; a reference is only wrapped once all of them resolve
//! on the remote object. A failed narrowing drops (and so releases) the
//! reference and produces no wrapper.

use std::fmt;

use automation::RemoteHandle;
use tracing::debug;

use crate::error::{Result, WbemError};
use crate::objects::private::Sealed;
use crate::objects::{
    EventSource, NamedValueSet, Object, ObjectSet, ScriptingObject, Security, Services,
};

/// Scripting interfaces a reference can be narrowed to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// SWbemServices
    Services,
    /// SWbemObject
    Object,
    /// SWbemObjectSet
    ObjectSet,
    /// SWbemEventSource
    EventSource,
    /// SWbemSecurity
    Security,
    /// SWbemNamedValueSet
    NamedValueSet,
}

impl ObjectKind {
    /// All kinds
    pub const ALL: [ObjectKind; 6] = [
        Self::Services,
        Self::Object,
        Self::ObjectSet,
        Self::EventSource,
        Self::Security,
        Self::NamedValueSet,
    ];

    /// Scripting interface name
    pub fn interface_name(self) -> &'static str {
        match self {
            Self::Services => "SWbemServices",
            Self::Object => "SWbemObject",
            Self::ObjectSet => "SWbemObjectSet",
            Self::EventSource => "SWbemEventSource",
            Self::Security => "SWbemSecurity",
            Self::NamedValueSet => "SWbemNamedValueSet",
        }
    }

    /// Members the remote object must expose for this kind
    pub fn required_members(self) -> &'static [&'static str] {
        match self {
            Self::Services => &["ExecQuery", "ExecNotificationQuery"],
            Self::Object => &["Properties_", "Path_"],
            // Count alone would also match a named value set
            Self::ObjectSet => &["Count", "Security_"],
            Self::EventSource => &["NextEvent"],
            Self::Security => &["ImpersonationLevel", "AuthenticationLevel"],
            Self::NamedValueSet => &["Count", "DeleteAll"],
        }
    }

    fn construct(self, handle: RemoteHandle) -> AnyObject {
        match self {
            Self::Services => AnyObject::Services(Services::wrap(handle)),
            Self::Object => AnyObject::Object(Object::wrap(handle)),
            Self::ObjectSet => AnyObject::ObjectSet(ObjectSet::wrap(handle)),
            Self::EventSource => AnyObject::EventSource(EventSource::wrap(handle)),
            Self::Security => AnyObject::Security(Security::wrap(handle)),
            Self::NamedValueSet => AnyObject::NamedValueSet(NamedValueSet::wrap(handle)),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.interface_name())
    }
}

/// A narrowed wrapper of any kind
#[derive(Debug)]
pub enum AnyObject {
    Services(Services),
    Object(Object),
    ObjectSet(ObjectSet),
    EventSource(EventSource),
    Security(Security),
    NamedValueSet(NamedValueSet),
}

impl AnyObject {
    /// Kind of the wrapped object
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Services(_) => ObjectKind::Services,
            Self::Object(_) => ObjectKind::Object,
            Self::ObjectSet(_) => ObjectKind::ObjectSet,
            Self::EventSource(_) => ObjectKind::EventSource,
            Self::Security(_) => ObjectKind::Security,
            Self::NamedValueSet(_) => ObjectKind::NamedValueSet,
        }
    }
}

fn check(handle: &RemoteHandle, kind: ObjectKind) -> Result<()> {
    handle.probe(kind.required_members()).map_err(|source| {
        debug!("Object {} does not support {}: {}", handle.id(), kind, source);
        WbemError::Narrowing {
            expected: kind,
            source,
        }
    })
}

/// Narrow `handle` into the wrapper for `kind`
pub fn narrow(handle: RemoteHandle, kind: ObjectKind) -> Result<AnyObject> {
    check(&handle, kind)?;
    Ok(kind.construct(handle))
}

/// Narrow `handle` into `T`
pub(crate) fn narrow_to<T: ScriptingObject>(handle: RemoteHandle) -> Result<T> {
    check(&handle, T::KIND)?;
    Ok(T::wrap(handle))
}
