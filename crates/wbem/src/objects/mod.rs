//! Scripting object wrappers
//!
//! One wrapper per scripting interface. Each wrapper exclusively owns one
//! [`RemoteHandle`]; the handle itself is never exposed outside this crate.
//! Wrappers are `Send` but not `Sync` or `Clone`: move a wrapper to the
//! thread that uses it, or put it behind a lock.

macro_rules! scripting_object {
    ($ty:ident) => {
        impl $crate::objects::private::Sealed for $ty {
            fn wrap(handle: automation::RemoteHandle) -> Self {
                Self { handle }
            }

            fn handle(&self) -> &automation::RemoteHandle {
                &self.handle
            }
        }

        impl $crate::objects::ScriptingObject for $ty {
            const KIND: $crate::narrow::ObjectKind = $crate::narrow::ObjectKind::$ty;
        }

        impl TryFrom<$crate::narrow::AnyObject> for $ty {
            type Error = $crate::narrow::AnyObject;

            fn try_from(any: $crate::narrow::AnyObject) -> std::result::Result<Self, Self::Error> {
                match any {
                    $crate::narrow::AnyObject::$ty(object) => Ok(object),
                    other => Err(other),
                }
            }
        }

        impl From<$ty> for $crate::narrow::AnyObject {
            fn from(object: $ty) -> Self {
                Self::$ty(object)
            }
        }
    };
}

mod event_source;
mod named_value_set;
mod object;
mod object_set;
mod options;
mod security;
mod services;

pub use event_source::{EventSource, INFINITE};
pub use named_value_set::NamedValueSet;
pub use object::Object;
pub use object_set::{ObjectSet, ObjectSetIter};
pub use options::{
    AssociatorsOptions, CallOptions, DeleteOptions, ExecMethodOptions, ExecQueryOptions,
    NotificationQueryOptions, ReferencesOptions,
};
pub use security::{AuthenticationLevel, ImpersonationLevel, Security};
pub use services::Services;

use automation::{ObjectId, RemoteHandle};

use crate::bridge::{property_object, property_value};
use crate::error::Result;
use crate::narrow::{narrow_to, ObjectKind};

pub(crate) mod private {
    use automation::RemoteHandle;

    /// Handle access, restricted to this crate
    pub trait Sealed {
        fn wrap(handle: RemoteHandle) -> Self;
        fn handle(&self) -> &RemoteHandle;
    }
}

/// A typed wrapper around one remote scripting object
pub trait ScriptingObject: private::Sealed + Sized {
    /// Interface this wrapper stands for
    const KIND: ObjectKind;

    /// Wrap a reference obtained from a transport, checking its interface
    ///
    /// This is the entry point for references that did not come out of
    /// another wrapper, such as the services object of a fresh connection.
    fn narrow(handle: RemoteHandle) -> Result<Self> {
        narrow_to(handle)
    }

    /// Id of the owned reference
    fn object_id(&self) -> ObjectId {
        self.handle().id()
    }
}

/// Objects that expose a `Security_` property
pub trait SecurityCapable: ScriptingObject {
    /// Security settings of this object
    fn security(&self) -> Result<Security> {
        property_object(self.handle(), "Security_")
    }
}

/// Scripting collections
pub trait WbemSet: ScriptingObject {
    /// Number of elements
    fn count(&self) -> Result<usize> {
        let count: u32 = property_value(self.handle(), "Count")?;
        Ok(count as usize)
    }

    /// Whether the collection is empty
    fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }
}
