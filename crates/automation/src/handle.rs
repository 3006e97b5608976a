//! Owned remote handles and the two-phase dispatch call

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::transport::DispatchTransport;
use crate::types::{AutomationError, DispId, FromVariant, ObjectId, Result, Variant};

/// Exclusive owner of one remote object reference
///
/// The reference is released exactly once, when the handle is dropped.
/// A handle may be moved to another thread but not shared between threads:
/// the underlying reference is not safe for concurrent use.
pub struct RemoteHandle {
    id: ObjectId,
    transport: Arc<dyn DispatchTransport>,
    _not_sync: PhantomData<Cell<()>>,
}

impl RemoteHandle {
    /// Take ownership of a reference handed out by `transport`
    pub fn new(transport: Arc<dyn DispatchTransport>, id: ObjectId) -> Self {
        Self {
            id,
            transport,
            _not_sync: PhantomData,
        }
    }

    /// Id of the owned reference
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Transport this handle was obtained from
    pub fn transport(&self) -> &Arc<dyn DispatchTransport> {
        &self.transport
    }

    /// Encode this handle as an argument (the reference is copied, not moved)
    pub fn to_variant(&self) -> Variant {
        Variant::Dispatch(self.id)
    }

    /// Resolve a member name to its DISPID
    pub fn resolve(&self, name: &str) -> Result<DispId> {
        self.transport
            .resolve_member(self.id, name)
            .map_err(|fault| AutomationError::UnknownName {
                name: name.to_string(),
                fault,
            })
    }

    /// Check that every member in `names` resolves
    pub fn probe(&self, names: &[&str]) -> Result<()> {
        for name in names {
            self.resolve(name)?;
        }
        Ok(())
    }

    /// Resolve `name`, then invoke it with `args` in positional order
    pub fn call(&self, name: &str, args: &[Variant]) -> Result<Decoded> {
        let member = self.resolve(name)?;
        debug!(
            "Invoking {}: object={}, dispid={}, args={}",
            name,
            self.id,
            member,
            args.len()
        );

        let reply = self
            .transport
            .invoke(self.id, member, args)
            .map_err(|fault| AutomationError::Invocation {
                name: name.to_string(),
                fault,
            })?;
        trace!("{} returned {:?}", name, reply.as_ref().map(Variant::kind));

        Ok(Decoded::from_reply(&self.transport, reply))
    }

    /// Read a property
    pub fn property(&self, name: &str) -> Result<Decoded> {
        let reply = self
            .transport
            .get_property(self.id, name)
            .map_err(|fault| AutomationError::Property {
                name: name.to_string(),
                fault,
            })?;
        trace!("Property {} = {:?}", name, reply.as_ref().map(Variant::kind));

        Ok(Decoded::from_reply(&self.transport, reply))
    }
}

impl fmt::Debug for RemoteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RemoteHandle").field(&self.id).finish()
    }
}

impl Drop for RemoteHandle {
    fn drop(&mut self) {
        trace!("Releasing object {}", self.id);
        if let Err(fault) = self.transport.release(self.id) {
            warn!("Failed to release object {}: {}", self.id, fault);
        }
    }
}

/// A decoded call result
#[derive(Debug)]
pub enum Decoded {
    /// The call produced no value
    Absent,
    /// A primitive value
    Value(Variant),
    /// An object reference, now owned
    Object(RemoteHandle),
}

impl Decoded {
    /// Classify a raw reply, taking ownership of any returned reference
    pub fn from_reply(transport: &Arc<dyn DispatchTransport>, reply: Option<Variant>) -> Self {
        match reply {
            None => Self::Absent,
            Some(Variant::Dispatch(id)) => Self::Object(RemoteHandle::new(transport.clone(), id)),
            Some(value) => Self::Value(value),
        }
    }

    /// Check if nothing was returned
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Decode as a primitive returned by member `name`
    pub fn into_value<T: FromVariant>(self, name: &str) -> Result<T> {
        match self {
            Self::Absent => T::from_variant(name, None),
            Self::Value(value) => T::from_variant(name, Some(value)),
            Self::Object(handle) => Err(AutomationError::TypeMismatch {
                name: name.to_string(),
                expected: T::EXPECTED,
                found: handle.to_variant().kind(),
            }),
        }
    }

    /// Take the object reference returned by member `name`
    pub fn into_object(self, name: &str) -> Result<RemoteHandle> {
        match self {
            Self::Object(handle) => Ok(handle),
            Self::Absent => Err(AutomationError::MissingValue {
                name: name.to_string(),
                expected: "VT_DISPATCH",
            }),
            Self::Value(value) => Err(AutomationError::TypeMismatch {
                name: name.to_string(),
                expected: "VT_DISPATCH",
                found: value.kind(),
            }),
        }
    }
}
