//! In-process loopback transport
//!
//! Hosts [`ScriptedObject`]s in a reference table and serves dispatch calls
//! against them without any RPC. Every invocation and release is recorded so
//! callers can assert exactly what reached the "remote" side.
//!
//! Each exported reference gets its own [`ObjectId`]; several references may
//! point at the same scripted object. Calls on a released reference fail with
//! `RPC_E_DISCONNECTED`.

mod object;

pub use object::{MethodFn, PropertyFn, ScriptedObject};

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::trace;

use crate::handle::RemoteHandle;
use crate::transport::DispatchTransport;
use crate::types::{hresult, DispId, Fault, FaultResult, ObjectId, Variant};

/// One invocation that reached the loopback transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRecord {
    /// Reference the call was made through
    pub object: ObjectId,
    /// Class of the scripted object
    pub class: String,
    /// Member name as declared on the object
    pub member: String,
    /// Positional arguments, verbatim
    pub args: Vec<Variant>,
}

/// In-process dispatch transport over scripted objects
#[derive(Default)]
pub struct LoopbackTransport {
    /// Live references
    objects: RwLock<HashMap<ObjectId, Arc<ScriptedObject>>>,
    /// Invocation log
    calls: Mutex<Vec<CallRecord>>,
    /// Release log
    releases: Mutex<Vec<ObjectId>>,
}

impl LoopbackTransport {
    /// Create an empty transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Export `object` and return an owned handle to it
    pub fn connect(self: &Arc<Self>, object: ScriptedObject) -> RemoteHandle {
        let id = self.register(object);
        RemoteHandle::new(self.clone(), id)
    }

    /// Export `object` and return the reference as a return value
    ///
    /// Used from inside method handlers. Ownership of the reference passes to
    /// whoever receives the value.
    pub fn export(&self, object: ScriptedObject) -> Variant {
        Variant::Dispatch(self.register(object))
    }

    fn register(&self, object: ScriptedObject) -> ObjectId {
        let id = ObjectId::generate();
        trace!("Exporting {} as {}", object.class(), id);
        self.objects.write().insert(id, Arc::new(object));
        id
    }

    fn lookup(&self, object: ObjectId) -> FaultResult<Arc<ScriptedObject>> {
        self.objects
            .read()
            .get(&object)
            .cloned()
            .ok_or_else(|| Fault::new(hresult::RPC_E_DISCONNECTED))
    }

    /// All invocations so far, in order
    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.lock().clone()
    }

    /// Invocations of a given member (case-insensitive)
    pub fn calls_to(&self, member: &str) -> Vec<CallRecord> {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.member.eq_ignore_ascii_case(member))
            .cloned()
            .collect()
    }

    /// Forget recorded invocations
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Whether a reference is still live
    pub fn is_live(&self, object: ObjectId) -> bool {
        self.objects.read().contains_key(&object)
    }

    /// Number of live references
    pub fn live_objects(&self) -> usize {
        self.objects.read().len()
    }

    /// How many times a reference was released
    pub fn release_count(&self, object: ObjectId) -> usize {
        self.releases.lock().iter().filter(|id| **id == object).count()
    }
}

impl DispatchTransport for LoopbackTransport {
    fn resolve_member(&self, object: ObjectId, name: &str) -> FaultResult<DispId> {
        self.lookup(object)?
            .dispid_of(name)
            .ok_or_else(|| Fault::with_description(hresult::DISP_E_UNKNOWNNAME, name))
    }

    fn invoke(&self, object: ObjectId, member: DispId, args: &[Variant]) -> FaultResult<Option<Variant>> {
        let target = self.lookup(object)?;
        let name = target
            .name_of(member)
            .ok_or_else(|| Fault::new(hresult::DISP_E_MEMBERNOTFOUND))?;

        self.calls.lock().push(CallRecord {
            object,
            class: target.class().to_string(),
            member: name.to_string(),
            args: args.to_vec(),
        });

        // No table lock is held here: handlers may export new objects
        target.invoke(self, member, args)
    }

    fn get_property(&self, object: ObjectId, name: &str) -> FaultResult<Option<Variant>> {
        self.lookup(object)?.read(self, name)
    }

    fn release(&self, object: ObjectId) -> FaultResult<()> {
        self.releases.lock().push(object);
        match self.objects.write().remove(&object) {
            Some(_) => Ok(()),
            None => Err(Fault::new(hresult::RPC_E_DISCONNECTED)),
        }
    }
}
