//! Common test utilities for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use automation::loopback::{LoopbackTransport, ScriptedObject};
use automation::{
    hresult, AsyncDispatchTransport, DispId, DispatchTransport, Fault, FaultResult, ObjectId,
    RemoteHandle, Variant,
};
use wbem::{ScriptingObject, Services};

static INIT: Once = Once::new();

/// Initialize test logging; `RUST_LOG` selects the level
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Number of processes every fake namespace reports
pub const PROCESS_COUNT: i32 = 5;

/// A fresh loopback transport and a services object connected to it
pub fn fake_namespace() -> (Arc<LoopbackTransport>, Services) {
    init_logging();
    let transport = Arc::new(LoopbackTransport::new());
    let services = Services::narrow(transport.connect(services_object()))
        .expect("fake services object narrows");
    (transport, services)
}

/// A second services wrapper on an existing transport
pub fn connect_services(transport: &Arc<LoopbackTransport>) -> Services {
    Services::narrow(transport.connect(services_object())).expect("fake services object narrows")
}

pub fn services_object() -> ScriptedObject {
    ScriptedObject::new("SWbemServices")
        .method("AssociatorsOf", |host, _| Ok(Some(host.export(process_set(2)))))
        .method("Delete", |_, _| Ok(None))
        .method("ExecMethod", |host, _| Ok(Some(host.export(process(0)))))
        .method("ExecNotificationQuery", |host, _| {
            Ok(Some(host.export(event_source(3))))
        })
        .method("ExecQuery", |host, args| match args.first() {
            Some(Variant::Bstr(query)) if query.contains("Win32_Process") => {
                Ok(Some(host.export(process_set(PROCESS_COUNT))))
            }
            Some(Variant::Bstr(query)) if query.contains("Win32_Nothing") => {
                Ok(Some(host.export(process_set(0))))
            }
            _ => Err(Fault::new(hresult::WBEM_E_INVALID_QUERY)),
        })
        .method("Get", |host, args| match args.first() {
            Some(Variant::Bstr(path)) if path.starts_with("Win32_Process") => {
                Ok(Some(host.export(process(4))))
            }
            Some(Variant::Omitted) => Ok(Some(host.export(process(0)))),
            _ => Err(Fault::new(hresult::WBEM_E_NOT_FOUND)),
        })
        .method("InstancesOf", |host, _| Ok(Some(host.export(process_set(PROCESS_COUNT)))))
        .method("ReferencesTo", |host, _| Ok(Some(host.export(process_set(1)))))
        .method("SubclassesOf", |host, _| Ok(Some(host.export(process_set(0)))))
        .property_with("Security_", |host| Ok(Some(host.export(security()))))
}

/// A Win32_Process instance
pub fn process(pid: i32) -> ScriptedObject {
    ScriptedObject::new("Win32_Process")
        .property("Properties_", Variant::Null)
        .property("Path_", format!("Win32_Process.Handle=\"{pid}\""))
        .property("Name", format!("process{pid}.exe"))
        .property("ProcessId", pid)
        .property_with("Security_", |host| Ok(Some(host.export(security()))))
        .method("Delete_", |_, _| Ok(None))
}

/// A set of `count` processes, numbered from 1000
pub fn process_set(count: i32) -> ScriptedObject {
    ScriptedObject::new("SWbemObjectSet")
        .property("Count", count)
        .property_with("Security_", |host| Ok(Some(host.export(security()))))
        .method("ItemIndex", move |host, args| match args.first() {
            Some(Variant::I4(index)) if (0..count).contains(index) => {
                Ok(Some(host.export(process(1000 + index))))
            }
            _ => Err(Fault::new(hresult::WBEM_E_NOT_FOUND)),
        })
}

pub fn security() -> ScriptedObject {
    ScriptedObject::new("SWbemSecurity")
        .property("ImpersonationLevel", 3)
        .property("AuthenticationLevel", 6)
}

/// An event source that delivers `events` events and then times out
pub fn event_source(events: usize) -> ScriptedObject {
    let remaining = Arc::new(AtomicUsize::new(events));
    ScriptedObject::new("SWbemEventSource")
        .property_with("Security_", |host| Ok(Some(host.export(security()))))
        .method("NextEvent", move |host, _| {
            remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .map_err(|_| Fault::new(hresult::WBEMERR_TIMEDOUT))?;
            Ok(Some(host.export(process(7))))
        })
}

/// Async front for a loopback transport, with an optional delay on invoke
pub struct AsyncLoopback {
    pub inner: Arc<LoopbackTransport>,
    pub invoke_delay: Option<Duration>,
}

impl AsyncLoopback {
    pub fn new(inner: Arc<LoopbackTransport>) -> Self {
        Self {
            inner,
            invoke_delay: None,
        }
    }

    pub fn with_invoke_delay(inner: Arc<LoopbackTransport>, delay: Duration) -> Self {
        Self {
            inner,
            invoke_delay: Some(delay),
        }
    }
}

#[async_trait]
impl AsyncDispatchTransport for AsyncLoopback {
    async fn resolve_member(&self, object: ObjectId, name: &str) -> FaultResult<DispId> {
        tokio::task::yield_now().await;
        self.inner.resolve_member(object, name)
    }

    async fn invoke(
        &self,
        object: ObjectId,
        member: DispId,
        args: Vec<Variant>,
    ) -> FaultResult<Option<Variant>> {
        if let Some(delay) = self.invoke_delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.invoke(object, member, &args)
    }

    async fn get_property(&self, object: ObjectId, name: &str) -> FaultResult<Option<Variant>> {
        self.inner.get_property(object, name)
    }

    async fn release(&self, object: ObjectId) -> FaultResult<()> {
        self.inner.release(object)
    }
}

/// Export `object` on `loopback` and hand out a handle that talks through `transport`
pub fn connect_through(
    loopback: &LoopbackTransport,
    transport: Arc<dyn DispatchTransport>,
    object: ScriptedObject,
) -> RemoteHandle {
    match loopback.export(object) {
        Variant::Dispatch(id) => RemoteHandle::new(transport, id),
        other => panic!("export returned {:?}", other),
    }
}
