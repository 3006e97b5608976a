//! Transport Tests - Async Transports Behind the Blocking Adapter
//!
//! The wrappers only speak to synchronous transports. These tests run the
//! same operations through `BlockingTransport` over an async front for the
//! loopback transport, including call timeouts.
//!
//! The tests are plain `#[test]` functions: the adapter owns its runtime and
//! must not be driven from inside another one.

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use automation::loopback::LoopbackTransport;
use automation::{hresult, BlockingTransport, BlockingTransportBuilder, DispatchTransport, Variant};
use wbem::prelude::*;
use wbem::Services;

use common::*;

fn blocking_namespace(
    transport: BlockingTransport<AsyncLoopback>,
) -> (Arc<LoopbackTransport>, Services) {
    let loopback = transport.inner().inner.clone();
    let transport: Arc<dyn DispatchTransport> = Arc::new(transport);
    let handle = connect_through(&loopback, transport, services_object());
    (loopback, Services::narrow(handle).unwrap())
}

/// Test: typed operations work unchanged through the blocking adapter
#[test]
fn test_query_through_blocking_transport() {
    init_logging();
    let loopback = Arc::new(LoopbackTransport::new());
    let transport = BlockingTransport::new(AsyncLoopback::new(loopback)).unwrap();
    let (loopback, services) = blocking_namespace(transport);

    let set = services.exec_query("SELECT * FROM Win32_Process").unwrap();
    let names: Vec<String> = set
        .iter()
        .unwrap()
        .map(|process| process.and_then(|p| p.property::<String>("Name")))
        .collect::<wbem::Result<_>>()
        .unwrap();

    assert_eq!(names.len(), PROCESS_COUNT as usize);
    assert_eq!(names[0], "process1000.exe");
    assert_eq!(
        loopback.calls_to("ExecQuery")[0].args[1..],
        [Variant::Omitted, Variant::Omitted, Variant::Omitted]
    );
}

/// Test: a call slower than the configured limit fails with RPC_E_TIMEOUT
#[test]
fn test_call_timeout() {
    init_logging();
    let loopback = Arc::new(LoopbackTransport::new());
    let transport = BlockingTransportBuilder::new(AsyncLoopback::with_invoke_delay(
        loopback,
        Duration::from_millis(500),
    ))
    .call_timeout(Duration::from_millis(20))
    .build()
    .unwrap();
    let (loopback, services) = blocking_namespace(transport);

    let start = Instant::now();
    let err = services.exec_query("SELECT * FROM Win32_Process").unwrap_err();

    assert!(start.elapsed() < Duration::from_millis(500));
    assert!(err.is_remote());
    assert_eq!(err.fault().map(|f| f.code), Some(hresult::RPC_E_TIMEOUT));
    // Nothing came back, so nothing beyond the services object is live
    assert_eq!(loopback.live_objects(), 1);
}

/// Test: local checks fail without touching the async transport
#[test]
fn test_local_failure_skips_transport() {
    init_logging();
    let loopback = Arc::new(LoopbackTransport::new());
    let transport = BlockingTransportBuilder::new(AsyncLoopback::new(loopback))
        .worker_threads(2)
        .build()
        .unwrap();
    let (loopback, services) = blocking_namespace(transport);

    assert!(services.instances_of("").unwrap_err().is_local());
    assert!(services.delete("").unwrap_err().is_local());
    assert!(loopback.calls().is_empty());

    let set = services.instances_of("Win32_Process").unwrap();
    assert_eq!(set.count().unwrap(), PROCESS_COUNT as usize);
}

/// Test: dropping wrappers releases through the adapter
#[test]
fn test_release_through_blocking_transport() {
    init_logging();
    let loopback = Arc::new(LoopbackTransport::new());
    let transport = BlockingTransport::new(AsyncLoopback::new(loopback)).unwrap();
    let (loopback, services) = blocking_namespace(transport);

    let process = services.get(Some("Win32_Process.Handle=\"4\"")).unwrap();
    let id = process.object_id();
    assert!(loopback.is_live(id));

    drop(process);
    assert!(!loopback.is_live(id));
    assert_eq!(loopback.release_count(id), 1);

    let services_id = services.object_id();
    drop(services);
    assert_eq!(loopback.release_count(services_id), 1);
    assert_eq!(loopback.live_objects(), 0);
}
