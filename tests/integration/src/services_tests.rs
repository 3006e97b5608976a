//! Services Tests - Typed Operations End to End
//!
//! These tests drive the services wrapper against a fake namespace and
//! check exactly what reaches the remote side:
//! - Omitted markers for unset optional parameters
//! - Local argument checks that never reach the service
//! - Result narrowing and ordinal enumeration
//! - Reference release when wrappers are dropped

mod common;

use automation::{hresult, Variant};
use wbem::flags::ExecQueryFlag;
use wbem::prelude::*;
use wbem::{DeleteOptions, ExecQueryOptions, NotificationQueryOptions};

use common::*;

/// Test: exec_query with only the query sends three omitted markers
#[test]
fn test_exec_query_omits_unset_parameters() {
    let (transport, services) = fake_namespace();

    let set = services.exec_query("SELECT * FROM Win32_Process").unwrap();
    assert_eq!(set.count().unwrap(), PROCESS_COUNT as usize);

    let calls = transport.calls_to("ExecQuery");
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].args,
        vec![
            Variant::from("SELECT * FROM Win32_Process"),
            Variant::Omitted,
            Variant::Omitted,
            Variant::Omitted,
        ]
    );
}

/// Test: flag lists arrive as one summed mask
#[test]
fn test_exec_query_flag_mask() {
    let (transport, services) = fake_namespace();

    let options = ExecQueryOptions {
        flags: &[ExecQueryFlag::ForwardOnly, ExecQueryFlag::ReturnImmediately],
        ..Default::default()
    };
    services
        .exec_query_with("SELECT * FROM Win32_Process", &options)
        .unwrap();

    let args = &transport.calls_to("ExecQuery")[0].args;
    assert_eq!(args[2], Variant::I4(48));
    assert_eq!(args[1], Variant::Omitted);
}

/// Test: delete with non-zero flags fails locally and sends nothing
#[test]
fn test_delete_nonzero_flags_is_local() {
    let (transport, services) = fake_namespace();

    let options = DeleteOptions {
        flags: Some(5),
        context: None,
    };
    let err = services
        .delete_with("Win32_Process.Handle=\"4\"", &options)
        .unwrap_err();

    assert!(err.is_local());
    assert!(err.to_string().contains("Flags must be zero"));
    assert!(transport.calls().is_empty());
}

/// Test: associators_of with only a path keeps all ten optional slots
#[test]
fn test_associators_of_all_defaults() {
    let (transport, services) = fake_namespace();

    services.associators_of("Win32_Process.Handle=\"4\"").unwrap();

    let args = &transport.calls_to("AssociatorsOf")[0].args;
    assert_eq!(args.len(), 11);
    assert_eq!(args[0], Variant::from("Win32_Process.Handle=\"4\""));
    assert!(args[1..].iter().all(Variant::is_omitted));
}

/// Test: a negative index is local, index zero on an empty set is remote
#[test]
fn test_item_index_local_and_remote_failures() {
    let (transport, services) = fake_namespace();
    let empty = services.exec_query("SELECT * FROM Win32_Nothing").unwrap();
    transport.clear_calls();

    let err = empty.item_index(-1).unwrap_err();
    assert!(err.is_local());
    assert!(transport.calls().is_empty());

    let err = empty.item_index(0).unwrap_err();
    assert!(err.is_remote());
    assert_eq!(err.fault().map(|f| f.code), Some(hresult::WBEM_E_NOT_FOUND));
    assert_eq!(transport.calls_to("ItemIndex").len(), 1);
}

/// Test: remote query failures keep the service's code
#[test]
fn test_invalid_query_is_remote() {
    let (_, services) = fake_namespace();

    let err = services.exec_query("SELECT * FROM").unwrap_err();
    assert!(err.is_remote());
    assert_eq!(err.fault().map(|f| f.code), Some(hresult::WBEM_E_INVALID_QUERY));
}

/// Test: enumerating a set visits every element once and releases each
#[test]
fn test_enumerate_processes() {
    let (transport, services) = fake_namespace();
    let set = services.instances_of("Win32_Process").unwrap();
    let live_before = transport.live_objects();

    let mut pids = Vec::new();
    for process in set.iter().unwrap() {
        let process = process.unwrap();
        pids.push(process.property::<i32>("ProcessId").unwrap());
        assert_eq!(transport.live_objects(), live_before + 1);
    }

    assert_eq!(pids, (1000..1000 + PROCESS_COUNT).collect::<Vec<_>>());
    assert_eq!(transport.live_objects(), live_before);
}

/// Test: results are owned by their wrappers and released exactly once
#[test]
fn test_results_released_on_drop() {
    let (transport, services) = fake_namespace();

    let process = services.get(Some("Win32_Process.Handle=\"4\"")).unwrap();
    let security = process.security().unwrap();
    let ids = [process.object_id(), security.object_id()];

    drop(process);
    assert!(transport.is_live(ids[1]));
    drop(security);

    for id in ids {
        assert!(!transport.is_live(id));
        assert_eq!(transport.release_count(id), 1);
    }
}

/// Test: notification queries deliver events until the source times out
#[test]
fn test_notification_query_events() {
    let (transport, services) = fake_namespace();

    let options = NotificationQueryOptions {
        language: Some("WQL"),
        flags: Some(48),
        context: None,
    };
    let events = services
        .exec_notification_query_with(
            "SELECT * FROM __InstanceCreationEvent WITHIN 1 WHERE TargetInstance ISA 'Win32_Process'",
            &options,
        )
        .unwrap();

    for _ in 0..3 {
        let event = events.next_event_with(Some(1000)).unwrap();
        assert_eq!(event.property::<i32>("ProcessId").unwrap(), 7);
    }
    let err = events.next_event_with(Some(1000)).unwrap_err();
    assert_eq!(err.fault().map(|f| f.code), Some(hresult::WBEMERR_TIMEDOUT));
    assert_eq!(transport.calls_to("NextEvent").len(), 4);
}

/// Test: get without a path omits it; unknown paths fail remotely
#[test]
fn test_get_without_path() {
    let (transport, services) = fake_namespace();

    let class = services.get(None).unwrap();
    assert_eq!(class.property::<i32>("ProcessId").unwrap(), 0);
    assert_eq!(transport.calls_to("Get")[0].args, vec![Variant::Omitted; 3]);

    let err = services.get(Some("Win32_Service.Name=\"Spooler\"")).unwrap_err();
    assert_eq!(err.fault().map(|f| f.code), Some(hresult::WBEM_E_NOT_FOUND));
}
