//! Concurrency Tests - Wrappers Across Threads
//!
//! Wrappers may move between threads but are not shared: each thread uses
//! its own wrapper, or callers serialize access behind a lock.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use wbem::prelude::*;
use wbem::{EventSource, NamedValueSet, Object, ObjectSet, Security, Services};

use common::*;

fn assert_send<T: Send>() {}

#[test]
fn test_wrappers_are_send() {
    assert_send::<Services>();
    assert_send::<Object>();
    assert_send::<ObjectSet>();
    assert_send::<EventSource>();
    assert_send::<Security>();
    assert_send::<NamedValueSet>();
}

/// Test: independent wrappers on many threads
#[test]
fn test_distinct_wrappers_per_thread() {
    const THREADS: usize = 8;
    const QUERIES_PER_THREAD: usize = 25;

    let (transport, _services) = fake_namespace();
    let completed = Arc::new(AtomicUsize::new(0));

    thread::scope(|scope| {
        for _ in 0..THREADS {
            let transport = transport.clone();
            let completed = completed.clone();
            scope.spawn(move || {
                let services = connect_services(&transport);
                for _ in 0..QUERIES_PER_THREAD {
                    let set = services.exec_query("SELECT * FROM Win32_Process").unwrap();
                    assert_eq!(set.count().unwrap(), PROCESS_COUNT as usize);
                    let first = set.item_index(0).unwrap();
                    assert_eq!(first.property::<i32>("ProcessId").unwrap(), 1000);
                    completed.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(completed.load(Ordering::SeqCst), THREADS * QUERIES_PER_THREAD);
    assert_eq!(transport.calls_to("ExecQuery").len(), THREADS * QUERIES_PER_THREAD);
    // Only the original services wrapper survives
    assert_eq!(transport.live_objects(), 1);
}

/// Test: one wrapper shared behind a lock
#[test]
fn test_shared_wrapper_behind_lock() {
    const THREADS: i32 = 4;

    let (transport, services) = fake_namespace();
    let set = Arc::new(Mutex::new(
        services.exec_query("SELECT * FROM Win32_Process").unwrap(),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|index| {
            let set = set.clone();
            thread::spawn(move || {
                let set = set.lock();
                set.item_index(index)
                    .and_then(|process| process.property::<i32>("ProcessId"))
                    .unwrap()
            })
        })
        .collect();

    let mut pids: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    pids.sort_unstable();
    assert_eq!(pids, (1000..1000 + THREADS).collect::<Vec<_>>());
    assert_eq!(transport.calls_to("ItemIndex").len(), THREADS as usize);
}

/// Test: a wrapper moved to another thread releases there on drop
#[test]
fn test_move_wrapper_to_thread() {
    let (transport, services) = fake_namespace();
    let process = services.get(Some("Win32_Process.Handle=\"4\"")).unwrap();
    let id = process.object_id();

    let pid = thread::spawn(move || process.property::<i32>("ProcessId").unwrap())
        .join()
        .unwrap();

    assert_eq!(pid, 4);
    assert!(!transport.is_live(id));
    assert_eq!(transport.release_count(id), 1);
}
