//! SWbemEventSource

use automation::{RemoteHandle, Variant};

use crate::bridge::call_object;
use crate::error::{Result, WbemError};

use super::{Object, SecurityCapable};

/// Wait without limit
pub const INFINITE: i32 = -1;

/// A stream of events from a notification query
#[derive(Debug)]
pub struct EventSource {
    handle: RemoteHandle,
}

scripting_object!(EventSource);

impl SecurityCapable for EventSource {}

impl EventSource {
    /// Block until the next event arrives
    pub fn next_event(&self) -> Result<Object> {
        self.next_event_with(None)
    }

    /// Wait at most `timeout_ms` milliseconds for the next event
    ///
    /// [`INFINITE`] waits without limit. When the wait runs out the service
    /// fails the call with `WBEMERR_TIMEDOUT`.
    pub fn next_event_with(&self, timeout_ms: Option<i32>) -> Result<Object> {
        if let Some(timeout) = timeout_ms {
            if timeout < INFINITE {
                return Err(WbemError::invalid("Timeout must be -1 or greater."));
            }
        }
        call_object(&self.handle, "NextEvent", &[Variant::from(timeout_ms)])
    }
}
