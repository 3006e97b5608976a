//! SWbemNamedValueSet

use automation::{RemoteHandle, Variant};

use crate::bridge::{call_object, call_void, required_text};
use crate::error::{Result, WbemError};

use super::WbemSet;

/// Name/value pairs passed as the context of an operation
#[derive(Debug)]
pub struct NamedValueSet {
    handle: RemoteHandle,
}

scripting_object!(NamedValueSet);

impl WbemSet for NamedValueSet {}

impl NamedValueSet {
    /// Add `name`, replacing any value it already has
    pub fn add(&self, name: &str, value: impl Into<Variant>) -> Result<()> {
        let name = required_text(name, "Name")?;
        let value = value.into();
        if value.is_omitted() {
            return Err(WbemError::invalid("Value is missing."));
        }
        call_void(&self.handle, "Add", &[name, value, Variant::Omitted])
    }

    /// Remove `name`
    pub fn remove(&self, name: &str) -> Result<()> {
        let args = [required_text(name, "Name")?, Variant::Omitted];
        call_void(&self.handle, "Remove", &args)
    }

    /// Remove every pair
    pub fn delete_all(&self) -> Result<()> {
        call_void(&self.handle, "DeleteAll", &[])
    }

    /// An independent copy of this set
    pub fn clone_set(&self) -> Result<NamedValueSet> {
        call_object(&self.handle, "Clone", &[])
    }
}
