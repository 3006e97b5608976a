//! Scripted automation objects hosted by the loopback transport

use std::fmt;
use std::sync::Arc;

use crate::types::{hresult, DispId, Fault, FaultResult, Variant};

use super::LoopbackTransport;

/// Handler for a method call
pub type MethodFn =
    Arc<dyn Fn(&LoopbackTransport, &[Variant]) -> FaultResult<Option<Variant>> + Send + Sync>;

/// Handler for a property read
pub type PropertyFn = Arc<dyn Fn(&LoopbackTransport) -> FaultResult<Option<Variant>> + Send + Sync>;

#[derive(Clone)]
enum Member {
    Method(MethodFn),
    Property(PropertyFn),
}

/// An in-process automation object built from closures
///
/// Members get DISPIDs in declaration order, starting at 1. Names resolve
/// case-insensitively, as IDispatch does.
#[derive(Clone)]
pub struct ScriptedObject {
    class: String,
    members: Vec<(String, Member)>,
}

impl ScriptedObject {
    /// Create an object with no members
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            members: Vec::new(),
        }
    }

    /// Add a method
    pub fn method<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&LoopbackTransport, &[Variant]) -> FaultResult<Option<Variant>> + Send + Sync + 'static,
    {
        self.members.push((name.to_string(), Member::Method(Arc::new(handler))));
        self
    }

    /// Add a method that always fails with `code`
    pub fn failing_method(self, name: &str, code: u32) -> Self {
        self.method(name, move |_, _| Err(Fault::new(code)))
    }

    /// Add a property with a fixed value
    pub fn property(mut self, name: &str, value: impl Into<Variant>) -> Self {
        let value = value.into();
        self.members.push((
            name.to_string(),
            Member::Property(Arc::new(move |_| Ok(Some(value.clone())))),
        ));
        self
    }

    /// Add a property computed on every read
    pub fn property_with<F>(mut self, name: &str, getter: F) -> Self
    where
        F: Fn(&LoopbackTransport) -> FaultResult<Option<Variant>> + Send + Sync + 'static,
    {
        self.members.push((name.to_string(), Member::Property(Arc::new(getter))));
        self
    }

    /// Class name, used in call records
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Look up a member's DISPID by name
    pub fn dispid_of(&self, name: &str) -> Option<DispId> {
        self.members
            .iter()
            .position(|(member, _)| member.eq_ignore_ascii_case(name))
            .map(|index| DispId::new(index as i32 + 1))
    }

    /// Name of the member with this DISPID
    pub fn name_of(&self, dispid: DispId) -> Option<&str> {
        self.member_at(dispid).map(|(name, _)| name.as_str())
    }

    fn member_at(&self, dispid: DispId) -> Option<&(String, Member)> {
        dispid
            .0
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| self.members.get(index))
    }

    pub(crate) fn invoke(
        &self,
        host: &LoopbackTransport,
        dispid: DispId,
        args: &[Variant],
    ) -> FaultResult<Option<Variant>> {
        match self.member_at(dispid) {
            Some((_, Member::Method(handler))) => handler(host, args),
            // Invoking a property id performs a property get
            Some((_, Member::Property(getter))) => getter(host),
            None => Err(Fault::new(hresult::DISP_E_MEMBERNOTFOUND)),
        }
    }

    pub(crate) fn read(&self, host: &LoopbackTransport, name: &str) -> FaultResult<Option<Variant>> {
        let member = self
            .members
            .iter()
            .find(|(member, _)| member.eq_ignore_ascii_case(name));
        match member {
            Some((_, Member::Property(getter))) => getter(host),
            _ => Err(Fault::new(hresult::DISP_E_MEMBERNOTFOUND)),
        }
    }
}

impl fmt::Debug for ScriptedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.members.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("ScriptedObject")
            .field("class", &self.class)
            .field("members", &names)
            .finish()
    }
}
