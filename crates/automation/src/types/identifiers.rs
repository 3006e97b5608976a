//! Automation identifier types
//!
//! - ObjectId: identifies one remote object reference handed out by a transport
//! - DispId: identifies a member of an object's dispatch table

use std::fmt;

/// Remote object reference identifier (16 bytes / UUID)
///
/// Each reference a transport hands out gets its own id, even when two
/// references point at the same remote object.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub uuid::Uuid);

impl ObjectId {
    /// Generate a random ObjectId
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create a nil ObjectId
    pub fn nil() -> Self {
        Self(uuid::Uuid::nil())
    }

    /// Check if this is the nil ObjectId
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dispatch member identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DispId(pub i32);

impl DispId {
    /// Unknown member (DISPID_UNKNOWN)
    pub const UNKNOWN: DispId = DispId(-1);

    /// Create a new DispId
    pub fn new(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Debug for DispId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DISPID({})", self.0)
    }
}

impl fmt::Display for DispId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
