//! Core automation types
//!
//! This module contains the data exchanged with a dispatch transport:
//! - Identifiers: ObjectId, DispId
//! - Values: Variant and the FromVariant decoding trait
//! - Failures: Fault, AutomationError, HRESULT codes

mod error;
mod identifiers;
mod variant;

pub use error::*;
pub use identifiers::{DispId, ObjectId};
pub use variant::{FromVariant, Variant, VariantKind};
