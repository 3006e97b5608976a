//! WMI scripting object model
//!
//! This crate exposes the WMI scripting interfaces (SWbemServices,
//! SWbemObject, ...) as typed Rust wrappers. Each wrapper owns one remote
//! reference and turns every typed operation into a late-bound call through
//! the [`automation`] crate.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Wrappers (this crate)                    │
//! │  Services · Object · ObjectSet · EventSource · Security ·   │
//! │  NamedValueSet                                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Local checks   │  Flag aggregation  │  Narrowing           │
//! │  - empty paths  │  - flag lists      │  - closed kind table │
//! │  - flags == 0   │  - empty → omitted │  - probe members     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  Invocation bridge (automation)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Calling convention
//!
//! Every operation first checks its arguments locally and fails with
//! [`WbemError::InvalidArgument`] without contacting the service. Then it
//! sends all parameters positionally, passing the omitted marker for each
//! optional parameter left unspecified. Remote failures keep the service's
//! fault code.
//!
//! ```ignore
//! use wbem::prelude::*;
//! use wbem::Services;
//!
//! let services = Services::narrow(handle)?;
//! for process in services.exec_query("SELECT * FROM Win32_Process")?.iter()? {
//!     let name: String = process?.property("Name")?;
//!     println!("{name}");
//! }
//! ```
//!
//! # Modules
//!
//! - [`flags`]: flag families and their aggregation
//! - [`narrow`]: narrowing references into wrappers
//! - [`objects`]: the wrappers and their option structs

pub mod flags;
pub mod narrow;
pub mod objects;

mod bridge;
mod error;


pub use bridge::WQL;
pub use error::{Result, WbemError};
pub use narrow::{narrow, AnyObject, ObjectKind};
pub use objects::{
    AssociatorsOptions, AuthenticationLevel, CallOptions, DeleteOptions, EventSource,
    ExecMethodOptions, ExecQueryOptions, ImpersonationLevel, NamedValueSet,
    NotificationQueryOptions, Object, ObjectSet, ObjectSetIter, ReferencesOptions,
    ScriptingObject, Security, SecurityCapable, Services, WbemSet, INFINITE,
};

/// Traits needed to call the shared operations
pub mod prelude {
    pub use crate::objects::{ScriptingObject, SecurityCapable, WbemSet};
}
