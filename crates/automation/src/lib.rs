//! Automation dispatch layer
//!
//! This crate provides the generic machinery for calling members of remote
//! automation (IDispatch-style) objects: the VARIANT codec, owned remote
//! handles, the two-phase resolve-then-invoke call, and the transport seam.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Typed object models (wbem crate)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RemoteHandle          │  Variant codec    │  Faults        │
//! │  - resolve (by name)   │  - Omitted marker │  - HRESULTs    │
//! │  - invoke (by DISPID)  │  - FromVariant    │  - call context│
//! │  - release on drop     │  - Decoded        │                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DispatchTransport (sync)  ◄── BlockingTransport ◄── async  │
//! │  LoopbackTransport (in-process scripted objects)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`]: Variant, identifiers, faults
//! - [`transport`]: transport traits and the blocking adapter
//! - [`loopback`]: in-process transport over scripted objects

pub mod types;
pub mod transport;
pub mod loopback;

mod handle;

pub use types::{
    hresult, AutomationError, DispId, Fault, FaultResult, FromVariant, ObjectId, Result, Variant,
    VariantKind,
};
pub use handle::{Decoded, RemoteHandle};
pub use transport::{
    AsyncDispatchTransport, BlockingTransport, BlockingTransportBuilder, BlockingTransportConfig,
    DispatchTransport,
};
