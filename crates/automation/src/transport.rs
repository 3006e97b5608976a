//! Dispatch transport seam
//!
//! The transport performs the actual remote calls and owns the remote side of
//! object lifetime. This crate never talks to the wire itself; it only calls
//! through [`DispatchTransport`].
//!
//! Transports built on an async RPC stack implement
//! [`AsyncDispatchTransport`] instead and are adapted with
//! [`BlockingTransport`], which drives each call to completion on a private
//! tokio runtime.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, trace};

use crate::types::{hresult, DispId, Fault, FaultResult, ObjectId, Variant};

/// Synchronous dispatch transport
///
/// Implementations must be safe to share between threads. Calls on
/// different objects may arrive concurrently.
pub trait DispatchTransport: Send + Sync {
    /// Resolve a member name to its DISPID (GetIDsOfNames)
    fn resolve_member(&self, object: ObjectId, name: &str) -> FaultResult<DispId>;

    /// Invoke a member with positional arguments (Invoke)
    ///
    /// Returns `None` when the member produced no value.
    fn invoke(&self, object: ObjectId, member: DispId, args: &[Variant]) -> FaultResult<Option<Variant>>;

    /// Read a property by name
    fn get_property(&self, object: ObjectId, name: &str) -> FaultResult<Option<Variant>>;

    /// Release a reference previously handed out by this transport
    fn release(&self, object: ObjectId) -> FaultResult<()>;
}

/// Asynchronous dispatch transport
#[async_trait]
pub trait AsyncDispatchTransport: Send + Sync {
    /// Resolve a member name to its DISPID
    async fn resolve_member(&self, object: ObjectId, name: &str) -> FaultResult<DispId>;

    /// Invoke a member with positional arguments
    async fn invoke(
        &self,
        object: ObjectId,
        member: DispId,
        args: Vec<Variant>,
    ) -> FaultResult<Option<Variant>>;

    /// Read a property by name
    async fn get_property(&self, object: ObjectId, name: &str) -> FaultResult<Option<Variant>>;

    /// Release a reference
    async fn release(&self, object: ObjectId) -> FaultResult<()>;
}

/// Configuration for [`BlockingTransport`]
#[derive(Clone, Debug, Default)]
pub struct BlockingTransportConfig {
    /// Upper bound for a single remote call; `None` waits indefinitely
    pub call_timeout: Option<Duration>,
    /// Worker threads for the runtime; `None` drives calls on the caller's thread
    pub worker_threads: Option<usize>,
}

/// Adapts an [`AsyncDispatchTransport`] into a [`DispatchTransport`]
///
/// Every call blocks the calling thread. Must not be used from inside
/// another tokio runtime.
pub struct BlockingTransport<T> {
    inner: T,
    runtime: Runtime,
    config: BlockingTransportConfig,
}

impl<T: AsyncDispatchTransport> BlockingTransport<T> {
    /// Wrap a transport using the default configuration
    pub fn new(inner: T) -> std::io::Result<Self> {
        Self::with_config(inner, BlockingTransportConfig::default())
    }

    /// Wrap a transport with a custom configuration
    pub fn with_config(inner: T, config: BlockingTransportConfig) -> std::io::Result<Self> {
        let runtime = match config.worker_threads {
            Some(threads) => Builder::new_multi_thread()
                .worker_threads(threads.max(1))
                .thread_name("automation-transport")
                .enable_all()
                .build()?,
            None => Builder::new_current_thread().enable_all().build()?,
        };
        debug!(
            "Blocking transport ready: worker_threads={:?}, call_timeout={:?}",
            config.worker_threads, config.call_timeout
        );
        Ok(Self { inner, runtime, config })
    }

    /// The wrapped transport
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// The active configuration
    pub fn config(&self) -> &BlockingTransportConfig {
        &self.config
    }

    fn run<R, F>(&self, what: &str, call: F) -> FaultResult<R>
    where
        F: Future<Output = FaultResult<R>>,
    {
        match self.config.call_timeout {
            Some(limit) => self.runtime.block_on(async {
                match tokio::time::timeout(limit, call).await {
                    Ok(result) => result,
                    Err(_) => {
                        trace!("{} timed out after {:?}", what, limit);
                        Err(Fault::with_description(
                            hresult::RPC_E_TIMEOUT,
                            format!("{what} timed out after {limit:?}"),
                        ))
                    }
                }
            }),
            None => self.runtime.block_on(call),
        }
    }
}

impl<T: AsyncDispatchTransport> DispatchTransport for BlockingTransport<T> {
    fn resolve_member(&self, object: ObjectId, name: &str) -> FaultResult<DispId> {
        self.run("resolve", self.inner.resolve_member(object, name))
    }

    fn invoke(&self, object: ObjectId, member: DispId, args: &[Variant]) -> FaultResult<Option<Variant>> {
        self.run("invoke", self.inner.invoke(object, member, args.to_vec()))
    }

    fn get_property(&self, object: ObjectId, name: &str) -> FaultResult<Option<Variant>> {
        self.run("property get", self.inner.get_property(object, name))
    }

    fn release(&self, object: ObjectId) -> FaultResult<()> {
        self.run("release", self.inner.release(object))
    }
}

/// Builder for [`BlockingTransport`]
pub struct BlockingTransportBuilder<T> {
    inner: T,
    config: BlockingTransportConfig,
}

impl<T: AsyncDispatchTransport> BlockingTransportBuilder<T> {
    /// Create a new builder
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            config: BlockingTransportConfig::default(),
        }
    }

    /// Set the per-call timeout
    pub fn call_timeout(mut self, timeout: Duration) -> Self {
        self.config.call_timeout = Some(timeout);
        self
    }

    /// Use a multi-threaded runtime with this many workers
    pub fn worker_threads(mut self, threads: usize) -> Self {
        self.config.worker_threads = Some(threads);
        self
    }

    /// Build the transport
    pub fn build(self) -> std::io::Result<BlockingTransport<T>> {
        BlockingTransport::with_config(self.inner, self.config)
    }
}
