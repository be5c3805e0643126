//! DNS Resolution Module
//!
//! Forward and reverse lookups delegated to the operating system resolver:
//! - [`ResolverRuntime`]: scoped startup/cleanup of the networking subsystem
//! - [`GaiResolver`]: `getaddrinfo` / `getnameinfo` bindings
//! - [`NameResolutionService`]: console reporting around a resolver
//!
//! # Architecture
//!
//! The `Resolve` trait is the seam between the interactive workflow and the
//! platform. The system resolver borrows the runtime guard, so the borrow
//! checker enforces that no query runs before startup or after cleanup.
//!
//! # Example
//!
//! ```rust,no_run
//! use hostlookup::dns::{AddressFamily, GaiResolver, ResolutionRequest, Resolve, ResolverRuntime};
//!
//! let runtime = ResolverRuntime::acquire()?;
//! let resolver = GaiResolver::new(&runtime);
//! let addrs = resolver.resolve(ResolutionRequest::new("example.com", AddressFamily::Unspecified))?;
//! for addr in addrs.flatten() {
//!     println!("Resolved: {}", addr);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod gai;
mod resolve;
pub mod runtime;
pub mod service;

pub use gai::GaiResolver;
pub use resolve::{
    AddressFamily, AddressRecord, Addrs, Name, Resolve, ResolutionRequest, ReverseLookupRequest,
};
pub use runtime::ResolverRuntime;
pub use service::{BatchSummary, NameResolutionService};
