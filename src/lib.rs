//! # hostlookup
//!
//! Interactive forward and reverse DNS lookups through the operating
//! system's resolver.
//!
//! `hostlookup` never speaks the DNS protocol itself. Names are resolved with
//! `getaddrinfo`, addresses with `getnameinfo`, so results follow the host's
//! own configuration: hosts file, search domains, nsswitch, resolver cache.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hostlookup::base::config::LookupConfig;
//! use hostlookup::console::Console;
//! use hostlookup::dispatcher::Dispatcher;
//! use hostlookup::dns::{GaiResolver, NameResolutionService, ResolverRuntime};
//! use hostlookup::input::InputHandler;
//!
//! let runtime = ResolverRuntime::acquire()?;
//! let config = LookupConfig::default();
//! let dispatcher = Dispatcher::new(
//!     NameResolutionService::new(GaiResolver::new(&runtime)),
//!     InputHandler::new(&config),
//! );
//! dispatcher.run(&mut Console::stdio())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error taxonomy, error context and configuration
//! - [`console`] - Line-oriented terminal access
//! - [`dispatcher`] - The interactive menu
//! - [`dns`] - Resolver runtime guard, system resolver and lookup service
//! - [`input`] - Validated menu, count, family and text input

pub mod base;
pub mod console;
pub mod dispatcher;
pub mod dns;
pub mod input;
