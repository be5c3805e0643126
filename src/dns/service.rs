//! Name resolution service.
//!
//! Runs forward, reverse and batch lookups against a [`Resolve`]
//! implementation and reports each one on the console: progress and results
//! on standard output, failures on standard error. Resolution failures are
//! reported here and then handed back, so callers only need to look at
//! console errors.

use super::{AddressFamily, AddressRecord, Name, Resolve, ResolutionRequest, ReverseLookupRequest};
use crate::base::error::Error;
use crate::console::Console;
use std::io::Write;

/// Totals for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub attempted: usize,
    pub resolved: usize,
    pub failed: usize,
}

/// Console-facing wrapper around a resolver.
#[derive(Debug, Clone)]
pub struct NameResolutionService<R> {
    resolver: R,
}

impl<R: Resolve> NameResolutionService<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolves one domain and prints its addresses.
    ///
    /// The domain is used verbatim. When the resolver succeeds with no
    /// records the `Addresses:` header is still printed.
    pub fn resolve_forward<I, O: Write, E: Write>(
        &self,
        console: &mut Console<I, O, E>,
        domain: impl Into<Name>,
        family: AddressFamily,
    ) -> Result<Vec<AddressRecord>, Error> {
        let request = ResolutionRequest::new(domain, family);
        let domain = request.name().clone();
        writeln!(console.out(), "\nResolving: {domain}")?;

        let addrs = match self.resolver.resolve(request) {
            Ok(addrs) => addrs,
            Err(err) => {
                writeln!(console.err(), "Error: {err}")?;
                return Err(err.into());
            }
        };

        writeln!(console.out(), "Addresses:")?;
        let mut records = Vec::new();
        for addr in addrs {
            match addr {
                Ok(record) => {
                    writeln!(console.out(), "  {record}")?;
                    records.push(record);
                }
                Err(e) => {
                    tracing::debug!(domain = %domain, error = %e, "unconvertible address record");
                    writeln!(console.err(), "Warning: Failed to convert address. Skipping...")?;
                }
            }
        }
        Ok(records)
    }

    /// Looks up the hostname of a dotted-decimal IPv4 address.
    ///
    /// Text that is not a valid IPv4 address is rejected before the resolver
    /// is called.
    pub fn resolve_reverse<I, O: Write, E: Write>(
        &self,
        console: &mut Console<I, O, E>,
        ip: &str,
    ) -> Result<String, Error> {
        writeln!(console.out(), "\nReverse Lookup: {ip}")?;

        let request = match ip.parse::<ReverseLookupRequest>() {
            Ok(request) => request,
            Err(err) => {
                writeln!(console.err(), "{err}")?;
                return Err(err.into());
            }
        };

        match self.resolver.reverse(request) {
            Ok(host) => {
                writeln!(console.out(), "Resolved Hostname: {host}")?;
                Ok(host)
            }
            Err(err) => {
                writeln!(console.err(), "{err}")?;
                Err(err.into())
            }
        }
    }

    /// Resolves each domain in order, one at a time.
    ///
    /// A failed domain is reported and the batch moves on; only a console
    /// failure stops it early.
    pub fn resolve_multiple<I, O: Write, E: Write, D: Into<Name>>(
        &self,
        console: &mut Console<I, O, E>,
        domains: impl IntoIterator<Item = D>,
        family: AddressFamily,
    ) -> Result<BatchSummary, Error> {
        let mut summary = BatchSummary::default();
        for domain in domains {
            summary.attempted += 1;
            match self.resolve_forward(console, domain, family) {
                Ok(_) => summary.resolved += 1,
                Err(err) if err.is_recoverable() => summary.failed += 1,
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            attempted = summary.attempted,
            resolved = summary.resolved,
            failed = summary.failed,
            "batch resolution complete"
        );
        Ok(summary)
    }
}
