//! System DNS resolver using getaddrinfo and getnameinfo.
//!
//! This resolver uses the operating system's native resolution, so it
//! respects system DNS configuration (/etc/resolv.conf, nsswitch, hosts
//! file, the Windows resolver cache). Calls block the current thread.

use super::{
    runtime::ResolverRuntime, AddressFamily, AddressRecord, Addrs, Resolve, ResolutionRequest,
    ReverseLookupRequest,
};
use crate::base::{context::IoResultExt, error::ResolutionError};
use dns_lookup::{AddrFamily, AddrInfoHints, SockType};
use std::{io, net::SocketAddr};

#[cfg(unix)]
const NI_NAMEREQD: i32 = libc::NI_NAMEREQD;
#[cfg(windows)]
const NI_NAMEREQD: i32 = 0x04;

/// `AF_UNSPEC`: any family the resolver knows.
const AF_UNSPEC: i32 = 0;

/// The `ai_family` hint for a forward query.
fn family_hint(family: AddressFamily) -> i32 {
    match family {
        AddressFamily::Ipv4 => AddrFamily::Inet.into(),
        AddressFamily::Ipv6 => AddrFamily::Inet6.into(),
        AddressFamily::Unspecified => AF_UNSPEC,
    }
}

/// System resolver backed by `getaddrinfo` / `getnameinfo`.
///
/// Borrows the [`ResolverRuntime`], which keeps the networking subsystem up
/// for as long as the resolver exists.
#[derive(Clone, Debug)]
pub struct GaiResolver<'rt> {
    _runtime: &'rt ResolverRuntime,
}

impl<'rt> GaiResolver<'rt> {
    /// Creates a new `GaiResolver`.
    pub fn new(runtime: &'rt ResolverRuntime) -> Self {
        Self { _runtime: runtime }
    }
}

impl Resolve for GaiResolver<'_> {
    fn resolve(&self, request: ResolutionRequest) -> Result<Addrs, ResolutionError> {
        let domain = request.name().as_str();
        if domain.contains('\0') {
            return Err(ResolutionError::name_not_resolved(
                domain,
                io::Error::new(io::ErrorKind::InvalidInput, "Name contains a NUL byte"),
            ));
        }

        // One record per address: stream sockets only.
        let hints = AddrInfoHints {
            socktype: SockType::Stream.into(),
            address: family_hint(request.family()),
            ..AddrInfoHints::default()
        };

        tracing::debug!(domain = %domain, family = ?request.family(), "resolving via getaddrinfo");
        let infos = dns_lookup::getaddrinfo(Some(domain), None, Some(hints))
            .map_err(io::Error::from)
            .map_err(|e| {
                tracing::debug!(domain = %domain, error = %e, "DNS resolution failed");
                e
            })
            .dns_context(domain)?;

        let records: Vec<io::Result<AddressRecord>> = infos
            .map(|info| info.map(|info| AddressRecord::from(info.sockaddr.ip())))
            .collect();

        tracing::debug!(domain = %domain, count = records.len(), "DNS resolution complete");
        Ok(Box::new(records.into_iter()))
    }

    fn reverse(&self, request: ReverseLookupRequest) -> Result<String, ResolutionError> {
        let address = request.address();
        let sockaddr = SocketAddr::from((address, 0));

        tracing::debug!(address = %address, "reverse lookup via getnameinfo");
        let (host, _service) = dns_lookup::getnameinfo(&sockaddr, NI_NAMEREQD)
            .map_err(io::Error::from)
            .map_err(|e| {
                tracing::debug!(address = %address, error = %e, "reverse lookup failed");
                e
            })
            .reverse_context(address)?;

        tracing::debug!(address = %address, host = %host, "reverse lookup complete");
        Ok(host)
    }
}
