//! Core DNS resolution types and traits.
//!
//! This module defines the `Resolve` trait and the request/record types that
//! flow between the console layer and the system resolver.

use crate::base::error::{InvalidAddressError, ResolutionError};
use std::{
    fmt, io,
    net::{IpAddr, Ipv4Addr},
    str::FromStr,
};

/// A domain name to resolve into IP addresses.
///
/// Holds the text exactly as entered; nothing is trimmed or normalized.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Name {
    host: Box<str>,
}

impl Name {
    /// Creates a new [`Name`] from any string-like type.
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    /// View the hostname as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name::new(value)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}

/// IP version scope of a forward query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressFamily {
    /// A records only.
    Ipv4,
    /// AAAA records only.
    Ipv6,
    /// Both, in whatever order the resolver prefers.
    #[default]
    Unspecified,
}

impl AddressFamily {
    /// Maps a submenu code: 1 is IPv4, 2 is IPv6, 3 is both.
    pub fn from_choice(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Ipv4),
            2 => Some(Self::Ipv6),
            3 => Some(Self::Unspecified),
            _ => None,
        }
    }
}

/// One forward query: a name plus the family to ask for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionRequest {
    name: Name,
    family: AddressFamily,
}

impl ResolutionRequest {
    pub fn new(name: impl Into<Name>, family: AddressFamily) -> Self {
        Self {
            name: name.into(),
            family,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }
}

/// A reverse query for an address that already passed strict IPv4 parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReverseLookupRequest {
    address: Ipv4Addr,
}

impl ReverseLookupRequest {
    pub fn new(address: Ipv4Addr) -> Self {
        Self { address }
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }
}

/// Strict dotted-decimal parsing.
///
/// Every unparseable string is an error; no text is ever mapped onto a
/// reserved address such as `255.255.255.255`.
impl FromStr for ReverseLookupRequest {
    type Err = InvalidAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Ipv4Addr>()
            .map(Self::new)
            .map_err(|_| InvalidAddressError::new(s))
    }
}

/// A single resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRecord(IpAddr);

impl AddressRecord {
    pub fn ip(&self) -> IpAddr {
        self.0
    }
}

impl From<IpAddr> for AddressRecord {
    fn from(ip: IpAddr) -> Self {
        Self(ip)
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Records in resolver order. An `Err` item is an entry the resolver
/// returned but that could not be converted to an address.
pub type Addrs = Box<dyn Iterator<Item = io::Result<AddressRecord>>>;

/// Trait for name resolution.
///
/// The seam between the console workflow and the platform resolver.
/// Every call is one blocking query; implementations do not cache.
pub trait Resolve {
    /// Forward lookup: name to addresses.
    fn resolve(&self, request: ResolutionRequest) -> Result<Addrs, ResolutionError>;

    /// Reverse lookup: address to hostname. Must fail rather than fall back
    /// to the numeric form when no name exists.
    fn reverse(&self, request: ReverseLookupRequest) -> Result<String, ResolutionError>;
}

impl<R: Resolve + ?Sized> Resolve for &R {
    fn resolve(&self, request: ResolutionRequest) -> Result<Addrs, ResolutionError> {
        (**self).resolve(request)
    }

    fn reverse(&self, request: ReverseLookupRequest) -> Result<String, ResolutionError> {
        (**self).reverse(request)
    }
}
