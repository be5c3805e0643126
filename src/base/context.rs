//! Ergonomic error context helpers.
//!
//! Extension traits that turn raw resolver I/O failures into
//! [`ResolutionError`] values carrying the name or address that was queried.

use crate::base::error::ResolutionError;
use std::{io, net::Ipv4Addr};

/// Extension trait for adding lookup context to IO Results.
pub trait IoResultExt<T> {
    /// Attach the domain of a failed forward lookup.
    ///
    /// # Example
    /// ```ignore
    /// use hostlookup::base::context::IoResultExt;
    ///
    /// let addrs = getaddrinfo(Some("example.com"), None, None)
    ///     .map_err(io::Error::from)
    ///     .dns_context("example.com")?;
    /// // Error: "Could not resolve example.com. Name or service not known"
    /// ```
    fn dns_context(self, domain: &str) -> Result<T, ResolutionError>;

    /// Attach the address of a failed reverse lookup.
    fn reverse_context(self, address: Ipv4Addr) -> Result<T, ResolutionError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn dns_context(self, domain: &str) -> Result<T, ResolutionError> {
        self.map_err(|e| ResolutionError::name_not_resolved(domain, e))
    }

    fn reverse_context(self, address: Ipv4Addr) -> Result<T, ResolutionError> {
        self.map_err(|e| ResolutionError::hostname_not_found(address, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_dns_context() {
        let result: Result<(), io::Error> = Err(Error::new(ErrorKind::NotFound, "no such host"));
        let err = result.dns_context("unknown.example.com").unwrap_err();

        match &err {
            ResolutionError::NameNotResolved { domain, .. } => {
                assert_eq!(domain, "unknown.example.com");
            }
            _ => panic!("Expected NameNotResolved"),
        }
        assert_eq!(err.diagnostic(), "no such host");
    }

    #[test]
    fn test_reverse_context() {
        let result: Result<(), io::Error> = Err(Error::new(ErrorKind::NotFound, "no PTR record"));
        let err = result.reverse_context(Ipv4Addr::new(192, 0, 2, 1)).unwrap_err();

        match err {
            ResolutionError::HostnameNotFound { address, .. } => {
                assert_eq!(address, Ipv4Addr::new(192, 0, 2, 1));
            }
            _ => panic!("Expected HostnameNotFound"),
        }
    }

    #[test]
    fn test_ok_passes_through() {
        let result: Result<u8, io::Error> = Ok(7);
        assert_eq!(result.dns_context("example.com").unwrap(), 7);
    }
}
