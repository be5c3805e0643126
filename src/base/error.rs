use std::{io, net::Ipv4Addr, sync::Arc};
use thiserror::Error;

/// The platform networking subsystem could not be started.
///
/// This is the only error that aborts a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitializationError {
    #[error("WSAStartup failed with code {0}")]
    StartupFailed(i32),
    #[error("Winsock {major}.{minor} is not supported by this system")]
    UnsupportedVersion { major: u8, minor: u8 },
}

/// A forward or reverse query failed inside the system resolver.
#[derive(Debug, Error, Clone)]
pub enum ResolutionError {
    #[error("Could not resolve {domain}. {source}")]
    NameNotResolved {
        domain: String,
        source: Arc<io::Error>,
    },
    #[error("Reverse lookup failed for {address}")]
    HostnameNotFound {
        address: Ipv4Addr,
        source: Arc<io::Error>,
    },
}

impl ResolutionError {
    pub fn name_not_resolved(domain: impl Into<String>, source: io::Error) -> Self {
        Self::NameNotResolved {
            domain: domain.into(),
            source: Arc::new(source),
        }
    }

    pub fn hostname_not_found(address: Ipv4Addr, source: io::Error) -> Self {
        Self::HostnameNotFound {
            address,
            source: Arc::new(source),
        }
    }

    /// The resolver's own diagnostic text.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::NameNotResolved { source, .. } | Self::HostnameNotFound { source, .. } => {
                source.to_string()
            }
        }
    }
}

/// User-supplied text is not a dotted-decimal IPv4 address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid IP format. Please enter a valid IPv4 address.")]
pub struct InvalidAddressError {
    input: String,
}

impl InvalidAddressError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected text, exactly as entered.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A line of menu, count or family input was rejected.
///
/// These never leave the input layer: the reader reports them and asks again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputFormatError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,
    #[error("Invalid input. Enter 1, 2, or 3.")]
    InvalidFamily,
    #[error("Invalid count. Enter a number between {min} and {max}.")]
    CountOutOfRange { min: usize, max: usize },
}

/// The interactive console stopped working.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Input closed")]
    Closed,
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Every failure a lookup session can produce.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    InvalidAddress(#[from] InvalidAddressError),
    #[error(transparent)]
    InputFormat(#[from] InputFormatError),
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Console(ConsoleError::Io(err))
    }
}

impl Error {
    /// Whether the session can carry on after this error has been reported.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Resolution(_) | Error::InvalidAddress(_) | Error::InputFormat(_)
        )
    }
}
