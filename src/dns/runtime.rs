//! Process-wide resolver runtime guard.
//!
//! Resolution calls need the platform networking subsystem to be running.
//! On Windows that means a Winsock 2.2 startup paired with exactly one
//! cleanup; Unix resolvers need no startup. [`ResolverRuntime`] owns that
//! pairing: acquiring it starts the subsystem and dropping it releases it,
//! on every exit path including unwinding.
//!
//! The system resolver borrows the guard, so it cannot be created before a
//! successful acquisition or outlive the release.

use crate::base::error::InitializationError;
use std::sync::atomic::{AtomicUsize, Ordering};

static LIVE_GUARDS: AtomicUsize = AtomicUsize::new(0);

/// Proof that the resolver subsystem is up.
#[derive(Debug)]
pub struct ResolverRuntime {
    _private: (),
}

impl ResolverRuntime {
    /// Starts the networking subsystem.
    pub fn acquire() -> Result<Self, InitializationError> {
        sys::startup()?;
        let live = LIVE_GUARDS.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(live, "resolver runtime acquired");
        Ok(Self { _private: () })
    }
}

impl Drop for ResolverRuntime {
    fn drop(&mut self) {
        sys::cleanup();
        let live = LIVE_GUARDS.fetch_sub(1, Ordering::AcqRel) - 1;
        tracing::debug!(live, "resolver runtime released");
    }
}

#[cfg(target_os = "windows")]
mod sys {
    use crate::base::error::InitializationError;
    use windows::Win32::Networking::WinSock::{WSACleanup, WSAStartup, WSADATA};

    const WINSOCK_2_2: u16 = 0x0202;

    pub(super) fn startup() -> Result<(), InitializationError> {
        let mut data = WSADATA::default();
        // SAFETY: `data` is a valid, writable WSADATA for the duration of the call.
        let code = unsafe { WSAStartup(WINSOCK_2_2, &mut data) };
        if code != 0 {
            return Err(InitializationError::StartupFailed(code));
        }

        if data.wVersion != WINSOCK_2_2 {
            // SAFETY: pairs the successful WSAStartup above.
            unsafe {
                WSACleanup();
            }
            let [major, minor] = data.wVersion.to_le_bytes();
            return Err(InitializationError::UnsupportedVersion { major, minor });
        }
        Ok(())
    }

    pub(super) fn cleanup() {
        // SAFETY: only called from Drop of a guard whose startup succeeded.
        let code = unsafe { WSACleanup() };
        if code != 0 {
            tracing::warn!(code, "WSACleanup failed");
        }
    }
}

#[cfg(not(target_os = "windows"))]
mod sys {
    use crate::base::error::InitializationError;

    pub(super) fn startup() -> Result<(), InitializationError> {
        Ok(())
    }

    pub(super) fn cleanup() {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_guards() -> usize {
        LIVE_GUARDS.load(Ordering::Acquire)
    }

    #[test]
    fn test_acquire_counts_live_guard() {
        let runtime = ResolverRuntime::acquire().expect("resolver runtime should start");
        assert!(live_guards() > 0);
        drop(runtime);
    }

    #[test]
    fn test_nested_guards() {
        let outer = ResolverRuntime::acquire().unwrap();
        {
            let _inner = ResolverRuntime::acquire().unwrap();
            assert!(live_guards() > 0);
        }
        // The outer guard is still alive after the inner one is released.
        assert!(live_guards() > 0);
        drop(outer);
    }

    #[test]
    fn test_release_on_unwind() {
        let result = std::panic::catch_unwind(|| {
            let _runtime = ResolverRuntime::acquire().unwrap();
            panic!("lookup failed mid-session");
        });
        assert!(result.is_err());
    }
}
