//! Session configuration.

/// Tunables for a lookup session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Largest number of domains accepted in one batch (default: 256)
    pub max_batch_domains: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_batch_domains: 256,
        }
    }
}

impl LookupConfig {
    /// Smallest batch the session accepts.
    pub const MIN_BATCH_DOMAINS: usize = 1;

    /// Override the batch limit. Values below one are raised to one.
    pub fn with_max_batch_domains(mut self, max: usize) -> Self {
        self.max_batch_domains = max.max(Self::MIN_BATCH_DOMAINS);
        self
    }
}
