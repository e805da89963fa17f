//! Shared state for the API layer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::intelligence::ReferenceData;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes. Read-only after startup.
#[derive(Clone)]
pub struct ApiContext {
    pub reference: Arc<ReferenceData>,
    pub max_batch_size: usize,
}

impl ApiContext {
    pub fn new(reference: Arc<ReferenceData>, config: &ServerConfig) -> Self {
        Self {
            reference,
            max_batch_size: config.max_batch_size,
        }
    }

    /// Context over the embedded reference data with default limits.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self::new(
            Arc::new(ReferenceData::load_test()),
            &ServerConfig::default(),
        )
    }
}
