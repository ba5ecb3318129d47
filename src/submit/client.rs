//! Placeholder submission client
//!
//! Stands in for the real backend transport: it waits a configurable
//! latency and reports success, which is enough to exercise the whole
//! submission lifecycle end to end.
//
// TODO: replace with an HTTP client once the backend endpoint exists.

use super::traits::Submitter;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Default simulated round-trip latency
const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Submitter that sleeps for a fixed latency and succeeds
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, fields: HashMap<String, String>) -> Result<()> {
        tracing::info!(field_count = fields.len(), "submitting form data");
        tokio::time::sleep(self.latency).await;
        tracing::info!("form data accepted");
        Ok(())
    }
}
