//! Trait abstraction for the submission collaborator to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// The external boundary that transmits sanitized form data.
///
/// The transport behind it is deliberately opaque: the controller hands
/// over a sanitized field map and only learns success or failure. It
/// never interprets response payloads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Transmit the sanitized field values, keyed by field identifier
    async fn submit(&self, fields: HashMap<String, String>) -> Result<()>;
}
