use crate::error::Result;
use async_trait::async_trait;

/// Delivers an encoded request body to the processor and returns the raw
/// response text.
///
/// Network and HTTP failures surface as [`crate::error::GatewayError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, url: &str, body: &str) -> Result<String>;
}

pub type TransportBox = Box<dyn Transport>;
