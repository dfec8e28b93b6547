use crate::domain::ports::Transport;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use url::form_urlencoded;

/// A request captured by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedRequest {
    pub url: String,
    pub body: String,
}

impl SubmittedRequest {
    /// The decoded form fields of the body.
    pub fn fields(&self) -> HashMap<String, String> {
        form_urlencoded::parse(self.body.as_bytes())
            .into_owned()
            .collect()
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Failure(String),
}

/// An in-memory transport that replays queued replies and records every request.
///
/// Clones share the same queue and log, so a test can keep one handle while the
/// gateway owns another. Running out of replies is a transport error.
#[derive(Default, Clone)]
pub struct ScriptedTransport {
    replies: Arc<RwLock<VecDeque<Reply>>>,
    requests: Arc<RwLock<Vec<SubmittedRequest>>>,
}

impl ScriptedTransport {
    /// Creates a transport with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response body.
    pub async fn respond(&self, body: impl Into<String>) {
        self.replies.write().await.push_back(Reply::Body(body.into()));
    }

    /// Queues a transport failure.
    pub async fn fail(&self, message: impl Into<String>) {
        self.replies
            .write()
            .await
            .push_back(Reply::Failure(message.into()));
    }

    pub async fn requests(&self) -> Vec<SubmittedRequest> {
        self.requests.read().await.clone()
    }

    pub async fn last_request(&self) -> Option<SubmittedRequest> {
        self.requests.read().await.last().cloned()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn submit(&self, url: &str, body: &str) -> Result<String> {
        self.requests.write().await.push(SubmittedRequest {
            url: url.to_string(),
            body: body.to_string(),
        });

        match self.replies.write().await.pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Failure(message)) => Err(GatewayError::Transport(message.into())),
            None => Err(GatewayError::Transport(
                "no scripted response left".into(),
            )),
        }
    }
}
