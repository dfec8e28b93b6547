use crate::domain::ports::Transport;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Posts form-encoded bodies over HTTPS with `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit(&self, url: &str, body: &str) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body.to_owned())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}
