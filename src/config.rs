use crate::error::{GatewayError, Result};
use std::fmt;

/// Sandbox endpoint. The processor distinguishes test traffic by `tran_testmode` only.
pub const TEST_URL: &str = "https://secure.cashflows.com/gateway/remote";
pub const LIVE_URL: &str = "https://secure.cashflows.com/gateway/remote";

pub const DISPLAY_NAME: &str = "CashFlows";
pub const HOMEPAGE_URL: &str = "http://www.cashflows.com";
pub const SUPPORTED_COUNTRIES: [&str; 1] = ["US"];

/// Merchant credentials sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayCredentials {
    auth_id: String,
    auth_pass: String,
}

impl GatewayCredentials {
    pub fn new(auth_id: impl Into<String>, auth_pass: impl Into<String>) -> Result<Self> {
        let auth_id = auth_id.into();
        let auth_pass = auth_pass.into();
        if auth_id.trim().is_empty() {
            return Err(GatewayError::precondition("Missing required credential: auth_id"));
        }
        if auth_pass.is_empty() {
            return Err(GatewayError::precondition(
                "Missing required credential: auth_pass",
            ));
        }
        Ok(Self { auth_id, auth_pass })
    }

    pub fn auth_id(&self) -> &str {
        &self.auth_id
    }

    pub fn auth_pass(&self) -> &str {
        &self.auth_pass
    }
}

impl fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("auth_id", &self.auth_id)
            .field("auth_pass", &"[REDACTED]")
            .finish()
    }
}

/// Everything a gateway instance needs besides its transport.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub credentials: GatewayCredentials,
    pub test_mode: bool,
    pub test_url: String,
    pub live_url: String,
}

impl GatewayConfig {
    /// Test mode on, default endpoints.
    pub fn new(credentials: GatewayCredentials) -> Self {
        Self {
            credentials,
            test_mode: true,
            test_url: TEST_URL.to_string(),
            live_url: LIVE_URL.to_string(),
        }
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_test_url(mut self, url: impl Into<String>) -> Self {
        self.test_url = url.into();
        self
    }

    pub fn with_live_url(mut self, url: impl Into<String>) -> Self {
        self.live_url = url.into();
        self
    }

    /// Endpoint for the current mode.
    pub fn url(&self) -> &str {
        if self.test_mode {
            &self.test_url
        } else {
            &self.live_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_are_required() {
        assert!(matches!(
            GatewayCredentials::new("", "pass"),
            Err(GatewayError::Precondition(_))
        ));
        assert!(matches!(
            GatewayCredentials::new("id", ""),
            Err(GatewayError::Precondition(_))
        ));
        assert!(GatewayCredentials::new("id", "pass").is_ok());
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = GatewayCredentials::new("merchant", "hunter2").unwrap();
        let rendered = format!("{:?}", GatewayConfig::new(credentials));
        assert!(rendered.contains("merchant"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_gateway_metadata() {
        assert_eq!(DISPLAY_NAME, "CashFlows");
        assert!(HOMEPAGE_URL.starts_with("http://"));
        assert_eq!(SUPPORTED_COUNTRIES, ["US"]);
        assert_eq!(TEST_URL, LIVE_URL);
    }

    #[test]
    fn test_url_follows_mode() {
        let credentials = GatewayCredentials::new("id", "pass").unwrap();
        let config = GatewayConfig::new(credentials)
            .with_test_url("https://sandbox.test/remote")
            .with_live_url("https://live.test/remote");

        assert_eq!(config.url(), "https://sandbox.test/remote");
        assert_eq!(
            config.with_test_mode(false).url(),
            "https://live.test/remote"
        );
    }
}
