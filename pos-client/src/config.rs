//! Client configuration

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Server paths used by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPaths {
    /// Prefix of `GET {order_details}/{orderId}`
    pub order_details: String,
    /// `POST` target for receiving a payment
    pub receive_payment: String,
    /// `POST` target of the purchase-order form
    pub purchase_order: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            order_details: "/order/details".to_string(),
            receive_payment: "/pos/receivePayment".to_string(),
            purchase_order: "/purchase/save".to_string(),
        }
    }
}

/// Client configuration for connecting to the POS server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Endpoint paths
    pub paths: EndpointPaths,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            paths: EndpointPaths::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `POS_BASE_URL` (default `http://localhost:8080`)
    /// - `POS_TIMEOUT_SECS` (default 30, unparsable values fall back)
    /// - `POS_TOKEN` (optional, empty means none)
    pub fn from_env() -> Self {
        let base_url = std::env::var("POS_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into());
        let timeout = std::env::var("POS_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let token = std::env::var("POS_TOKEN").ok().filter(|s| !s.is_empty());

        Self {
            base_url,
            token,
            timeout,
            paths: EndpointPaths::default(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Override endpoint paths
    pub fn with_paths(mut self, paths: EndpointPaths) -> Self {
        self.paths = paths;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
