//! HTTP client for the POS server endpoints

use crate::config::EndpointPaths;
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::{CustomerForm, OrderDetails, OrderId, PaymentReceipt, PaymentRequest, PurchaseOrderSubmission};

/// HTTP client for making network requests to the POS server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    paths: EndpointPaths,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            paths: config.paths.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Absolute URL for a path; absolute form actions are used as-is
    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.client.request(method, self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        request
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Map non-2xx responses to errors carrying the body text
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        tracing::warn!(status = status.as_u16(), body = %text, "Request failed");
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        })
    }

    // ========== Orders API ==========

    /// Fetch the details shown in the order-details modal
    pub async fn fetch_order_details(&self, order_id: OrderId) -> ClientResult<OrderDetails> {
        let path = format!("{}/{}", self.paths.order_details.trim_end_matches('/'), order_id);
        self.get(&path).await
    }

    // ========== Payments API ==========

    /// Record a payment against an order.
    ///
    /// The server's JSON echo is parsed best-effort; a success response
    /// with any other body still counts as accepted.
    pub async fn receive_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentReceipt> {
        let response = self
            .request(Method::POST, &self.paths.receive_payment)
            .form(&request.form_fields())
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let text = response.text().await?;

        let receipt = serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Payment response is not a receipt");
            PaymentReceipt::default()
        });
        tracing::info!(
            order_id = request.order_id,
            amount = %request.amount_paid,
            "Payment received"
        );
        Ok(receipt)
    }

    // ========== Customers API ==========

    /// Post the customer form as multipart data to the form's action.
    ///
    /// Any non-2xx answer is `ClientError::Rejected` with the body text.
    pub async fn create_customer(&self, action: &str, form: &CustomerForm) -> ClientResult<()> {
        let multipart = form
            .fields()
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |multipart, (name, value)| {
                multipart.text(name, value.to_string())
            });

        let response = self
            .request(Method::POST, action)
            .multipart(multipart)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(status = status.as_u16(), body = %body, "Customer rejected");
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(name = %form.name, "Customer saved");
        Ok(())
    }

    // ========== Purchase Orders API ==========

    /// Post a purchase-order form body
    pub async fn submit_purchase_order(&self, submission: &PurchaseOrderSubmission) -> ClientResult<()> {
        let response = self
            .request(Method::POST, &self.paths.purchase_order)
            .form(submission.fields())
            .send()
            .await?;
        Self::check_status(response).await?;

        tracing::info!(fields = submission.fields().len(), "Purchase order submitted");
        Ok(())
    }
}
