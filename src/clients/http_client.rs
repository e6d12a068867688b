//! HTTP client for the Foreman API.
//!
//! This module provides [`ForemanClient`], which runs every outgoing request
//! through the request pipeline built from its configuration and hands the
//! result to a [`Transport`].

use std::fmt;
use std::sync::Arc;

use crate::clients::chain::ChainBuilder;
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, Request};
use crate::clients::modifier::Modifier;
use crate::clients::transport::{default_transport, Transport};
use crate::config::{Address, ApiVersion, ForemanConfig};

/// Client for the Foreman REST API.
///
/// The request pipeline is built once in [`new`](Self::new) and never
/// changes afterwards. Cloning a client is cheap: clones share the pipeline
/// and the transport.
///
/// The client does not interpret responses. Status codes, retries and
/// response bodies are left to the caller.
///
/// # Thread Safety
///
/// `ForemanClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use foreman_api::{ForemanClient, ForemanConfig};
///
/// let config = ForemanConfig::builder()
///     .address("https://foreman.example.com")
///     .credentials("admin", "changeme")
///     .build();
///
/// let client = ForemanClient::new(config);
/// let response = client.head("/hosts").await?;
/// println!("Status: {}", response.status());
/// ```
#[derive(Clone)]
pub struct ForemanClient {
    config: ForemanConfig,
    modifier: Arc<dyn Modifier>,
    transport: Arc<dyn Transport>,
}

// Verify ForemanClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ForemanClient>();
};

impl ForemanClient {
    /// Creates a new client from `config`.
    ///
    /// Builds the request pipeline and picks the transport: the configured
    /// one, or the process-wide default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foreman_api::{ForemanClient, ForemanConfig};
    ///
    /// let client = ForemanClient::new(ForemanConfig::default());
    /// assert_eq!(client.address().as_ref(), "http://localhost:3000");
    /// assert_eq!(client.api_version().to_string(), "v2");
    /// ```
    #[must_use]
    pub fn new(config: ForemanConfig) -> Self {
        let chain = ChainBuilder::from_config(&config);

        if config.address().scheme().is_empty() {
            tracing::warn!(
                "Foreman address {} has no http:// or https:// prefix; requests will be sent without a scheme",
                config.address()
            );
        }
        tracing::debug!(
            address = %config.address(),
            api_version = %config.api_version(),
            basic_auth = config.credentials().is_some(),
            stages = ?chain.stage_names(),
            "Foreman client created"
        );

        let transport = config.transport().cloned().unwrap_or_else(default_transport);

        Self {
            modifier: Arc::from(chain.build()),
            transport,
            config,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ForemanConfig {
        &self.config
    }

    /// Returns the configured address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        self.config.address()
    }

    /// Returns the API version prefixed to every path.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        self.config.api_version()
    }

    /// Returns `true` if requests carry basic authentication.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.config.credentials().is_some()
    }

    /// Returns the pipeline stage names in application order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        ChainBuilder::from_config(&self.config).stage_names()
    }

    /// Returns the transport this client sends through.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Runs `request` through the pipeline without sending it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foreman_api::{ForemanClient, ForemanConfig};
    /// use foreman_api::clients::{HttpMethod, Request};
    ///
    /// let client = ForemanClient::new(ForemanConfig::default());
    /// let request = Request::builder(HttpMethod::Get, "/hosts").build().unwrap();
    ///
    /// let prepared = client.prepare(request);
    /// assert_eq!(prepared.target.to_string(), "http://localhost:3000/v2/hosts");
    /// ```
    #[must_use]
    pub fn prepare(&self, request: Request) -> Request {
        self.modifier.modify(request)
    }

    /// Sends a request to Foreman and returns the transport's response.
    ///
    /// The request is first run through the pipeline. The response is
    /// returned as-is, whatever its status code.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged, e.g. on connection failure
    /// or when the final URL cannot be parsed.
    pub async fn execute(&self, request: Request) -> Result<reqwest::Response, reqwest::Error> {
        let request = self.prepare(request);
        tracing::debug!(
            method = %request.method,
            url = %request.target,
            "Sending request to Foreman"
        );
        self.transport.send(request).await
    }

    /// Sends a `HEAD` request for `resource` and returns the response.
    ///
    /// # Arguments
    ///
    /// * `resource` - The resource path (e.g., "/hosts")
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `resource` cannot be parsed,
    /// or [`HttpError::Network`] with the transport's error.
    pub async fn head(&self, resource: &str) -> Result<reqwest::Response, HttpError> {
        let request = Request::builder(HttpMethod::Head, resource).build()?;
        Ok(self.execute(request).await?)
    }
}

impl Default for ForemanClient {
    fn default() -> Self {
        Self::new(ForemanConfig::default())
    }
}

impl fmt::Debug for ForemanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForemanClient")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::modifier::Decorator;
    use crate::config::Credentials;
    use crate::error::InvalidRequestError;

    fn prepare_head(client: &ForemanClient, path: &str) -> Request {
        client.prepare(Request::builder(HttpMethod::Head, path).build().unwrap())
    }

    #[test]
    fn test_client_defaults() {
        let client = ForemanClient::default();

        assert_eq!(client.address().as_ref(), "http://localhost:3000");
        assert_eq!(client.api_version(), &ApiVersion::V2);
        assert!(!client.has_credentials());
        assert_eq!(
            client.stage_names(),
            ["rewrite_target", "add_header", "add_header"]
        );
    }

    #[test]
    fn test_empty_config_matches_explicit_defaults() {
        let implicit = ForemanClient::new(ForemanConfig::default());
        let explicit = ForemanClient::new(
            ForemanConfig::builder()
                .address("http://localhost:3000")
                .api_version("v2")
                .build(),
        );

        let a = prepare_head(&implicit, "/hosts");
        let b = prepare_head(&explicit, "/hosts");

        assert_eq!(a.target, b.target);
        assert_eq!(a.headers, b.headers);
        assert_eq!(implicit.stage_names(), explicit.stage_names());
    }

    #[test]
    fn test_clients_share_default_transport() {
        let first = ForemanClient::default();
        let second = ForemanClient::new(ForemanConfig::builder().address("https://x").build());

        assert!(Arc::ptr_eq(first.transport(), second.transport()));
    }

    #[test]
    fn test_configured_transport_is_used() {
        let transport: Arc<dyn Transport> = Arc::new(reqwest::Client::new());
        let client = ForemanClient::new(
            ForemanConfig::builder()
                .transport(Arc::clone(&transport))
                .build(),
        );

        assert!(Arc::ptr_eq(client.transport(), &transport));
        assert!(!Arc::ptr_eq(client.transport(), &default_transport()));
    }

    #[test]
    fn test_clones_share_pipeline() {
        let client = ForemanClient::new(
            ForemanConfig::builder()
                .modifier(Decorator::new("tag", |mut req: Request| {
                    req.target.query = Some("tagged=1".to_string());
                    req
                }))
                .build(),
        );
        let clone = client.clone();

        assert_eq!(
            prepare_head(&clone, "/hosts").target.query.as_deref(),
            Some("tagged=1")
        );
        assert!(Arc::ptr_eq(&client.modifier, &clone.modifier));
    }

    #[test]
    fn test_accessors_read_from_config() {
        let client = ForemanClient::new(
            ForemanConfig::builder()
                .address("https://foreman.example.com")
                .api_version("v1")
                .credentials("admin", "changeme")
                .modifier(Decorator::new("tag", |req| req))
                .build(),
        );

        assert_eq!(client.address(), client.config().address());
        assert_eq!(client.api_version(), &ApiVersion::V1);
        assert!(client.has_credentials());
        assert_eq!(
            client.config().credentials().map(Credentials::username),
            Some("admin")
        );
        assert_eq!(
            client.stage_names(),
            ["rewrite_target", "add_header", "add_header", "basic_auth", "tag"]
        );
    }

    #[test]
    fn test_password_without_username_sends_no_auth() {
        let client = ForemanClient::new(ForemanConfig::builder().credentials("", "secret").build());
        let request = prepare_head(&client, "/hosts");

        assert!(!client.has_credentials());
        assert!(request.headers.get("authorization").is_none());
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let client = ForemanClient::new(
            ForemanConfig::builder()
                .credentials("admin", "hunter2")
                .build(),
        );

        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("ForemanClient"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[tokio::test]
    async fn test_head_with_invalid_resource_returns_construction_error() {
        let client = ForemanClient::default();

        let result = client.head("/hosts/%zz").await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidRequestError::InvalidEscape { escape })) if escape == "%zz"
        ));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForemanClient>();
    }
}
