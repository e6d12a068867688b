//! Configuration types for the Foreman API client.
//!
//! This module provides the configuration consumed by
//! [`ForemanClient::new`](crate::ForemanClient::new).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ForemanConfig`]: The immutable client configuration
//! - [`ForemanConfigBuilder`]: A builder for constructing [`ForemanConfig`] instances
//! - [`Address`]: The Foreman server address
//! - [`ApiVersion`]: The API version path segment
//! - [`Credentials`]: Basic authentication credentials with masked debug output
//!
//! # Defaults
//!
//! Every field is optional. Empty strings are treated as "not set":
//!
//! - `address`: `http://localhost:3000`
//! - `api_version`: `v2`
//! - `credentials`: none (also when only a password is given)
//! - `transport`: the process-wide default transport
//!
//! # Example
//!
//! ```rust
//! use foreman_api::{ForemanConfig, ApiVersion};
//!
//! let config = ForemanConfig::builder()
//!     .address("https://foreman.example.com")
//!     .api_version(ApiVersion::V2)
//!     .credentials("admin", "changeme")
//!     .build();
//!
//! assert_eq!(config.address().host(), "foreman.example.com");
//! assert!(config.credentials().is_some());
//! ```

mod newtypes;
mod version;

pub use newtypes::{Address, Credentials, DEFAULT_ADDRESS};
pub use version::ApiVersion;

use std::sync::Arc;

use crate::clients::{Decorator, Transport};

/// Configuration for a Foreman client.
///
/// Immutable once built; obtain one through [`ForemanConfig::builder`] or
/// [`ForemanConfig::default`].
///
/// # Thread Safety
///
/// `ForemanConfig` is `Clone`, `Send`, and `Sync`. Cloning shares the
/// configured transport and extra stages.
#[derive(Clone, Debug, Default)]
pub struct ForemanConfig {
    address: Address,
    api_version: ApiVersion,
    credentials: Option<Credentials>,
    transport: Option<Arc<dyn Transport>>,
    extra_stages: Vec<Decorator>,
}

impl ForemanConfig {
    /// Creates a new builder for constructing a `ForemanConfig`.
    #[must_use]
    pub fn builder() -> ForemanConfigBuilder {
        ForemanConfigBuilder::new()
    }

    /// Returns the Foreman server address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the basic authentication credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the transport override, if configured.
    #[must_use]
    pub const fn transport(&self) -> Option<&Arc<dyn Transport>> {
        self.transport.as_ref()
    }

    /// Returns the caller-supplied stages that run after the built-in ones.
    #[must_use]
    pub fn extra_stages(&self) -> &[Decorator] {
        &self.extra_stages
    }
}

// Verify ForemanConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ForemanConfig>();
};

/// Builder for constructing [`ForemanConfig`] instances.
///
/// Building never fails: unset or empty values fall back to their defaults.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use foreman_api::ForemanConfig;
///
/// let transport = reqwest::Client::builder()
///     .timeout(std::time::Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// let config = ForemanConfig::builder()
///     .address("https://foreman.example.com")
///     .api_version("v2")
///     .credentials("admin", "changeme")
///     .transport(Arc::new(transport))
///     .build();
///
/// assert!(config.transport().is_some());
/// ```
#[derive(Debug, Default)]
pub struct ForemanConfigBuilder {
    address: Option<String>,
    api_version: Option<ApiVersion>,
    credentials: Option<Credentials>,
    transport: Option<Arc<dyn Transport>>,
    extra_stages: Vec<Decorator>,
}

impl ForemanConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Foreman server address (e.g., `https://foreman.example.com`).
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<ApiVersion>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets basic authentication credentials.
    ///
    /// An empty username disables authentication regardless of the password.
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Credentials::new(username, password);
        self
    }

    /// Uses `transport` instead of the process-wide default.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Appends a pipeline stage that runs after the built-in stages.
    ///
    /// Extra stages run in the order they are added.
    #[must_use]
    pub fn modifier(mut self, decorator: Decorator) -> Self {
        self.extra_stages.push(decorator);
        self
    }

    /// Builds the [`ForemanConfig`], applying defaults to unset fields.
    #[must_use]
    pub fn build(self) -> ForemanConfig {
        ForemanConfig {
            address: self.address.map(Address::new).unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            credentials: self.credentials,
            transport: self.transport,
            extra_stages: self.extra_stages,
        }
    }
}
