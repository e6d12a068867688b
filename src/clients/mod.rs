//! HTTP client types for Foreman API communication.
//!
//! This module provides the request pipeline and the client that applies it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ForemanClient`]: The client; applies the pipeline and sends requests
//! - [`Request`]: A request flowing through the pipeline
//! - [`Target`]: The scheme, host, path and query a request is sent to
//! - [`Modifier`]: A transformation applied to a request
//! - [`Decorator`]: Wraps a modifier to add one stage
//! - [`ChainBuilder`]: Assembles stages into the composed pipeline
//! - [`Transport`]: Sends the final request; implemented for `reqwest::Client`
//!
//! # Request Pipeline
//!
//! Every request passes through these stages, in order:
//!
//! 1. Scheme and host are set from the configured address, and the path is
//!    prefixed with the API version (`/hosts` becomes `v2/hosts`)
//! 2. `Content-Type: application/json` is appended
//! 3. `Agent: RustForemanAPIClient` is appended
//! 4. `Authorization: Basic ...` is appended if a username is configured
//! 5. Extra stages from the configuration run last
//!
//! # Example
//!
//! ```rust,ignore
//! use foreman_api::{ForemanClient, ForemanConfig};
//! use foreman_api::clients::{HttpMethod, Request};
//!
//! let client = ForemanClient::new(
//!     ForemanConfig::builder()
//!         .address("https://foreman.example.com")
//!         .credentials("admin", "changeme")
//!         .build(),
//! );
//!
//! let request = Request::builder(HttpMethod::Get, "/hosts").build()?;
//! let response = client.execute(request).await?;
//! ```

pub mod chain;
mod errors;
mod http_client;
mod http_request;
mod modifier;
mod transport;

pub use chain::{ChainBuilder, AGENT, JSON_CONTENT_TYPE};
pub use errors::HttpError;
pub use http_client::ForemanClient;
pub use http_request::{HttpMethod, Request, RequestBuilder, Target};
pub use modifier::{compose, BoxModifier, Decorator, Identity, Modifier};
pub use transport::{default_transport, Transport, TransportFuture};

pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
