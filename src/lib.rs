//! # Foreman API Rust Client
//!
//! A Rust client for the Foreman REST API built around a request pipeline:
//! every outgoing request is addressed, content-typed and authenticated by a
//! fixed chain of stages assembled once when the client is created.
//!
//! ## Overview
//!
//! This crate provides:
//! - Configuration via [`ForemanConfig`] and [`ForemanConfigBuilder`], with
//!   defaults for every field
//! - Composable request [`Modifier`](clients::Modifier)s and
//!   [`Decorator`](clients::Decorator)s
//! - [`ForemanClient`] with `execute` for arbitrary requests and `head` for
//!   quick resource probes
//! - A pluggable [`Transport`](clients::Transport), backed by a shared
//!   `reqwest::Client` by default
//!
//! ## Quick Start
//!
//! ```rust
//! use foreman_api::{ForemanClient, ForemanConfig};
//! use foreman_api::clients::{HttpMethod, Request};
//!
//! let client = ForemanClient::new(
//!     ForemanConfig::builder()
//!         .address("https://example.org")
//!         .api_version("v2")
//!         .credentials("bob", "pw")
//!         .build(),
//! );
//!
//! let request = Request::builder(HttpMethod::Head, "/hosts").build().unwrap();
//! let prepared = client.prepare(request);
//!
//! assert_eq!(prepared.target.to_string(), "https://example.org/v2/hosts");
//! assert_eq!(prepared.headers["content-type"], "application/json");
//! assert_eq!(prepared.headers["agent"], "RustForemanAPIClient");
//! assert_eq!(prepared.headers["authorization"], "Basic Ym9iOnB3");
//! ```
//!
//! ## Sending Requests
//!
//! ```rust,ignore
//! use foreman_api::ForemanClient;
//!
//! let client = ForemanClient::default();
//! let response = client.head("/hosts").await?;
//! println!("Status: {}", response.status());
//! ```
//!
//! ## Design Principles
//!
//! - **Total pipeline**: stages never fail; errors come only from request
//!   construction or the transport
//! - **Pass-through**: responses and transport errors are returned unmodified
//! - **No retries**: failure policy belongs to the caller or the transport
//! - **Thread-safe**: all types are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{Address, ApiVersion, Credentials, ForemanConfig, ForemanConfigBuilder};
pub use error::InvalidRequestError;

// Re-export HTTP client types
pub use clients::{ForemanClient, HttpError, HttpMethod, Request, Target, Transport};
