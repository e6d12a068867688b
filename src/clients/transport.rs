//! The transport that actually sends requests.
//!
//! The client treats the transport as opaque: it hands over the final
//! [`Request`] and returns whatever the transport returns. [`reqwest::Client`]
//! implements [`Transport`]; connection pooling, TLS and timeouts are its
//! concern.
//!
//! Clients that are not given a transport share one process-wide default,
//! created on first use by [`default_transport`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, OnceLock};

use crate::clients::http_request::Request;

/// Future returned by [`Transport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<reqwest::Response, reqwest::Error>> + Send + 'a>>;

/// Sends a fully prepared request.
///
/// Implementations must be safe to call concurrently from many tasks.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends `request` and resolves to the response or the transport error.
    fn send(&self, request: Request) -> TransportFuture<'_>;
}

impl Transport for reqwest::Client {
    fn send(&self, request: Request) -> TransportFuture<'_> {
        // An unparseable URL (e.g. an empty scheme) surfaces as a builder
        // error when the request is sent.
        let mut builder = self
            .request(request.method.into(), request.target.to_string())
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        Box::pin(builder.send())
    }
}

/// Returns the shared default transport.
///
/// The underlying `reqwest::Client` is built once per process; every call
/// returns a handle to the same instance.
///
/// # Panics
///
/// Panics if the underlying reqwest client cannot be created. This should
/// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
#[must_use]
pub fn default_transport() -> Arc<dyn Transport> {
    static DEFAULT_TRANSPORT: OnceLock<Arc<dyn Transport>> = OnceLock::new();

    Arc::clone(DEFAULT_TRANSPORT.get_or_init(|| {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Arc::new(client)
    }))
}
