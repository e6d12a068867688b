//! Client-level error type for the Foreman API client.
//!
//! [`ForemanClient::execute`](crate::clients::ForemanClient::execute) returns
//! the transport's error unchanged. [`ForemanClient::head`](crate::clients::ForemanClient::head)
//! can additionally fail while building the request, so it returns
//! [`HttpError`], which is the union of both sources.
//!
//! # Example
//!
//! ```rust,ignore
//! use foreman_api::{ForemanClient, HttpError};
//!
//! match client.head("/hosts").await {
//!     Ok(response) => println!("Status: {}", response.status()),
//!     Err(HttpError::InvalidRequest(e)) => println!("Bad resource path: {e}"),
//!     Err(HttpError::Network(e)) => println!("Transport failure: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::InvalidRequestError;

/// Unified error type for client operations.
///
/// Both variants are transparent: the message and `source()` are those of the
/// underlying error, so nothing is translated on the way to the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be constructed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// The transport failed to deliver the request.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}
