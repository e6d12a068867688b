//! Error types for building Foreman API requests.
//!
//! This module contains the errors raised while turning a caller-supplied
//! resource path or header into a [`Request`](crate::clients::Request).
//!
//! # Error Handling
//!
//! Request construction is the only place the client itself can fail. The
//! request pipeline never fails, and transport failures are surfaced as the
//! transport's own error type.
//!
//! # Example
//!
//! ```rust
//! use foreman_api::{InvalidRequestError, Target};
//!
//! let result = Target::parse("/hosts/%zz");
//! assert!(matches!(result, Err(InvalidRequestError::InvalidEscape { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while constructing a request.
///
/// Each variant carries the offending input so the message can point at
/// exactly what was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The request target contains an ASCII control character.
    #[error("Invalid request target {target:?}: contains a control character.")]
    ControlCharacter {
        /// The rejected target.
        target: String,
    },

    /// The request target starts with a scheme separator but no scheme.
    #[error("Invalid request target {target:?}: missing protocol scheme.")]
    MissingScheme {
        /// The rejected target.
        target: String,
    },

    /// A relative reference has a colon in its first path segment, which
    /// would make that segment read as a scheme.
    #[error("Invalid request target {target:?}: first path segment cannot contain a colon.")]
    ColonInFirstSegment {
        /// The rejected target.
        target: String,
    },

    /// A percent sign is not followed by two hexadecimal digits, or a host
    /// escape encodes an ASCII byte.
    #[error("Invalid URL escape {escape:?}.")]
    InvalidEscape {
        /// The malformed escape sequence, including the leading `%`.
        escape: String,
    },

    /// The authority has a port that is not all digits.
    #[error("Invalid port {port:?} after host.")]
    InvalidPort {
        /// The rejected port, including the leading `:`.
        port: String,
    },

    /// The host contains a character that is not allowed in a host name.
    #[error("Invalid character {character:?} in host name {host:?}.")]
    InvalidHost {
        /// The rejected host.
        host: String,
        /// The first disallowed character.
        character: char,
    },

    /// A bracketed IPv6 host is not closed.
    #[error("Invalid host {host:?}: missing ']' in IPv6 literal.")]
    MissingBracket {
        /// The rejected host.
        host: String,
    },

    /// The user information before `@` contains a disallowed character.
    ///
    /// The offending text is not echoed since it may hold a password.
    #[error("Invalid user information in request target.")]
    InvalidUserinfo,

    /// A header name is not a valid HTTP token.
    #[error("Invalid header name {name:?}.")]
    InvalidHeaderName {
        /// The rejected header name.
        name: String,
    },

    /// A header value contains bytes not allowed in HTTP headers.
    #[error("Invalid value for header {name:?}.")]
    InvalidHeaderValue {
        /// The name of the header whose value was rejected.
        name: String,
    },
}
