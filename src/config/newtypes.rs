//! Newtype wrappers for configuration values.
//!
//! Foreman configuration performs no validation beyond defaulting: an empty
//! value falls back to the documented default and anything else is taken
//! literally.

use base64::prelude::*;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Address used when none is configured.
pub const DEFAULT_ADDRESS: &str = "http://localhost:3000";

/// The Foreman server address, e.g. `https://foreman.example.com`.
///
/// The scheme is detected by a literal, case-sensitive prefix match on
/// `http://` or `https://`. Any other address (including a bare host or an
/// `ftp://` URL) yields an empty scheme and is used verbatim as the host.
///
/// # Example
///
/// ```rust
/// use foreman_api::Address;
///
/// let address = Address::new("https://foreman.example.com");
/// assert_eq!(address.scheme(), "https");
/// assert_eq!(address.host(), "foreman.example.com");
///
/// let bare = Address::new("foreman.example.com");
/// assert_eq!(bare.scheme(), "");
/// assert_eq!(bare.host(), "foreman.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    /// Creates an address, falling back to [`DEFAULT_ADDRESS`] when empty.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        if address.is_empty() {
            return Self::default();
        }
        Self(address)
    }

    /// Returns `"http"`, `"https"`, or `""` when no known prefix matches.
    #[must_use]
    pub fn scheme(&self) -> &'static str {
        if self.0.starts_with("http://") {
            "http"
        } else if self.0.starts_with("https://") {
            "https"
        } else {
            ""
        }
    }

    /// Returns the address with `"<scheme>://"` stripped once.
    ///
    /// With an empty scheme the stripped prefix is `"://"`.
    #[must_use]
    pub fn host(&self) -> &str {
        let prefix = format!("{}://", self.scheme());
        self.0.strip_prefix(prefix.as_str()).unwrap_or(&self.0)
    }
}

impl Default for Address {
    fn default() -> Self {
        Self(DEFAULT_ADDRESS.to_string())
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

/// HTTP basic authentication credentials.
///
/// Credentials only exist for a non-empty username; the password may be
/// empty. The `Authorization` header value is encoded once, on creation.
///
/// # Security
///
/// The `Debug` implementation masks the password, and the header value is
/// marked sensitive.
///
/// # Example
///
/// ```rust
/// use foreman_api::Credentials;
///
/// let credentials = Credentials::new("bob", "pw").unwrap();
/// assert_eq!(credentials.authorization(), "Basic Ym9iOnB3");
/// assert!(credentials.authorization().is_sensitive());
///
/// assert!(Credentials::new("", "pw").is_none());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    authorization: HeaderValue,
}

impl Credentials {
    /// Creates credentials, or `None` when `username` is empty.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Option<Self> {
        let username = username.into();
        if username.is_empty() {
            return None;
        }
        let password = password.into();

        let encoded = BASE64_STANDARD.encode(format!("{username}:{password}"));
        let mut authorization = HeaderValue::try_from(format!("Basic {encoded}")).ok()?;
        authorization.set_sensitive(true);

        Some(Self {
            username,
            password,
            authorization,
        })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the `Authorization` header value: `Basic base64(user:password)`.
    #[must_use]
    pub const fn authorization(&self) -> &HeaderValue {
        &self.authorization
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}
