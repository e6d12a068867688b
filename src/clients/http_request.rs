//! HTTP request types for the Foreman API client.
//!
//! This module provides the [`Request`] value that flows through the request
//! pipeline, the [`Target`] it is addressed to, and a builder for
//! constructing requests from a resource path.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::InvalidRequestError;

/// HTTP methods supported by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP HEAD method for probing resources without a body.
    Head,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Head => Self::HEAD,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// The address a [`Request`] is sent to.
///
/// Unlike a fully parsed URL, a `Target` may have an empty scheme or host.
/// Caller-built requests usually carry only a path; the request pipeline
/// fills in the scheme and host from the client configuration.
///
/// # Example
///
/// ```rust
/// use foreman_api::Target;
///
/// let target = Target::parse("/hosts?search=name").unwrap();
/// assert_eq!(target.path, "/hosts");
/// assert_eq!(target.query.as_deref(), Some("search=name"));
/// assert!(target.host.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Target {
    /// URL scheme without the `://` separator; may be empty.
    pub scheme: String,
    /// Authority: host, plus user information and port if given; may be empty.
    pub host: String,
    /// Path as given, escapes left intact.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
}

impl Target {
    /// Parses a resource path or absolute URL into a target.
    ///
    /// Accepts the same inputs as a standard URL parser used for building
    /// HTTP requests. Fragments are validated and discarded. Percent escapes
    /// are validated but not decoded; the query is kept raw.
    ///
    /// A `scheme:opaque` reference (no `/` after the colon) keeps the opaque
    /// part as its path.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the input contains a control
    /// character, starts with a bare `:`, has a colon in the first segment
    /// of a relative path, has a malformed `%` escape, or has an invalid
    /// authority (user information, host or port).
    pub fn parse(target: &str) -> Result<Self, InvalidRequestError> {
        if target.bytes().any(|b| b < 0x20 || b == 0x7f) {
            return Err(InvalidRequestError::ControlCharacter {
                target: target.to_string(),
            });
        }

        let rest = match target.split_once('#') {
            Some((head, fragment)) => {
                validate_escapes(fragment, false)?;
                head
            }
            None => target,
        };

        let (scheme, rest) = split_scheme(target, rest)?;
        let scheme = scheme.to_ascii_lowercase();

        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query.to_string())),
            None => (rest, None),
        };

        if !rest.starts_with('/') {
            if !scheme.is_empty() {
                return Ok(Self {
                    scheme,
                    host: String::new(),
                    path: rest.to_string(),
                    query,
                });
            }
            let first_segment = rest.split('/').next().unwrap_or_default();
            if first_segment.contains(':') {
                return Err(InvalidRequestError::ColonInFirstSegment {
                    target: target.to_string(),
                });
            }
        }

        let (host, path) = match rest.strip_prefix("//") {
            Some(authority) if !scheme.is_empty() || !rest.starts_with("///") => {
                let (authority, path) = authority
                    .find('/')
                    .map_or((authority, ""), |i| authority.split_at(i));
                validate_authority(authority)?;
                (authority, path)
            }
            _ => ("", rest),
        };

        validate_escapes(path, false)?;

        Ok(Self {
            scheme,
            host: host.to_string(),
            path: path.to_string(),
            query,
        })
    }
}

/// Splits a leading `scheme:` off `rest`, if there is one.
fn split_scheme<'a>(
    target: &str,
    rest: &'a str,
) -> Result<(&'a str, &'a str), InvalidRequestError> {
    for (i, c) in rest.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' if i > 0 => {}
            ':' if i == 0 => {
                return Err(InvalidRequestError::MissingScheme {
                    target: target.to_string(),
                })
            }
            ':' => return Ok((&rest[..i], &rest[i + 1..])),
            _ => return Ok(("", rest)),
        }
    }
    Ok(("", rest))
}

/// Checks `[userinfo@]host[:port]`.
fn validate_authority(authority: &str) -> Result<(), InvalidRequestError> {
    let host = match authority.rfind('@') {
        Some(i) => {
            let userinfo = &authority[..i];
            if !userinfo.bytes().all(is_userinfo_byte) {
                return Err(InvalidRequestError::InvalidUserinfo);
            }
            validate_escapes(userinfo, false).map_err(|_| InvalidRequestError::InvalidUserinfo)?;
            &authority[i + 1..]
        }
        None => authority,
    };
    validate_host(host)
}

fn validate_host(host: &str) -> Result<(), InvalidRequestError> {
    let port = if host.starts_with('[') {
        let end = host
            .rfind(']')
            .ok_or_else(|| InvalidRequestError::MissingBracket {
                host: host.to_string(),
            })?;
        &host[end + 1..]
    } else {
        host.rfind(':').map_or("", |i| &host[i..])
    };

    if let Some(digits) = port.strip_prefix(':') {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidRequestError::InvalidPort {
                port: port.to_string(),
            });
        }
    } else if !port.is_empty() {
        return Err(InvalidRequestError::InvalidPort {
            port: port.to_string(),
        });
    }

    if let Some(b) = host
        .bytes()
        .find(|&b| b != b'%' && b.is_ascii() && !is_host_byte(b))
    {
        return Err(InvalidRequestError::InvalidHost {
            host: host.to_string(),
            character: char::from(b),
        });
    }
    validate_escapes(host, true)
}

/// Unreserved and sub-delimiter characters, plus the few extras accepted in
/// host names (`:`, brackets, `<`, `>` and `"`).
const fn is_host_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b':'
                | b'['
                | b']'
                | b'<'
                | b'>'
                | b'"'
        )
}

const fn is_userinfo_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b':'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b'%'
                | b'@'
        )
}

/// Checks that every `%` starts a two-digit hex escape.
///
/// In a host only escapes of non-ASCII bytes and `%25` (the IPv6 zone
/// separator) are allowed.
fn validate_escapes(s: &str, in_host: bool) -> Result<(), InvalidRequestError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        let start = i;
        let escape = move || InvalidRequestError::InvalidEscape {
            escape: s[start..].chars().take(3).collect(),
        };
        match bytes.get(i + 1..i + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => {
                if in_host && hex[0] < b'8' && !hex.eq_ignore_ascii_case(b"25") {
                    return Err(escape());
                }
                i += 3;
            }
            _ => return Err(escape()),
        }
    }
    Ok(())
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if !self.scheme.is_empty() || !self.host.is_empty() {
            write!(f, "//{}", self.host)?;
            if !self.host.is_empty() && !self.path.is_empty() && !self.path.starts_with('/') {
                f.write_str("/")?;
            }
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

/// An HTTP request on its way to the Foreman API.
///
/// Requests are plain values: the pipeline takes one by value, transforms it,
/// and hands it on. Headers are multi-valued; appending a header never
/// removes values already present under the same name.
///
/// # Example
///
/// ```rust
/// use foreman_api::clients::{HttpMethod, Request};
///
/// let request = Request::builder(HttpMethod::Get, "/hosts")
///     .header("Accept", "application/json")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(request.target.path, "/hosts");
/// ```
#[derive(Clone, Debug)]
pub struct Request {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// Where the request is sent.
    pub target: Target,
    /// Request headers.
    pub headers: HeaderMap,
    /// The request body, if any.
    pub body: Option<String>,
}

impl Request {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod, target: Target) -> Self {
        Self {
            method,
            target,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a new builder for constructing a `Request`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `resource` - The resource path (e.g., "/hosts") or absolute URL
    #[must_use]
    pub fn builder(method: HttpMethod, resource: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, resource)
    }
}

/// Builder for constructing [`Request`] instances.
///
/// Validation is deferred to [`build`](Self::build) so setters can be chained
/// freely.
#[derive(Debug)]
pub struct RequestBuilder {
    method: HttpMethod,
    resource: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl RequestBuilder {
    fn new(method: HttpMethod, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header. Repeated names produce multiple values.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a raw request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request body to the serialized form of a JSON value.
    ///
    /// The `Content-Type` header is added by the client pipeline, not here.
    #[must_use]
    pub fn json(mut self, body: &serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Builds the [`Request`], parsing the resource and headers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the resource cannot be parsed into
    /// a [`Target`] or a header name or value is invalid.
    pub fn build(self) -> Result<Request, InvalidRequestError> {
        let target = Target::parse(&self.resource)?;

        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| InvalidRequestError::InvalidHeaderName { name: name.clone() })?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|_| InvalidRequestError::InvalidHeaderValue { name })?;
            headers.append(header_name, header_value);
        }

        Ok(Request {
            method: self.method,
            target,
            headers,
            body: self.body,
        })
    }
}
