//! Assembly of the client's request pipeline.
//!
//! [`ChainBuilder`] collects [`Decorator`] stages in the order they should run
//! on a request and folds them into a single [`BoxModifier`]. The canonical
//! Foreman pipeline, built by [`ChainBuilder::from_config`], is:
//!
//! 1. [`rewrite_target`]: scheme and host from the configured address, path
//!    prefixed with the API version
//! 2. [`add_header`] `Content-Type: application/json`
//! 3. [`add_header`] `Agent: RustForemanAPIClient`
//! 4. [`basic_auth`], only when a username is configured
//! 5. any extra stages from the configuration
//!
//! Header stages append: a value the caller already set under the same name
//! is kept alongside the new one.

use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::clients::http_request::Request;
use crate::clients::modifier::{compose, BoxModifier, Decorator};
use crate::config::{Address, ApiVersion, Credentials, ForemanConfig};

/// Value of the `Agent` header sent with every request.
pub const AGENT: &str = "RustForemanAPIClient";

/// Name of the header identifying this client.
pub const AGENT_HEADER: &str = "agent";

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Ordered list of pipeline stages.
///
/// Stages run in the order they were added. [`build`](Self::build) takes care
/// of the reversal that folding decorators introduces.
///
/// # Example
///
/// ```rust
/// use foreman_api::clients::{ChainBuilder, Decorator, HttpMethod, Modifier, Request, Target};
///
/// let modifier = ChainBuilder::new()
///     .stage(Decorator::new("first", |mut req: Request| { req.target.path.push_str("/1"); req }))
///     .stage(Decorator::new("second", |mut req: Request| { req.target.path.push_str("/2"); req }))
///     .build();
///
/// let request = modifier.modify(Request::new(HttpMethod::Get, Target::default()));
/// assert_eq!(request.target.path, "/1/2");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChainBuilder {
    stages: Vec<Decorator>,
}

impl ChainBuilder {
    /// Creates an empty chain; building it yields the identity modifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the canonical Foreman pipeline for `config`.
    #[must_use]
    pub fn from_config(config: &ForemanConfig) -> Self {
        let mut chain = Self::new()
            .stage(rewrite_target(config.address(), config.api_version()))
            .stage(add_header(
                CONTENT_TYPE,
                HeaderValue::from_static(JSON_CONTENT_TYPE),
            ))
            .stage(add_header(
                HeaderName::from_static(AGENT_HEADER),
                HeaderValue::from_static(AGENT),
            ));

        if let Some(credentials) = config.credentials() {
            chain = chain.stage(basic_auth(credentials));
        }

        config
            .extra_stages()
            .iter()
            .cloned()
            .fold(chain, Self::stage)
    }

    /// Appends a stage that runs after every stage added so far.
    #[must_use]
    pub fn stage(mut self, decorator: Decorator) -> Self {
        self.stages.push(decorator);
        self
    }

    /// Returns the stage names in application order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(Decorator::name).collect()
    }

    /// Folds the stages into one modifier that applies them in order.
    #[must_use]
    pub fn build(self) -> BoxModifier {
        compose(self.stages.into_iter().rev())
    }
}

/// Points the request at the configured Foreman server.
///
/// Sets the scheme and host from `address` and rewrites the path to
/// `"<api_version>/"` followed by the original path with at most one leading
/// `/` removed. The query string is left untouched.
///
/// An address without an `http://` or `https://` prefix leaves the scheme
/// empty; the transport then rejects the request.
#[must_use]
pub fn rewrite_target(address: &Address, api_version: &ApiVersion) -> Decorator {
    let scheme = address.scheme().to_string();
    let host = address.host().to_string();
    let prefix = format!("{api_version}/");

    Decorator::new("rewrite_target", move |mut req: Request| {
        let path = req
            .target
            .path
            .strip_prefix('/')
            .unwrap_or(&req.target.path);
        req.target.path = format!("{prefix}{path}");
        req.target.host.clone_from(&host);
        req.target.scheme.clone_from(&scheme);
        req
    })
}

/// Appends a header value, keeping any values already present.
#[must_use]
pub fn add_header(name: HeaderName, value: HeaderValue) -> Decorator {
    Decorator::new("add_header", move |mut req: Request| {
        req.headers.append(name.clone(), value.clone());
        req
    })
}

/// Appends an `Authorization: Basic ...` header for `credentials`.
///
/// The header value is marked sensitive so HTTP stacks that honour the flag
/// keep it out of their logs.
#[must_use]
pub fn basic_auth(credentials: &Credentials) -> Decorator {
    let value = credentials.authorization().clone();

    Decorator::new("basic_auth", move |mut req: Request| {
        req.headers.append(AUTHORIZATION, value.clone());
        req
    })
}
