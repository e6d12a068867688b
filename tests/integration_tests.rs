//! Integration tests for the Foreman API client.
//!
//! These tests verify end-to-end behavior of configuration and the request
//! pipeline without sending anything over the network.

use foreman_api::clients::{
    compose, ChainBuilder, Decorator, HeaderValue, HttpMethod, Identity, Modifier, Request, Target,
};
use foreman_api::{ApiVersion, ForemanClient, ForemanConfig, InvalidRequestError};

fn head(resource: &str) -> Request {
    Request::builder(HttpMethod::Head, resource).build().unwrap()
}

fn values(request: &Request, name: &str) -> Vec<String> {
    request
        .headers
        .get_all(name)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_full_workflow_build_config_create_client_prepare_request() {
    let config = ForemanConfig::builder()
        .address("https://example.org")
        .api_version("v2")
        .credentials("bob", "pw")
        .build();

    let client = ForemanClient::new(config);
    let request = client.prepare(head("/hosts"));

    assert_eq!(request.method, HttpMethod::Head);
    assert_eq!(request.target.to_string(), "https://example.org/v2/hosts");
    assert_eq!(values(&request, "content-type"), ["application/json"]);
    assert_eq!(values(&request, "agent"), ["RustForemanAPIClient"]);
    assert_eq!(values(&request, "authorization"), ["Basic Ym9iOnB3"]);
    assert!(request.body.is_none());
}

#[test]
fn test_defaults_target_local_foreman() {
    let client = ForemanClient::new(ForemanConfig::default());
    let request = client.prepare(head("/hosts"));

    assert_eq!(request.target.to_string(), "http://localhost:3000/v2/hosts");
    assert!(values(&request, "authorization").is_empty());
}

#[test]
fn test_path_without_leading_slash_gets_one_separator() {
    let client = ForemanClient::new(ForemanConfig::default());

    let with_slash = client.prepare(head("/hosts"));
    let without_slash = client.prepare(head("hosts"));

    assert_eq!(with_slash.target, without_slash.target);
    assert_eq!(without_slash.target.path, "v2/hosts");
}

#[test]
fn test_rewrite_replaces_caller_host_and_keeps_query() {
    let client = ForemanClient::new(
        ForemanConfig::builder()
            .address("https://foreman.example.com")
            .api_version(ApiVersion::V1)
            .build(),
    );

    let request = client.prepare(head("http://elsewhere.test/hosts?search=name%3Dweb01"));

    assert_eq!(request.target.scheme, "https");
    assert_eq!(request.target.host, "foreman.example.com");
    assert_eq!(request.target.path, "v1/hosts");
    assert_eq!(request.target.query.as_deref(), Some("search=name%3Dweb01"));
}

#[test]
fn test_unknown_api_version_is_used_verbatim() {
    let client = ForemanClient::new(ForemanConfig::builder().api_version("v3").build());

    let request = client.prepare(head("/hosts"));

    assert_eq!(request.target.path, "v3/hosts");
    assert_eq!(client.api_version(), &ApiVersion::Custom("v3".to_string()));
}

#[test]
fn test_caller_headers_survive_pipeline() {
    let client = ForemanClient::new(ForemanConfig::builder().credentials("bob", "pw").build());
    let request = Request::builder(HttpMethod::Get, "/hosts")
        .header("Agent", "my-script")
        .header("Authorization", "Bearer abc")
        .build()
        .unwrap();

    let request = client.prepare(request);

    assert_eq!(values(&request, "agent"), ["my-script", "RustForemanAPIClient"]);
    assert_eq!(
        values(&request, "authorization"),
        ["Bearer abc", "Basic Ym9iOnB3"]
    );
}

#[test]
fn test_extra_stages_run_after_builtin_stages_in_order() {
    let seen_auth = Decorator::new("check_auth", |mut req: Request| {
        let has_auth = req.headers.contains_key("authorization");
        req.headers.append(
            "x-saw-auth",
            HeaderValue::from_static(if has_auth { "yes" } else { "no" }),
        );
        req
    });
    let trace = |label: &'static str| {
        Decorator::new(label, move |mut req: Request| {
            req.headers.append("x-trace", HeaderValue::from_static(label));
            req
        })
    };

    let client = ForemanClient::new(
        ForemanConfig::builder()
            .credentials("bob", "pw")
            .modifier(seen_auth)
            .modifier(trace("first"))
            .modifier(trace("second"))
            .build(),
    );
    let request = client.prepare(head("/hosts"));

    assert_eq!(values(&request, "x-saw-auth"), ["yes"]);
    assert_eq!(values(&request, "x-trace"), ["first", "second"]);
    assert_eq!(
        client.stage_names(),
        [
            "rewrite_target",
            "add_header",
            "add_header",
            "basic_auth",
            "check_auth",
            "first",
            "second"
        ]
    );
}

#[test]
fn test_chain_builder_matches_client_pipeline() {
    let config = ForemanConfig::builder()
        .address("https://example.org")
        .credentials("bob", "pw")
        .build();
    let client = ForemanClient::new(config.clone());
    let modifier = ChainBuilder::from_config(&config).build();

    let from_chain = modifier.modify(head("/hosts"));
    let from_client = client.prepare(head("/hosts"));

    assert_eq!(from_chain.target, from_client.target);
    assert_eq!(from_chain.headers, from_client.headers);
}

#[test]
fn test_compose_applies_outermost_decorator_first() {
    let push = |segment: &'static str| {
        Decorator::new(segment, move |mut req: Request| {
            req.target.path.push('/');
            req.target.path.push_str(segment);
            req
        })
    };

    let composed = compose([push("a"), push("b"), push("c")]);
    let request = composed.modify(Request::new(HttpMethod::Get, Target::default()));

    assert_eq!(request.target.path, "/c/b/a");
}

#[test]
fn test_identity_leaves_request_untouched() {
    let request = Request::builder(HttpMethod::Delete, "https://example.org/hosts/1")
        .header("X-Test", "1")
        .body("payload")
        .build()
        .unwrap();

    let result = Identity.modify(request.clone());

    assert_eq!(result.method, request.method);
    assert_eq!(result.target, request.target);
    assert_eq!(result.headers, request.headers);
    assert_eq!(result.body, request.body);
}

#[test]
fn test_invalid_resources_are_rejected() {
    assert!(matches!(
        Request::builder(HttpMethod::Head, "/hosts\n").build(),
        Err(InvalidRequestError::ControlCharacter { .. })
    ));
    assert!(matches!(
        Request::builder(HttpMethod::Head, "/hosts/%g1").build(),
        Err(InvalidRequestError::InvalidEscape { .. })
    ));
    assert!(matches!(
        Request::builder(HttpMethod::Head, ":hosts").build(),
        Err(InvalidRequestError::MissingScheme { .. })
    ));
}
