use github_activity::config::Config;
use github_activity::errors::AppError;
use github_activity::github::GithubClient;

mod common;
use common::{MockServer, closed_port_url, watch_event};

fn client_for(url: &str) -> GithubClient {
    let cfg = Config {
        api_url: url.to_string(),
        ..Config::default()
    };
    GithubClient::new(&cfg).expect("client")
}

#[test]
fn test_fetch_success_returns_events_in_order() {
    let body = serde_json::json!([
        watch_event("foo/first", "2024-02-02T10:00:00Z"),
        watch_event("foo/second", "2024-02-01T10:00:00Z"),
    ])
    .to_string();
    let server = MockServer::start(200, &body);

    let events = client_for(server.url())
        .fetch_user_events("octocat")
        .expect("fetch should succeed");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].repo_name(), Some("foo/first"));
    assert_eq!(events[1].repo_name(), Some("foo/second"));

    let request = server.request_line();
    assert!(request.starts_with("GET /users/octocat/events"), "{request}");
}

#[test]
fn test_fetch_empty_array() {
    let server = MockServer::start(200, "[]");
    let events = client_for(server.url())
        .fetch_user_events("quiet")
        .expect("fetch should succeed");
    assert!(events.is_empty());
}

#[test]
fn test_fetch_404_is_user_not_found() {
    let server = MockServer::start(404, r#"{"message":"Not Found"}"#);
    let err = client_for(server.url())
        .fetch_user_events("nobody")
        .expect_err("404 must fail");

    assert!(matches!(err, AppError::UserNotFound(ref u) if u == "nobody"));
    assert_eq!(err.to_string(), "User 'nobody' not found on GitHub.");
}

#[test]
fn test_fetch_500_is_http_error() {
    let server = MockServer::start(500, "oops");
    let err = client_for(server.url())
        .fetch_user_events("octocat")
        .expect_err("500 must fail");

    match &err {
        AppError::Http { status, url } => {
            assert_eq!(status.as_u16(), 500);
            assert!(url.ends_with("/users/octocat/events"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("HTTP error occurred: 500"));
}

#[test]
fn test_fetch_non_array_body_is_invalid_response() {
    let server = MockServer::start(200, r#"{"message":"hello"}"#);
    let err = client_for(server.url())
        .fetch_user_events("octocat")
        .expect_err("object body must fail");
    assert!(matches!(err, AppError::InvalidResponse(_)));
}

#[test]
fn test_fetch_connection_refused_is_transport_error() {
    let err = client_for(&closed_port_url())
        .fetch_user_events("octocat")
        .expect_err("closed port must fail");
    assert!(matches!(err, AppError::Transport(_)));
    assert!(err.to_string().starts_with("Could not fetch data:"));
}

#[test]
fn test_events_url_trims_trailing_slash() {
    let cfg = Config {
        api_url: "http://example.test/".to_string(),
        ..Config::default()
    };
    assert_eq!(
        cfg.events_url("octocat").expect("url").as_str(),
        "http://example.test/users/octocat/events"
    );
    assert_eq!(
        Config::default().events_url("octocat").expect("url").as_str(),
        "https://api.github.com/users/octocat/events"
    );
}

#[test]
fn test_events_url_encodes_username_as_one_segment() {
    let cfg = Config::default();
    assert_eq!(
        cfg.events_url("octocat?x=1#").expect("url").as_str(),
        "https://api.github.com/users/octocat%3Fx=1%23/events"
    );
    assert_eq!(
        cfg.events_url("a/b").expect("url").as_str(),
        "https://api.github.com/users/a%2Fb/events"
    );
}

#[test]
fn test_events_url_rejects_unusable_api_url() {
    let cfg = Config {
        api_url: "not a url".to_string(),
        ..Config::default()
    };
    assert!(matches!(cfg.events_url("octocat"), Err(AppError::Config(_))));
}

#[test]
fn test_fetch_sends_encoded_username() {
    let server = MockServer::start(200, "[]");
    client_for(server.url())
        .fetch_user_events("octo cat?x=1")
        .expect("fetch should succeed");

    let request = server.request_line();
    assert!(
        request.starts_with("GET /users/octo%20cat%3Fx=1/events "),
        "{request}"
    );
}
