//! Tests for the demo microservice and fetch client glue

use httpsuite::server::client::build_request;
use httpsuite::server::listener::{respond, route};
use httpsuite::{Message, Request, Response};

#[test]
fn test_route_known_paths() {
    let resp = route(&Request::new("GET", "/").unwrap()).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.body, b"Homepage of the microservice.");

    let resp = route(&Request::new("GET", "/data").unwrap()).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn test_route_unknown_path() {
    let resp = route(&Request::new("GET", "/missing").unwrap()).unwrap();

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.status_msg(), "Not Found");
}

#[test]
fn test_route_rejects_unknown_method_and_protocol() {
    let resp = route(&Request::new("BREW", "/").unwrap()).unwrap();
    assert_eq!(resp.start_line(), "HTTP/1.1 501 Not Implemented");

    let request = Request::new("GET", "/")
        .and_then(|r| r.with_protocol("HTTP/4.2"))
        .unwrap();
    let resp = route(&request).unwrap();
    assert_eq!(resp.status(), 505);
}

#[test]
fn test_respond_renders_full_reply() {
    let resp = respond(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n", "test/1.0").unwrap();
    let parsed = Response::parse(&resp.raw()).unwrap();

    assert_eq!(parsed.status(), 200);
    assert_eq!(parsed.headers.get("Server"), Some("test/1.0"));
    assert_eq!(parsed.headers.get("Connection"), Some("close"));
    assert_eq!(parsed.content_length(), Some(parsed.body.len()));
}

#[test]
fn test_respond_to_garbage_is_bad_request() {
    let resp = respond(b"garbage", "test/1.0").unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.status_msg(), "Bad Request");
    assert_eq!(resp.headers.get("content-length"), Some("0"));
}

#[test]
fn test_build_request() {
    let url = url::Url::parse("http://localhost:8080/api?x=1").unwrap();

    let req = build_request(&url, None).unwrap();

    assert_eq!(req.start_line(), "GET /api?x=1 HTTP/1.1");
    assert_eq!(req.headers.get("Host"), Some("localhost:8080"));
    assert_eq!(req.headers.get("Connection"), Some("close"));
    assert_eq!(req.headers.get("Accept"), Some("*/*"));
}

#[test]
fn test_build_request_default_port_and_body() {
    let url = url::Url::parse("http://example.com").unwrap();

    let req = build_request(&url, Some(br#"{"hello": "world"}"#.to_vec())).unwrap();

    assert_eq!(req.method(), "POST");
    assert_eq!(req.target(), "/");
    assert_eq!(req.headers.get("Host"), Some("example.com"));
    assert_eq!(req.content_length(), Some(18));
}

#[test]
fn test_respond_rejects_server_name_with_line_break() {
    assert!(respond(b"GET / HTTP/1.1\r\n\r\n", "demo\r\nX-Evil: 1").is_err());
}
