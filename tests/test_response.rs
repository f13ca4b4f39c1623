use httpsuite::{Error, Message, Response};

#[test]
fn test_response_derives_status_msg() {
    let resp = Response::new(404).unwrap();

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.status_msg(), "Not Found");
    assert_eq!(resp.protocol(), "HTTP/1.1");
    assert_eq!(resp.raw(), b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[test]
fn test_response_explicit_status_msg() {
    let resp = Response::with_status_msg(404, "Nope").unwrap();
    assert_eq!(resp.status_msg(), "Nope");

    let resp = Response::with_status_msg(299, "Custom").unwrap();
    assert_eq!(resp.start_line(), "HTTP/1.1 299 Custom");
}

#[test]
fn test_response_unregistered_status() {
    assert!(matches!(
        Response::new(299),
        Err(Error::KeyNotFound { .. })
    ));
    assert!(matches!(
        Response::with_status_msg(600, "Too High"),
        Err(Error::InvalidStatusCode { .. })
    ));
    assert!(matches!(
        Response::with_status_msg(99, "Too Low"),
        Err(Error::InvalidStatusCode { .. })
    ));
}

#[test]
fn test_response_set_status() {
    let mut resp = Response::new(200).unwrap();

    resp.set_status(503).unwrap();
    assert_eq!(resp.start_line(), "HTTP/1.1 503 Service Unavailable");

    assert!(resp.set_status(299).is_err());
    assert_eq!(resp.status(), 503);
}

#[test]
fn test_response_parse_multi_word_reason() {
    let raw = b"HTTP/1.1 505 HTTP Version Not Supported\r\nServer: demo\r\n\r\n";

    let resp = Response::parse(raw).unwrap();

    assert_eq!(resp.status(), 505);
    assert_eq!(resp.status_msg(), "HTTP Version Not Supported");
    assert_eq!(resp.raw(), raw);
}

#[test]
fn test_response_parse_keeps_nonstandard_reason() {
    let resp = Response::parse(b"HTTP/1.0 200 Fine By Me\r\n\r\n").unwrap();

    assert_eq!(resp.protocol(), "HTTP/1.0");
    assert_eq!(resp.status_msg(), "Fine By Me");
}

#[test]
fn test_response_parse_empty_reason() {
    let raw = b"HTTP/1.1 204 \r\n\r\n";

    let resp = Response::parse(raw).unwrap();

    assert_eq!(resp.status(), 204);
    assert_eq!(resp.status_msg(), "");
    assert_eq!(resp.raw(), raw);
}

#[test]
fn test_response_parse_bad_status() {
    assert_eq!(
        Response::parse(b"HTTP/1.1 abc OK\r\n\r\n").unwrap_err(),
        Error::InvalidStatusCode {
            status: "abc".to_string()
        }
    );
    assert!(matches!(
        Response::parse(b"HTTP/1.1 700 Odd\r\n\r\n"),
        Err(Error::InvalidStatusCode { .. })
    ));
}

#[test]
fn test_response_parse_short_status_line() {
    assert!(matches!(
        Response::parse(b"HTTP/1.1 200\r\n\r\n"),
        Err(Error::MalformedStartLine { .. })
    ));
    assert!(matches!(
        Response::parse(b""),
        Err(Error::MalformedStartLine { .. })
    ));
}

#[test]
fn test_response_set_start_line() {
    let mut resp = Response::new(200).unwrap();

    resp.set_start_line("HTTP/1.0 301 Moved Permanently").unwrap();
    assert_eq!(resp.protocol(), "HTTP/1.0");
    assert_eq!(resp.status(), 301);
    assert_eq!(resp.status_msg(), "Moved Permanently");

    assert!(resp.set_start_line("HTTP/1.0 x Broken").is_err());
    assert_eq!(resp.status(), 301);
}

#[test]
fn test_response_builder_style() {
    let resp = Response::new(200)
        .and_then(|r| r.with_protocol("HTTP/1.0"))
        .and_then(|r| r.with_header("Content-Type", "text/plain"))
        .and_then(|r| r.with_header("X-Custom", "value"))
        .unwrap()
        .with_body("test");

    assert!(resp.is_success());
    assert_eq!(resp.headers.get("content-type"), Some("text/plain"));
    assert_eq!(
        resp.raw(),
        b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\nX-Custom: value\r\n\r\ntest"
    );
}

#[test]
fn test_response_display() {
    let resp = Response::new(200)
        .and_then(|r| r.with_header("Server", "demo"))
        .unwrap()
        .with_body("hello");

    assert_eq!(resp.to_string(), "← HTTP/1.1 200 OK\n← Server: demo\n← hello");
}

#[test]
fn test_response_header_injection_is_rejected() {
    let resp = Response::new(200).unwrap();

    assert!(matches!(
        resp.clone().with_header("Set-Cookie", "a=1\r\nX-Evil: 1"),
        Err(Error::MalformedHeader { .. })
    ));
    assert!(matches!(
        resp.with_header("X-Evil\r\n", "1"),
        Err(Error::MalformedHeader { .. })
    ));
}

#[test]
fn test_response_status_line_fields_are_validated() {
    assert!(matches!(
        Response::with_status_msg(200, "OK\r\nX-Evil: 1"),
        Err(Error::MalformedStartLine { .. })
    ));
    assert!(Response::new(200).unwrap().with_protocol("HTTP/1.1 x").is_err());

    // every way of building a response keeps the status line parseable
    let resp = Response::with_status_msg(599, "Edge Of Range")
        .and_then(|r| r.with_protocol("HTTP/1.0"))
        .unwrap();
    assert_eq!(Response::parse(&resp.raw()).unwrap(), resp);
}
