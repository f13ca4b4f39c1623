use httpsuite::rfc::{self, PROTOCOLS, REQUEST_METHODS, RESPONSE_STATUS};
use httpsuite::Error;

#[test]
fn test_status_table_is_bidirectional() {
    assert!(!RESPONSE_STATUS.is_empty());

    for (code, phrase) in RESPONSE_STATUS.iter() {
        assert_eq!(RESPONSE_STATUS.forward(code), Ok(phrase));
        assert_eq!(RESPONSE_STATUS.backward(*phrase), Ok(code));
    }
}

#[test]
fn test_unregistered_codes_are_not_found() {
    for code in 0..1000u16 {
        if RESPONSE_STATUS.contains_key(&code) {
            continue;
        }
        assert!(matches!(
            RESPONSE_STATUS.forward(&code),
            Err(Error::KeyNotFound { .. })
        ));
    }

    assert!(rfc::reason_phrase(299).is_err());
    assert!(rfc::reason_phrase(600).is_err());
}

#[test]
fn test_common_phrases() {
    assert_eq!(rfc::reason_phrase(200), Ok("OK"));
    assert_eq!(rfc::reason_phrase(404), Ok("Not Found"));
    assert_eq!(rfc::reason_phrase(505), Ok("HTTP Version Not Supported"));
    assert_eq!(rfc::status_code("Not Found"), Ok(404));
    assert!(rfc::status_code("not found").is_err());
}

#[test]
fn test_token_tables() {
    assert_eq!(PROTOCOLS.len(), 5);
    assert!(rfc::is_known_protocol("HTTP/1.1"));
    assert!(!rfc::is_known_protocol("HTTP/1.2"));

    assert_eq!(REQUEST_METHODS.len(), 8);
    assert!(rfc::is_known_method("OPTIONS"));
    assert!(!rfc::is_known_method("PATCH"));
    assert!(!rfc::is_known_method("get"));
}

#[test]
fn test_header_tables_ignore_case() {
    assert!(rfc::is_request_header("user-agent"));
    assert!(rfc::is_request_header("Host"));
    assert!(!rfc::is_request_header("Server"));

    assert!(rfc::is_response_header("etag"));
    assert!(rfc::is_response_header("Server"));
    assert!(!rfc::is_response_header("Host"));
}
