use super::*;

#[test]
fn service_error_messages_name_the_failure() {
    assert_eq!(ServiceError::Status(502).to_string(), "unexpected status: 502");
    assert_eq!(ServiceError::Timeout { after_ms: 15_000 }.to_string(), "request timed out after 15000 ms");
    assert_eq!(
        ServiceError::Unavailable { endpoint: "/login".to_owned() }.to_string(),
        "/login is not reachable outside the browser"
    );
}

#[test]
fn decode_and_request_errors_carry_detail() {
    assert_eq!(ServiceError::Decode("eof".to_owned()).to_string(), "response decode failed: eof");
    assert_eq!(ServiceError::Request("offline".to_owned()).to_string(), "request failed: offline");
}
