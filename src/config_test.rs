use super::*;

#[test]
fn default_matches_backend_routes() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.chat_endpoint, "/api/chat");
    assert_eq!(cfg.login_endpoint, "/login");
    assert_eq!(cfg.register_endpoint, "/register");
    assert_eq!(cfg.home_route, "/");
    assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
}

#[test]
fn redirect_delay_depends_on_form_kind() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.redirect_delay_ms(FormKind::Login), 1_500);
    assert_eq!(cfg.redirect_delay_ms(FormKind::Register), 2_000);
}

#[test]
fn auth_endpoint_depends_on_form_kind() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.auth_endpoint(FormKind::Login), "/login");
    assert_eq!(cfg.auth_endpoint(FormKind::Register), "/register");
}

#[test]
fn from_json_keeps_defaults_for_missing_keys() {
    let cfg = ClientConfig::from_json(r#"{"chat_endpoint":"/v2/chat","request_timeout_ms":5000}"#).unwrap();
    assert_eq!(cfg.chat_endpoint, "/v2/chat");
    assert_eq!(cfg.request_timeout_ms, 5_000);
    assert_eq!(cfg.login_endpoint, DEFAULT_LOGIN_ENDPOINT);
    assert_eq!(cfg.register_redirect_delay_ms, DEFAULT_REGISTER_REDIRECT_DELAY_MS);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
}

#[test]
fn from_json_rejects_malformed_document() {
    let err = ClientConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_zero_timeout() {
    let err = ClientConfig::from_json(r#"{"request_timeout_ms":0}"#).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid { field: "request_timeout_ms", reason: "must be greater than zero".to_owned() }
    );
}

#[test]
fn from_json_rejects_blank_endpoint() {
    let err = ClientConfig::from_json(r#"{"login_endpoint":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "login_endpoint", .. }));
}

#[test]
fn from_document_outside_browser_is_default() {
    assert_eq!(ClientConfig::from_document(), ClientConfig::default());
}
