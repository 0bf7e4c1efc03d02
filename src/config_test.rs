use super::*;

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_uses_defaults() {
    let config = WidgetConfig::from_json("{}").expect("parse");
    assert_eq!(config, WidgetConfig::default());
    assert!(!config.authenticated);
    assert_eq!(config.endpoint, "/");
}

#[test]
fn from_json_accepts_host_page_flag_name() {
    let config = WidgetConfig::from_json(r#"{"isUserAuthenticated": true}"#).expect("parse");
    assert!(config.authenticated);
}

#[test]
fn from_json_reads_all_fields() {
    let config = WidgetConfig::from_json(
        r##"{"authenticated":true,"endpoint":"/chat","title":"StockBot","mount_selector":"#chat"}"##,
    )
    .expect("parse");
    assert_eq!(config.endpoint, "/chat");
    assert_eq!(config.title, "StockBot");
    assert_eq!(config.mount_selector.as_deref(), Some("#chat"));
}

#[test]
fn from_json_ignores_unknown_fields() {
    let config = WidgetConfig::from_json(r#"{"theme":"dark"}"#).expect("parse");
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn from_json_rejects_blank_endpoint() {
    let err = WidgetConfig::from_json(r#"{"endpoint":"  "}"#).expect_err("blank endpoint");
    assert!(matches!(err, ConfigError::EmptyEndpoint));
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = WidgetConfig::from_json("not json").expect_err("malformed");
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid widget config:"));
}

// =============================================================
// NewChatGate
// =============================================================

#[test]
fn unauthenticated_visitor_gets_disabled_new_chat() {
    let gate = WidgetConfig::default().new_chat_gate();
    assert_eq!(gate, NewChatGate::LoginRequired);
    assert!(gate.disabled());
    assert_eq!(gate.tooltip(), Some("You need to be logged in to make a new chat."));
    assert!(gate.style().contains("not-allowed"));
}

#[test]
fn authenticated_visitor_gets_available_new_chat() {
    let config = WidgetConfig {
        authenticated: true,
        ..WidgetConfig::default()
    };
    let gate = config.new_chat_gate();
    assert!(!gate.disabled());
    assert_eq!(gate.tooltip(), None);
    assert_eq!(gate.style(), "");
}
