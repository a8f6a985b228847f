mod common;

use attrgen::config;
use serial_test::serial;

#[test]
#[serial]
fn test_configuration_is_available_after_loading() {
    common::ensure_config();

    let config = config::get().expect("configuration should be loaded");
    let defaults = config.session_defaults();
    assert!(defaults.field_count >= 1);
    assert!(config.parse_max_sessions().is_ok());
    assert!(config.parse_http_body_limit().is_ok());
}
