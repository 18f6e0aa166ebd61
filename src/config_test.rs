use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_origin, DEFAULT_API_ORIGIN);
    assert_eq!(cfg.timeouts, ProxyTimeouts {
        request: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        connect: Duration::from_secs(DEFAULT_API_CONNECT_TIMEOUT_SECS),
    });
}

#[test]
fn overrides_are_parsed() {
    let cfg = Config::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("API_ORIGIN", "https://api.learnx.test/"),
        ("API_TIMEOUT_SECS", "5"),
        ("API_CONNECT_TIMEOUT_SECS", " 2 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_origin, "https://api.learnx.test");
    assert_eq!(cfg.timeouts.request, Duration::from_secs(5));
    assert_eq!(cfg.timeouts.connect, Duration::from_secs(2));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = Config::from_lookup(lookup(&[("PORT", ""), ("API_ORIGIN", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_origin, DEFAULT_API_ORIGIN);
}

#[test]
fn malformed_numbers_are_rejected() {
    assert_eq!(
        Config::from_lookup(lookup(&[("PORT", "eighty")])),
        Err(ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() })
    );
    assert_eq!(
        Config::from_lookup(lookup(&[("API_TIMEOUT_SECS", "0")])),
        Err(ConfigError::InvalidNumber { var: "API_TIMEOUT_SECS", value: "0".to_owned() })
    );
    assert!(Config::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn origin_must_be_bare_http_origin() {
    assert_eq!(
        Config::from_lookup(lookup(&[("API_ORIGIN", "localhost:5000")])),
        Err(ConfigError::InvalidOrigin("localhost:5000".to_owned()))
    );
    assert!(Config::from_lookup(lookup(&[("API_ORIGIN", "http://localhost:5000/api")])).is_err());
    assert!(Config::from_lookup(lookup(&[("API_ORIGIN", "http://")])).is_err());
}
