// tests/config_tests.rs
use catalog_server::config::{AppConfig, LogFormat, StoreBackend};
use catalog_server::AppError;
use std::collections::HashMap;

fn load(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
  let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
  AppConfig::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_defaults_with_database_url() {
  let config = load(&[("DATABASE_URL", "postgres://localhost/catalog")]).unwrap();
  assert_eq!(config.server_host, "127.0.0.1");
  assert_eq!(config.server_port, 5000);
  assert_eq!(config.store_backend, StoreBackend::Postgres);
  assert_eq!(config.database_max_connections, 5);
  assert!(!config.strict_updates);
  assert_eq!(config.log_format, LogFormat::Pretty);
  assert_eq!(config.bind_address(), "127.0.0.1:5000");
}

#[test]
fn test_postgres_requires_database_url() {
  assert!(matches!(load(&[]), Err(AppError::Config(_))));
  assert!(matches!(load(&[("DATABASE_URL", "  ")]), Err(AppError::Config(_))));
}

#[test]
fn test_memory_backend_needs_no_database() {
  let config = load(&[("STORE_BACKEND", "Memory")]).unwrap();
  assert_eq!(config.store_backend, StoreBackend::Memory);
  assert!(config.database_url.is_none());
}

#[test]
fn test_port_falls_back_to_port_variable() {
  let config = load(&[("STORE_BACKEND", "memory"), ("PORT", "8081")]).unwrap();
  assert_eq!(config.server_port, 8081);

  let config = load(&[("STORE_BACKEND", "memory"), ("PORT", "8081"), ("SERVER_PORT", "9000")]).unwrap();
  assert_eq!(config.server_port, 9000);
}

#[test]
fn test_invalid_values_are_config_errors() {
  let cases: [&[(&str, &str)]; 5] = [
    &[("STORE_BACKEND", "memory"), ("SERVER_PORT", "eighty")],
    &[("STORE_BACKEND", "mongo")],
    &[("STORE_BACKEND", "memory"), ("STRICT_UPDATES", "yes")],
    &[("STORE_BACKEND", "memory"), ("LOG_FORMAT", "xml")],
    &[("STORE_BACKEND", "memory"), ("DATABASE_MAX_CONNECTIONS", "-1")],
  ];
  for vars in cases {
    assert!(matches!(load(vars), Err(AppError::Config(_))), "{:?}", vars);
  }
}

#[test]
fn test_optional_switches() {
  let config = load(&[("STORE_BACKEND", "memory"), ("STRICT_UPDATES", "true"), ("LOG_FORMAT", "json")]).unwrap();
  assert!(config.strict_updates);
  assert_eq!(config.log_format, LogFormat::Json);
}
