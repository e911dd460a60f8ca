//! Store Feed Configuration
//!
//! Endpoint paths, element ids, labels and retry policy. Values come from
//! defaults, a JS options object, or `data-*` attributes on the trigger.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::LoadError;
use crate::pagination::RetryPolicy;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Pagination endpoint, queried with `?offset=n`
    pub endpoint: String,
    /// Prefix of the add-to-cart link, followed by `/{id}`
    pub cart_path: String,
    /// Id of the "load more" trigger
    pub trigger_id: String,
    /// Id of the list container cards are appended to
    pub list_id: String,
    pub cart_label: String,
    pub loading_label: String,
    pub retry_label: String,
    pub retry: RetryPolicy,
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "/load_more".to_string(),
            cart_path: "/add_to_cart".to_string(),
            trigger_id: "ver-mas".to_string(),
            list_id: "product-list".to_string(),
            cart_label: "Agregar al carrito".to_string(),
            loading_label: "Cargando...".to_string(),
            retry_label: "Reintentar".to_string(),
            retry: RetryPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl StoreConfig {
    /// Decode the options object passed to `initStore`
    pub fn from_js(options: JsValue) -> Result<Self, LoadError> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(options).map_err(|e| LoadError::InvalidConfig(e.to_string()))
    }

    /// Override fields from `data-*` attributes; `lookup` returns an
    /// attribute's value by name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("data-endpoint") {
            self.endpoint = endpoint;
        }
        if let Some(cart_path) = lookup("data-cart-path") {
            self.cart_path = cart_path;
        }
        if let Some(raw) = lookup("data-max-attempts") {
            self.retry.max_attempts = raw.trim().parse().map_err(|_| {
                LoadError::InvalidConfig(format!("data-max-attempts={:?}", raw))
            })?;
        }
        if let Some(level) = lookup("data-log-level") {
            self.log_level = level;
        }
        Ok(())
    }

    /// Unknown levels fall back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_host_page() {
        let config = StoreConfig::default();
        assert_eq!(config.endpoint, "/load_more");
        assert_eq!(config.trigger_id, "ver-mas");
        assert_eq!(config.list_id, "product-list");
        assert_eq!(config.retry.max_attempts, 3);
    }

    #[test]
    fn test_partial_options_keep_defaults() {
        let config: StoreConfig = serde_json::from_str(
            r#"{"endpoint": "/api/products", "retry": {"maxAttempts": 5}}"#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "/api/products");
        assert_eq!(config.cart_path, "/add_to_cart");
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.initial_delay_ms, 500);
    }

    #[test]
    fn test_data_attribute_overrides() {
        let attrs: HashMap<&str, &str> = [
            ("data-endpoint", "/tienda/load_more"),
            ("data-max-attempts", " 1 "),
            ("data-log-level", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = StoreConfig::default();
        config
            .apply_overrides(|name| attrs.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.endpoint, "/tienda/load_more");
        assert_eq!(config.cart_path, "/add_to_cart");
        assert_eq!(config.retry.max_attempts, 1);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_bad_attempts_attribute() {
        let mut config = StoreConfig::default();
        let result = config.apply_overrides(|name| {
            (name == "data-max-attempts").then(|| "many".to_string())
        });
        assert!(matches!(result, Err(LoadError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = StoreConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
