//! Product API
//!
//! Frontend bindings to the server's pagination endpoint.

mod products;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{js_message, LoadError};
use crate::models::Product;
use crate::pagination::RetryPolicy;

pub use products::HttpProductSource;

/// Anything that can return the products that follow `offset`
#[async_trait(?Send)]
pub trait PageSource {
    async fn fetch_page(&self, offset: u32) -> Result<Vec<Product>, LoadError>;
}

/// GET `url` and return the parsed JSON body
async fn fetch_json(url: &str) -> Result<JsValue, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(js_message(&e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| LoadError::Network(js_message(&e)))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response.json().map_err(|e| LoadError::Decode(js_message(&e)))?;
    JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Decode(js_message(&e)))
}

/// Fetch one page, retrying transient failures per `policy`
pub async fn fetch_page_with_retry<S>(
    source: &S,
    offset: u32,
    policy: &RetryPolicy,
) -> Result<Vec<Product>, LoadError>
where
    S: PageSource + ?Sized,
{
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match source.fetch_page(offset).await {
            Ok(page) => return Ok(page),
            Err(err) if err.is_retryable() && attempt < attempts => {
                let delay = policy.delay_before(attempt);
                log::warn!(
                    "Page at offset {} failed (attempt {}/{}): {}; retrying in {} ms",
                    offset, attempt, attempts, err, delay
                );
                if delay > 0 {
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                }
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
