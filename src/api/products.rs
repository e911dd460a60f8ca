//! Product Endpoint
//!
//! `GET {endpoint}?offset={n}` returning a JSON array of products.

use async_trait::async_trait;

use super::{fetch_json, PageSource};
use crate::error::LoadError;
use crate::models::{Page, Product};

/// Page source backed by the `/load_more` endpoint
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    endpoint: String,
}

impl HttpProductSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn page_url(&self, offset: u32) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}offset={}", self.endpoint, separator, offset)
    }
}

#[async_trait(?Send)]
impl PageSource for HttpProductSource {
    async fn fetch_page(&self, offset: u32) -> Result<Vec<Product>, LoadError> {
        let body = fetch_json(&self.page_url(offset)).await?;
        let page: Page =
            serde_wasm_bindgen::from_value(body).map_err(|e| LoadError::Decode(e.to_string()))?;
        Ok(page.into_products())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        let source = HttpProductSource::new("/load_more");
        assert_eq!(source.page_url(0), "/load_more?offset=0");
        assert_eq!(source.page_url(20), "/load_more?offset=20");
    }

    #[test]
    fn test_page_url_keeps_existing_query() {
        let source = HttpProductSource::new("/load_more?category=buzos");
        assert_eq!(source.page_url(3), "/load_more?category=buzos&offset=3");
    }
}
