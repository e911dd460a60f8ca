//! Frontend Models
//!
//! Data structures matching the `/load_more` payload.

use serde::Deserialize;

/// A JSON value shown as-is: the server may send ids and prices as
/// numbers or strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Num(f64),
    Text(String),
    Bool(bool),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Shortest form: 20.0 shows as 20
            Scalar::Num(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Product as returned by the server.
///
/// Every field is optional: a missing or `null` value renders blank
/// instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: Option<Scalar>,
    pub name: Option<String>,
    pub price: Option<Scalar>,
    pub image: Option<String>,
}

impl Product {
    pub fn name_label(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn image_src(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }

    pub fn price_label(&self) -> String {
        self.price.as_ref().map(|p| p.to_string()).unwrap_or_default()
    }

    /// Card caption, e.g. "Remera Negra - 20"
    pub fn caption(&self) -> String {
        format!("{} - {}", self.name_label(), self.price_label())
    }

    /// Link to the add-to-cart action for this product
    pub fn cart_href(&self, cart_path: &str) -> String {
        let id = self.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        format!("{}/{}", cart_path.trim_end_matches('/'), id)
    }
}

/// One `/load_more` response body. `null` entries become blank products.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Page(Vec<Option<Product>>);

impl Page {
    pub fn into_products(self) -> Vec<Product> {
        self.0.into_iter().map(Option::unwrap_or_default).collect()
    }
}
