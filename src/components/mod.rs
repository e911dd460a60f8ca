//! UI Components
//!
//! Leptos components rendered into the host page's product list.

mod product_card;
mod product_feed;

pub use product_card::ProductCard;
pub use product_feed::ProductFeed;
