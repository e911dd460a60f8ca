//! Product Feed Component
//!
//! Cards loaded by "load more", appended after the server-rendered ones.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::store::{store_products, FeedStore};

#[component]
pub fn ProductFeed(
    store: FeedStore,
    #[prop(into)] cart_path: String,
    #[prop(into)] cart_label: String,
) -> impl IntoView {
    view! {
        // Append-only: the index is a stable key
        <For
            each=move || store_products(&store).into_iter().enumerate()
            key=|(index, _)| *index
            children=move |(_, product)| {
                view! {
                    <ProductCard
                        product=product
                        cart_path=cart_path.clone()
                        cart_label=cart_label.clone()
                    />
                }
            }
        />
    }
}
