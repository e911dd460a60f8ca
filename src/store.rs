//! Feed State Store
//!
//! Uses Leptos reactive_stores so the product list and the trigger react
//! to their own fields.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::LoadError;
use crate::models::Product;
use crate::pagination::{LoadPhase, Pagination};

/// State of one "load more" feed
#[derive(Clone, Debug, Default, Store)]
pub struct FeedState {
    /// Products appended by this feed, in server order
    pub products: Vec<Product>,
    /// Offset cursor and load phase
    pub pagination: Pagination,
}

/// Type alias for the store
pub type FeedStore = Store<FeedState>;

pub fn new_feed_store(pagination: Pagination) -> FeedStore {
    Store::new(FeedState {
        products: Vec::new(),
        pagination,
    })
}

// ========================
// Store Helper Functions
// ========================

/// Claim the next request; `None` if one is in flight or the feed is exhausted
pub fn store_begin_load(store: &FeedStore) -> Option<u32> {
    store.pagination().write().begin()
}

/// Append a page and advance the offset
pub fn store_append_page(store: &FeedStore, page: Vec<Product>) {
    let received = page.len();
    if received > 0 {
        store.products().write().extend(page);
    }
    store.pagination().write().complete(received);
}

pub fn store_fail_load(store: &FeedStore, error: &LoadError) {
    store.pagination().write().fail(error);
}

/// Current phase (tracked)
pub fn store_phase(store: &FeedStore) -> LoadPhase {
    store.pagination().read().phase().clone()
}

pub fn store_phase_untracked(store: &FeedStore) -> LoadPhase {
    store.pagination().read_untracked().phase().clone()
}

/// Current offset (untracked)
pub fn store_offset(store: &FeedStore) -> u32 {
    store.pagination().read_untracked().offset()
}

/// Products rendered so far (tracked)
pub fn store_products(store: &FeedStore) -> Vec<Product> {
    store.products().get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scalar;
    use leptos::reactive::owner::Owner;

    fn product(id: f64) -> Product {
        Product {
            id: Some(Scalar::Num(id)),
            name: Some(format!("Product {}", id)),
            ..Default::default()
        }
    }

    fn ids(store: &FeedStore) -> Vec<Option<Scalar>> {
        store_products(store).into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_append_keeps_response_order() {
        Owner::new().with(|| {
            let store = new_feed_store(Pagination::new(0));

            assert_eq!(store_begin_load(&store), Some(0));
            store_append_page(&store, vec![product(3.0), product(1.0), product(2.0)]);

            assert_eq!(
                ids(&store),
                vec![Some(Scalar::Num(3.0)), Some(Scalar::Num(1.0)), Some(Scalar::Num(2.0))]
            );
            assert_eq!(store_offset(&store), 3);
            assert_eq!(store_phase_untracked(&store), LoadPhase::Active);
        });
    }

    #[test]
    fn test_empty_page_appends_nothing_and_exhausts() {
        Owner::new().with(|| {
            let store = new_feed_store(Pagination::new(3));

            store_begin_load(&store);
            store_append_page(&store, Vec::new());

            assert!(store_products(&store).is_empty());
            assert_eq!(store_offset(&store), 3);
            assert_eq!(store_phase_untracked(&store), LoadPhase::Exhausted);
            assert_eq!(store_begin_load(&store), None);
        });
    }

    #[test]
    fn test_offset_tracks_rendered_products() {
        Owner::new().with(|| {
            let store = new_feed_store(Pagination::new(20));

            for page in [vec![product(21.0), product(22.0)], vec![product(23.0)]] {
                store_begin_load(&store);
                store_append_page(&store, page);
            }

            assert_eq!(store_offset(&store), 20 + store_products(&store).len() as u32);
            assert_eq!(store_offset(&store), 23);
        });
    }

    #[test]
    fn test_failed_load_keeps_products_and_offset() {
        Owner::new().with(|| {
            let store = new_feed_store(Pagination::new(0));
            store_begin_load(&store);
            store_append_page(&store, vec![product(1.0)]);

            store_begin_load(&store);
            store_fail_load(&store, &LoadError::Status(500));

            assert_eq!(ids(&store), vec![Some(Scalar::Num(1.0))]);
            assert_eq!(store_offset(&store), 1);
            assert_eq!(store_phase_untracked(&store).as_str(), "failed");
        });
    }
}
