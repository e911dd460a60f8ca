//! Store Feed Controller
//!
//! Binds the host page's "load more" trigger to a feed mounted in its
//! product list.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::api::{fetch_page_with_retry, HttpProductSource, PageSource};
use crate::components::ProductFeed;
use crate::config::StoreConfig;
use crate::error::{js_message, LoadError};
use crate::logger;
use crate::pagination::{LoadPhase, Pagination, RetryPolicy};
use crate::store::{
    new_feed_store, store_append_page, store_begin_load, store_fail_load, store_offset,
    store_phase, store_phase_untracked, FeedStore,
};

/// Starting count rendered by the host page on the trigger
const INITIAL_COUNT_ATTR: &str = "data-initial-count";
/// Marks a trigger that already drives a feed
const BOUND_ATTR: &str = "data-store-bound";
/// Mirrors the load phase for styling
const STATE_ATTR: &str = "data-state";

/// Labels the trigger cycles through
struct TriggerLabels {
    idle: String,
    loading: String,
    retry: String,
}

/// `initStore(startingCount, options)` for host pages that boot manually
#[wasm_bindgen(js_name = initStore)]
pub fn init_store_js(starting_count: f64, options: JsValue) -> Result<(), JsValue> {
    let config = StoreConfig::from_js(options)?;
    logger::set_level(config.level_filter());
    let pagination = Pagination::from_count(starting_count)?;
    init_store(pagination, config)?;
    Ok(())
}

/// Boot from the trigger's data attributes.
///
/// Returns `Ok(false)` when the page has no trigger carrying
/// `data-initial-count`, leaving initialisation to `initStore`.
pub fn boot() -> Result<bool, LoadError> {
    let mut config = StoreConfig::default();
    let document = document()?;
    let Some(trigger) = document.get_element_by_id(&config.trigger_id) else {
        return Ok(false);
    };
    let Some(raw_count) = trigger.get_attribute(INITIAL_COUNT_ATTR) else {
        return Ok(false);
    };

    config.apply_overrides(|name| trigger.get_attribute(name))?;
    logger::set_level(config.level_filter());

    let pagination = Pagination::parse(&raw_count)?;
    init_store(pagination, config)?;
    Ok(true)
}

/// Look up the trigger and list, mount the feed, and bind the click handler.
///
/// Both elements must exist; nothing is bound if either is missing.
pub fn init_store(pagination: Pagination, config: StoreConfig) -> Result<(), LoadError> {
    let document = document()?;
    let trigger = find_element(&document, &config.trigger_id)?;
    let list = find_element(&document, &config.list_id)?;

    if trigger.has_attribute(BOUND_ATTR) {
        return Err(LoadError::AlreadyBound(config.trigger_id.clone()));
    }
    if let Err(e) = trigger.set_attribute(BOUND_ATTR, "") {
        log::warn!("Failed to mark #{} as bound: {}", config.trigger_id, js_message(&e));
    }

    log::info!(
        "Feed bound to #{} -> #{} from offset {}",
        config.trigger_id,
        config.list_id,
        pagination.offset()
    );

    let source: Rc<dyn PageSource> = Rc::new(HttpProductSource::new(config.endpoint.clone()));

    leptos::mount::mount_to(list, move || {
        let store = new_feed_store(pagination);
        bind_trigger(&trigger, store, source, &config);

        view! {
            <ProductFeed
                store=store
                cart_path=config.cart_path.clone()
                cart_label=config.cart_label.clone()
            />
        }
    })
    .forget();

    Ok(())
}

/// Load the next page into `store`. Ignored while a request is in flight
/// or after the feed is exhausted.
pub fn load_next_page(store: FeedStore, source: Rc<dyn PageSource>, policy: RetryPolicy) {
    let Some(offset) = store_begin_load(&store) else {
        log::debug!("Load ignored: {}", store_phase_untracked(&store).as_str());
        return;
    };
    log::info!("Loading products from offset {}", offset);

    spawn_local(async move {
        match fetch_page_with_retry(source.as_ref(), offset, &policy).await {
            Ok(page) => {
                let received = page.len();
                store_append_page(&store, page);
                if received == 0 {
                    log::info!("No more products after offset {}", offset);
                } else {
                    log::info!("Loaded {} products, offset now {}", received, store_offset(&store));
                }
            }
            Err(err) => {
                log::error!("Loading offset {} failed: {}", offset, err);
                store_fail_load(&store, &err);
            }
        }
    });
}

fn bind_trigger(trigger: &HtmlElement, store: FeedStore, source: Rc<dyn PageSource>, config: &StoreConfig) {
    let policy = config.retry;
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        load_next_page(store, Rc::clone(&source), policy);
    });
    if let Err(e) = trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::error!("Failed to bind click on #{}: {}", config.trigger_id, js_message(&e));
        return;
    }
    on_click.forget();

    let labels = TriggerLabels {
        idle: trigger.text_content().unwrap_or_default(),
        loading: config.loading_label.clone(),
        retry: config.retry_label.clone(),
    };
    let trigger = trigger.clone();
    Effect::new(move |_| {
        let phase = store_phase(&store);
        render_trigger(&trigger, &phase, &labels);
    });
}

/// One change to the host's trigger element
#[derive(Debug, Clone, PartialEq)]
enum TriggerOp {
    SetAttr(&'static str, String),
    RemoveAttr(&'static str),
    SetText(String),
    Hide,
}

/// Changes that reflect `phase` on the trigger
fn trigger_ops(phase: &LoadPhase, labels: &TriggerLabels) -> Vec<TriggerOp> {
    let mut ops = vec![TriggerOp::SetAttr(STATE_ATTR, phase.as_str().to_string())];
    match phase {
        LoadPhase::Active => {
            ops.push(TriggerOp::RemoveAttr("disabled"));
            ops.push(TriggerOp::RemoveAttr("title"));
            ops.push(TriggerOp::SetText(labels.idle.clone()));
        }
        LoadPhase::Loading => {
            ops.push(TriggerOp::SetAttr("disabled", String::new()));
            ops.push(TriggerOp::SetText(labels.loading.clone()));
        }
        LoadPhase::Failed(message) => {
            ops.push(TriggerOp::RemoveAttr("disabled"));
            ops.push(TriggerOp::SetAttr("title", message.clone()));
            ops.push(TriggerOp::SetText(labels.retry.clone()));
        }
        LoadPhase::Exhausted => ops.push(TriggerOp::Hide),
    }
    ops
}

/// Reflect the load phase on the host's trigger element
fn render_trigger(trigger: &HtmlElement, phase: &LoadPhase, labels: &TriggerLabels) {
    for op in trigger_ops(phase, labels) {
        let result = match &op {
            TriggerOp::SetAttr(name, value) => trigger.set_attribute(name, value),
            TriggerOp::RemoveAttr(name) => trigger.remove_attribute(name),
            TriggerOp::SetText(text) => {
                trigger.set_text_content(Some(text));
                Ok(())
            }
            TriggerOp::Hide => trigger.style().set_property("display", "none"),
        };
        if let Err(e) = result {
            log::error!("Failed to apply {:?} to trigger: {}", op, js_message(&e));
        }
    }
}

fn document() -> Result<Document, LoadError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| LoadError::MissingElement("document".to_string()))
}

fn find_element(document: &Document, id: &str) -> Result<HtmlElement, LoadError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| LoadError::MissingElement(id.to_string()))
}
