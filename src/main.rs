#![allow(warnings)]
//! Store Feed Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod pagination;
mod api;
mod store;
mod components;
mod controller;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    match controller::boot() {
        Ok(true) => {}
        Ok(false) => log::debug!("No trigger with data-initial-count; waiting for initStore"),
        Err(e) => log::error!("Store feed failed to start: {}", e),
    }
}
