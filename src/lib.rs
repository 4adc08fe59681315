//! # foodbridge
//!
//! Leptos + WASM frontend connecting food donors with recipients.
//!
//! Donors log surplus food, review suggested matches, and schedule pickups.
//! Recipients search listings, request items, and track pickups. Everything
//! runs in the browser against in-memory view models seeded with fixtures;
//! only preferences survive a reload.
//!
//! Session lifecycle and route access rules live in the `access` crate so
//! they can be tested without a browser. This crate supplies the reactive
//! session cell, the simulated auth backend, and the views.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
