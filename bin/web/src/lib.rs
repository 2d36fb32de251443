//! campus web front-end.
//!
//! This crate provides the Leptos-based role dashboards for the campus
//! university-management platform, backed by the upstream REST API.

#![allow(non_snake_case)]

pub mod app;
pub mod config;
pub mod pages;
pub mod session;
pub mod storage;
pub mod toast;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
