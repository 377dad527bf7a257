#![allow(non_snake_case)]

//! Browser front end of the label printing kiosk: looks up a barcode (typed or
//! read from the camera) on the backend, shows the serial record and prints its label.

pub mod api;
pub mod camera;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod platform;
pub mod record;
pub mod session;
pub mod snackbar;
pub mod utils;
pub mod web;

use wasm_bindgen::prelude::*;

pub use components::App;
pub use controller::Controller;

/// Opens the label preview modal on `url`. Callable from page scripts.
#[wasm_bindgen]
pub fn show_label_preview(url: &str) {
    components::with_controller(|controller| controller.show_preview(url));
}
