pub mod booking;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::booking::{form, SubmissionConfig};

/// Bind the appointment form if the current page has one.
pub fn bind_appointment_form() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    form::attach(&document, SubmissionConfig::appointment());
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    bind_appointment_form();
}
