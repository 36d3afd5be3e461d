use hover_core::controller;
use std::panic;
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

macro_rules! console_error {
    ($($t:tt)*) => ($crate::error(&format_args!($($t)*).to_string()))
}

mod dom;
mod interface;
mod utils;

use dom::DocumentRegistry;
use interface::setup_body_listeners;
use utils::{body, document};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

/// Initialization process for the page
///
/// sets up panic logging and the hover listeners on the document body
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    setup_logging();

    let document = document()?;
    setup_body_listeners(&body(&document)?, &document)?;
    console_log!("hover previews ready");

    Ok(())
}

/// Plays the audio element with the given id
#[wasm_bindgen(js_name = playAudio)]
pub fn play_audio(element_id: &str) -> Result<(), JsValue> {
    let registry = DocumentRegistry::new(document()?);
    controller::play_audio(&registry, element_id).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Pauses the audio element with the given id
#[wasm_bindgen(js_name = pauseAudio)]
pub fn pause_audio(element_id: &str) -> Result<(), JsValue> {
    let registry = DocumentRegistry::new(document()?);
    controller::pause_audio(&registry, element_id).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn setup_logging() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));
}
