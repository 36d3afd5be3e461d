use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

pub fn js_window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

pub fn document() -> Result<Document, JsValue> {
    js_window()?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document should have a body"))
}

/// Readable text for a value thrown from JS
pub fn describe_js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
