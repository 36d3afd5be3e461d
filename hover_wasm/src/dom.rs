//! Browser implementations of the controller's target and registry traits

use crate::utils::describe_js_error;
use hover_core::{
    controller::{HoverTarget, MediaElement, MediaRegistry},
    SONG_ID_ATTRIBUTE,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlMediaElement};

/// The element an event was dispatched to
pub struct DomTarget(pub Element);

impl HoverTarget for DomTarget {
    fn class_name(&self) -> String {
        self.0.class_name()
    }

    fn song_id(&self) -> Option<String> {
        self.0.get_attribute(SONG_ID_ATTRIBUTE)
    }
}

/// Looks media elements up with `document.getElementById`
pub struct DocumentRegistry {
    document: Document,
}

impl DocumentRegistry {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl MediaRegistry for DocumentRegistry {
    type Media = MediaHandle;

    /// Elements that exist but are not `<audio>`/`<video>` do not resolve
    fn lookup(&self, id: &str) -> Option<Self::Media> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlMediaElement>()
            .ok()
            .map(MediaHandle)
    }
}

pub struct MediaHandle(HtmlMediaElement);

impl MediaElement for MediaHandle {
    fn play(&self) -> Result<(), String> {
        // the returned promise is left alone, a rejected autoplay only
        // shows up in the console
        self.0
            .play()
            .map(|_: js_sys::Promise| ())
            .map_err(|e| describe_js_error(&e))
    }

    fn pause(&self) -> Result<(), String> {
        self.0.pause().map_err(|e| describe_js_error(&e))
    }
}
