use crate::dom::{DocumentRegistry, DomTarget};
use hover_core::{controller::HoverPlaybackController, shared_types::HoverKind};
use std::rc::Rc;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, Event, HtmlElement};

/// Body Listeners Setup
///
/// One listener per hover transition on the body; events from every
/// descendant bubble up to it and the controller filters out anything that
/// is not a song thumbnail.
pub fn setup_body_listeners(body: &HtmlElement, document: &Document) -> Result<(), JsValue> {
    let controller = Rc::new(HoverPlaybackController::new(DocumentRegistry::new(
        document.clone(),
    )));

    for kind in HoverKind::ALL {
        let controller = controller.clone();
        let callback = Closure::wrap(Box::new(move |event: Event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(DomTarget);

            if let Err(e) = controller.handle(kind, target.as_ref()) {
                console_error!("{} listener failed :: {}", kind.event_name(), e);
            }
        }) as Box<dyn FnMut(_)>);

        body.add_event_listener_with_callback(kind.event_name(), callback.as_ref().unchecked_ref())?;
        // forget the callback to keep it alive for the page lifetime
        callback.forget();
    }

    Ok(())
}
