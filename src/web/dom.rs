use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlIFrameElement, HtmlVideoElement, KeyboardEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn video_element(id: &str) -> Option<HtmlVideoElement> {
    element(id)?.dyn_into().ok()
}

pub fn focus(id: &str) {
    let Some(element) = element(id).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    if let Err(err) = element.focus() {
        log::warn!("could not focus #{id}: {err:?}");
    }
}

pub fn scroll_into_view(id: &str) {
    if let Some(element) = element(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Opens the print dialog of the document shown in iframe `id`.
pub fn print_frame(id: &str) {
    let frame = element(id)
        .and_then(|e| e.dyn_into::<HtmlIFrameElement>().ok())
        .and_then(|frame| frame.content_window());
    match frame {
        Some(window) => {
            if let Err(err) = window.print() {
                log::error!("print failed: {err:?}");
            }
        }
        None => log::warn!("no document loaded in #{id}"),
    }
}

pub fn set_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        log::warn!("could not toggle page scroll: {err:?}");
    }
}

/// Document-level `keydown` listener for one key, removed on drop.
pub struct KeyListener {
    document: Document,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    pub fn new<F>(key: &'static str, mut f: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let document = document()?;
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() == key {
                f();
            }
        });
        document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(|err| log::error!("could not listen for {key}: {err:?}"))
            .ok()?;
        Some(Self { document, closure })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
    }
}
