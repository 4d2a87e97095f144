//! The browser window as a resize source.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wv_core::resize::{ListenerId, ResizeHandler, Viewport, ViewportSize};

/// `window` resize events, one DOM listener per subscription.
///
/// The wrapped closures are kept here until unsubscribed; dropping a
/// `Closure` that is still registered would leave a dangling callback.
#[derive(Default)]
pub struct BrowserViewport {
    next_id: Cell<u64>,
    listeners: RefCell<HashMap<ListenerId, Closure<dyn FnMut()>>>,
}

impl BrowserViewport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Viewport for BrowserViewport {
    fn size(&self) -> ViewportSize {
        window_size()
    }

    fn subscribe(&self, mut handler: ResizeHandler) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let callback = Closure::<dyn FnMut()>::wrap(Box::new(move || handler(window_size())));
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window
                    .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                {
                    log::warn!("[WV] viewport: failed to add resize listener: {:?}", e);
                }
            }
            None => log::warn!("[WV] viewport: no window, resize events will not fire"),
        }
        self.listeners.borrow_mut().insert(id, callback);
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        let Some(callback) = self.listeners.borrow_mut().remove(&id) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                log::warn!("[WV] viewport: failed to remove resize listener: {:?}", e);
            }
        }
    }
}

impl Drop for BrowserViewport {
    fn drop(&mut self) {
        let ids: Vec<ListenerId> = self.listeners.borrow().keys().copied().collect();
        for id in ids {
            self.unsubscribe(id);
        }
    }
}

fn window_size() -> ViewportSize {
    let Some(window) = web_sys::window() else {
        return ViewportSize::default();
    };
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    ViewportSize {
        width: dimension(window.inner_width()),
        height: dimension(window.inner_height()),
    }
}

/// Current layout width of the element with `id`, if it is in the document.
pub fn element_width(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(f64::from(element.client_width()))
}
