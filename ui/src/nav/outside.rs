use anyhow::{Context, Result};
use leptos::logging::warn;
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{Document, Event, Node};

use crate::dom::{document, js_err};

const EVENT: &str = "pointerdown";

/// Document-wide pointer-down subscription. Detached on drop.
pub struct OutsideClick {
    document: Document,
    callback: Closure<dyn FnMut(Event)>,
}

impl OutsideClick {
    /// `on_pointer_down` receives the event target, if it is a DOM node.
    pub fn attach<F>(mut on_pointer_down: F) -> Result<Self>
    where
        F: 'static + FnMut(Option<Node>),
    {
        let document = document()?;
        let callback = Closure::wrap(Box::new(move |e: Event| {
            on_pointer_down(e.target().and_then(|t| t.dyn_into::<Node>().ok()));
        }) as Box<dyn FnMut(Event)>);

        document
            .add_event_listener_with_callback(EVENT, callback.as_ref().unchecked_ref())
            .map_err(js_err)
            .context("attaching outside-click listener")?;

        Ok(Self { document, callback })
    }
}

impl Drop for OutsideClick {
    fn drop(&mut self) {
        // may run from inside the callback itself; wasm-bindgen frees the
        // closure once that call returns
        if let Err(e) = self
            .document
            .remove_event_listener_with_callback(EVENT, self.callback.as_ref().unchecked_ref())
        {
            warn!("outside-click listener not removed: {e:?}");
        }
    }
}

/// True when `target` is `container` or one of its descendants.
pub fn contains(container: &Node, target: Option<&Node>) -> bool {
    target.is_some_and(|t| container.contains(Some(t)))
}
