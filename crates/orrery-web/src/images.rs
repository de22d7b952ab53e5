use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use orrery_engine::{AssetGate, LoadOutcome};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::error::WebError;

/// Loads textures through `HtmlImageElement`s.
///
/// Requests run concurrently in the browser. The onload/onerror callbacks
/// only record outcomes; the runner drains them into the `AssetGate` at the
/// start of the next frame so the game sees a consistent snapshot.
#[derive(Default)]
pub struct ImageLoader {
    images: Rc<RefCell<HashMap<String, HtmlImageElement>>>,
    outcomes: Rc<RefCell<Vec<(String, LoadOutcome)>>>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start fetching `url` under `key`.
    pub fn load(&self, key: &str, url: &str) -> Result<(), WebError> {
        let element = HtmlImageElement::new().map_err(WebError::from_js)?;

        let on_load = {
            let images = Rc::clone(&self.images);
            let outcomes = Rc::clone(&self.outcomes);
            let key = key.to_string();
            let loaded = element.clone();
            Closure::<dyn FnMut()>::new(move || {
                images.borrow_mut().insert(key.clone(), loaded.clone());
                outcomes.borrow_mut().push((key.clone(), LoadOutcome::Loaded));
            })
        };

        let on_error = {
            let outcomes = Rc::clone(&self.outcomes);
            let key = key.to_string();
            let url = url.to_string();
            Closure::<dyn FnMut()>::new(move || {
                log::error!("texture {key} failed to load from {url}, using flat color");
                outcomes.borrow_mut().push((key.clone(), LoadOutcome::Failed));
            })
        };

        element.set_onload(Some(on_load.as_ref().unchecked_ref()));
        element.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        // Each element fires once; the callbacks live as long as the page.
        on_load.forget();
        on_error.forget();

        element.set_src(url);
        Ok(())
    }

    /// Move recorded outcomes into the gate.
    pub fn drain_into(&self, gate: &mut AssetGate) {
        for (key, outcome) in self.outcomes.borrow_mut().drain(..) {
            gate.settle(&key, outcome);
        }
    }

    /// A loaded image, if any.
    pub fn get(&self, key: &str) -> Option<HtmlImageElement> {
        self.images.borrow().get(key).cloned()
    }
}
