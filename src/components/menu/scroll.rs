use gloo_console as console;
use gloo_events::EventListener;
use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug)]
pub enum ScrollError {
    #[error("window scroll offset is unavailable: {0}")]
    OffsetUnavailable(String),
}

// Listens to window scrolling while alive, dropping it removes the listener
pub struct ScrollObserver {
    _listener: EventListener,
}

impl ScrollObserver {
    pub fn observe<F>(on_offset: F) -> Self
    where
        F: Fn(f64) + 'static,
    {
        let listener = EventListener::new(&gloo_utils::window(), "scroll", move |_event| {
            match scroll_offset() {
                Ok(offset) => on_offset(offset),
                Err(e) => console::error!(e.to_string()),
            }
        });

        Self {
            _listener: listener,
        }
    }
}

pub fn scroll_offset() -> Result<f64, ScrollError> {
    gloo_utils::window()
        .scroll_y()
        .map_err(|e: JsValue| ScrollError::OffsetUnavailable(format!("{e:?}")))
}
