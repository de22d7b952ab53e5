use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding to the browser environment.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    CanvasNotFound(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext2d,
    #[error("javascript error: {0}")]
    Js(String),
}

impl WebError {
    pub fn from_js(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
