use anyhow::{Context, Result, anyhow};
use wasm_bindgen::JsValue;

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().context("no global window")
}

pub fn document() -> Result<web_sys::Document> {
    window()?.document().context("window has no document")
}

/// `JsValue` is neither `Send` nor `std::error::Error`, so flatten it.
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}
