//! WASM bindings for the tagsense completion engine.
//!
//! Exposes `complete()`, `tagComplete()` and `quoteComplete()` to JavaScript
//! via wasm-bindgen. Offsets are character offsets into the document text.

use tagsense_complete::Candidate;
use tagsense_lexer::Scanner;
use tagsense_parser::Document;
use tagsense_vocab::Configuration;
use wasm_bindgen::prelude::*;

/// Read a configuration object; `undefined` and `null` give the defaults.
fn configuration(config: JsValue) -> Result<Configuration, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(Configuration::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))
}

fn candidates(text: &str, offset: usize, config: &Configuration) -> Vec<Candidate> {
    let document = Document::parse(text);
    tagsense_complete::complete(text, offset, &document, config)
}

/// Completion candidates at `offset`.
///
/// Returns a JS object `{ items: Candidate[], context: Context }`.
/// Throws a JS error if `config` is not a valid configuration object.
#[wasm_bindgen]
pub fn complete(text: &str, offset: usize, config: JsValue) -> Result<JsValue, JsError> {
    let config = configuration(config)?;
    let items = candidates(text, offset, &config);
    let context = tagsense_complete::classify(&Scanner::tokenize(text), offset);

    let js_obj = js_sys::Object::new();
    let items = serde_wasm_bindgen::to_value(&items).map_err(|e| JsError::new(&e.to_string()))?;
    let context =
        serde_wasm_bindgen::to_value(&context).map_err(|e| JsError::new(&e.to_string()))?;
    js_sys::Reflect::set(&js_obj, &"items".into(), &items)
        .map_err(|_| JsError::new("Failed to set items property"))?;
    js_sys::Reflect::set(&js_obj, &"context".into(), &context)
        .map_err(|_| JsError::new("Failed to set context property"))?;

    Ok(js_obj.into())
}

/// Closing text to insert after typing `>` or `</`, or `undefined`.
#[wasm_bindgen(js_name = tagComplete)]
pub fn tag_complete(text: &str, offset: usize) -> Option<String> {
    tagsense_complete::tag_complete(text, offset, &Document::parse(text))
}

/// Quotes to insert after typing `=`, or `undefined`.
#[wasm_bindgen(js_name = quoteComplete)]
pub fn quote_complete(
    text: &str,
    offset: usize,
    config: JsValue,
) -> Result<Option<String>, JsError> {
    let config = configuration(config)?;
    Ok(tagsense_complete::quote_complete(
        text,
        offset,
        &Document::parse(text),
        &config,
    ))
}

/// Get the engine version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
