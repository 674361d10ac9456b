//! WASM bindings for the spacing token substituter.
//!
//! Exposes `substitute()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ css, replacements }`.

use spacetok_core::SPACING_SCALE;
use wasm_bindgen::prelude::*;

/// Replace spacing literals in `source` using the built-in spacing scale.
///
/// Returns a JS object with `{ css: string, replacements: number }`.
#[wasm_bindgen]
pub fn substitute(source: &str) -> Result<JsValue, JsError> {
    let report = spacetok_core::substitute_with_report(source, SPACING_SCALE);
    let replacements = report.replacements() as u32;

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"css".into(), &report.content.into())
        .map_err(|_| JsError::new("Failed to set css property"))?;
    js_sys::Reflect::set(
        &js_obj,
        &"replacements".into(),
        &JsValue::from(replacements),
    )
    .map_err(|_| JsError::new("Failed to set replacements property"))?;

    Ok(js_obj.into())
}

/// Get the substituter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
