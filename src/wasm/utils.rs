use crate::error::{FinderError, Result};
use js_sys::Array;
use wasm_bindgen::prelude::*;

pub fn parse_js_point(val: &JsValue) -> Option<[f64; 2]> {
    let arr = val.dyn_ref::<Array>()?;
    if arr.length() < 2 {
        return None;
    }
    let x = arr.get(0).as_f64()?;
    let y = arr.get(1).as_f64()?;
    if !(x.is_finite() && y.is_finite()) {
        return None;
    }
    Some([x, y])
}

/// Reads a JS array of `[x, y]` pairs.
pub fn parse_js_points(points: &Array) -> Result<Vec<[f64; 2]>> {
    points
        .iter()
        .enumerate()
        .map(|(i, item)| parse_js_point(&item).ok_or(FinderError::MalformedPoint(i)))
        .collect()
}

pub fn to_js_error(err: FinderError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
