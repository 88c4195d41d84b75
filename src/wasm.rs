//! WebAssembly bindings (feature `wasm`).

use wasm_bindgen::prelude::*;

use crate::models::StopSet;
use crate::optimizer::{OptimizerConfig, RouteOptimizer};

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

/// Solves a stop set given as an array of `[x, y, identity]` triples,
/// depot first. Returns the serialized `OptimizationResult`.
///
/// `config` may be `undefined` or an object such as `{ max_waypoints: 9 }`.
#[wasm_bindgen(js_name = solveTour)]
pub fn solve_tour(stops: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let stops: StopSet = serde_wasm_bindgen::from_value(stops).map_err(js_error)?;
    let config: OptimizerConfig = if config.is_undefined() || config.is_null() {
        OptimizerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(js_error)?
    };
    let result = RouteOptimizer::new(config).solve(&stops).map_err(js_error)?;
    serde_wasm_bindgen::to_value(&result).map_err(js_error)
}
