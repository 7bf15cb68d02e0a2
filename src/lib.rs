// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine

pub mod types;
pub mod rounding;
pub mod error;
pub mod input;
pub mod params;

// Stages, in dependency order
pub mod volume;
pub mod time;
pub mod people;
pub mod qa;
pub mod money;
pub mod timeline;
pub mod summary;

pub mod engine;
pub mod planner;

pub use engine::{compute, compute_scenario, EngineConfig, Scenario};
pub use error::{ScenarioError, Warning};
pub use input::ScenarioInput;
pub use planner::Planner;
pub use summary::Summary;
pub use types::{Category, PerCategory, Usd};

use wasm_bindgen::prelude::*;

fn to_js_error(err: ScenarioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl Planner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Planner, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        Planner::with_config(EngineConfig::default()).map_err(to_js_error)
    }

    /// Change one parameter; returns the recomputed scenario or throws.
    pub fn set_param(&mut self, key: &str, value: f64) -> Result<JsValue, JsValue> {
        let scenario = self.apply(key, value).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(scenario).unwrap_or(JsValue::NULL))
    }

    pub fn get_param(&self, key: &str) -> Result<Option<f64>, JsValue> {
        self.input.get(key).map_err(to_js_error)
    }

    /// Let `num_evals` follow the required submission count again.
    pub fn clear_num_evals(&mut self) -> Result<JsValue, JsValue> {
        let next = self.input.clear_num_evals();
        let scenario = self.replace_input(next).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(scenario).unwrap_or(JsValue::NULL))
    }

    /// Replace the whole input with a `ScenarioInput`-shaped object.
    pub fn load_input(&mut self, input: JsValue) -> Result<JsValue, JsValue> {
        let input: ScenarioInput = serde_wasm_bindgen::from_value(input)?;
        let scenario = self.replace_input(input).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(scenario).unwrap_or(JsValue::NULL))
    }

    pub fn set_allow_negative_remainder(&mut self, allow: bool) -> Result<JsValue, JsValue> {
        let previous = self.config;
        self.config.allow_negative_remainder = allow;
        let input = self.input.clone();
        match self.replace_input(input) {
            Ok(scenario) => Ok(serde_wasm_bindgen::to_value(scenario).unwrap_or(JsValue::NULL)),
            Err(err) => {
                self.config = previous;
                Err(to_js_error(err))
            }
        }
    }

    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        let scenario = self.reset_to_defaults().map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(scenario).unwrap_or(JsValue::NULL))
    }

    pub fn get_scenario(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.scenario).unwrap_or(JsValue::NULL)
    }

    pub fn get_summary(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.scenario.summary).unwrap_or(JsValue::NULL)
    }

    pub fn get_input(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.input).unwrap_or(JsValue::NULL)
    }

    /// Human-readable warnings for the current scenario.
    pub fn get_warnings(&self) -> Vec<String> {
        self.scenario.warnings.iter().map(Warning::message).collect()
    }
}

/// Catalogue of every parameter: key, label, default, step and bounds.
#[wasm_bindgen]
pub fn parameter_catalogue() -> JsValue {
    serde_wasm_bindgen::to_value(params::parameters()).unwrap_or(JsValue::NULL)
}

/// Stateless one-shot derivation from a `ScenarioInput`-shaped object.
#[wasm_bindgen]
pub fn derive_scenario(input: JsValue) -> Result<JsValue, JsValue> {
    let input: ScenarioInput = serde_wasm_bindgen::from_value(input)?;
    let scenario = compute(&input).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&scenario).unwrap_or(JsValue::NULL))
}
