// Run with: wasm-pack test --node
#![cfg(target_arch = "wasm32")]

use logistics_engine::{derive_scenario, parameter_catalogue, Planner, ScenarioInput};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn planner_round_trips_through_js() {
    let mut planner = Planner::new().expect("test: planner");
    let scenario = planner.set_param("volume.total_deliverable", 200.0).expect("test: edit");
    assert!(!scenario.is_null());
    assert_eq!(planner.get_param("volume.total_deliverable").expect("test: key"), Some(200.0));
    assert!(planner.get_warnings().is_empty());
}

#[wasm_bindgen_test]
fn planner_rejects_negative_remainder() {
    let mut planner = Planner::new().expect("test: planner");
    assert!(planner.set_param("volume.pct_a", 90.0).is_err());
    assert_eq!(planner.get_param("volume.pct_a").expect("test: key"), Some(30.0));
}

#[wasm_bindgen_test]
fn stateless_derivation_and_catalogue() {
    let input = serde_wasm_bindgen::to_value(&ScenarioInput::default()).expect("test: input to js");
    let scenario = derive_scenario(input).expect("test: derive");
    assert!(!scenario.is_null());
    assert!(derive_scenario(JsValue::from_str("not a scenario")).is_err());
    assert!(!parameter_catalogue().is_null());
}
