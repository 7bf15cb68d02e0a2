// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Planner Session

use wasm_bindgen::prelude::*;

use crate::engine::{compute_scenario, EngineConfig, Scenario};
use crate::error::ScenarioError;
use crate::input::ScenarioInput;
use crate::summary::Summary;

// ─── Planner struct ──────────────────────────────────────────────────────────

/// Current input snapshot and the scenario derived from it.
///
/// Every edit builds a new snapshot and recomputes the whole scenario. The
/// pair is only replaced once the recompute succeeds, so a rejected edit
/// leaves the previous snapshot and results in place.
#[wasm_bindgen]
pub struct Planner {
    pub(crate) config: EngineConfig,
    pub(crate) input: ScenarioInput,
    pub(crate) scenario: Scenario,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl Planner {
    pub fn with_config(config: EngineConfig) -> Result<Self, ScenarioError> {
        Self::from_input(ScenarioInput::default(), config)
    }

    pub fn from_input(input: ScenarioInput, config: EngineConfig) -> Result<Self, ScenarioError> {
        let scenario = compute_scenario(&input, &config)?;
        Ok(Self { config, input, scenario })
    }

    /// Change one parameter by catalogue key and recompute.
    pub fn apply(&mut self, key: &str, value: f64) -> Result<&Scenario, ScenarioError> {
        let next = self.input.with_param(key, value)?;
        self.replace_input(next)
    }

    /// Swap in a whole new snapshot and recompute.
    pub fn replace_input(&mut self, input: ScenarioInput) -> Result<&Scenario, ScenarioError> {
        let scenario = compute_scenario(&input, &self.config).map_err(|err| {
            tracing::warn!(error = %err, "edit rejected, keeping previous scenario");
            err
        })?;
        self.input = input;
        self.scenario = scenario;
        Ok(&self.scenario)
    }

    /// Restore every parameter to its default.
    pub fn reset_to_defaults(&mut self) -> Result<&Scenario, ScenarioError> {
        self.replace_input(ScenarioInput::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn input(&self) -> &ScenarioInput {
        &self.input
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn summary(&self) -> &Summary {
        &self.scenario.summary
    }
}
