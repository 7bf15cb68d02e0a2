// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Scenario Pipeline

//! One total recompute: validate, then run every stage in dependency order.
//!
//! ```text
//! volume ─┬─> time ─┬─> people ─┐
//!         │         ├─> qa      │
//!         └─────────┴───────────┴─> money ─┐
//! timeline ────────────────────────────────┴─> summary
//! ```
//!
//! Stages receive exactly the upstream results they read as arguments and
//! hold no state, so the same input always yields the same [`Scenario`].

use crate::error::{ScenarioError, Warning};
use crate::input::ScenarioInput;
use crate::money::{compute_money, MoneyResult};
use crate::people::{compute_people, PeopleResult};
use crate::qa::{compute_qa, QaResult};
use crate::summary::{compute_summary, Summary};
use crate::time::{compute_time, TimeResult};
use crate::timeline::{compute_timeline, TimelineResult};
use crate::volume::{compute_volume, VolumeResult};
use serde::{Deserialize, Serialize};

/// Engine policy knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Let a negative category C remainder propagate through every stage
    /// instead of rejecting the input.
    pub allow_negative_remainder: bool,
}

/// Fully derived scenario: the input snapshot and every stage result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub input: ScenarioInput,
    pub volume: VolumeResult,
    pub time: TimeResult,
    pub people: PeopleResult,
    pub qa: QaResult,
    pub money: MoneyResult,
    pub timeline: TimelineResult,
    pub summary: Summary,
    pub warnings: Vec<Warning>,
}

/// Derive a complete [`Scenario`] from `input`.
///
/// Either every stage is derived or an error is returned; no partial
/// result ever escapes.
pub fn compute_scenario(input: &ScenarioInput, config: &EngineConfig) -> Result<Scenario, ScenarioError> {
    input.validate()?;

    let mut warnings = Vec::new();

    let volume = compute_volume(input);
    if volume.mix_overflow {
        tracing::warn!(
            pct_a = volume.pct_a,
            pct_b = volume.pct_b,
            "category mix exceeds 100%, showing C as 0%"
        );
        warnings.push(Warning::CategoryMixOverflow {
            pct_a: volume.pct_a,
            pct_b: volume.pct_b,
        });
    }
    let target_c = volume.categories.c.target;
    if target_c < 0 && !config.allow_negative_remainder {
        return Err(ScenarioError::NegativeRemainder {
            pct_a: volume.pct_a,
            pct_b: volume.pct_b,
            target_c,
        });
    }

    let num_evals = input.llm.resolved_num_evals(volume.total_required);

    let time = compute_time(&volume, input);
    let people = compute_people(&volume, &time, input);
    let qa = compute_qa(&volume, &time, input);
    let money = compute_money(&volume, &time, &people, input, num_evals);
    let timeline = compute_timeline(input);
    let summary = compute_summary(&volume, &people, &money, &timeline, &time);

    tracing::debug!(
        total_cost = %summary.total_cost,
        total_required = summary.total_required,
        total_days = summary.total_days,
        warnings = warnings.len(),
        "scenario derived"
    );

    Ok(Scenario {
        input: input.clone(),
        volume,
        time,
        people,
        qa,
        money,
        timeline,
        summary,
        warnings,
    })
}

/// Shorthand for [`compute_scenario`] with the default policy.
pub fn compute(input: &ScenarioInput) -> Result<Scenario, ScenarioError> {
    compute_scenario(input, &EngineConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Usd;
    use rust_decimal_macros::dec;

    #[test]
    fn default_scenario_summary() {
        let scenario = compute(&ScenarioInput::default()).expect("test: defaults derive");
        let s = &scenario.summary;
        assert_eq!(s.total_required, 131);
        assert_eq!(s.workers_to_invite, 76);
        assert_eq!(s.total_days, 12);
        assert_eq!(s.total_annotation_time, 4560);
        assert_eq!(s.annotation_hours, 76.0);
        assert_eq!(s.total_cost, Usd(dec!(2973.6764)));
        assert!(scenario.warnings.is_empty());
    }

    #[test]
    fn invalid_input_is_rejected_before_any_stage() {
        let mut input = ScenarioInput::default();
        input.people.invite_take_rate = 0.0;
        let err = compute(&input).expect_err("test: zero rate");
        assert!(matches!(err, ScenarioError::InvalidInput { field: "people.invite_take_rate", .. }));
    }

    #[test]
    fn negative_remainder_rejected_by_default() {
        let mut input = ScenarioInput::default();
        input.volume.pct_a = 60.0;
        input.volume.pct_b = 50.0;
        let err = compute(&input).expect_err("test: negative C");
        assert_eq!(
            err,
            ScenarioError::NegativeRemainder { pct_a: 60.0, pct_b: 50.0, target_c: -10 }
        );
    }

    #[test]
    fn negative_remainder_propagates_when_allowed() {
        let mut input = ScenarioInput::default();
        input.volume.pct_a = 60.0;
        input.volume.pct_b = 50.0;
        let config = EngineConfig { allow_negative_remainder: true };
        let scenario = compute_scenario(&input, &config).expect("test: lenient policy");
        assert_eq!(scenario.volume.categories.c.target, -10);
        assert_eq!(scenario.volume.categories.c.required, -15);
        assert_eq!(scenario.time.category_minutes.c, -900);
        assert_eq!(
            scenario.warnings,
            vec![Warning::CategoryMixOverflow { pct_a: 60.0, pct_b: 50.0 }]
        );
    }

    #[test]
    fn overflow_without_negative_remainder_only_warns() {
        // 105% of 10: A = 6, B = round(4.5) = 4, so C stays at 0
        let mut input = ScenarioInput::default();
        input.volume.total_deliverable = 10;
        input.volume.pct_a = 60.0;
        input.volume.pct_b = 45.0;
        let scenario = compute(&input).expect("test: C rounds to zero");
        assert_eq!(scenario.volume.categories.c.target, 0);
        assert_eq!(scenario.warnings.len(), 1);
    }

    #[test]
    fn recompute_is_idempotent() {
        let input = ScenarioInput::default();
        let first = compute(&input).expect("test: first");
        let second = compute(&input).expect("test: second");
        assert_eq!(first, second);
        let a = serde_json::to_string(&first).expect("test: serialize");
        let b = serde_json::to_string(&second).expect("test: serialize");
        assert_eq!(a, b);
    }
}
