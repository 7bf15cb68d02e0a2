// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Volume Stage

use crate::input::ScenarioInput;
use crate::rounding::{ceil_count, round_half_even};
use crate::types::{Category, PerCategory};
use serde::{Deserialize, Serialize};

/// Target, failure rate and required count for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryVolume {
    pub category: Category,
    pub target: i64,
    pub failure_rate: f64,
    pub required: i64,
    /// Extra submissions produced to absorb expected failures.
    pub buffer: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeResult {
    pub total_deliverable: i64,
    pub pct_a: f64,
    pub pct_b: f64,
    /// Display share of category C, clamped to 0 when A + B exceeds 100.
    pub pct_c: f64,
    /// Set when A% + B% exceeds 100.
    pub mix_overflow: bool,
    pub categories: PerCategory<CategoryVolume>,
    pub total_required: i64,
    pub total_buffer: i64,
}

impl VolumeResult {
    pub fn targets(&self) -> PerCategory<i64> {
        self.categories.map(|_, c| c.target)
    }

    pub fn required(&self) -> PerCategory<i64> {
        self.categories.map(|_, c| c.required)
    }
}

/// Submissions that must be produced so that `target` survive `failure_rate`%.
///
/// At a 100% failure rate the divisor vanishes and the target is returned.
pub fn required_count(target: i64, failure_rate: f64) -> i64 {
    if failure_rate < 100.0 {
        ceil_count(target as f64 / (1.0 - failure_rate / 100.0))
    } else {
        target
    }
}

/// Split the deliverable total across categories and inflate each by its
/// failure rate.
///
/// Category C takes the remainder so the three targets always sum to the
/// deliverable total; it goes negative if A% + B% overshoots.
pub fn compute_volume(input: &ScenarioInput) -> VolumeResult {
    let v = &input.volume;
    let total = v.total_deliverable as i64;

    let target_a = round_half_even(v.total_deliverable as f64 * v.pct_a / 100.0);
    let target_b = round_half_even(v.total_deliverable as f64 * v.pct_b / 100.0);
    let target_c = total - target_a - target_b;

    let raw_pct_c = 100.0 - v.pct_a - v.pct_b;
    let mix_overflow = raw_pct_c < 0.0;
    let pct_c = raw_pct_c.max(0.0);

    let targets = PerCategory::new(target_a, target_b, target_c);
    let failures = v.failure_rates();
    let categories = targets.map(|category, target| {
        let failure_rate = failures.get(category);
        let required = required_count(target, failure_rate);
        CategoryVolume {
            category,
            target,
            failure_rate,
            required,
            buffer: required - target,
        }
    });

    let total_required = categories.map(|_, c| c.required).total();

    tracing::debug!(
        target_a,
        target_b,
        target_c,
        total_required,
        mix_overflow,
        "volume stage derived"
    );

    VolumeResult {
        total_deliverable: total,
        pct_a: v.pct_a,
        pct_b: v.pct_b,
        pct_c,
        mix_overflow,
        categories,
        total_required,
        total_buffer: total_required - total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mix_targets_and_required() {
        let vol = compute_volume(&ScenarioInput::default());
        assert_eq!(vol.targets(), PerCategory::new(30, 50, 20));
        // 30/0.94, 50/0.74, 20/0.66 rounded up
        assert_eq!(vol.required(), PerCategory::new(32, 68, 31));
        assert_eq!(vol.total_required, 131);
        assert_eq!(vol.total_buffer, 31);
        assert_eq!(vol.categories.a.buffer, 2);
        assert_eq!(vol.pct_c, 20.0);
        assert!(!vol.mix_overflow);
    }

    #[test]
    fn remainder_absorbs_rounding() {
        let mut input = ScenarioInput::default();
        input.volume.total_deliverable = 15;
        input.volume.pct_a = 30.0; // 4.5 -> 4
        input.volume.pct_b = 50.0; // 7.5 -> 8
        let vol = compute_volume(&input);
        assert_eq!(vol.targets(), PerCategory::new(4, 8, 3));
        assert_eq!(vol.targets().total(), 15);
    }

    #[test]
    fn zero_failure_rate_requires_exactly_target() {
        assert_eq!(required_count(30, 0.0), 30);
        assert_eq!(required_count(0, 34.0), 0);
    }

    #[test]
    fn full_failure_rate_is_guarded() {
        assert_eq!(required_count(20, 100.0), 20);
    }

    #[test]
    fn overflowing_mix_clamps_display_and_keeps_remainder() {
        let mut input = ScenarioInput::default();
        input.volume.pct_a = 60.0;
        input.volume.pct_b = 50.0;
        let vol = compute_volume(&input);
        assert!(vol.mix_overflow);
        assert_eq!(vol.pct_c, 0.0);
        assert_eq!(vol.categories.c.target, -10);
        // ceil(-10 / 0.66) = ceil(-15.15) = -15
        assert_eq!(vol.categories.c.required, -15);
    }

    #[test]
    fn exact_hundred_is_not_overflow() {
        let mut input = ScenarioInput::default();
        input.volume.pct_a = 40.0;
        input.volume.pct_b = 60.0;
        let vol = compute_volume(&input);
        assert!(!vol.mix_overflow);
        assert_eq!(vol.categories.c.target, 0);
        assert_eq!(vol.categories.c.required, 0);
    }
}
