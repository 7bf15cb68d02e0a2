// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Parameter Catalogue

//! Flat, named view of every [`ScenarioInput`] field.
//!
//! Each parameter carries the default, step and bounds a host control
//! should use. Edits by key go through [`ScenarioInput::with_param`], which
//! enforces the catalogue bounds and returns a fresh snapshot.

use crate::error::ScenarioError;
use crate::input::{
    ScenarioInput, MAX_AMOUNT, MAX_DAYS, MAX_DERIVED_COUNT, MAX_HOURS_PER_DAY, MAX_MINUTES, MAX_REVIEWER_HOURS,
    MAX_SUBMISSIONS, MAX_TOKENS, MAX_WORKERS,
};
use crate::rounding::{from_decimal, to_decimal};
use crate::types::Usd;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Volume,
    Time,
    People,
    Qa,
    Labour,
    Infra,
    Llm,
    Timeline,
}

/// How a host should present the value.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Count,
    Percent,
    Minutes,
    Hours,
    Days,
    Money,
    Tokens,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ParamSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: ParamKind,
    /// `None` for parameters whose default follows a derived value.
    pub default: Option<f64>,
    pub step: f64,
    pub min: f64,
    pub max: Option<f64>,
}

impl ParamSpec {
    fn check_bounds(&self, value: f64) -> Result<(), ScenarioError> {
        if !value.is_finite() {
            return Err(ScenarioError::invalid(self.key, value, "must be a finite number"));
        }
        if value < self.min {
            return Err(ScenarioError::invalid(self.key, value, "below the parameter minimum"));
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(ScenarioError::invalid(self.key, value, "above the parameter maximum"));
            }
        }
        Ok(())
    }
}

const fn param(
    key: &'static str,
    label: &'static str,
    section: Section,
    kind: ParamKind,
    default: f64,
    step: f64,
    min: f64,
    max: Option<f64>,
) -> ParamSpec {
    ParamSpec { key, label, section, kind, default: Some(default), step, min, max }
}

use ParamKind::*;
use Section::*;

static PARAMS: &[ParamSpec] = &[
    param("volume.total_deliverable", "Total deliverable submissions", Volume, Count, 100.0, 10.0, 1.0, Some(MAX_SUBMISSIONS as f64)),
    param("volume.pct_a", "Category A %", Volume, Percent, 30.0, 5.0, 0.0, Some(100.0)),
    param("volume.pct_b", "Category B %", Volume, Percent, 50.0, 5.0, 0.0, Some(100.0)),
    param("volume.fail_a", "Cat A failure rate %", Volume, Percent, 6.0, 1.0, 0.0, Some(100.0)),
    param("volume.fail_b", "Cat B failure rate %", Volume, Percent, 26.0, 1.0, 0.0, Some(100.0)),
    param("volume.fail_c", "Cat C failure rate %", Volume, Percent, 34.0, 1.0, 0.0, Some(100.0)),
    param("time.time_a", "Cat A (min)", Time, Minutes, 10.0, 5.0, 1.0, Some(MAX_MINUTES as f64)),
    param("time.time_b", "Cat B (min)", Time, Minutes, 35.0, 5.0, 1.0, Some(MAX_MINUTES as f64)),
    param("time.time_c", "Cat C (min)", Time, Minutes, 60.0, 5.0, 1.0, Some(MAX_MINUTES as f64)),
    param("time.qualification_time", "Qualification test time (min)", Time, Minutes, 45.0, 5.0, 1.0, Some(MAX_MINUTES as f64)),
    param("time.qa_review_time", "QA review time per submission (min)", Time, Minutes, 30.0, 5.0, 1.0, Some(MAX_MINUTES as f64)),
    param("time.hours_per_worker_day", "Work hours per worker per day", Time, Hours, 2.0, 0.5, 0.5, Some(MAX_HOURS_PER_DAY)),
    param("people.target_active_workers", "Target active workers", People, Count, 12.0, 1.0, 1.0, Some(MAX_WORKERS as f64)),
    param("people.cat_c_workers", "Cat C-qualified workers", People, Count, 8.0, 1.0, 0.0, Some(MAX_WORKERS as f64)),
    param("people.cat_b_only_workers", "Cat B-only workers", People, Count, 4.0, 1.0, 0.0, Some(MAX_WORKERS as f64)),
    param("people.retention_rate", "Worker retention rate %", People, Percent, 80.0, 5.0, 10.0, Some(100.0)),
    param("people.pass_rate", "Qualification pass rate %", People, Percent, 40.0, 5.0, 10.0, Some(100.0)),
    param("people.invite_take_rate", "Invite take rate %", People, Percent, 50.0, 5.0, 10.0, Some(100.0)),
    param("qa.qa_days_available", "Days available for QA", Qa, Days, 7.0, 1.0, 1.0, Some(MAX_DAYS as f64)),
    param("labour.worker_hourly_rate", "Worker hourly rate ($)", Labour, Money, 20.0, 1.0, 1.0, Some(MAX_AMOUNT as f64)),
    param("labour.reviewer_hourly_rate", "Reviewer hourly rate ($)", Labour, Money, 50.0, 5.0, 1.0, Some(MAX_AMOUNT as f64)),
    param("labour.reviewer_hours", "Total reviewer hours", Labour, Hours, 5.0, 1.0, 0.0, Some(MAX_REVIEWER_HOURS as f64)),
    param("infra.filings", "Filings ($)", Infra, Money, 0.0, 5.0, 0.0, Some(MAX_AMOUNT as f64)),
    param("infra.auto_check", "Automated checking ($)", Infra, Money, 20.0, 5.0, 0.0, Some(MAX_AMOUNT as f64)),
    param("infra.database", "Database ($)", Infra, Money, 30.0, 5.0, 0.0, Some(MAX_AMOUNT as f64)),
    param("llm.price_input_per_m", "Input token price ($/M)", Llm, Money, 2.0, 0.5, 0.0, Some(MAX_AMOUNT as f64)),
    param("llm.price_output_per_m", "Output token price ($/M)", Llm, Money, 12.0, 1.0, 0.0, Some(MAX_AMOUNT as f64)),
    param(
        "llm.submission_without_context.tokens_in",
        "Input tokens / question (without context)",
        Llm, Tokens, 2000.0, 500.0, 0.0, Some(MAX_TOKENS as f64),
    ),
    param(
        "llm.submission_without_context.tokens_out",
        "Output tokens / question (without context)",
        Llm, Tokens, 100.0, 50.0, 0.0, Some(MAX_TOKENS as f64),
    ),
    param(
        "llm.submission_with_context.tokens_in",
        "Input tokens / question (with context)",
        Llm, Tokens, 50000.0, 5000.0, 0.0, Some(MAX_TOKENS as f64),
    ),
    param(
        "llm.submission_with_context.tokens_out",
        "Output tokens / question (with context)",
        Llm, Tokens, 100.0, 50.0, 0.0, Some(MAX_TOKENS as f64),
    ),
    param("llm.evaluation.tokens_in", "Input tokens / eval", Llm, Tokens, 1000.0, 500.0, 0.0, Some(MAX_TOKENS as f64)),
    param("llm.evaluation.tokens_out", "Output tokens / eval", Llm, Tokens, 100.0, 50.0, 0.0, Some(MAX_TOKENS as f64)),
    ParamSpec {
        key: "llm.num_evals",
        label: "Number of evaluations",
        section: Llm,
        kind: Count,
        default: None,
        step: 1.0,
        min: 0.0,
        max: Some(MAX_DERIVED_COUNT as f64),
    },
    param("timeline.days_finding", "Finding people (days)", Timeline, Days, 1.0, 1.0, 0.0, Some(MAX_DAYS as f64)),
    param("timeline.days_testing", "Testing (days)", Timeline, Days, 1.0, 1.0, 0.0, Some(MAX_DAYS as f64)),
    param("timeline.days_data", "Data creation + checking (days)", Timeline, Days, 7.0, 1.0, 1.0, Some(MAX_DAYS as f64)),
    param("timeline.days_meeting", "Customer meeting (days)", Timeline, Days, 1.0, 1.0, 0.0, Some(MAX_DAYS as f64)),
    param("timeline.days_compiling", "Compiling & final check (days)", Timeline, Days, 1.0, 1.0, 0.0, Some(MAX_DAYS as f64)),
    param("timeline.days_buffer", "Buffer (days)", Timeline, Days, 1.0, 1.0, 0.0, Some(MAX_DAYS as f64)),
];

/// Every parameter, grouped by section in display order.
pub fn parameters() -> &'static [ParamSpec] {
    PARAMS
}

pub fn find(key: &str) -> Option<&'static ParamSpec> {
    PARAMS.iter().find(|p| p.key == key)
}

// ─── Field slots ─────────────────────────────────────────────────────────────

enum SlotRef<'a> {
    Count(&'a u64),
    Real(&'a f64),
    Usd(&'a Usd),
    Amount(&'a Decimal),
    Linked(&'a Option<u64>),
}

enum SlotMut<'a> {
    Count(&'a mut u64),
    Real(&'a mut f64),
    Usd(&'a mut Usd),
    Amount(&'a mut Decimal),
    Linked(&'a mut Option<u64>),
}

macro_rules! slots {
    ($($key:literal => $kind:ident($($field:ident).+)),* $(,)?) => {
        fn slot_ref<'a>(input: &'a ScenarioInput, key: &str) -> Option<SlotRef<'a>> {
            match key {
                $($key => Some(SlotRef::$kind(&input.$($field).+)),)*
                _ => None,
            }
        }

        fn slot_mut<'a>(input: &'a mut ScenarioInput, key: &str) -> Option<SlotMut<'a>> {
            match key {
                $($key => Some(SlotMut::$kind(&mut input.$($field).+)),)*
                _ => None,
            }
        }
    };
}

slots! {
    "volume.total_deliverable" => Count(volume.total_deliverable),
    "volume.pct_a" => Real(volume.pct_a),
    "volume.pct_b" => Real(volume.pct_b),
    "volume.fail_a" => Real(volume.fail_a),
    "volume.fail_b" => Real(volume.fail_b),
    "volume.fail_c" => Real(volume.fail_c),
    "time.time_a" => Count(time.time_a),
    "time.time_b" => Count(time.time_b),
    "time.time_c" => Count(time.time_c),
    "time.qualification_time" => Count(time.qualification_time),
    "time.qa_review_time" => Count(time.qa_review_time),
    "time.hours_per_worker_day" => Real(time.hours_per_worker_day),
    "people.target_active_workers" => Count(people.target_active_workers),
    "people.cat_c_workers" => Count(people.cat_c_workers),
    "people.cat_b_only_workers" => Count(people.cat_b_only_workers),
    "people.retention_rate" => Real(people.retention_rate),
    "people.pass_rate" => Real(people.pass_rate),
    "people.invite_take_rate" => Real(people.invite_take_rate),
    "qa.qa_days_available" => Count(qa.qa_days_available),
    "labour.worker_hourly_rate" => Usd(labour.worker_hourly_rate),
    "labour.reviewer_hourly_rate" => Usd(labour.reviewer_hourly_rate),
    "labour.reviewer_hours" => Amount(labour.reviewer_hours),
    "infra.filings" => Usd(infra.filings),
    "infra.auto_check" => Usd(infra.auto_check),
    "infra.database" => Usd(infra.database),
    "llm.price_input_per_m" => Usd(llm.price_input_per_m),
    "llm.price_output_per_m" => Usd(llm.price_output_per_m),
    "llm.submission_without_context.tokens_in" => Count(llm.submission_without_context.tokens_in),
    "llm.submission_without_context.tokens_out" => Count(llm.submission_without_context.tokens_out),
    "llm.submission_with_context.tokens_in" => Count(llm.submission_with_context.tokens_in),
    "llm.submission_with_context.tokens_out" => Count(llm.submission_with_context.tokens_out),
    "llm.evaluation.tokens_in" => Count(llm.evaluation.tokens_in),
    "llm.evaluation.tokens_out" => Count(llm.evaluation.tokens_out),
    "llm.num_evals" => Linked(llm.num_evals),
    "timeline.days_finding" => Count(timeline.days_finding),
    "timeline.days_testing" => Count(timeline.days_testing),
    "timeline.days_data" => Count(timeline.days_data),
    "timeline.days_meeting" => Count(timeline.days_meeting),
    "timeline.days_compiling" => Count(timeline.days_compiling),
    "timeline.days_buffer" => Count(timeline.days_buffer),
}

fn to_count(key: &'static str, value: f64) -> Result<u64, ScenarioError> {
    if value.fract() != 0.0 || value < 0.0 || value >= u64::MAX as f64 {
        return Err(ScenarioError::invalid(key, value, "must be a whole number"));
    }
    Ok(value as u64)
}

fn to_amount(key: &'static str, value: f64) -> Result<Decimal, ScenarioError> {
    to_decimal(value).ok_or_else(|| ScenarioError::invalid(key, value, "not representable as a decimal amount"))
}

// ─── Keyed access ────────────────────────────────────────────────────────────

impl ScenarioInput {
    /// Current value of a parameter. `Ok(None)` means a linked parameter
    /// that follows its derived default.
    pub fn get(&self, key: &str) -> Result<Option<f64>, ScenarioError> {
        let slot = slot_ref(self, key).ok_or_else(|| ScenarioError::UnknownParameter(key.to_string()))?;
        Ok(match slot {
            SlotRef::Count(v) => Some(*v as f64),
            SlotRef::Real(v) => Some(*v),
            SlotRef::Usd(v) => Some(from_decimal(v.0)),
            SlotRef::Amount(v) => Some(from_decimal(*v)),
            SlotRef::Linked(v) => v.map(|n| n as f64),
        })
    }

    /// Return a new snapshot with one parameter changed.
    ///
    /// The value is checked against the catalogue bounds and converted to the
    /// field's type; `self` is left untouched on error.
    pub fn with_param(&self, key: &str, value: f64) -> Result<ScenarioInput, ScenarioError> {
        let entry = find(key).ok_or_else(|| ScenarioError::UnknownParameter(key.to_string()))?;
        entry.check_bounds(value)?;

        let mut next = self.clone();
        let slot = slot_mut(&mut next, key).ok_or_else(|| ScenarioError::UnknownParameter(key.to_string()))?;
        match slot {
            SlotMut::Count(v) => *v = to_count(entry.key, value)?,
            SlotMut::Real(v) => *v = value,
            SlotMut::Usd(v) => *v = Usd(to_amount(entry.key, value)?),
            SlotMut::Amount(v) => *v = to_amount(entry.key, value)?,
            SlotMut::Linked(v) => *v = Some(to_count(entry.key, value)?),
        }
        Ok(next)
    }

    /// Return a new snapshot where `num_evals` follows `total_required` again.
    pub fn clear_num_evals(&self) -> ScenarioInput {
        let mut next = self.clone();
        next.llm.num_evals = None;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn every_catalogue_key_maps_to_a_field() {
        let input = ScenarioInput::default();
        for p in parameters() {
            assert!(input.get(p.key).is_ok(), "{} has no field", p.key);
        }
    }

    #[test]
    fn catalogue_defaults_match_input_defaults() {
        let input = ScenarioInput::default();
        for p in parameters() {
            let current = input.get(p.key).expect("test: known key");
            assert_eq!(current, p.default, "default mismatch for {}", p.key);
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = parameters().iter().map(|p| p.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), parameters().len());
    }

    #[test]
    fn with_param_returns_new_snapshot() {
        let input = ScenarioInput::default();
        let next = input.with_param("volume.pct_a", 35.0).expect("test: valid edit");
        assert_eq!(next.volume.pct_a, 35.0);
        assert_eq!(input.volume.pct_a, 30.0);
    }

    #[test]
    fn with_param_converts_field_types() {
        let input = ScenarioInput::default()
            .with_param("labour.worker_hourly_rate", 22.5)
            .and_then(|i| i.with_param("labour.reviewer_hours", 7.5))
            .and_then(|i| i.with_param("time.time_b", 40.0))
            .and_then(|i| i.with_param("llm.num_evals", 50.0))
            .expect("test: valid edits");
        assert_eq!(input.labour.worker_hourly_rate, Usd(dec!(22.5)));
        assert_eq!(input.labour.reviewer_hours, dec!(7.5));
        assert_eq!(input.time.time_b, 40);
        assert_eq!(input.llm.num_evals, Some(50));
        assert_eq!(input.clear_num_evals().llm.num_evals, None);
    }

    #[test]
    fn with_param_enforces_bounds() {
        let input = ScenarioInput::default();
        assert!(input.with_param("people.pass_rate", 5.0).is_err());
        assert!(input.with_param("volume.pct_b", 100.5).is_err());
        assert!(input.with_param("time.hours_per_worker_day", 0.0).is_err());
        assert!(input.with_param("volume.total_deliverable", f64::INFINITY).is_err());
    }

    #[test]
    fn every_parameter_has_an_upper_bound() {
        for p in parameters() {
            let max = p.max.expect("test: bounded parameter");
            assert!(ScenarioInput::default().with_param(p.key, max).is_ok(), "{} rejects its own max", p.key);
        }
    }

    #[test]
    fn counts_past_u64_range_are_rejected() {
        assert!(to_count("llm.num_evals", u64::MAX as f64).is_err());
        assert!(to_count("llm.num_evals", 1e20).is_err());
        assert_eq!(to_count("llm.num_evals", 40.0), Ok(40));
    }

    #[test]
    fn counts_must_be_whole() {
        let err = ScenarioInput::default()
            .with_param("people.cat_c_workers", 2.5)
            .expect_err("test: fractional worker count");
        assert!(matches!(err, ScenarioError::InvalidInput { field: "people.cat_c_workers", .. }));
    }

    #[test]
    fn unknown_key_is_reported() {
        let input = ScenarioInput::default();
        assert_eq!(
            input.with_param("volume.pct_d", 1.0),
            Err(ScenarioError::UnknownParameter("volume.pct_d".to_string()))
        );
        assert!(input.get("nope").is_err());
    }
}
