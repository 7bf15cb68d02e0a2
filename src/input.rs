// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Scenario Input

//! User-adjustable scenario parameters, grouped by the stage that reads them.
//!
//! A [`ScenarioInput`] is an immutable snapshot: edits produce a new value
//! (see [`crate::params`]) and the engine re-derives everything from it.
//! Every section deserializes with defaults for missing fields, so a
//! scenario file only needs to list the values it changes.

use crate::error::ScenarioError;
use crate::types::{PerCategory, Usd};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ─── Limits ──────────────────────────────────────────────────────────────────

/// Largest deliverable total accepted.
pub const MAX_SUBMISSIONS: u64 = 1_000_000;
/// Largest per-submission, qualification or review time, in minutes.
pub const MAX_MINUTES: u64 = 10_000;
/// Largest worker count in any pool.
pub const MAX_WORKERS: u64 = 100_000;
/// Largest day count for QA availability or a single timeline phase.
pub const MAX_DAYS: u64 = 10_000;
/// Largest token count for one LLM call.
pub const MAX_TOKENS: u64 = 10_000_000;
/// Largest evaluation count, and the ceiling for any derived count
/// (required submissions per category, invitations).
pub const MAX_DERIVED_COUNT: u64 = 1_000_000_000;
/// Largest dollar amount, hourly rate or per-million token price.
pub const MAX_AMOUNT: u64 = 1_000_000;
/// Largest budgeted reviewer hours.
pub const MAX_REVIEWER_HOURS: u64 = 100_000;
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

// ─── Sections ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeInput {
    pub total_deliverable: u64,
    /// Category A share of deliverables, percent.
    pub pct_a: f64,
    /// Category B share of deliverables, percent. C is the remainder.
    pub pct_b: f64,
    /// Per-category failure (rejection) rates, percent.
    pub fail_a: f64,
    pub fail_b: f64,
    pub fail_c: f64,
}

impl Default for VolumeInput {
    fn default() -> Self {
        Self {
            total_deliverable: 100,
            pct_a: 30.0,
            pct_b: 50.0,
            fail_a: 6.0,
            fail_b: 26.0,
            fail_c: 34.0,
        }
    }
}

impl VolumeInput {
    pub fn failure_rates(&self) -> PerCategory<f64> {
        PerCategory::new(self.fail_a, self.fail_b, self.fail_c)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeInput {
    /// Minutes per submission, by category.
    pub time_a: u64,
    pub time_b: u64,
    pub time_c: u64,
    /// Minutes per qualification test taken by an invited candidate.
    pub qualification_time: u64,
    /// Minutes of QA review per submission.
    pub qa_review_time: u64,
    pub hours_per_worker_day: f64,
}

impl Default for TimeInput {
    fn default() -> Self {
        Self {
            time_a: 10,
            time_b: 35,
            time_c: 60,
            qualification_time: 45,
            qa_review_time: 30,
            hours_per_worker_day: 2.0,
        }
    }
}

impl TimeInput {
    pub fn per_submission(&self) -> PerCategory<u64> {
        PerCategory::new(self.time_a, self.time_b, self.time_c)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeopleInput {
    pub target_active_workers: u64,
    pub cat_c_workers: u64,
    pub cat_b_only_workers: u64,
    /// Funnel conversion rates, percent in (0, 100].
    pub retention_rate: f64,
    pub pass_rate: f64,
    pub invite_take_rate: f64,
}

impl Default for PeopleInput {
    fn default() -> Self {
        Self {
            target_active_workers: 12,
            cat_c_workers: 8,
            cat_b_only_workers: 4,
            retention_rate: 80.0,
            pass_rate: 40.0,
            invite_take_rate: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QaInput {
    pub qa_days_available: u64,
}

impl Default for QaInput {
    fn default() -> Self {
        Self { qa_days_available: 7 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabourInput {
    pub worker_hourly_rate: Usd,
    pub reviewer_hourly_rate: Usd,
    /// Reviewer hours are budgeted directly, not derived from QA throughput.
    pub reviewer_hours: Decimal,
}

impl Default for LabourInput {
    fn default() -> Self {
        Self {
            worker_hourly_rate: Usd(dec!(20)),
            reviewer_hourly_rate: Usd(dec!(50)),
            reviewer_hours: dec!(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfraInput {
    pub filings: Usd,
    pub auto_check: Usd,
    pub database: Usd,
}

impl Default for InfraInput {
    fn default() -> Self {
        Self {
            filings: Usd::zero(),
            auto_check: Usd(dec!(20)),
            database: Usd(dec!(30)),
        }
    }
}

/// Tokens consumed by one LLM call of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenProfile {
    pub tokens_in: u64,
    pub tokens_out: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmInput {
    /// Dollars per million input tokens.
    pub price_input_per_m: Usd,
    /// Dollars per million output tokens.
    pub price_output_per_m: Usd,
    pub submission_without_context: TokenProfile,
    pub submission_with_context: TokenProfile,
    pub evaluation: TokenProfile,
    /// Number of evaluation calls. `None` follows `total_required`.
    pub num_evals: Option<u64>,
}

impl Default for LlmInput {
    fn default() -> Self {
        Self {
            price_input_per_m: Usd(dec!(2.0)),
            price_output_per_m: Usd(dec!(12.0)),
            submission_without_context: TokenProfile { tokens_in: 2_000, tokens_out: 100 },
            submission_with_context: TokenProfile { tokens_in: 50_000, tokens_out: 100 },
            evaluation: TokenProfile { tokens_in: 1_000, tokens_out: 100 },
            num_evals: None,
        }
    }
}

impl LlmInput {
    /// Evaluation count, falling back to the number of required submissions.
    pub fn resolved_num_evals(&self, total_required: i64) -> i64 {
        match self.num_evals {
            Some(n) => i64::try_from(n).unwrap_or(i64::MAX),
            None => total_required,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineInput {
    pub days_finding: u64,
    pub days_testing: u64,
    pub days_data: u64,
    pub days_meeting: u64,
    pub days_compiling: u64,
    pub days_buffer: u64,
}

impl Default for TimelineInput {
    fn default() -> Self {
        Self {
            days_finding: 1,
            days_testing: 1,
            days_data: 7,
            days_meeting: 1,
            days_compiling: 1,
            days_buffer: 1,
        }
    }
}

// ─── ScenarioInput ───────────────────────────────────────────────────────────

/// Complete set of user-adjustable parameters for one planning scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInput {
    pub volume: VolumeInput,
    pub time: TimeInput,
    pub people: PeopleInput,
    pub qa: QaInput,
    pub labour: LabourInput,
    pub infra: InfraInput,
    pub llm: LlmInput,
    pub timeline: TimelineInput,
}

impl ScenarioInput {
    /// Check every parameter against its domain.
    ///
    /// Host controls normally clamp values before they arrive, but the engine
    /// can be driven directly, so bounds are enforced here as well. The
    /// category mix overflow is not an error at this level; the volume stage
    /// reports it as a warning.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let v = &self.volume;
        check_count("volume.total_deliverable", v.total_deliverable, MAX_SUBMISSIONS)?;
        check_percent("volume.pct_a", v.pct_a)?;
        check_percent("volume.pct_b", v.pct_b)?;
        check_percent("volume.fail_a", v.fail_a)?;
        check_percent("volume.fail_b", v.fail_b)?;
        check_percent("volume.fail_c", v.fail_c)?;
        check_inflation("volume.fail_a", v.total_deliverable, v.fail_a)?;
        check_inflation("volume.fail_b", v.total_deliverable, v.fail_b)?;
        check_inflation("volume.fail_c", v.total_deliverable, v.fail_c)?;

        let t = &self.time;
        check_count("time.time_a", t.time_a, MAX_MINUTES)?;
        check_count("time.time_b", t.time_b, MAX_MINUTES)?;
        check_count("time.time_c", t.time_c, MAX_MINUTES)?;
        check_count("time.qualification_time", t.qualification_time, MAX_MINUTES)?;
        check_count("time.qa_review_time", t.qa_review_time, MAX_MINUTES)?;
        let h = t.hours_per_worker_day;
        if !h.is_finite() || h <= 0.0 || h > MAX_HOURS_PER_DAY {
            return Err(ScenarioError::invalid(
                "time.hours_per_worker_day",
                h,
                "must be a positive number of hours, at most 24",
            ));
        }

        let p = &self.people;
        check_count("people.target_active_workers", p.target_active_workers, MAX_WORKERS)?;
        check_count("people.cat_c_workers", p.cat_c_workers, MAX_WORKERS)?;
        check_count("people.cat_b_only_workers", p.cat_b_only_workers, MAX_WORKERS)?;
        check_rate("people.retention_rate", p.retention_rate)?;
        check_rate("people.pass_rate", p.pass_rate)?;
        check_rate("people.invite_take_rate", p.invite_take_rate)?;
        let invites = p.target_active_workers as f64
            / (p.retention_rate / 100.0)
            / (p.pass_rate / 100.0)
            / (p.invite_take_rate / 100.0);
        if invites > MAX_DERIVED_COUNT as f64 {
            return Err(ScenarioError::invalid(
                "people.target_active_workers",
                p.target_active_workers as f64,
                "funnel rates inflate invitations past the supported range",
            ));
        }

        check_count("qa.qa_days_available", self.qa.qa_days_available, MAX_DAYS)?;

        let l = &self.labour;
        check_usd("labour.worker_hourly_rate", l.worker_hourly_rate, MAX_AMOUNT)?;
        check_usd("labour.reviewer_hourly_rate", l.reviewer_hourly_rate, MAX_AMOUNT)?;
        check_usd("labour.reviewer_hours", Usd(l.reviewer_hours), MAX_REVIEWER_HOURS)?;
        check_usd("infra.filings", self.infra.filings, MAX_AMOUNT)?;
        check_usd("infra.auto_check", self.infra.auto_check, MAX_AMOUNT)?;
        check_usd("infra.database", self.infra.database, MAX_AMOUNT)?;

        let llm = &self.llm;
        check_usd("llm.price_input_per_m", llm.price_input_per_m, MAX_AMOUNT)?;
        check_usd("llm.price_output_per_m", llm.price_output_per_m, MAX_AMOUNT)?;
        check_tokens("llm.submission_without_context", llm.submission_without_context)?;
        check_tokens("llm.submission_with_context", llm.submission_with_context)?;
        check_tokens("llm.evaluation", llm.evaluation)?;
        if let Some(n) = llm.num_evals {
            check_count("llm.num_evals", n, MAX_DERIVED_COUNT)?;
        }

        let d = &self.timeline;
        check_count("timeline.days_finding", d.days_finding, MAX_DAYS)?;
        check_count("timeline.days_testing", d.days_testing, MAX_DAYS)?;
        check_count("timeline.days_data", d.days_data, MAX_DAYS)?;
        check_count("timeline.days_meeting", d.days_meeting, MAX_DAYS)?;
        check_count("timeline.days_compiling", d.days_compiling, MAX_DAYS)?;
        check_count("timeline.days_buffer", d.days_buffer, MAX_DAYS)?;

        Ok(())
    }

    /// Parse a scenario from TOML text. Missing fields take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        toml::from_str(text).map_err(|e| ScenarioError::Config {
            source_name: "<toml>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a scenario from JSON text. Missing fields take defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ScenarioError> {
        serde_json::from_str(text).map_err(|e| ScenarioError::Config {
            source_name: "<json>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a scenario file; `.json` is read as JSON, anything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ScenarioError::Config {
            source_name: source_name.clone(),
            message: e.to_string(),
        })?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        parsed.map_err(|e| match e {
            ScenarioError::Config { message, .. } => ScenarioError::Config { source_name, message },
            other => other,
        })
    }
}

fn check_percent(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ScenarioError::invalid(field, value, "must be a percentage in [0, 100]"))
    }
}

/// Funnel rates divide the upstream need, so zero is out of domain.
fn check_rate(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() && value > 0.0 && value <= 100.0 {
        Ok(())
    } else {
        Err(ScenarioError::invalid(field, value, "must be a conversion rate in (0, 100]"))
    }
}

fn check_count(field: &'static str, value: u64, max: u64) -> Result<(), ScenarioError> {
    if value > max {
        Err(ScenarioError::invalid(field, value as f64, "above the supported maximum"))
    } else {
        Ok(())
    }
}

/// The worst-case category target is the whole deliverable total, so bound
/// `total / (1 - fail%)` before any stage runs.
fn check_inflation(field: &'static str, total: u64, failure_rate: f64) -> Result<(), ScenarioError> {
    if failure_rate >= 100.0 {
        return Ok(());
    }
    let inflated = total as f64 / (1.0 - failure_rate / 100.0);
    if inflated > MAX_DERIVED_COUNT as f64 {
        Err(ScenarioError::invalid(
            field,
            failure_rate,
            "inflates required submissions past the supported range",
        ))
    } else {
        Ok(())
    }
}

fn check_tokens(section: &'static str, profile: TokenProfile) -> Result<(), ScenarioError> {
    if profile.tokens_in > MAX_TOKENS || profile.tokens_out > MAX_TOKENS {
        let worst = profile.tokens_in.max(profile.tokens_out);
        Err(ScenarioError::invalid(section, worst as f64, "token count above the supported maximum"))
    } else {
        Ok(())
    }
}

fn check_usd(field: &'static str, value: Usd, max: u64) -> Result<(), ScenarioError> {
    let shown = crate::rounding::from_decimal(value.0);
    if value.0.is_sign_negative() && !value.0.is_zero() {
        Err(ScenarioError::invalid(field, shown, "must not be negative"))
    } else if value.0 > Decimal::from(max) {
        Err(ScenarioError::invalid(field, shown, "above the supported maximum"))
    } else {
        Ok(())
    }
}
