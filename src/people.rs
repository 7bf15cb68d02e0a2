// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - People Stage

//! Recruitment funnel and per-worker workload.
//!
//! The funnel works backwards from the number of active workers needed:
//! each conversion step (retention, qualification pass, invite take-up)
//! inflates the upstream requirement by the inverse of its rate, rounding
//! up at every step.
//!
//! Workload is split across two worker types. C-qualified workers take a
//! population-proportional share of A and B plus an equal share of all C.
//! B-only workers take their proportional share of A and whatever B is left
//! after the C-qualified share is rounded out, so B volume is never
//! allocated twice.

use crate::input::ScenarioInput;
use crate::rounding::{ceil_count, round_half_even, round_tenths, DAYS_EPSILON};
use crate::time::TimeResult;
use crate::types::PerCategory;
use crate::volume::VolumeResult;
use serde::{Deserialize, Serialize};

// ─── Funnel ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelResult {
    pub target_active: i64,
    pub retention_rate: f64,
    pub pass_rate: f64,
    pub invite_take_rate: f64,
    /// Qualified workers needed before retention losses.
    pub before_retention: i64,
    /// Candidates needed to sit the qualification test.
    pub before_pass: i64,
    /// Invitations to send.
    pub to_invite: i64,
}

/// Inflate `needed` by a conversion rate given in percent, rounding up.
pub fn funnel_step(needed: i64, rate_pct: f64) -> i64 {
    ceil_count(needed as f64 / (rate_pct / 100.0))
}

pub fn compute_funnel(input: &ScenarioInput) -> FunnelResult {
    let p = &input.people;
    let target_active = p.target_active_workers as i64;
    let before_retention = funnel_step(target_active, p.retention_rate);
    let before_pass = funnel_step(before_retention, p.pass_rate);
    let to_invite = funnel_step(before_pass, p.invite_take_rate);
    FunnelResult {
        target_active,
        retention_rate: p.retention_rate,
        pass_rate: p.pass_rate,
        invite_take_rate: p.invite_take_rate,
        before_retention,
        before_pass,
        to_invite,
    }
}

// ─── Workload ────────────────────────────────────────────────────────────────

/// Per-worker allocation for one worker type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerLoad {
    pub workers: i64,
    /// Submissions per worker, rounded to tenths.
    pub subs: PerCategory<f64>,
    pub minutes: f64,
    pub days: f64,
    /// Aggregate throughput of this worker type.
    pub subs_per_day: f64,
}

impl WorkerLoad {
    fn idle() -> Self {
        Self::default()
    }

    fn new(workers: i64, subs: PerCategory<f64>, per_sub: PerCategory<i64>, hours_per_day: f64) -> Self {
        let minutes = subs.a * per_sub.a as f64 + subs.b * per_sub.b as f64 + subs.c * per_sub.c as f64;
        let days = minutes / (hours_per_day * 60.0);
        let subs_per_day = ((subs.a + subs.b + subs.c) / days.max(DAYS_EPSILON)) * workers as f64;
        Self {
            workers,
            subs,
            minutes,
            days,
            subs_per_day,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.workers == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeopleResult {
    pub funnel: FunnelResult,
    pub total_workers: i64,
    pub c_qualified: WorkerLoad,
    pub b_only: WorkerLoad,
    /// B volume left for B-only workers after the C-qualified share.
    pub leftover_b: i64,
    pub total_subs_per_day: f64,
}

impl PeopleResult {
    pub fn workers_to_invite(&self) -> i64 {
        self.funnel.to_invite
    }
}

pub fn compute_people(volume: &VolumeResult, time: &TimeResult, input: &ScenarioInput) -> PeopleResult {
    let funnel = compute_funnel(input);

    let c_workers = input.people.cat_c_workers as i64;
    let b_workers = input.people.cat_b_only_workers as i64;
    let total_workers = c_workers + b_workers;
    let pool = total_workers.max(1) as f64;
    let hours_per_day = input.time.hours_per_worker_day;
    let required = volume.required();
    let per_sub = time.per_submission;

    let c_qualified = if c_workers > 0 {
        let cw = c_workers as f64;
        let subs = PerCategory::new(
            round_tenths(required.a as f64 * (cw / pool) / cw),
            round_tenths(required.b as f64 * (cw / pool) / cw),
            round_tenths(required.c as f64 / cw),
        );
        WorkerLoad::new(c_workers, subs, per_sub, hours_per_day)
    } else {
        WorkerLoad::idle()
    };

    let (b_only, leftover_b) = if b_workers > 0 {
        let bw = b_workers as f64;
        let c_share_of_b = round_half_even((required.b * c_workers) as f64 / pool);
        let leftover_b = required.b - c_share_of_b;
        let subs = PerCategory::new(
            round_tenths(required.a as f64 * (bw / pool) / bw),
            round_tenths(leftover_b as f64 / bw),
            0.0,
        );
        (WorkerLoad::new(b_workers, subs, per_sub, hours_per_day), leftover_b)
    } else {
        (WorkerLoad::idle(), 0)
    };

    let total_subs_per_day = c_qualified.subs_per_day + b_only.subs_per_day;

    tracing::debug!(
        to_invite = funnel.to_invite,
        total_workers,
        c_days = c_qualified.days,
        b_days = b_only.days,
        total_subs_per_day,
        "people stage derived"
    );

    PeopleResult {
        funnel,
        total_workers,
        c_qualified,
        b_only,
        leftover_b,
        total_subs_per_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::compute_time;
    use crate::volume::compute_volume;

    fn derive(input: &ScenarioInput) -> PeopleResult {
        let volume = compute_volume(input);
        let time = compute_time(&volume, input);
        compute_people(&volume, &time, input)
    }

    #[test]
    fn funnel_inflates_at_each_step() {
        let funnel = compute_funnel(&ScenarioInput::default());
        assert_eq!(funnel.before_retention, 15); // ceil(12 / 0.8)
        assert_eq!(funnel.before_pass, 38); // ceil(15 / 0.4)
        assert_eq!(funnel.to_invite, 76); // ceil(38 / 0.5)
    }

    #[test]
    fn full_rates_leave_funnel_flat() {
        let mut input = ScenarioInput::default();
        input.people.retention_rate = 100.0;
        input.people.pass_rate = 100.0;
        input.people.invite_take_rate = 100.0;
        let funnel = compute_funnel(&input);
        assert_eq!(funnel.to_invite, 12);
        assert_eq!(funnel.before_pass, 12);
    }

    #[test]
    fn default_workload_split() {
        let people = derive(&ScenarioInput::default());
        let c = people.c_qualified;
        assert_eq!(c.subs, PerCategory::new(2.7, 5.7, 3.9));
        assert_eq!(c.minutes, 460.5);
        assert!((c.days - 3.8375).abs() < 1e-12);

        let b = people.b_only;
        assert_eq!(people.leftover_b, 23); // 68 - round(68 * 8 / 12)
        assert_eq!(b.subs, PerCategory::new(2.7, 5.8, 0.0));
        assert_eq!(b.minutes, 230.0);

        assert!((people.total_subs_per_day - 43.3808).abs() < 1e-3);
        assert_eq!(people.total_workers, 12);
    }

    #[test]
    fn no_c_workers_is_safe() {
        let mut input = ScenarioInput::default();
        input.people.cat_c_workers = 0;
        let people = derive(&input);
        assert!(people.c_qualified.is_idle());
        assert_eq!(people.c_qualified, WorkerLoad::default());
        // B-only workers now carry all of B
        assert_eq!(people.leftover_b, 68);
        assert_eq!(people.b_only.subs.b, 17.0);
        assert!(people.total_subs_per_day.is_finite());
    }

    #[test]
    fn no_b_only_workers_is_safe() {
        let mut input = ScenarioInput::default();
        input.people.cat_b_only_workers = 0;
        let people = derive(&input);
        assert!(people.b_only.is_idle());
        assert_eq!(people.leftover_b, 0);
        assert_eq!(people.c_qualified.subs.b, 8.5);
    }

    #[test]
    fn no_workers_at_all() {
        let mut input = ScenarioInput::default();
        input.people.cat_c_workers = 0;
        input.people.cat_b_only_workers = 0;
        let people = derive(&input);
        assert_eq!(people.total_subs_per_day, 0.0);
        assert_eq!(people.total_workers, 0);
    }

    #[test]
    fn zero_day_load_uses_epsilon_floor() {
        let mut input = ScenarioInput::default();
        input.volume.total_deliverable = 0;
        let people = derive(&input);
        assert_eq!(people.c_qualified.days, 0.0);
        assert_eq!(people.c_qualified.subs_per_day, 0.0);
    }
}
