// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Money Stage

//! Budget: labour, qualification, review, infrastructure and LLM spend.
//!
//! All amounts are carried as [`Usd`] (`rust_decimal`), so per-token prices
//! and per-minute labour cost stay exact across the sum.
//!
//! LLM submission cost is computed twice, with and without filing context
//! in the prompt. Only the with-context variant (the larger prompt) counts
//! toward the total; the other is kept as a comparison line.

use crate::input::{ScenarioInput, TokenProfile};
use crate::people::PeopleResult;
use crate::time::TimeResult;
use crate::types::Usd;
use crate::volume::VolumeResult;
use serde::{Deserialize, Serialize};

// ─── LLM line items ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmCallKind {
    SubmissionWithoutContext,
    SubmissionWithContext,
    Evaluation,
}

impl LlmCallKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SubmissionWithoutContext => "LLM submissions w/o context",
            Self::SubmissionWithContext => "LLM submissions w/ context",
            Self::Evaluation => "LLM evaluations",
        }
    }
}

/// Token volume and cost for one kind of LLM call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmLine {
    pub kind: LlmCallKind,
    pub calls: i64,
    pub tokens_in: i64,
    pub tokens_out: i64,
    pub cost_in: Usd,
    pub cost_out: Usd,
    pub cost: Usd,
}

impl LlmLine {
    pub fn price(kind: LlmCallKind, calls: i64, profile: TokenProfile, price_in: Usd, price_out: Usd) -> Self {
        let tokens_in = calls * profile.tokens_in as i64;
        let tokens_out = calls * profile.tokens_out as i64;
        let cost_in = token_cost(tokens_in, price_in);
        let cost_out = token_cost(tokens_out, price_out);
        Self {
            kind,
            calls,
            tokens_in,
            tokens_out,
            cost_in,
            cost_out,
            cost: cost_in + cost_out,
        }
    }
}

fn token_cost(tokens: i64, price_per_million: Usd) -> Usd {
    if tokens < 0 {
        Usd::zero() - Usd::for_tokens(tokens.unsigned_abs(), price_per_million)
    } else {
        Usd::for_tokens(tokens as u64, price_per_million)
    }
}

// ─── MoneyResult ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyResult {
    pub worker_cost: Usd,
    pub qualification_cost: Usd,
    pub reviewer_cost: Usd,

    pub infra_cost: Usd,
    pub llm_without_context: LlmLine,
    pub llm_with_context: LlmLine,
    pub llm_evaluations: LlmLine,
    /// With-context submissions plus evaluations.
    pub total_llm_cost: Usd,
    pub total_llm_tokens_in: i64,
    pub total_llm_tokens_out: i64,
    pub tech_cost: Usd,

    pub num_evals: i64,
    pub total_cost: Usd,
}

impl MoneyResult {
    pub fn llm_lines(&self) -> [&LlmLine; 3] {
        [&self.llm_without_context, &self.llm_with_context, &self.llm_evaluations]
    }
}

/// Price every line item of the scenario.
///
/// `num_evals` is the evaluation count already resolved against
/// `total_required` by the caller.
pub fn compute_money(
    volume: &VolumeResult,
    time: &TimeResult,
    people: &PeopleResult,
    input: &ScenarioInput,
    num_evals: i64,
) -> MoneyResult {
    let llm = &input.llm;
    let labour = &input.labour;
    let infra = &input.infra;
    let (price_in, price_out) = (llm.price_input_per_m, llm.price_output_per_m);
    let submissions = volume.total_required;

    let llm_without_context = LlmLine::price(
        LlmCallKind::SubmissionWithoutContext,
        submissions,
        llm.submission_without_context,
        price_in,
        price_out,
    );
    let llm_with_context = LlmLine::price(
        LlmCallKind::SubmissionWithContext,
        submissions,
        llm.submission_with_context,
        price_in,
        price_out,
    );
    let llm_evaluations = LlmLine::price(LlmCallKind::Evaluation, num_evals, llm.evaluation, price_in, price_out);

    let total_llm_cost = llm_with_context.cost + llm_evaluations.cost;
    let infra_cost = infra.filings + infra.auto_check + infra.database;
    let tech_cost = infra_cost + total_llm_cost;

    let worker_cost = Usd::for_minutes(time.total_annotation_time, labour.worker_hourly_rate);
    let qualification_minutes = people.funnel.to_invite * input.time.qualification_time as i64;
    let qualification_cost = Usd::for_minutes(qualification_minutes, labour.worker_hourly_rate);
    let reviewer_cost = labour.reviewer_hourly_rate * labour.reviewer_hours;

    let total_cost = worker_cost + qualification_cost + reviewer_cost + tech_cost;

    tracing::debug!(
        worker_cost = %worker_cost,
        qualification_cost = %qualification_cost,
        reviewer_cost = %reviewer_cost,
        tech_cost = %tech_cost,
        total_cost = %total_cost,
        "money stage derived"
    );

    MoneyResult {
        worker_cost,
        qualification_cost,
        reviewer_cost,
        infra_cost,
        total_llm_tokens_in: llm_with_context.tokens_in + llm_evaluations.tokens_in,
        total_llm_tokens_out: llm_with_context.tokens_out + llm_evaluations.tokens_out,
        llm_without_context,
        llm_with_context,
        llm_evaluations,
        total_llm_cost,
        tech_cost,
        num_evals,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::people::compute_people;
    use crate::time::compute_time;
    use crate::volume::compute_volume;
    use rust_decimal_macros::dec;

    fn derive(input: &ScenarioInput) -> MoneyResult {
        let volume = compute_volume(input);
        let time = compute_time(&volume, input);
        let people = compute_people(&volume, &time, input);
        let evals = input.llm.resolved_num_evals(volume.total_required);
        compute_money(&volume, &time, &people, input, evals)
    }

    #[test]
    fn llm_line_for_106_submissions_with_context() {
        let line = LlmLine::price(
            LlmCallKind::SubmissionWithContext,
            106,
            TokenProfile { tokens_in: 50_000, tokens_out: 100 },
            Usd(dec!(2)),
            Usd(dec!(12)),
        );
        assert_eq!(line.tokens_in, 5_300_000);
        assert_eq!(line.tokens_out, 10_600);
        assert_eq!(line.cost_in, Usd(dec!(10.6)));
        assert_eq!(line.cost_out, Usd(dec!(0.1272)));
        assert_eq!(line.cost, Usd(dec!(10.7272)));
    }

    #[test]
    fn default_budget() {
        let money = derive(&ScenarioInput::default());
        assert_eq!(money.worker_cost, Usd(dec!(1520)));
        assert_eq!(money.qualification_cost, Usd(dec!(1140))); // 76 * 45 min at $20/h
        assert_eq!(money.reviewer_cost, Usd(dec!(250)));
        assert_eq!(money.infra_cost, Usd(dec!(50)));
        assert_eq!(money.llm_without_context.cost, Usd(dec!(0.6812)));
        assert_eq!(money.llm_with_context.cost, Usd(dec!(13.2572)));
        assert_eq!(money.llm_evaluations.cost, Usd(dec!(0.4192)));
        assert_eq!(money.total_llm_cost, Usd(dec!(13.6764)));
        assert_eq!(money.tech_cost, Usd(dec!(63.6764)));
        assert_eq!(money.total_cost, Usd(dec!(2973.6764)));
        assert_eq!(money.num_evals, 131);
    }

    #[test]
    fn without_context_variant_is_excluded_from_total() {
        let mut input = ScenarioInput::default();
        let base = derive(&input);
        input.llm.submission_without_context.tokens_in = 10_000_000;
        let bumped = derive(&input);
        assert!(bumped.llm_without_context.cost > base.llm_without_context.cost);
        assert_eq!(bumped.total_cost, base.total_cost);
    }

    #[test]
    fn evaluation_override_changes_only_eval_line() {
        let mut input = ScenarioInput::default();
        input.llm.num_evals = Some(0);
        let money = derive(&input);
        assert_eq!(money.num_evals, 0);
        assert_eq!(money.llm_evaluations.cost, Usd::zero());
        assert_eq!(money.total_llm_cost, money.llm_with_context.cost);
    }

    #[test]
    fn token_totals_follow_conservative_variant() {
        let money = derive(&ScenarioInput::default());
        assert_eq!(money.total_llm_tokens_in, 131 * 50_000 + 131 * 1_000);
        assert_eq!(money.total_llm_tokens_out, 131 * 100 * 2);
    }

    #[test]
    fn negative_token_volume_prices_negative() {
        assert_eq!(token_cost(-1_000_000, Usd(dec!(2))), Usd(dec!(-2)));
    }
}
