// Plan Report — console tables and JSON envelope for a derived scenario

use logistics_engine::money::LlmLine;
use logistics_engine::params::ParamSpec;
use logistics_engine::people::WorkerLoad;
use logistics_engine::{Category, EngineConfig, Scenario, Usd};
use rust_decimal::RoundingStrategy;
use serde::Serialize;

// ─── JSON Envelope ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub timestamp: String,
    pub version: &'static str,
    pub config: EngineConfig,
    pub warnings: Vec<String>,
    pub scenario: &'a Scenario,
}

// ─── Formatting ─────────────────────────────────────────────────────────────

/// `$1,234.57` with `decimals` places, half-even.
pub fn fmt_usd(amount: Usd, decimals: u32) -> String {
    let rounded = amount.0.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text.clone(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}${grouped}.{f}"),
        None => format!("{sign}${grouped}"),
    }
}

fn hours(minutes: f64) -> String {
    format!("{:.1}", minutes / 60.0)
}

fn rule() {
    println!("  {}", "-".repeat(88));
}

fn heading(title: &str) {
    println!("\n  {title}");
    rule();
}

// ─── Sections ───────────────────────────────────────────────────────────────

pub fn print_summary(s: &Scenario) {
    heading("Summary");
    let sum = &s.summary;
    println!("  {:<28} {:>16}", "Total budget", fmt_usd(sum.total_cost, 0));
    println!("  {:<28} {:>16}", "Submissions required", sum.total_required);
    println!("  {:<28} {:>11} days", "Duration", sum.total_days);
    println!("  {:<28} {:>16}", "Invitations needed", sum.workers_to_invite);
    println!("  {:<28} {:>16.1}", "Annotation hours", sum.annotation_hours);
}

pub fn print_volume(s: &Scenario) {
    heading("1 — Volume & Distribution");
    let v = &s.volume;
    println!("  Category C share (auto): {}%", v.pct_c);
    println!("  {:<16} {:>8} {:>10} {:>10} {:>8}", "Category", "Target", "Failure %", "Required", "Buffer");
    for cat in Category::ALL {
        let c = v.categories.get(cat);
        println!(
            "  {:<16} {:>8} {:>9}% {:>10} {:>8}",
            cat.label(),
            c.target,
            c.failure_rate,
            c.required,
            c.buffer
        );
    }
    println!(
        "  {:<16} {:>8} {:>10} {:>10} {:>8}",
        "Total", v.total_deliverable, "—", v.total_required, v.total_buffer
    );
}

pub fn print_time(s: &Scenario) {
    heading("2 — Time");
    let t = &s.time;
    let required = s.volume.required();
    println!("  {:<16} {:>10} {:>8} {:>14} {:>8}", "Category", "Per sub", "Subs", "Total time", "Hours");
    for cat in Category::ALL {
        let minutes = t.category_minutes.get(cat);
        println!(
            "  {:<16} {:>6} min {:>8} {:>10} min {:>8}",
            cat.label(),
            t.per_submission.get(cat),
            required.get(cat),
            minutes,
            hours(minutes as f64)
        );
    }
    println!(
        "  {:<16} {:>10} {:>8} {:>10} min {:>8}",
        "Total",
        "—",
        s.volume.total_required,
        t.total_annotation_time,
        hours(t.total_annotation_time as f64)
    );
    println!(
        "  QA time: {} min ({:.1} hrs)   Combined: {:.1} hrs",
        t.total_qa_time,
        t.qa_hours(),
        t.combined_hours()
    );
}

fn print_worker_row(label: String, load: &WorkerLoad, show_c: bool) {
    let c_subs = if show_c { format!("{:.0}", load.subs.c) } else { "—".to_string() };
    println!(
        "  {:<28} {:>7.0} {:>7.0} {:>7} {:>10.0} {:>7.1}",
        label, load.subs.a, load.subs.b, c_subs, load.minutes, load.days
    );
}

pub fn print_people(s: &Scenario) {
    heading("3 — People");
    let f = &s.people.funnel;
    println!("  Recruitment funnel");
    println!("  {:<34} {:>8}", "Target active", f.target_active);
    println!("  {:<34} {:>8}", format!("Need (retention {}%)", f.retention_rate), f.before_retention);
    println!("  {:<34} {:>8}", format!("Need (pass rate {}%)", f.pass_rate), f.before_pass);
    println!("  {:<34} {:>8}", format!("Invitations ({}%)", f.invite_take_rate), f.to_invite);

    let p = &s.people;
    if !p.c_qualified.is_idle() || !p.b_only.is_idle() {
        println!("\n  Workload per worker");
        println!(
            "  {:<28} {:>7} {:>7} {:>7} {:>10} {:>7}",
            "Worker type", "A subs", "B subs", "C subs", "Total min", "Days"
        );
    }
    if !p.c_qualified.is_idle() {
        print_worker_row(format!("Cat C-qualified (x{})", p.c_qualified.workers), &p.c_qualified, true);
    }
    if !p.b_only.is_idle() {
        print_worker_row(format!("Cat B-only (x{})", p.b_only.workers), &p.b_only, false);
    }
    println!("  Est. total submissions / day: ~{:.0}", p.total_subs_per_day);
}

pub fn print_qa(s: &Scenario) {
    heading("4 — Quality Assurance");
    let q = &s.qa;
    println!("  {:<20} {:>10}", "Total reviews", q.total_reviews);
    println!("  {:<20} {:>10}", "Reviews / day", format!("~{:.1}", q.reviews_per_day));
    println!("  {:<20} {:>10}", "QA hours / day", format!("{:.1} hrs", q.qa_hours_per_day));
}

fn print_llm_row(line: &LlmLine) {
    println!(
        "  {:<40} {:>14} {:>12} {:>12}",
        format!("{} ({}x)", line.kind.label(), line.calls),
        line.tokens_in,
        line.tokens_out,
        fmt_usd(line.cost, 2)
    );
}

pub fn print_money(s: &Scenario) {
    heading("5 — Money");
    let m = &s.money;
    println!("  {:<28} {:>14}", "Worker annotation", fmt_usd(m.worker_cost, 0));
    println!("  {:<28} {:>14}", "Qualification testing", fmt_usd(m.qualification_cost, 0));
    println!("  {:<28} {:>14}", "Expert review", fmt_usd(m.reviewer_cost, 0));
    println!("  {:<28} {:>14}", "Tech / infrastructure", fmt_usd(m.tech_cost, 2));
    println!("  {:<28} {:>14}", "TOTAL", fmt_usd(m.total_cost, 2));

    println!("\n  Tech cost breakdown");
    println!("  {:<40} {:>14} {:>12} {:>12}", "Component", "Tokens in", "Tokens out", "Cost");
    let infra = &s.input.infra;
    for (label, cost) in [
        ("Filings", infra.filings),
        ("Automated checking", infra.auto_check),
        ("Database", infra.database),
    ] {
        println!("  {:<40} {:>14} {:>12} {:>12}", label, "—", "—", fmt_usd(cost, 2));
    }
    for line in m.llm_lines() {
        print_llm_row(line);
    }
    println!(
        "  {:<40} {:>14} {:>12} {:>12}",
        "Total LLM (conservative, w/ context)",
        m.total_llm_tokens_in,
        m.total_llm_tokens_out,
        fmt_usd(m.total_llm_cost, 2)
    );
    println!("  {:<40} {:>14} {:>12} {:>12}", "TOTAL TECH", "—", "—", fmt_usd(m.tech_cost, 2));
}

pub fn print_timeline(s: &Scenario) {
    heading("6 — Timeline");
    println!("  {:<28} {:>6} {:>10} {:>8}", "Phase", "Days", "Start day", "End day");
    for span in &s.timeline.phases {
        println!(
            "  {:<28} {:>6} {:>10} {:>8}",
            span.phase.name(),
            span.days,
            span.start_day,
            span.end_day
        );
    }
    println!(
        "  Total project duration: {} days (~{} calendar weeks)",
        s.timeline.total_days, s.timeline.calendar_weeks
    );
}

pub fn print_warnings(s: &Scenario) {
    for w in &s.warnings {
        println!("  WARNING: {}", w.message());
    }
}

pub fn print_scenario(s: &Scenario) {
    print_warnings(s);
    print_summary(s);
    print_volume(s);
    print_time(s);
    print_people(s);
    print_qa(s);
    print_money(s);
    print_timeline(s);
    println!();
}

pub fn print_params(params: &[ParamSpec], current: impl Fn(&str) -> Option<f64>) {
    println!("  {:<44} {:>10} {:>10} {:>8} {:>8} {:>8}", "Key", "Current", "Default", "Step", "Min", "Max");
    rule();
    let show = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_else(|| "auto".to_string());
    for p in params {
        println!(
            "  {:<44} {:>10} {:>10} {:>8} {:>8} {:>8}",
            p.key,
            show(current(p.key)),
            show(p.default),
            p.step,
            p.min,
            p.max.map(|m| m.to_string()).unwrap_or_else(|| "—".to_string())
        );
    }
}
