// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Timeline Stage

use crate::input::ScenarioInput;
use serde::{Deserialize, Serialize};

/// Working days per calendar week.
const WORKDAYS_PER_WEEK: u64 = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    FindingPeople,
    Testing,
    DataCreation,
    CustomerMeeting,
    Compiling,
    Buffer,
}

impl Phase {
    /// Phases in schedule order.
    pub const ORDER: [Phase; 6] = [
        Phase::FindingPeople,
        Phase::Testing,
        Phase::DataCreation,
        Phase::CustomerMeeting,
        Phase::Compiling,
        Phase::Buffer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FindingPeople => "Finding people",
            Self::Testing => "Testing / qualification",
            Self::DataCreation => "Data creation + checking",
            Self::CustomerMeeting => "Customer meeting",
            Self::Compiling => "Compiling & final check",
            Self::Buffer => "Buffer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSpan {
    pub phase: Phase,
    pub days: u64,
    pub start_day: u64,
    pub end_day: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineResult {
    pub phases: Vec<PhaseSpan>,
    pub total_days: u64,
    pub calendar_weeks: u64,
}

impl TimelineResult {
    pub fn span(&self, phase: Phase) -> Option<&PhaseSpan> {
        self.phases.iter().find(|s| s.phase == phase)
    }
}

/// Lay the phases end to end. Independent of every other stage.
pub fn compute_timeline(input: &ScenarioInput) -> TimelineResult {
    let t = &input.timeline;
    let durations = [
        t.days_finding,
        t.days_testing,
        t.days_data,
        t.days_meeting,
        t.days_compiling,
        t.days_buffer,
    ];

    let mut cursor = 0;
    let phases: Vec<PhaseSpan> = Phase::ORDER
        .iter()
        .zip(durations)
        .map(|(&phase, days)| {
            let start_day = cursor;
            cursor += days;
            PhaseSpan { phase, days, start_day, end_day: cursor }
        })
        .collect();

    let total_days = cursor;
    let calendar_weeks = total_days.div_ceil(WORKDAYS_PER_WEEK);

    tracing::debug!(total_days, calendar_weeks, "timeline stage derived");

    TimelineResult { phases, total_days, calendar_weeks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule() {
        let timeline = compute_timeline(&ScenarioInput::default());
        assert_eq!(timeline.total_days, 12);
        assert_eq!(timeline.calendar_weeks, 3);

        let data = timeline.span(Phase::DataCreation).expect("test: data phase");
        assert_eq!((data.start_day, data.end_day), (2, 9));

        let starts: Vec<u64> = timeline.phases.iter().map(|s| s.start_day).collect();
        assert_eq!(starts, vec![0, 1, 2, 9, 10, 11]);
        assert_eq!(timeline.phases.last().map(|s| s.end_day), Some(12));
    }

    #[test]
    fn zero_length_phases_keep_order() {
        let mut input = ScenarioInput::default();
        input.timeline.days_finding = 0;
        input.timeline.days_meeting = 0;
        input.timeline.days_buffer = 0;
        let timeline = compute_timeline(&input);
        let names: Vec<&str> = timeline.phases.iter().map(|s| s.phase.name()).collect();
        assert_eq!(names[0], "Finding people");
        assert_eq!(names[5], "Buffer");
        assert_eq!(timeline.phases[0].end_day, 0);
        assert_eq!(timeline.total_days, 9);
        assert_eq!(timeline.calendar_weeks, 2);
    }

    #[test]
    fn empty_schedule() {
        let mut input = ScenarioInput::default();
        input.timeline = crate::input::TimelineInput {
            days_finding: 0,
            days_testing: 0,
            days_data: 0,
            days_meeting: 0,
            days_compiling: 0,
            days_buffer: 0,
        };
        let timeline = compute_timeline(&input);
        assert_eq!(timeline.total_days, 0);
        assert_eq!(timeline.calendar_weeks, 0);
    }
}
