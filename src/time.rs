// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Time Stage

use crate::input::ScenarioInput;
use crate::types::PerCategory;
use crate::volume::VolumeResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeResult {
    /// Minutes per submission, echoed for downstream stages and display.
    pub per_submission: PerCategory<i64>,
    /// Total annotation minutes per category.
    pub category_minutes: PerCategory<i64>,
    pub total_annotation_time: i64,
    pub qa_review_time: i64,
    pub total_qa_time: i64,
    pub combined_time: i64,
}

impl TimeResult {
    pub fn annotation_hours(&self) -> f64 {
        self.total_annotation_time as f64 / 60.0
    }

    pub fn qa_hours(&self) -> f64 {
        self.total_qa_time as f64 / 60.0
    }

    pub fn combined_hours(&self) -> f64 {
        self.combined_time as f64 / 60.0
    }
}

pub fn compute_time(volume: &VolumeResult, input: &ScenarioInput) -> TimeResult {
    let per_submission = input.time.per_submission().map(|_, m| m as i64);
    let required = volume.required();
    let category_minutes = required.map(|cat, n| n * per_submission.get(cat));
    let total_annotation_time = category_minutes.total();

    let qa_review_time = input.time.qa_review_time as i64;
    let total_qa_time = volume.total_required * qa_review_time;

    tracing::debug!(total_annotation_time, total_qa_time, "time stage derived");

    TimeResult {
        per_submission,
        category_minutes,
        total_annotation_time,
        qa_review_time,
        total_qa_time,
        combined_time: total_annotation_time + total_qa_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::compute_volume;

    #[test]
    fn default_minutes() {
        let input = ScenarioInput::default();
        let time = compute_time(&compute_volume(&input), &input);
        assert_eq!(time.category_minutes, PerCategory::new(320, 2380, 1860));
        assert_eq!(time.total_annotation_time, 4560);
        assert_eq!(time.total_qa_time, 131 * 30);
        assert_eq!(time.combined_time, 4560 + 3930);
        assert_eq!(time.annotation_hours(), 76.0);
        assert_eq!(time.qa_hours(), 65.5);
    }

    #[test]
    fn zero_volume_means_zero_time() {
        let mut input = ScenarioInput::default();
        input.volume.total_deliverable = 0;
        let time = compute_time(&compute_volume(&input), &input);
        assert_eq!(time.total_annotation_time, 0);
        assert_eq!(time.total_qa_time, 0);
    }
}
