// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - QA Stage

use crate::input::ScenarioInput;
use crate::time::TimeResult;
use crate::volume::VolumeResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaResult {
    /// Every required submission is reviewed once.
    pub total_reviews: i64,
    pub qa_days_available: u64,
    pub reviews_per_day: f64,
    pub qa_hours_per_day: f64,
}

pub fn compute_qa(volume: &VolumeResult, time: &TimeResult, input: &ScenarioInput) -> QaResult {
    let days = input.qa.qa_days_available.max(1);
    let reviews_per_day = volume.total_required as f64 / days as f64;
    let qa_hours_per_day = reviews_per_day * time.qa_review_time as f64 / 60.0;

    tracing::debug!(reviews_per_day, qa_hours_per_day, "qa stage derived");

    QaResult {
        total_reviews: volume.total_required,
        qa_days_available: input.qa.qa_days_available,
        reviews_per_day,
        qa_hours_per_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::compute_time;
    use crate::volume::compute_volume;

    fn derive(input: &ScenarioInput) -> QaResult {
        let volume = compute_volume(input);
        let time = compute_time(&volume, input);
        compute_qa(&volume, &time, input)
    }

    #[test]
    fn default_review_load() {
        let qa = derive(&ScenarioInput::default());
        assert_eq!(qa.total_reviews, 131);
        assert_eq!(qa.reviews_per_day, 131.0 / 7.0);
        assert_eq!(qa.qa_hours_per_day, 131.0 / 7.0 * 30.0 / 60.0);
    }

    #[test]
    fn zero_days_falls_back_to_one() {
        let mut input = ScenarioInput::default();
        input.qa.qa_days_available = 0;
        let qa = derive(&input);
        assert_eq!(qa.reviews_per_day, 131.0);
        assert_eq!(qa.qa_hours_per_day, 65.5);
        assert_eq!(qa.qa_days_available, 0);
    }
}
