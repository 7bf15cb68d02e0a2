// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Summary

use crate::money::MoneyResult;
use crate::people::PeopleResult;
use crate::time::TimeResult;
use crate::timeline::TimelineResult;
use crate::types::Usd;
use crate::volume::VolumeResult;
use serde::{Deserialize, Serialize};

/// Headline figures, projected from the stage results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_cost: Usd,
    pub total_required: i64,
    pub total_days: u64,
    pub workers_to_invite: i64,
    pub total_annotation_time: i64,
    pub annotation_hours: f64,
}

pub fn compute_summary(
    volume: &VolumeResult,
    people: &PeopleResult,
    money: &MoneyResult,
    timeline: &TimelineResult,
    time: &TimeResult,
) -> Summary {
    Summary {
        total_cost: money.total_cost,
        total_required: volume.total_required,
        total_days: timeline.total_days,
        workers_to_invite: people.workers_to_invite(),
        total_annotation_time: time.total_annotation_time,
        annotation_hours: time.annotation_hours(),
    }
}
