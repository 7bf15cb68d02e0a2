// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Rounding Rules

//! Rounding helpers shared by the stages.
//!
//! Whole-number rounding resolves ties to the even neighbour. One-decimal
//! rounding works on the exact binary value of the double, so `0.35`
//! (stored just below the midpoint) goes down. Requirement counts always
//! round up. These modes are part of the engine contract.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Floor applied to per-worker day counts before dividing by them.
pub const DAYS_EPSILON: f64 = 0.01;

/// Round to the nearest integer, ties to even (`2.5 -> 2`, `3.5 -> 4`).
pub fn round_half_even(x: f64) -> i64 {
    x.round_ties_even() as i64
}

/// Round up to the next integer.
pub fn ceil_count(x: f64) -> i64 {
    x.ceil() as i64
}

/// Round to one decimal place, ties to even on the exact binary value.
///
/// `0.25` is exactly representable and rounds to `0.2`; `0.35` is stored as
/// `0.34999...` and rounds to `0.3`.
pub fn round_tenths(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    match Decimal::from_f64_retain(x) {
        Some(d) => d
            .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
            .to_f64()
            .unwrap_or(x),
        None => x,
    }
}

/// Convert an f64 input to `Decimal`, keeping its shortest decimal form.
pub fn to_decimal(v: f64) -> Option<Decimal> {
    Decimal::from_f64(v)
}

/// Convert a `Decimal` to f64 for ratio arithmetic.
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}
