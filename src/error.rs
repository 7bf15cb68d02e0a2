// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Errors and Warnings

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while validating or deriving a scenario.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("invalid input `{field}` = {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error(
        "category mix A {pct_a}% + B {pct_b}% leaves a negative category C target ({target_c})"
    )]
    NegativeRemainder { pct_a: f64, pct_b: f64, target_c: i64 },

    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    #[error("scenario config error ({source_name}): {message}")]
    Config { source_name: String, message: String },
}

impl ScenarioError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput { field, value, reason }
    }
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// Soft inconsistencies that do not stop a recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Category A% + B% exceeds 100; category C% is shown as 0.
    CategoryMixOverflow { pct_a: f64, pct_b: f64 },
}

impl Warning {
    pub fn message(&self) -> String {
        match self {
            Self::CategoryMixOverflow { pct_a, pct_b } => {
                format!("A% + B% exceeds 100% ({pct_a}% + {pct_b}%). Adjust the category mix.")
            }
        }
    }
}
