// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Logistics Planning Engine - Shared Value Types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

// ─── Category ────────────────────────────────────────────────────────────────

/// Submission difficulty tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Simple
    A,
    /// Reasoning
    B,
    /// Synthesis
    C,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::A, Category::B, Category::C];

    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "A (Simple)",
            Self::B => "B (Reasoning)",
            Self::C => "C (Synthesis)",
        }
    }
}

// ─── PerCategory ─────────────────────────────────────────────────────────────

/// One value per submission category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PerCategory<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Copy> PerCategory<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Look up the value for a given [`Category`].
    pub fn get(&self, category: Category) -> T {
        match category {
            Category::A => self.a,
            Category::B => self.b,
            Category::C => self.c,
        }
    }

    pub fn map<U, F: Fn(Category, T) -> U>(&self, f: F) -> PerCategory<U> {
        PerCategory {
            a: f(Category::A, self.a),
            b: f(Category::B, self.b),
            c: f(Category::C, self.c),
        }
    }
}

impl<T: Copy + Add<Output = T>> PerCategory<T> {
    pub fn total(&self) -> T {
        self.a + self.b + self.c
    }
}

// ─── Usd ─────────────────────────────────────────────────────────────────────

/// US-dollar amount backed by `rust_decimal::Decimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(pub Decimal);

impl Usd {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Cost of `minutes` of labour at an hourly rate: `minutes / 60 * rate`.
    pub fn for_minutes(minutes: i64, hourly_rate: Usd) -> Self {
        Self(Decimal::from(minutes) * hourly_rate.0 / dec!(60))
    }

    /// Cost of `tokens` at a per-million-token price.
    pub fn for_tokens(tokens: u64, price_per_million: Usd) -> Self {
        Self(Decimal::from(tokens) / dec!(1000000) * price_per_million.0)
    }
}

impl Add for Usd {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Usd {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Usd {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Usd {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Usd::zero(), |acc, x| acc + x)
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_sign_negative() {
            write!(f, "-${}", self.0.abs())
        } else {
            write!(f, "${}", self.0)
        }
    }
}
