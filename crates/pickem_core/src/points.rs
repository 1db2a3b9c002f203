//! Exact point arithmetic.
//!
//! Every point value in the contest is a multiple of one half (a push is worth
//! half of a cover), so points are stored as a count of half points. Sums of
//! halves and wholes stay exact, and comparisons against integer thresholds
//! never suffer from floating point rounding.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// A point value counted in half points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(i32);

impl Points {
    pub const ZERO: Points = Points(0);
    pub const HALF: Points = Points(1);
    pub const ONE: Points = Points(2);

    pub const fn from_halves(halves: i32) -> Self {
        Points(halves)
    }

    pub const fn whole(points: i32) -> Self {
        Points(points * 2)
    }

    pub const fn halves(self) -> i32 {
        self.0
    }

    /// Multiply by a non-negative integer factor (slot weight, survivor point).
    pub const fn times(self, factor: u8) -> Self {
        Points(self.0 * factor as i32)
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 += rhs.0;
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Points {
        iter.copied().sum()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let frac = if abs % 2 == 0 { 0 } else { 5 };
        f.pad(&format!("{}{}.{}", sign, abs / 2, frac))
    }
}

impl FromStr for Points {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ParseError::InvalidPoints(s.to_string()))?;
        Points::try_from(value).map_err(|_| ParseError::InvalidPoints(s.to_string()))
    }
}

impl TryFrom<f64> for Points {
    type Error = ParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let doubled = value * 2.0;
        if !doubled.is_finite()
            || doubled.fract() != 0.0
            || doubled.abs() > f64::from(i32::MAX)
        {
            return Err(ParseError::InvalidPoints(value.to_string()));
        }
        Ok(Points(doubled as i32))
    }
}

impl Serialize for Points {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PointsVisitor;

impl Visitor<'_> for PointsVisitor {
    type Value = Points;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a point value that is a multiple of 0.5")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Points, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Points, E> {
        Points::try_from(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Points, E> {
        i32::try_from(v)
            .ok()
            .and_then(|p| p.checked_mul(2))
            .map(Points)
            .ok_or_else(|| E::custom(ParseError::InvalidPoints(v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Points, E> {
        i64::try_from(v)
            .map_err(|_| E::custom(ParseError::InvalidPoints(v.to_string())))
            .and_then(|v| self.visit_i64(v))
    }
}

impl<'de> Deserialize<'de> for Points {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PointsVisitor)
    }
}

#[cfg(test)]
#[path = "points_tests.rs"]
mod points_tests;
