pub mod cost;
pub mod energy;
pub mod percentage;
pub mod rate;

use std::{
    cmp::Ordering,
    ops::{Div, Mul},
};

use ordered_float::OrderedFloat;
use serde::Serialize;

/// Scalar tagged with its energy and cost dimensions.
#[derive(
    Clone,
    Copy,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Sub,
    derive_more::Sum,
)]
#[must_use]
pub struct Quantity<const ENERGY: isize, const COST: isize>(pub f64);

impl<const ENERGY: isize, const COST: isize> Quantity<ENERGY, COST> {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Finite and strictly greater than zero.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Wrap into [`Some`] only when the value is finite.
    #[must_use]
    pub const fn finite(self) -> Option<Self> {
        if self.0.is_finite() { Some(self) } else { None }
    }
}

impl<const ENERGY: isize, const COST: isize> PartialEq for Quantity<ENERGY, COST> {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0).eq(&OrderedFloat(other.0))
    }
}

impl<const ENERGY: isize, const COST: isize> Eq for Quantity<ENERGY, COST> {}

impl<const ENERGY: isize, const COST: isize> PartialOrd for Quantity<ENERGY, COST> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const ENERGY: isize, const COST: isize> Ord for Quantity<ENERGY, COST> {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}

impl<const ENERGY: isize, const COST: isize> Mul<f64> for Quantity<ENERGY, COST> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const ENERGY: isize, const COST: isize> Div<f64> for Quantity<ENERGY, COST> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const ENERGY: isize, const COST: isize> Div<Self> for Quantity<ENERGY, COST> {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
