use std::fmt::{Debug, Display, Formatter};

use serde::Serialize;

/// Annual change, in percent: `10.0` means «+10 % per year».
#[derive(Clone, Copy, Default, PartialEq, Serialize, derive_more::Add)]
#[must_use]
pub struct Percentage(pub f64);

impl Percentage {
    pub const ZERO: Self = Self(0.0);

    /// Factor to multiply a bill with after one year.
    #[must_use]
    pub const fn to_multiplier(self) -> f64 {
        1.0 + self.0 / 100.0
    }

    /// Replace a non-finite percentage with the fallback.
    pub const fn or_if_not_finite(self, fallback: Self) -> Self {
        if self.0.is_finite() { self } else { fallback }
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl Debug for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
