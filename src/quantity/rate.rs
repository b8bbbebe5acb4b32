use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Dollars per kilowatt-hour.
pub type KilowattHourRate = Quantity<-1, 1>;

impl KilowattHourRate {
    /// Drop everything past whole cents without rounding up.
    pub fn truncate_to_cents(self) -> Self {
        Self((self.0 * 100.0).floor() / 100.0)
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}$/kWh", self.0)
    }
}
