//! Flat per-kilowatt-hour rate derived from a single bill.

use crate::quantity::{
    cost::Dollars,
    energy::KilowattHours,
    percentage::Percentage,
    rate::KilowattHourRate,
};

/// Derive the flat rate, truncated to whole cents.
///
/// Both the charges and the usage must be positive, otherwise there is no rate.
#[must_use]
pub fn compute_rate(charges: Dollars, usage: KilowattHours) -> Option<KilowattHourRate> {
    if !charges.is_positive() || !usage.is_positive() {
        return None;
    }
    (charges / usage).truncate_to_cents().finite()
}

/// Average monthly bill for the annual usage at the given rate.
#[must_use]
pub fn average_monthly_cost(annual_usage: KilowattHours, rate: KilowattHourRate) -> Option<Dollars> {
    if !annual_usage.is_positive() || !rate.is_finite() {
        return None;
    }
    (annual_usage * rate / 12.0).finite()
}

/// Monthly bill in the first projected year.
pub fn first_year_bill(average_monthly_cost: Dollars, first_year_increase: Percentage) -> Dollars {
    average_monthly_cost * first_year_increase.or_if_not_finite(Percentage::ZERO).to_multiplier()
}
