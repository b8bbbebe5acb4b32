use std::iter;

use bon::Builder;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{cost::Dollars, percentage::Percentage},
};

/// Escalation of the alternative plan when none is given.
pub const DEFAULT_ALTERNATIVE_ESCALATION: Percentage = Percentage(3.5);

/// Year-indexed monthly bills of the utility and the alternative plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Projection {
    pub utility_bills: Vec<Dollars>,
    pub alternative_bills: Vec<Dollars>,
}

impl Projection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.utility_bills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.utility_bills.is_empty() || self.alternative_bills.is_empty()
    }

    /// Annual savings per year: monthly bill difference times twelve.
    pub fn annual_savings(&self) -> impl Iterator<Item = Dollars> {
        self.utility_bills
            .iter()
            .zip(&self.alternative_bills)
            .map(|(utility, alternative)| (*utility - *alternative) * 12.0)
    }
}

/// Projection assumptions.
///
/// The utility bill escalates right away: the first projected year already carries
/// the first-year increase. The alternative plan starts at its entered cost and
/// escalates only from the second year onward.
#[derive(Builder, Clone, Debug)]
#[builder(finish_fn = finish)]
#[must_use]
pub struct Projector {
    /// Monthly utility bill before any increase.
    pub initial_utility_bill: Dollars,

    /// Monthly cost of the alternative plan in the first year.
    pub alternative_start_cost: Dollars,

    /// Utility increase applied once, going into the first projected year.
    #[builder(default)]
    pub first_year_increase: Percentage,

    /// Utility increase for every following year, defaults to the first-year increase.
    pub ongoing_increase: Option<Percentage>,

    #[builder(default = DEFAULT_ALTERNATIVE_ESCALATION)]
    pub alternative_escalation: Percentage,

    pub years: usize,
}

impl<S: projector_builder::IsComplete> ProjectorBuilder<S> {
    pub fn project(self) -> Projection {
        self.finish().project()
    }
}

impl Projector {
    /// Whether the inputs allow for a projection at all.
    #[must_use]
    pub fn is_projectable(&self) -> bool {
        self.initial_utility_bill.is_positive()
            && self.alternative_start_cost.is_positive()
            && self.years != 0
    }

    /// Effective utility increases, with unusable percentages replaced by the defaults.
    pub fn utility_increases(&self) -> (Percentage, Percentage) {
        let first_year = self.first_year_increase.or_if_not_finite(Percentage::ZERO);
        let ongoing = self
            .ongoing_increase
            .map_or(first_year, |ongoing| ongoing.or_if_not_finite(Percentage::ZERO));
        (first_year, ongoing)
    }

    /// Build both bill sequences from scratch.
    ///
    /// Returns an empty projection whenever [`Projector::is_projectable`] does not hold.
    #[instrument(level = "debug", skip_all, fields(years = self.years))]
    pub fn project(&self) -> Projection {
        if !self.is_projectable() {
            debug!("not enough data to project");
            return Projection::default();
        }

        let (first_year_increase, ongoing_increase) = self.utility_increases();
        let ongoing_multiplier = ongoing_increase.to_multiplier();
        let alternative_multiplier = self
            .alternative_escalation
            .or_if_not_finite(DEFAULT_ALTERNATIVE_ESCALATION)
            .to_multiplier();

        let utility_bills = iter::successors(
            Some(self.initial_utility_bill * first_year_increase.to_multiplier()),
            |bill| Some(*bill * ongoing_multiplier),
        )
        .take(self.years)
        .collect();
        let alternative_bills =
            iter::successors(Some(self.alternative_start_cost), |bill| {
                Some(*bill * alternative_multiplier)
            })
            .take(self.years)
            .collect();

        Projection { utility_bills, alternative_bills }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;

    fn assert_bills_eq(actual: &[Dollars], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (actual, expected) in actual.iter().zip_eq(expected) {
            assert_abs_diff_eq!(actual.0, *expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_two_years() {
        let projection = Projector::builder()
            .initial_utility_bill(Dollars::from(100.0))
            .alternative_start_cost(Dollars::from(100.0))
            .first_year_increase(Percentage(10.0))
            .ongoing_increase(Percentage(10.0))
            .alternative_escalation(Percentage(3.5))
            .years(2)
            .project();
        assert_bills_eq(&projection.utility_bills, &[110.0, 121.0]);
        assert_bills_eq(&projection.alternative_bills, &[100.0, 103.5]);
    }

    #[test]
    fn test_alternative_is_not_escalated_in_first_year() {
        let projection = Projector::builder()
            .initial_utility_bill(Dollars::from(150.0))
            .alternative_start_cost(Dollars::from(123.45))
            .first_year_increase(Percentage(7.0))
            .alternative_escalation(Percentage(12.0))
            .years(10)
            .project();
        assert_eq!(projection.alternative_bills[0], Dollars::from(123.45));
        assert_abs_diff_eq!(projection.utility_bills[0].0, 160.5, epsilon = 1e-9);
    }

    #[test]
    fn test_equal_lengths() {
        for years in [1, 5, 10, 20] {
            let projection = Projector::builder()
                .initial_utility_bill(Dollars::from(80.0))
                .alternative_start_cost(Dollars::from(95.0))
                .years(years)
                .project();
            assert_eq!(projection.utility_bills.len(), years);
            assert_eq!(projection.alternative_bills.len(), years);
        }
    }

    #[test]
    fn test_strictly_increasing() {
        let projection = Projector::builder()
            .initial_utility_bill(Dollars::from(80.0))
            .alternative_start_cost(Dollars::from(95.0))
            .first_year_increase(Percentage(20.0))
            .ongoing_increase(Percentage(0.5))
            .alternative_escalation(Percentage(0.1))
            .years(20)
            .project();
        assert!(projection.utility_bills.iter().tuple_windows().all(|(lhs, rhs)| lhs < rhs));
        assert!(projection.alternative_bills.iter().tuple_windows().all(|(lhs, rhs)| lhs < rhs));
    }

    #[test]
    fn test_ongoing_defaults_to_first_year() {
        let projection = Projector::builder()
            .initial_utility_bill(Dollars::from(100.0))
            .alternative_start_cost(Dollars::from(100.0))
            .first_year_increase(Percentage(10.0))
            .years(3)
            .project();
        assert_bills_eq(&projection.utility_bills, &[110.0, 121.0, 133.1]);
        assert_bills_eq(&projection.alternative_bills, &[100.0, 103.5, 107.1225]);
    }

    #[test]
    fn test_unusable_percentages_fall_back() {
        let projection = Projector::builder()
            .initial_utility_bill(Dollars::from(100.0))
            .alternative_start_cost(Dollars::from(100.0))
            .first_year_increase(Percentage(f64::NAN))
            .ongoing_increase(Percentage(f64::INFINITY))
            .alternative_escalation(Percentage(f64::NAN))
            .years(2)
            .project();
        assert_bills_eq(&projection.utility_bills, &[100.0, 100.0]);
        assert_bills_eq(&projection.alternative_bills, &[100.0, 103.5]);
    }

    #[test]
    fn test_guards() {
        let builder = || {
            Projector::builder()
                .initial_utility_bill(Dollars::from(100.0))
                .alternative_start_cost(Dollars::from(100.0))
        };
        assert!(builder().years(0).project().is_empty());
        assert!(
            Projector::builder()
                .initial_utility_bill(Dollars::ZERO)
                .alternative_start_cost(Dollars::from(100.0))
                .years(10)
                .project()
                .is_empty()
        );
        assert!(
            Projector::builder()
                .initial_utility_bill(Dollars::from(100.0))
                .alternative_start_cost(Dollars::from(f64::NAN))
                .years(10)
                .project()
                .is_empty()
        );
        assert!(!builder().years(1).project().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let projector = Projector::builder()
            .initial_utility_bill(Dollars::from(133.33))
            .alternative_start_cost(Dollars::from(99.99))
            .first_year_increase(Percentage(11.1))
            .ongoing_increase(Percentage(4.4))
            .alternative_escalation(Percentage(2.9))
            .years(20)
            .finish();
        let lhs = projector.project();
        let rhs = projector.project();
        assert!(
            lhs.utility_bills
                .iter()
                .chain(&lhs.alternative_bills)
                .zip_eq(rhs.utility_bills.iter().chain(&rhs.alternative_bills))
                .all(|(lhs, rhs)| lhs.0.to_bits() == rhs.0.to_bits())
        );
    }

    #[test]
    fn test_annual_savings() {
        let projection = Projection {
            utility_bills: vec![Dollars::from(110.0), Dollars::from(90.0)],
            alternative_bills: vec![Dollars::from(100.0), Dollars::from(100.0)],
        };
        let savings = projection.annual_savings().collect_vec();
        assert_bills_eq(&savings, &[120.0, -120.0]);
    }
}
