use bon::Builder;
use enumset::EnumSet;
use serde::Serialize;

use crate::{
    core::{
        horizon::Horizon,
        metrics::{Report, derive_metrics},
        projection::{DEFAULT_ALTERNATIVE_ESCALATION, Projection, Projector},
        rate::{average_monthly_cost, compute_rate, first_year_bill},
        scenario::{ScenarioKind, ScenarioSummary},
    },
    prelude::*,
    quantity::{
        cost::Dollars,
        energy::KilowattHours,
        percentage::Percentage,
        rate::KilowattHourRate,
    },
};

/// Immutable snapshot of everything the user has entered.
#[derive(Builder, Clone, Debug)]
#[must_use]
pub struct Inputs {
    pub monthly_charges: Dollars,
    pub monthly_usage: KilowattHours,
    pub annual_usage: KilowattHours,

    #[builder(default)]
    pub first_year_increase: Percentage,

    pub ongoing_increase: Option<Percentage>,

    /// Monthly cost of the alternative plan, the comparison is skipped without it.
    pub alternative_cost: Option<Dollars>,

    #[builder(default = DEFAULT_ALTERNATIVE_ESCALATION)]
    pub alternative_escalation: Percentage,

    #[builder(default)]
    pub horizon: Horizon,

    /// Calendar year of the first projected year.
    pub start_year: i32,

    #[builder(default = EnumSet::all())]
    pub scenarios: EnumSet<ScenarioKind>,
}

/// Everything derived from a single [`Inputs`] snapshot.
#[derive(Clone, Debug, Default, Serialize)]
#[must_use]
pub struct Outcome {
    pub rate: Option<KilowattHourRate>,
    pub average_monthly_cost: Option<Dollars>,

    /// Monthly bill in the first projected year, without the alternative plan.
    pub projected_monthly_bill: Option<Dollars>,

    #[serde(skip)]
    pub projection: Projection,

    pub report: Option<Report>,
    pub scenarios: Vec<ScenarioSummary>,
}

impl Outcome {
    /// Whether there is anything to compare the utility against.
    #[must_use]
    pub const fn is_comparable(&self) -> bool {
        self.report.is_some()
    }
}

impl Inputs {
    /// Run the whole pipeline from scratch.
    ///
    /// Missing pieces surface as absent values in the outcome: there is no partial state.
    #[instrument(skip_all, fields(horizon = self.horizon.years()))]
    pub fn calculate(&self) -> Outcome {
        let rate = compute_rate(self.monthly_charges, self.monthly_usage);
        let average_monthly_cost =
            rate.and_then(|rate| average_monthly_cost(self.annual_usage, rate));
        let projected_monthly_bill =
            average_monthly_cost.map(|cost| first_year_bill(cost, self.first_year_increase));
        info!(?rate, ?average_monthly_cost, ?projected_monthly_bill, "calculated the bill");

        let Some(projector) = self.projector(average_monthly_cost) else {
            return Outcome {
                rate,
                average_monthly_cost,
                projected_monthly_bill,
                ..Outcome::default()
            };
        };
        let projection = projector.project();
        let report = derive_metrics(
            &projection.utility_bills,
            &projection.alternative_bills,
            &self.horizon.year_labels(self.start_year),
        );
        let scenarios = projector.evaluate_scenarios(self.scenarios);
        if let Some(report) = &report {
            info!(
                first_year_savings = ?report.snapshot.first_year_savings,
                total_cumulative = ?report.snapshot.total_cumulative,
                break_even_year = ?report.snapshot.break_even_year,
                n_scenarios = scenarios.len(),
                "compared"
            );
        }

        Outcome { rate, average_monthly_cost, projected_monthly_bill, projection, report, scenarios }
    }

    fn projector(&self, average_monthly_cost: Option<Dollars>) -> Option<Projector> {
        let projector = Projector::builder()
            .initial_utility_bill(average_monthly_cost?)
            .alternative_start_cost(self.alternative_cost?)
            .first_year_increase(self.first_year_increase)
            .maybe_ongoing_increase(self.ongoing_increase)
            .alternative_escalation(self.alternative_escalation)
            .years(self.horizon.years())
            .finish();
        projector.is_projectable().then_some(projector)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn inputs() -> Inputs {
        Inputs::builder()
            .monthly_charges(Dollars::from(120.0))
            .monthly_usage(KilowattHours::from(600.0))
            .annual_usage(KilowattHours::from(7200.0))
            .start_year(2025)
            .build()
    }

    #[test]
    fn test_bill_only() {
        let outcome = Inputs { first_year_increase: Percentage(10.0), ..inputs() }.calculate();
        assert_abs_diff_eq!(outcome.rate.unwrap().0, 0.2);
        assert_abs_diff_eq!(outcome.average_monthly_cost.unwrap().0, 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outcome.projected_monthly_bill.unwrap().0, 132.0, epsilon = 1e-9);
        assert!(!outcome.is_comparable());
        assert!(outcome.projection.is_empty());
        assert!(outcome.scenarios.is_empty());
    }

    #[test]
    fn test_no_rate() {
        let outcome = Inputs::builder()
            .monthly_charges(Dollars::from(120.0))
            .monthly_usage(KilowattHours::ZERO)
            .annual_usage(KilowattHours::from(7200.0))
            .alternative_cost(Dollars::from(100.0))
            .start_year(2025)
            .build()
            .calculate();
        assert!(outcome.rate.is_none());
        assert!(outcome.average_monthly_cost.is_none());
        assert!(outcome.projected_monthly_bill.is_none());
        assert!(outcome.report.is_none());
        assert!(outcome.scenarios.is_empty());
    }

    #[test]
    fn test_full_comparison() {
        let outcome = Inputs {
            first_year_increase: Percentage(10.0),
            ongoing_increase: Some(Percentage(5.0)),
            alternative_cost: Some(Dollars::from(100.0)),
            ..inputs()
        }
        .calculate();
        let report = outcome.report.as_ref().unwrap();
        assert_eq!(report.points.len(), 10);
        assert_eq!(report.points[0].year, "2025");
        assert_eq!(report.points[9].year, "2034");
        assert_abs_diff_eq!(report.points[0].utility_bill.0, 132.0, epsilon = 1e-9);
        assert_eq!(report.points[0].alternative_bill, Dollars::from(100.0));
        assert_eq!(outcome.scenarios.len(), 3);
        assert_eq!(outcome.projection.len(), 10);
    }

    #[test]
    fn test_horizon_and_scenario_selection() {
        let outcome = Inputs {
            alternative_cost: Some(Dollars::from(100.0)),
            horizon: Horizon::try_from(20).unwrap(),
            scenarios: ScenarioKind::StressTest.into(),
            ..inputs()
        }
        .calculate();
        assert_eq!(outcome.report.unwrap().points.len(), 20);
        assert_eq!(outcome.scenarios.len(), 1);
        assert_eq!(outcome.scenarios[0].kind, ScenarioKind::StressTest);
    }

    #[test]
    fn test_recalculation_is_identical() {
        let inputs = Inputs {
            first_year_increase: Percentage(8.0),
            alternative_cost: Some(Dollars::from(140.0)),
            ..inputs()
        };
        assert_eq!(inputs.calculate().report, inputs.calculate().report);
    }
}
