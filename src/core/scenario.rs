use std::fmt::{Display, Formatter};

use enumset::EnumSet;
use serde::Serialize;

use crate::{
    core::projection::Projector,
    prelude::*,
    quantity::{cost::Dollars, percentage::Percentage},
};

/// Percentage points added to the utility increases by [`ScenarioKind::StressTest`].
pub const STRESS_MARGIN: Percentage = Percentage(2.0);

#[derive(Debug, Hash, Serialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    /// Increases as entered.
    Entered,

    /// The ongoing increase for every year, without the first-year spike.
    HistoricBaseline,

    /// Both increases raised by two percentage points.
    StressTest,
}

impl Display for ScenarioKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entered => write!(f, "Entered rates"),
            Self::HistoricBaseline => write!(f, "Historic baseline"),
            Self::StressTest => write!(f, "Stress test"),
        }
    }
}

impl ScenarioKind {
    /// Utility increases assumed by the scenario.
    pub fn increases(
        self,
        first_year_increase: Percentage,
        ongoing_increase: Percentage,
    ) -> (Percentage, Percentage) {
        match self {
            Self::Entered => (first_year_increase, ongoing_increase),
            Self::HistoricBaseline => (ongoing_increase, ongoing_increase),
            Self::StressTest => {
                (first_year_increase + STRESS_MARGIN, ongoing_increase + STRESS_MARGIN)
            }
        }
    }
}

/// Comparison under one set of assumptions; differences are annual, utility minus alternative.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct ScenarioSummary {
    pub kind: ScenarioKind,
    pub first_year_increase: Percentage,
    pub ongoing_increase: Percentage,
    pub first_year_difference: Dollars,
    pub final_year_difference: Dollars,
    pub cumulative_difference: Dollars,

    /// Monthly utility bill in the final year.
    pub final_utility_bill: Dollars,

    /// Monthly alternative plan bill in the final year.
    pub final_alternative_bill: Dollars,
}

impl Projector {
    /// Re-run the projection under every requested scenario, in their declaration order.
    #[instrument(level = "debug", skip_all, fields(n_scenarios = kinds.len()))]
    #[must_use]
    pub fn evaluate_scenarios(&self, kinds: EnumSet<ScenarioKind>) -> Vec<ScenarioSummary> {
        if !self.is_projectable() {
            return Vec::new();
        }
        let (first_year_increase, ongoing_increase) = self.utility_increases();
        kinds
            .iter()
            .filter_map(|kind| {
                let (first_year_increase, ongoing_increase) =
                    kind.increases(first_year_increase, ongoing_increase);
                let projection = Self {
                    first_year_increase,
                    ongoing_increase: Some(ongoing_increase),
                    ..self.clone()
                }
                .project();
                let annual_savings: Vec<Dollars> = projection.annual_savings().collect();
                Some(ScenarioSummary {
                    kind,
                    first_year_increase,
                    ongoing_increase,
                    first_year_difference: *annual_savings.first()?,
                    final_year_difference: *annual_savings.last()?,
                    cumulative_difference: annual_savings.iter().copied().sum(),
                    final_utility_bill: *projection.utility_bills.last()?,
                    final_alternative_bill: *projection.alternative_bills.last()?,
                })
            })
            .collect()
    }
}
