use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{cost::Dollars, percentage::Percentage},
};

/// One row of the yearly breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct YearPoint {
    pub year: String,

    /// Monthly utility bill.
    pub utility_bill: Dollars,

    /// Monthly alternative plan bill.
    pub alternative_bill: Dollars,

    /// Monthly difference, negative when the alternative plan is more expensive.
    pub savings: Dollars,

    pub annual_savings: Dollars,

    /// Running sum of annual savings up to and including this year.
    pub cumulative_savings: Dollars,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PeakSavings {
    pub year: String,
    pub annual_savings: Dollars,
}

/// Aggregates over the whole projection.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Snapshot {
    pub first_year_savings: Dollars,
    pub final_year_savings: Dollars,
    pub five_year_cumulative: Dollars,
    pub total_cumulative: Dollars,

    /// First year with positive cumulative savings.
    pub break_even_year: Option<String>,

    /// Year with the highest annual savings, the earliest one on ties.
    pub peak_savings: PeakSavings,

    pub first_year_utility_cost: Dollars,
    pub first_year_alternative_cost: Dollars,
    pub total_utility_cost: Dollars,
    pub total_alternative_cost: Dollars,
    pub total_difference: Dollars,

    /// Share of the utility spending avoided over the whole horizon.
    pub savings_share: Option<Percentage>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct Report {
    pub points: Vec<YearPoint>,
    pub snapshot: Snapshot,
}

/// Number of years covered by [`Snapshot::five_year_cumulative`].
const SHORT_TERM_YEARS: usize = 5;

/// Build the yearly breakdown and the aggregates.
///
/// Nothing is derived from empty or mismatched series, and every year needs a label.
#[instrument(level = "debug", skip_all, fields(n_years = utility_bills.len()))]
pub fn derive_metrics(
    utility_bills: &[Dollars],
    alternative_bills: &[Dollars],
    year_labels: &[String],
) -> Option<Report> {
    let n_years = utility_bills.len();
    if n_years == 0 || alternative_bills.len() != n_years || year_labels.len() < n_years {
        return None;
    }

    let mut cumulative_savings = Dollars::ZERO;
    let points: Vec<YearPoint> = utility_bills
        .iter()
        .zip(alternative_bills)
        .zip(year_labels)
        .map(|((utility_bill, alternative_bill), year)| {
            let savings = *utility_bill - *alternative_bill;
            let annual_savings = savings * 12.0;
            cumulative_savings += annual_savings;
            YearPoint {
                year: year.clone(),
                utility_bill: *utility_bill,
                alternative_bill: *alternative_bill,
                savings,
                annual_savings,
                cumulative_savings,
            }
        })
        .collect();

    let first = points.first()?;
    let last = points.last()?;
    let peak = points.iter().skip(1).fold(first, |peak, point| {
        if point.annual_savings > peak.annual_savings { point } else { peak }
    });
    let total_utility_cost: Dollars = utility_bills.iter().map(|bill| *bill * 12.0).sum();
    let total_alternative_cost: Dollars = alternative_bills.iter().map(|bill| *bill * 12.0).sum();
    let total_cumulative = last.cumulative_savings;

    let snapshot = Snapshot {
        first_year_savings: first.annual_savings,
        final_year_savings: last.annual_savings,
        five_year_cumulative: points[n_years.min(SHORT_TERM_YEARS) - 1].cumulative_savings,
        total_cumulative,
        break_even_year: points
            .iter()
            .find(|point| point.cumulative_savings > Dollars::ZERO)
            .map(|point| point.year.clone()),
        peak_savings: PeakSavings { year: peak.year.clone(), annual_savings: peak.annual_savings },
        first_year_utility_cost: first.utility_bill * 12.0,
        first_year_alternative_cost: first.alternative_bill * 12.0,
        total_utility_cost,
        total_alternative_cost,
        total_difference: total_utility_cost - total_alternative_cost,
        savings_share: (total_cumulative != Dollars::ZERO && total_utility_cost != Dollars::ZERO)
            .then(|| Percentage(total_cumulative / total_utility_cost * 100.0)),
    };
    debug!(
        total_cumulative = ?snapshot.total_cumulative,
        break_even_year = ?snapshot.break_even_year,
        "derived"
    );
    Some(Report { points, snapshot })
}
