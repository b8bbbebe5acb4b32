//! Plain-text renditions of an [`Outcome`] for copying and downloading.

use std::fmt::{Display, Formatter};

use crate::{
    core::{
        calculation::{Inputs, Outcome},
        metrics::YearPoint,
    },
    fmt::{Cents, OrDash, WholeDollars},
    prelude::*,
    utility::Utility,
};

/// Yearly breakdown as comma-separated values, amounts rounded to cents.
pub fn to_csv(points: &[YearPoint], utility: Utility) -> Result<String> {
    let utility_header = format!("{} monthly bill", utility.label());
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "Year",
            utility_header.as_str(),
            "Alternative monthly bill",
            "Monthly savings",
            "Annual savings",
            "Cumulative savings",
        ])
        .context("failed to write the header")?;
    for point in points {
        let amounts = [
            point.utility_bill,
            point.alternative_bill,
            point.savings,
            point.annual_savings,
            point.cumulative_savings,
        ]
        .map(|amount| format!("{:.2}", amount.round_to_cents().0));
        let record = std::iter::once(point.year.as_str()).chain(amounts.iter().map(String::as_str));
        writer
            .write_record(record)
            .with_context(|| format!("failed to write the row for {}", point.year))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| error.into_error())
        .context("failed to flush the rows")?;
    String::from_utf8(bytes).context("the rows are not valid UTF-8")
}

/// Human-readable summary, suitable for pasting into a message.
pub struct Summary<'a> {
    pub inputs: &'a Inputs,
    pub outcome: &'a Outcome,
    pub utility: Utility,
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { inputs, outcome, utility } = self;
        writeln!(f, "{} ({}) bill projection", utility.label(), utility.description())?;
        writeln!(f, "Rate: {}", OrDash(outcome.rate))?;
        writeln!(f, "Average monthly cost: {}", OrDash(outcome.average_monthly_cost.map(Cents)))?;
        writeln!(
            f,
            "Monthly bill with {} change: {}",
            inputs.first_year_increase,
            OrDash(outcome.projected_monthly_bill.map(Cents)),
        )?;

        let Some(report) = &outcome.report else {
            return Ok(());
        };
        let snapshot = &report.snapshot;
        writeln!(f)?;
        writeln!(f, "Year one savings: {}", WholeDollars(snapshot.first_year_savings))?;
        writeln!(
            f,
            "{}-year savings: {}",
            report.points.len(),
            WholeDollars(snapshot.total_cumulative),
        )?;
        writeln!(f, "Break-even year: {}", OrDash(snapshot.break_even_year.as_ref()))?;
        writeln!(
            f,
            "Peak savings: {} in {}",
            WholeDollars(snapshot.peak_savings.annual_savings),
            snapshot.peak_savings.year,
        )?;
        writeln!(f, "Alternative plan escalates at {} annually.", inputs.alternative_escalation)?;

        if !outcome.scenarios.is_empty() {
            writeln!(f)?;
            for scenario in &outcome.scenarios {
                writeln!(
                    f,
                    "{}: {} cumulative, {} in the final year",
                    scenario.kind,
                    WholeDollars(scenario.cumulative_difference),
                    WholeDollars(scenario.final_year_difference),
                )?;
            }
        }
        Ok(())
    }
}

#[must_use]
pub fn to_text(inputs: &Inputs, outcome: &Outcome, utility: Utility) -> String {
    Summary { inputs, outcome, utility }.to_string()
}

pub fn to_json(outcome: &Outcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("failed to serialize the outcome")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{cost::Dollars, energy::KilowattHours, percentage::Percentage};

    fn inputs() -> Inputs {
        Inputs::builder()
            .monthly_charges(Dollars::from(120.0))
            .monthly_usage(KilowattHours::from(600.0))
            .annual_usage(KilowattHours::from(7200.0))
            .first_year_increase(Percentage(10.0))
            .ongoing_increase(Percentage(10.0))
            .alternative_cost(Dollars::from(100.0))
            .start_year(2025)
            .build()
    }

    #[test]
    fn test_csv() {
        let outcome = inputs().calculate();
        let csv = to_csv(&outcome.report.unwrap().points, Utility::Sce).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("Year,SCE monthly bill,"));
        assert_eq!(lines[1], "2025,132.00,100.00,32.00,384.00,384.00");
        assert!(lines[2].starts_with("2026,145.20,103.50,41.70,500.40,884.40"));
    }

    #[test]
    fn test_csv_quotes_fields() {
        let mut points = inputs().calculate().report.unwrap().points;
        points.truncate(1);
        points[0].year = "2025, est.".to_owned();
        let csv = to_csv(&points, Utility::Ladwp).unwrap();
        assert_eq!(csv.lines().nth(1), Some("\"2025, est.\",132.00,100.00,32.00,384.00,384.00"));
    }

    #[test]
    fn test_text() {
        let inputs = inputs();
        let text = to_text(&inputs, &inputs.calculate(), Utility::Ladwp);
        assert!(text.starts_with("LADWP (Los Angeles Department of Water and Power)"));
        assert!(text.contains("Rate: $0.20/kWh"));
        assert!(text.contains("Monthly bill with 10.0% change: $132.00"));
        assert!(text.contains("Year one savings: $384"));
        assert!(text.contains("Break-even year: 2025"));
        assert!(text.contains("Stress test: "));
    }

    #[test]
    fn test_text_without_alternative() {
        let inputs = Inputs { alternative_cost: None, ..inputs() };
        let text = to_text(&inputs, &inputs.calculate(), Utility::Sce);
        assert!(!text.contains("Break-even"));
    }

    #[test]
    fn test_json() {
        let json = to_json(&inputs().calculate()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["report"]["snapshot"]["break_even_year"], "2025");
        assert_eq!(value["scenarios"][1]["kind"], "historic-baseline");
        assert!(value.get("projection").is_none());
    }
}
