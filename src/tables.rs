use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        calculation::{Inputs, Outcome},
        metrics::{Snapshot, YearPoint},
        scenario::ScenarioSummary,
    },
    fmt::{Cents, OrDash, WholeDollars},
    quantity::cost::Dollars,
    utility::Utility,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn savings_color(amount: Dollars) -> Color {
    if amount > Dollars::ZERO {
        Color::Green
    } else if amount < Dollars::ZERO {
        Color::Red
    } else {
        Color::Reset
    }
}

fn money_cell(amount: Dollars) -> Cell {
    Cell::new(Cents(amount)).set_alignment(CellAlignment::Right)
}

fn savings_cell(amount: Dollars) -> Cell {
    money_cell(amount).fg(savings_color(amount))
}

/// Current rate, average monthly cost, and the first-year bill, along with how they were derived.
#[must_use]
pub fn build_bill_table(inputs: &Inputs, outcome: &Outcome, utility: Utility) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Value", "Derivation"]);
    table.add_row(vec![
        Cell::new("Rate per kWh").add_attribute(Attribute::Bold),
        Cell::new(OrDash(outcome.rate)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{} / {}", Cents(inputs.monthly_charges), inputs.monthly_usage))
            .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Average monthly cost").add_attribute(Attribute::Bold),
        Cell::new(OrDash(outcome.average_monthly_cost.map(Cents)))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{} × {} ÷ 12", inputs.annual_usage, OrDash(outcome.rate)))
            .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new(format!("Monthly {utility} bill with change")).add_attribute(Attribute::Bold),
        Cell::new(OrDash(outcome.projected_monthly_bill.map(Cents)))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!(
            "{} × (1 + {})",
            OrDash(outcome.average_monthly_cost.map(Cents)),
            inputs.first_year_increase,
        ))
        .add_attribute(Attribute::Dim),
    ]);
    table
}

/// Year-by-year monthly bills and savings.
#[must_use]
pub fn build_breakdown_table(points: &[YearPoint], utility: Utility) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Year"),
        Cell::new(format!("{utility}\nmonthly")).fg(Color::DarkYellow),
        Cell::new("Alternative\nmonthly").fg(Color::Blue),
        Cell::new("Monthly\nsavings"),
        Cell::new("Annual\nsavings"),
        Cell::new("Cumulative\nsavings"),
    ]);
    for point in points {
        table.add_row(vec![
            Cell::new(&point.year),
            money_cell(point.utility_bill),
            money_cell(point.alternative_bill),
            savings_cell(point.savings),
            savings_cell(point.annual_savings),
            savings_cell(point.cumulative_savings).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// Aggregates over the horizon.
#[must_use]
pub fn build_metrics_table(snapshot: &Snapshot, n_years: usize, utility: Utility) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    let mut add_row = |label: &str, value: String| {
        table.add_row(vec![Cell::new(label), Cell::new(value).set_alignment(CellAlignment::Right)]);
    };
    add_row("Year one savings", WholeDollars(snapshot.first_year_savings).to_string());
    add_row(
        &format!("Projected {utility} year one cost"),
        WholeDollars(snapshot.first_year_utility_cost).to_string(),
    );
    add_row(
        "Alternative year one cost",
        WholeDollars(snapshot.first_year_alternative_cost).to_string(),
    );
    add_row("Final year savings", WholeDollars(snapshot.final_year_savings).to_string());
    add_row(
        "Five-year cumulative savings",
        WholeDollars(snapshot.five_year_cumulative).to_string(),
    );
    add_row(
        &format!("{n_years}-year savings projection"),
        WholeDollars(snapshot.total_cumulative).to_string(),
    );
    add_row(&format!("Total {utility} cost"), WholeDollars(snapshot.total_utility_cost).to_string());
    add_row("Total alternative cost", WholeDollars(snapshot.total_alternative_cost).to_string());
    add_row(&format!("Share of {utility} costs avoided"), OrDash(snapshot.savings_share).to_string());
    add_row("Break-even year", OrDash(snapshot.break_even_year.as_ref()).to_string());
    add_row(
        "Peak annual savings year",
        format!(
            "{}: {}",
            snapshot.peak_savings.year,
            WholeDollars(snapshot.peak_savings.annual_savings),
        ),
    );
    table
}

/// Side-by-side comparison of the scenarios.
#[must_use]
pub fn build_scenarios_table(scenarios: &[ScenarioSummary], utility: Utility) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Scenario"),
        Cell::new("First year\nincrease"),
        Cell::new("Ongoing\nincrease"),
        Cell::new("Year one\ndifference"),
        Cell::new("Final year\ndifference"),
        Cell::new("Cumulative\ndifference"),
        Cell::new(format!("Final {utility}\nmonthly")).fg(Color::DarkYellow),
        Cell::new("Final alternative\nmonthly").fg(Color::Blue),
    ]);
    for scenario in scenarios {
        table.add_row(vec![
            Cell::new(scenario.kind).add_attribute(Attribute::Bold),
            Cell::new(scenario.first_year_increase).set_alignment(CellAlignment::Right),
            Cell::new(scenario.ongoing_increase).set_alignment(CellAlignment::Right),
            savings_cell(scenario.first_year_difference),
            savings_cell(scenario.final_year_difference),
            savings_cell(scenario.cumulative_difference),
            money_cell(scenario.final_utility_bill),
            money_cell(scenario.final_alternative_bill),
        ]);
    }
    table
}
