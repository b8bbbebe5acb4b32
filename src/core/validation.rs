use std::{
    fmt::{Display, Formatter},
    ops::RangeInclusive,
    str::FromStr,
};

use itertools::Itertools;

/// User-editable numeric input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    Charges,
    Usage,
    AnnualUsage,
    FirstYearIncrease,
    OngoingIncrease,
    AlternativeCost,
    AlternativeEscalation,
    Years,
}

impl Field {
    pub const ALL: [Self; 8] = [
        Self::Charges,
        Self::Usage,
        Self::AnnualUsage,
        Self::FirstYearIncrease,
        Self::OngoingIncrease,
        Self::AlternativeCost,
        Self::AlternativeEscalation,
        Self::Years,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Charges => "charges",
            Self::Usage => "usage",
            Self::AnnualUsage => "annual_usage",
            Self::FirstYearIncrease => "first_year_increase",
            Self::OngoingIncrease => "ongoing_increase",
            Self::AlternativeCost => "alternative_cost",
            Self::AlternativeEscalation => "alternative_escalation",
            Self::Years => "years",
        }
    }

    /// Accepted values, bounds included.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Charges | Self::AlternativeCost => 0.0..=5_000.0,
            Self::Usage => 0.0..=20_000.0,
            Self::AnnualUsage => 0.0..=240_000.0,
            Self::FirstYearIncrease | Self::OngoingIncrease => 0.0..=50.0,
            Self::AlternativeEscalation => 0.0..=20.0,
            Self::Years => 5.0..=20.0,
        }
    }

    /// Static description of the constraint, shown whenever the value is rejected.
    #[must_use]
    pub const fn constraint(self) -> &'static str {
        match self {
            Self::Charges => "Monthly charges must be between $0 and $5,000.",
            Self::Usage => "Monthly usage must be between 0 and 20,000 kWh.",
            Self::AnnualUsage => "Annual usage must be between 0 and 240,000 kWh.",
            Self::FirstYearIncrease => "First-year increase must be between 0% and 50%.",
            Self::OngoingIncrease => "Ongoing increase must be between 0% and 50%.",
            Self::AlternativeCost => "Alternative monthly cost must be between $0 and $5,000.",
            Self::AlternativeEscalation => "Alternative escalation must be between 0% and 20%.",
            Self::Years => "Projection horizon must be a whole number between 5 and 20 years.",
        }
    }

    fn accepts(self, value: f64) -> bool {
        value.is_finite()
            && self.range().contains(&value)
            && (self != Self::Years || value.fract() == 0.0)
    }

    /// Check the raw entry.
    ///
    /// Blank entries are accepted as [`None`], since a field is optional until the form is submitted.
    pub fn validate(self, raw: &str) -> Result<Option<f64>, Violation> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(value) if self.accepts(value) => Ok(Some(value)),
            _ => Err(Violation { field: self, message: self.constraint() }),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s.trim())
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct Violation {
    pub field: Field,
    pub message: &'static str,
}

/// Every rejected field of a form.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{}", .0.iter().join(" "))]
pub struct Violations(pub Vec<Violation>);
