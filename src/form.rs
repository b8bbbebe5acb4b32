//! Raw user entries, as typed, before they become [`Inputs`].

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        calculation::Inputs,
        horizon::Horizon,
        projection::DEFAULT_ALTERNATIVE_ESCALATION,
        scenario::ScenarioKind,
        validation::{Field, Violations},
    },
    prelude::*,
    quantity::{cost::Dollars, energy::KilowattHours, percentage::Percentage},
    utility::Utility,
};

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, clap::Args)]
#[serde(default)]
pub struct Form {
    /// Charges on the most recent bill, in dollars.
    #[clap(long, env = "MONTHLY_CHARGES")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<String>,

    /// Usage on the most recent bill, in kilowatt-hours.
    #[clap(long, env = "MONTHLY_USAGE_KWH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Usage over the past year, in kilowatt-hours.
    #[clap(long, env = "ANNUAL_USAGE_KWH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_usage: Option<String>,

    /// Utility increase going into the first projected year, in percent.
    #[clap(long, env = "FIRST_YEAR_INCREASE_PERCENT", allow_hyphen_values = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_year_increase: Option<String>,

    /// Utility increase for the following years, in percent. Defaults to the first-year increase.
    #[clap(long, env = "ONGOING_INCREASE_PERCENT", allow_hyphen_values = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ongoing_increase: Option<String>,

    /// Monthly cost of the alternative plan, in dollars.
    #[clap(long, env = "ALTERNATIVE_MONTHLY_COST")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_cost: Option<String>,

    /// Annual escalation of the alternative plan, in percent. Defaults to 3.5 %.
    #[clap(long, env = "ALTERNATIVE_ESCALATION_PERCENT", allow_hyphen_values = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_escalation: Option<String>,

    /// Number of projected years, 5 to 20. Defaults to 10.
    #[clap(long, env = "HORIZON_YEARS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<String>,

    /// Utility company: `sce` or `ladwp`.
    #[clap(long, env = "UTILITY")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utility: Option<String>,
}

impl Form {
    fn entry(&self, field: Field) -> Option<&str> {
        match field {
            Field::Charges => self.charges.as_deref(),
            Field::Usage => self.usage.as_deref(),
            Field::AnnualUsage => self.annual_usage.as_deref(),
            Field::FirstYearIncrease => self.first_year_increase.as_deref(),
            Field::OngoingIncrease => self.ongoing_increase.as_deref(),
            Field::AlternativeCost => self.alternative_cost.as_deref(),
            Field::AlternativeEscalation => self.alternative_escalation.as_deref(),
            Field::Years => self.years.as_deref(),
        }
    }

    /// Validated number, [`None`] for blank or rejected entries.
    fn number(&self, field: Field) -> Option<f64> {
        self.entry(field).and_then(|raw| field.validate(raw).ok().flatten())
    }

    /// Check every entry and collect all the violations.
    pub fn validate(&self) -> Result<(), Violations> {
        let violations: Vec<_> = Field::ALL
            .into_iter()
            .filter_map(|field| field.validate(self.entry(field)?).err())
            .collect();
        if violations.is_empty() { Ok(()) } else { Err(Violations(violations)) }
    }

    #[must_use]
    pub fn utility(&self) -> Utility {
        Utility::from_location(self.utility.as_deref(), None)
    }

    /// Submit the form.
    ///
    /// Fails if any entry is invalid. Returns [`None`] if the charges, the monthly usage,
    /// or the annual usage are blank or zero.
    pub fn submit(
        &self,
        start_year: i32,
        scenarios: EnumSet<ScenarioKind>,
    ) -> Result<Option<Inputs>> {
        self.validate()?;

        let (Some(charges), Some(usage), Some(annual_usage)) = (
            self.number(Field::Charges).filter(|value| *value > 0.0),
            self.number(Field::Usage).filter(|value| *value > 0.0),
            self.number(Field::AnnualUsage).filter(|value| *value > 0.0),
        ) else {
            info!("charges, usage, and annual usage are required");
            return Ok(None);
        };

        let horizon = self
            .number(Field::Years)
            .map(Horizon::from_whole_years)
            .transpose()
            .context("invalid projection horizon")?
            .unwrap_or_default();

        let inputs = Inputs::builder()
            .monthly_charges(Dollars::from(charges))
            .monthly_usage(KilowattHours::from(usage))
            .annual_usage(KilowattHours::from(annual_usage))
            .first_year_increase(
                self.number(Field::FirstYearIncrease).map_or(Percentage::ZERO, Percentage),
            )
            .maybe_ongoing_increase(self.number(Field::OngoingIncrease).map(Percentage))
            .maybe_alternative_cost(
                self.number(Field::AlternativeCost)
                    .filter(|value| *value > 0.0)
                    .map(Dollars::from),
            )
            .alternative_escalation(
                self.number(Field::AlternativeEscalation)
                    .map_or(DEFAULT_ALTERNATIVE_ESCALATION, Percentage),
            )
            .horizon(horizon)
            .start_year(start_year)
            .scenarios(scenarios)
            .build();
        Ok(Some(inputs))
    }

    /// Encode the form as a URL query string.
    pub fn to_query(&self) -> Result<String> {
        let mut form = self.clone();
        form.utility = Some(self.utility().id().to_owned());
        serde_qs::to_string(&form).context("failed to encode the form")
    }

    /// Restore the form from a share link, a bare query string, or a `?query#fragment` tail.
    ///
    /// A recognised utility in the fragment is used when the query does not select one.
    pub fn from_location(location: &str) -> Result<Self> {
        let location = location.trim();
        let (rest, fragment) = match location.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (location, None),
        };
        let query = rest.split_once('?').map_or(rest, |(_, query)| query);
        let mut form: Self = if query.is_empty() {
            Self::default()
        } else {
            serde_qs::from_str(query).with_context(|| format!("failed to parse `{query}`"))?
        };
        form.utility =
            Some(Utility::from_location(form.utility.as_deref(), fragment).id().to_owned());
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn form() -> Form {
        Form {
            charges: Some("120".to_owned()),
            usage: Some("600".to_owned()),
            annual_usage: Some("7200".to_owned()),
            first_year_increase: Some("10".to_owned()),
            alternative_cost: Some("100".to_owned()),
            ..Form::default()
        }
    }

    #[test]
    fn test_submit() {
        let inputs = form().submit(2025, EnumSet::all()).unwrap().unwrap();
        assert_eq!(inputs.monthly_charges, Dollars::from(120.0));
        assert_eq!(inputs.first_year_increase, Percentage(10.0));
        assert_eq!(inputs.ongoing_increase, None);
        assert_eq!(inputs.alternative_cost, Some(Dollars::from(100.0)));
        assert_eq!(inputs.alternative_escalation, DEFAULT_ALTERNATIVE_ESCALATION);
        assert_eq!(inputs.horizon, Horizon::default());

        let outcome = inputs.calculate();
        assert_abs_diff_eq!(outcome.projected_monthly_bill.unwrap().0, 132.0, epsilon = 1e-9);
    }

    #[test]
    fn test_submit_collects_all_violations() {
        let form = Form {
            charges: Some("lots".to_owned()),
            first_year_increase: Some("51".to_owned()),
            years: Some("30".to_owned()),
            ..form()
        };
        let error = form.submit(2025, EnumSet::all()).unwrap_err();
        let violations = error.downcast_ref::<Violations>().unwrap();
        let fields: Vec<_> = violations.0.iter().map(|violation| violation.field).collect();
        assert_eq!(fields, [Field::Charges, Field::FirstYearIncrease, Field::Years]);
    }

    #[test]
    fn test_submit_without_required_values() {
        let blank_usage = Form { usage: Some(" ".to_owned()), ..form() };
        assert!(blank_usage.submit(2025, EnumSet::all()).unwrap().is_none());
        let zero_charges = Form { charges: Some("0".to_owned()), ..form() };
        assert!(zero_charges.submit(2025, EnumSet::all()).unwrap().is_none());
    }

    #[test]
    fn test_submit_without_alternative() {
        let form = Form { alternative_cost: Some("0".to_owned()), ..form() };
        let inputs = form.submit(2025, EnumSet::all()).unwrap().unwrap();
        assert_eq!(inputs.alternative_cost, None);
        assert!(!inputs.calculate().is_comparable());
    }

    #[test]
    fn test_horizon_validation_agrees_with_submission() {
        let whole = Form { years: Some("10.0".to_owned()), ..form() };
        assert!(whole.validate().is_ok());
        let inputs = whole.submit(2025, EnumSet::all()).unwrap().unwrap();
        assert_eq!(inputs.horizon.years(), 10);

        let fractional = Form { years: Some("7.5".to_owned()), ..form() };
        let violations = fractional.validate().unwrap_err();
        assert_eq!(violations.0[0].field, Field::Years);
        let error = fractional.submit(2025, EnumSet::all()).unwrap_err();
        assert!(error.downcast_ref::<Violations>().is_some());
    }

    #[test]
    fn test_share_link() {
        let form = Form { utility: Some("LADWP".to_owned()), years: Some("15".to_owned()), ..form() };
        let query = form.to_query().unwrap();
        assert!(query.contains("utility=ladwp"));
        let restored = Form::from_location(&format!("https://example.com/?{query}")).unwrap();
        assert_eq!(restored.charges.as_deref(), Some("120"));
        assert_eq!(restored.years.as_deref(), Some("15"));
        assert_eq!(restored.utility(), Utility::Ladwp);
    }

    #[test]
    fn test_location_fragment() {
        let form = Form::from_location("?charges=99.5#ladwp").unwrap();
        assert_eq!(form.charges.as_deref(), Some("99.5"));
        assert_eq!(form.utility(), Utility::Ladwp);

        let form = Form::from_location("?utility=unknown").unwrap();
        assert_eq!(form.utility(), Utility::Sce);
    }
}
