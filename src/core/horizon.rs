use std::str::FromStr;

/// Number of projected years.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Horizon(u16);

impl Horizon {
    pub const MIN: u16 = 5;
    pub const MAX: u16 = 20;
    pub const DEFAULT: Self = Self(10);

    pub const fn years(self) -> usize {
        self.0 as usize
    }

    /// Sequential calendar year labels, starting with `start_year`.
    #[must_use]
    pub fn year_labels(self, start_year: i32) -> Vec<String> {
        (start_year..).take(self.years()).map(|year| year.to_string()).collect()
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum HorizonError {
    #[error("`{0}` is not a whole number of years")]
    NotANumber(String),

    #[error(
        "the horizon must be between {min} and {max} years, got {0}",
        min = Horizon::MIN,
        max = Horizon::MAX
    )]
    OutOfRange(f64),
}

impl Horizon {
    /// Accept a number of years entered as a decimal, as long as it is whole.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_whole_years(years: f64) -> Result<Self, HorizonError> {
        if !years.is_finite() || years.fract() != 0.0 {
            return Err(HorizonError::NotANumber(years.to_string()));
        }
        if !(f64::from(Self::MIN)..=f64::from(Self::MAX)).contains(&years) {
            return Err(HorizonError::OutOfRange(years));
        }
        Ok(Self(years as u16))
    }
}

impl TryFrom<u16> for Horizon {
    type Error = HorizonError;

    fn try_from(years: u16) -> Result<Self, Self::Error> {
        Self::from_whole_years(f64::from(years))
    }
}

impl FromStr for Horizon {
    type Err = HorizonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let years: f64 = s.trim().parse().map_err(|_| HorizonError::NotANumber(s.to_owned()))?;
        Self::from_whole_years(years)
    }
}
