//! Human-facing money formatting, applied only at the output boundary.

use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use crate::quantity::cost::Dollars;

/// Placeholder for values that cannot be computed yet.
pub const DASH: &str = "—";

/// Dollars and cents with thousands separators: `$1,234.56`.
pub struct Cents(pub Dollars);

impl Display for Cents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_dollars(f, self.0, 2)
    }
}

impl Debug for Cents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Whole dollars with thousands separators: `$1,235`.
pub struct WholeDollars(pub Dollars);

impl Display for WholeDollars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_dollars(f, self.0, 0)
    }
}

/// Either the value or [`DASH`].
pub struct OrDash<T>(pub Option<T>);

impl<T: Display> Display for OrDash<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(value) => Display::fmt(value, f),
            None => f.write_str(DASH),
        }
    }
}

fn write_dollars(f: &mut Formatter<'_>, amount: Dollars, precision: usize) -> std::fmt::Result {
    if !amount.is_finite() {
        return f.write_str(DASH);
    }
    let formatted = format!("{:.precision$}", amount.0.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    // Skip the sign when the amount rounds to zero:
    if amount.0 < 0.0 && formatted.bytes().any(|byte| byte.is_ascii_digit() && byte != b'0') {
        f.write_str("-")?;
    }
    write!(f, "${}", group_thousands(integer))?;
    if !fraction.is_empty() {
        write!(f, ".{fraction}")?;
    }
    Ok(())
}

fn group_thousands(digits: &str) -> String {
    let head = digits.len() % 3;
    let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
    if head != 0 {
        groups.push(&digits[..head]);
    }
    groups.extend((head..digits.len()).step_by(3).map(|start| &digits[start..start + 3]));
    groups.into_iter().join(",")
}
