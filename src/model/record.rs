use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive as _;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    /// Unable to represent the value as a decimal.
    #[error("Value {0} is not representable as a decimal amount")]
    NotRepresentable(f64),

    /// Amounts are aggregates of transaction values and must not go below
    /// zero.
    #[error("Amount must not be negative: {0}")]
    Negative(f64),
}

/// Sum of all transaction values within one hour.
///
/// Always carries exactly two fractional digits, so `1234.5` serializes as
/// `1234.50`.
#[derive(Copy, Clone, Debug, Default, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TotalAmount(Decimal);

impl TotalAmount {
    /// Round to 2 decimal places (midpoint away from zero) and pin the scale
    /// so the two-digit form survives serialization.
    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if value < 0.0 {
            return Err(AmountError::Negative(value));
        }

        let mut amount =
            Decimal::from_f64(value).ok_or(AmountError::NotRepresentable(value))?;
        amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(2);

        Ok(Self(amount))
    }
}

impl fmt::Display for TotalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One row of the output table: aggregated transaction activity for one hour
/// of one day.
///
/// Field order matches the serialized column order:
/// `date,day,hour,number_of_transactions,total_amount`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct HourlyRecord {
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// English weekday name, derived from `date`.
    pub day: String,

    /// Hour of day in `[0, 23]`.
    pub hour: u32,

    /// Number of transactions in that hour.
    pub number_of_transactions: u64,

    /// Sum of all transaction values in that hour.
    pub total_amount: TotalAmount,
}

impl HourlyRecord {
    pub fn new(date: NaiveDate, hour: u32, count: u64, total_amount: TotalAmount) -> Self {
        Self {
            date,
            day: date.format("%A").to_string(),
            hour,
            number_of_transactions: count,
            total_amount,
        }
    }
}
