use crate::model::{constants, AmountError, HourlyRecord, Stats, TotalAmount};
use chrono::{Datelike as _, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};
use rand_distr::{Distribution as _, Normal};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// `month` is outside 1-12, or (year, month) cannot form a calendar date.
    #[error("Invalid date: year {year}, month {month}")]
    InvalidDate { year: i32, month: u32 },

    #[error("Distribution parameter error")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("Amount conversion error")]
    Amount(#[from] AmountError),
}

/// Produces the ordered hourly transaction records for a calendar month.
///
/// The generator holds only its seed. Every call to [`generate_month`]
/// constructs a fresh pseudo-random source from that seed, so two calls with
/// the same (year, month) yield bit-identical output, and concurrent calls
/// share no mutable state.
///
/// [`generate_month`]: Generator::generate_month
#[derive(Debug)]
pub struct Generator {
    seed: u64,
}

impl Generator {
    pub fn new() -> Self {
        Self::with_seed(constants::DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Generate one record per hour for every day of the requested month, in
    /// ascending (date, hour) order.
    ///
    /// The random draws behind each record happen in a fixed order (volume
    /// base, Gaussian count, value base, value noise). With the seed, that
    /// order is part of the output contract: reordering draws changes every
    /// record from that point on.
    pub fn generate_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<HourlyRecord>, GenerateError> {
        let invalid_date = GenerateError::InvalidDate { year, month };
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(invalid_date)?;
        let end = match month {
            12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
            _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
        }
        .ok_or(GenerateError::InvalidDate { year, month })?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut stats = Stats::default();
        let mut records = Vec::with_capacity((end - start).num_days() as usize * 24);

        for date in start.iter_days().take_while(|date| *date < end) {
            let weekend = if date.weekday().num_days_from_monday() < 5 {
                1.0
            } else {
                constants::WEEKEND_MULTIPLIER
            };

            for hour in 0..24 {
                let base = hourly_base_transactions(hour, &mut rng);
                let tx_raw = Normal::new(base * weekend, base * constants::COUNT_STD_DEV_RATIO)?
                    .sample(&mut rng);
                // Round to the nearest whole transaction, then clamp at zero.
                let count = tx_raw.round().max(0.0) as u64;

                let avg_base = hourly_avg_value(hour, &mut rng);
                let noise =
                    rng.gen_range(-constants::AVG_VALUE_NOISE..constants::AVG_VALUE_NOISE);
                let avg = avg_base * (1.0 + noise);
                let total_amount = TotalAmount::from_f64(count as f64 * avg)?;

                records.push(HourlyRecord::new(date, hour, count, total_amount));
                stats.inc_records();
            }

            stats.inc_days();
            debug!("Generated 24 records for {date}");
        }

        stats.pretty_print();

        Ok(records)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Base transaction volume for one hour, drawn uniformly from
/// `BASE_TX_MIN..=BASE_TX_MAX`.
///
/// `hour` is accepted but does not influence the draw.
// TODO: reinstate an hour-of-day activity curve (e.g. a midday peak) if the
// flat draw is confirmed unintended. Doing so changes every output row.
fn hourly_base_transactions(_hour: u32, rng: &mut StdRng) -> f64 {
    f64::from(rng.gen_range(constants::BASE_TX_MIN..=constants::BASE_TX_MAX))
}

/// Average transaction value for one hour, drawn uniformly from
/// `AVG_VALUE_MIN..=AVG_VALUE_MAX`.
///
/// `hour` is accepted but does not influence the draw.
fn hourly_avg_value(_hour: u32, rng: &mut StdRng) -> f64 {
    f64::from(rng.gen_range(constants::AVG_VALUE_MIN..=constants::AVG_VALUE_MAX))
}
