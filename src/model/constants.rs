/// Seed for the pseudo-random source. Fixed so that repeated runs are
/// byte-identical.
pub const DEFAULT_SEED: u64 = 0;

/// Month generated by the `txgen` binary.
pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_MONTH: u32 = 1;

/// Output location for the `txgen` binary. Missing parent directories are
/// created on write.
pub const DEFAULT_PATH_OUTPUT: &str = "data/data.csv";

/// Bounds for the uniform base transaction volume draw, inclusive.
pub const BASE_TX_MIN: u32 = 1_000;
pub const BASE_TX_MAX: u32 = 10_000;

/// Bounds for the uniform average transaction value draw, inclusive.
pub const AVG_VALUE_MIN: u32 = 1_000;
pub const AVG_VALUE_MAX: u32 = 1_000_000;

/// Expected volume on Saturday and Sunday relative to weekdays.
pub const WEEKEND_MULTIPLIER: f64 = 1.1;

/// Gaussian spread of the hourly transaction count around its base.
pub const COUNT_STD_DEV_RATIO: f64 = 0.25;

/// Half-width of the symmetric noise applied to the average value.
pub const AVG_VALUE_NOISE: f64 = 0.1;
