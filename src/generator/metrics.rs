//! Sampling helpers shared by all record types.

use std::ops::RangeInclusive;

use rand::Rng;

/// Company identifiers are drawn from this range
pub const COMPANY_ID_RANGE: RangeInclusive<u32> = 1000..=1100;

/// Metric values are drawn from this range before rounding
pub const METRIC_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Probability that an optional metric is left blank
pub const MISSING_VALUE_PROBABILITY: f64 = 0.05;

/// Draw a company identifier
pub fn sample_company_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(COMPANY_ID_RANGE)
}

/// Draw a metric value rounded to two decimals
pub fn sample_metric<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    round_metric(rng.random_range(METRIC_RANGE))
}

/// Draw a metric that is missing with [`MISSING_VALUE_PROBABILITY`]
pub fn sample_optional_metric<R: Rng + ?Sized>(rng: &mut R) -> Option<f64> {
    if rng.random_bool(MISSING_VALUE_PROBABILITY) {
        None
    } else {
        Some(sample_metric(rng))
    }
}

/// Round to two decimal places
#[must_use]
pub fn round_metric(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
