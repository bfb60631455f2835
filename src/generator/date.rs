//! Uniform sampling of calendar dates.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;

use crate::error::{GeneratorError, Result};

/// First year of the reporting period covered by the datasets
pub const DEFAULT_START_YEAR: i32 = 2023;

/// Last year of the reporting period covered by the datasets
pub const DEFAULT_END_YEAR: i32 = 2025;

/// Closed range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from two dates, both inclusive
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(GeneratorError::InvalidRange(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Range from January 1st of `start_year` to December 31st of `end_year`
    pub fn years(start_year: i32, end_year: i32) -> Result<Self> {
        if start_year > end_year {
            return Err(GeneratorError::InvalidRange(format!(
                "start year {start_year} is after end year {end_year}"
            )));
        }

        let start = NaiveDate::from_ymd_opt(start_year, 1, 1).ok_or_else(|| {
            GeneratorError::InvalidRange(format!("year {start_year} is out of range"))
        })?;
        let end = NaiveDate::from_ymd_opt(end_year, 12, 31).ok_or_else(|| {
            GeneratorError::InvalidRange(format!("year {end_year} is out of range"))
        })?;

        Self::new(start, end)
    }

    /// Range covering the default reporting period
    pub fn reporting_period() -> Result<Self> {
        Self::years(DEFAULT_START_YEAR, DEFAULT_END_YEAR)
    }

    /// First day of the range
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days between start and end
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Years touched by the range, inclusive
    #[must_use]
    pub fn year_span(&self) -> std::ops::RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }

    /// Draw a day uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let offset = rng.random_range(0..=self.span_days());
        self.start + Duration::days(offset)
    }
}

/// Random `YYYY-MM-DD` date between the start of `start_year` and the end of `end_year`
pub fn random_date_string<R: Rng + ?Sized>(
    rng: &mut R,
    start_year: i32,
    end_year: i32,
) -> Result<String> {
    let range = DateRange::years(start_year, end_year)?;
    Ok(range.sample(rng).format("%Y-%m-%d").to_string())
}
