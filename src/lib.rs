//! Conversion between Gregorian instants and dates of the French Republican
//! calendar, with decimal time of day.
//!
//! Three rules align French years with the Gregorian calendar (see
//! [`CalculationMethod`]). Dates strictly inside the years the calendar was in
//! use (1792-09-22 to 1811-09-23) always follow the equinox rule.
//!
//! ```
//! use french_revolutionary_calendar::{
//!     CalculationMethod, FrenchRevolutionaryCalendar, GregorianInstant, Language,
//! };
//! use jiff::tz::TimeZone;
//!
//! let calendar = FrenchRevolutionaryCalendar::new(Language::English, CalculationMethod::Romme)
//!     .with_time_zone(TimeZone::UTC);
//! let instant = GregorianInstant::new(1796, 8, 4, 11, 30, 30, TimeZone::UTC)?;
//! let date = calendar.to_french(&instant)?;
//! assert_eq!(date.to_string(), "4-11-17 4:79:51");
//! assert_eq!(date.day_of_year_name(), "Flax");
//! assert_eq!(calendar.to_gregorian(&date)?, instant);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod anchors;
mod config;
mod consts;
mod date;
pub mod engine;
pub mod equinox;
mod format;
mod instant;
pub mod labels;
mod prelude;
mod time;
mod types;

pub use anchors::EpochAnchors;
pub use config::CalendarConfig;
pub use consts::*;
pub use date::FrenchDate;
pub use format::{DEFAULT_PATTERN, FormattedDate};
pub use instant::GregorianInstant;
pub use labels::{Labels, labels_for, labels_for_code};
pub use time::{DecimalTime, decimal_to_time, time_to_decimal};
pub use types::{CalculationMethod, DailyObjectType, Day, Language, Month};

use crate::prelude::*;
use engine::engine_for;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {month}")]
    InvalidDay { month: u8, day: u8 },
    #[display(fmt = "Invalid day in year: {} (must be 1-{})", "_0", MAX_DAY_IN_YEAR)]
    InvalidDayInYear(i64),
    #[display(fmt = "Invalid decimal time {hour}:{minute:02}:{second:02}")]
    InvalidDecimalTime { hour: u8, minute: u8, second: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Failure of a conversion. A call either fully succeeds or fails as a whole.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// No autumn equinox is known for a Gregorian year the computation needs
    #[error("no autumn equinox known for Gregorian year {year}")]
    UnsupportedYear { year: i32 },
    /// A calculation method name that does not match any known method
    #[error("unsupported calculation method: {method}")]
    UnsupportedConversion { method: String },
    /// A French year too large for the method's arithmetic
    #[error("French year {year} is out of range")]
    YearOutOfRange { year: i32 },
    #[error("unknown time zone {name}")]
    UnknownTimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },
    #[error(transparent)]
    InvalidDate(#[from] DateError),
    /// Civil or absolute time arithmetic left the supported range
    #[error("date arithmetic out of range: {0}")]
    OutOfRange(#[from] jiff::Error),
}

/// Converter between Gregorian instants and French Republican dates.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct FrenchRevolutionaryCalendar {
    language: Language,
    method: CalculationMethod,
    time_zone: TimeZone,
    anchors: &'static EpochAnchors,
}

impl FrenchRevolutionaryCalendar {
    /// Creates a converter producing Gregorian instants in the system time zone
    pub fn new(language: Language, method: CalculationMethod) -> Self {
        Self {
            language,
            method,
            time_zone: TimeZone::system(),
            anchors: EpochAnchors::get(),
        }
    }

    /// Uses `time_zone` for the instants returned by [`Self::to_gregorian`]
    #[must_use]
    pub fn with_time_zone(self, time_zone: TimeZone) -> Self {
        Self { time_zone, ..self }
    }

    /// Builds a converter from configuration
    ///
    /// # Errors
    /// Returns `ConversionError::UnknownTimeZone` if the configured time zone
    /// does not exist.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, ConversionError> {
        Ok(Self::new(config.language, config.method).with_time_zone(config.resolve_time_zone()?))
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub const fn method(&self) -> CalculationMethod {
        self.method
    }

    pub const fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub const fn anchors(&self) -> &'static EpochAnchors {
        self.anchors
    }

    /// Method used to convert a Gregorian date: the configured one, except
    /// inside the historical era
    pub fn forward_method(&self, civil: DateTime) -> CalculationMethod {
        if self.method == CalculationMethod::Equinox || self.anchors.within_era(civil) {
            CalculationMethod::Equinox
        } else {
            self.method
        }
    }

    /// Method used to convert a French year: the configured one, except for
    /// years I to XIX
    pub fn inverse_method(&self, year: i32) -> CalculationMethod {
        if self.method == CalculationMethod::Equinox || (1..=LAST_EQUINOX_ERA_YEAR).contains(&year)
        {
            CalculationMethod::Equinox
        } else {
            self.method
        }
    }

    /// Converts a Gregorian instant, read through its own civil fields, to a
    /// French date in this converter's language.
    ///
    /// # Errors
    /// Returns `ConversionError::UnsupportedYear` if the equinox method needs
    /// an equinox outside the known table.
    #[tracing::instrument(level = "debug", skip_all, fields(method = %self.method))]
    pub fn to_french(&self, gregorian: &GregorianInstant) -> Result<FrenchDate, ConversionError> {
        let civil = gregorian.civil();
        let method = self.forward_method(civil);
        let position = engine_for(method).forward(self.anchors, civil.date())?;
        let date = FrenchDate::from_year_day(position, time_to_decimal(civil.time()), self.language)?;
        debug!(%method, %date, "converted to French date");
        Ok(date)
    }

    /// Converts a French date to a Gregorian instant in this converter's time
    /// zone. The decimal time is rounded to the nearest civil second.
    ///
    /// A French date carries no UTC offset. A civil time repeated when the
    /// clocks go back resolves to its earlier occurrence, and one skipped when
    /// they go forward resolves to the time after the gap.
    ///
    /// # Errors
    /// Returns `ConversionError::UnsupportedYear` if the equinox method needs
    /// an equinox outside the known table, or `OutOfRange`/`YearOutOfRange` if
    /// the result cannot be represented.
    #[tracing::instrument(level = "debug", skip_all, fields(method = %self.method))]
    pub fn to_gregorian(&self, date: &FrenchDate) -> Result<GregorianInstant, ConversionError> {
        let method = self.inverse_method(date.year());
        let day = engine_for(method).inverse(self.anchors, date.year(), date.day_in_year())?;
        let civil = day.to_datetime(decimal_to_time(date.time()));
        let instant = GregorianInstant::from_datetime(civil, self.time_zone.clone())?;
        debug!(%method, %date, %instant, "converted to Gregorian instant");
        Ok(instant)
    }
}

impl Default for FrenchRevolutionaryCalendar {
    fn default() -> Self {
        Self::new(Language::default(), CalculationMethod::default())
    }
}
