//! Calculation engines. Each one maps a civil Gregorian date to a French
//! (year, day-in-year) position and back, under one alignment rule.
//!
//! Engines work on civil dates only. All anchors sit at midnight, so the whole
//! days between two civil dates equal the day count between the two instants
//! once both are read on a UTC wall clock, whatever their zone's DST or
//! historical offsets.

mod equinox;
mod romme;
mod von_madler;

pub use equinox::EquinoxEngine;
pub use romme::RommeEngine;
pub use von_madler::{VonMadlerEngine, days_to_first_vendemiaire, is_von_madler_leap_year};

use crate::anchors::EpochAnchors;
use crate::consts::HOURS_PER_DAY;
use crate::{CalculationMethod, ConversionError};
use jiff::Span;
use jiff::civil::Date;

/// A day located inside a French year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearDay {
    pub year: i32,
    /// 0-based offset from 1 Vendémiaire
    pub day_index: i64,
}

/// The two operations every calculation method provides.
pub trait MethodEngine: Send + Sync {
    /// Locates a civil Gregorian date in the French calendar
    ///
    /// # Errors
    /// Returns a `ConversionError` if the date lies outside the range this
    /// method can resolve.
    fn forward(&self, anchors: &EpochAnchors, date: Date) -> Result<YearDay, ConversionError>;

    /// Civil Gregorian date of the `day_in_year`-th day (1-based) of a French year
    ///
    /// # Errors
    /// Returns a `ConversionError` if the year lies outside the range this
    /// method can resolve.
    fn inverse(
        &self,
        anchors: &EpochAnchors,
        year: i32,
        day_in_year: u16,
    ) -> Result<Date, ConversionError>;
}

/// Engine implementing `method`
pub fn engine_for(method: CalculationMethod) -> &'static dyn MethodEngine {
    match method {
        CalculationMethod::Equinox => &EquinoxEngine,
        CalculationMethod::Romme => &RommeEngine,
        CalculationMethod::VonMadler => &VonMadlerEngine,
    }
}

/// Whole days from `from` to `to`, negative when `to` is earlier
pub(crate) fn days_between(from: Date, to: Date) -> i64 {
    to.duration_since(from).as_hours() / HOURS_PER_DAY
}

pub(crate) fn add_days(date: Date, days: i64) -> Result<Date, ConversionError> {
    Ok(date.checked_add(Span::new().try_days(days)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(1791, 9, 22), date(1792, 9, 22)), 366);
        assert_eq!(days_between(date(1792, 9, 22), date(1791, 9, 22)), -366);
        assert_eq!(days_between(date(2016, 3, 13), date(2016, 3, 14)), 1);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(date(2016, 2, 28), 1).unwrap(), date(2016, 2, 29));
        assert_eq!(add_days(date(2016, 3, 1), -1).unwrap(), date(2016, 2, 29));
        assert!(matches!(
            add_days(date(9999, 12, 31), 1),
            Err(ConversionError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_engines_agree_at_year_one() {
        let anchors = EpochAnchors::get();
        for method in CalculationMethod::ALL {
            let engine = engine_for(method);
            let position = engine.forward(anchors, anchors.year_one().date()).unwrap();
            assert_eq!(position, YearDay { year: 1, day_index: 0 }, "{method}");
            assert_eq!(engine.inverse(anchors, 1, 1).unwrap(), date(1792, 9, 22), "{method}");
        }
    }

    #[test]
    fn test_engines_agree_at_era_end() {
        let anchors = EpochAnchors::get();
        for method in CalculationMethod::ALL {
            let engine = engine_for(method);
            let position = engine.forward(anchors, anchors.era_end_date()).unwrap();
            assert_eq!(position, YearDay { year: 20, day_index: 0 }, "{method}");
        }
    }
}
