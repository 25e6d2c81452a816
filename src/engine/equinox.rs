use super::{MethodEngine, YearDay, add_days, days_between};
use crate::ConversionError;
use crate::anchors::EpochAnchors;
use crate::equinox::autumn_equinox;
use jiff::civil::Date;
use tracing::trace;

/// Starts every French year on the day of the autumn equinox in Paris, the
/// rule in force while the calendar was in use.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquinoxEngine;

fn equinox_of(year: i32) -> Result<Date, ConversionError> {
    autumn_equinox(year).ok_or(ConversionError::UnsupportedYear { year })
}

impl MethodEngine for EquinoxEngine {
    fn forward(&self, anchors: &EpochAnchors, date: Date) -> Result<YearDay, ConversionError> {
        let gregorian_year = i32::from(date.year());
        let mut new_year = equinox_of(gregorian_year)?;
        if date < new_year {
            trace!(gregorian_year, "date precedes the autumn equinox, using the previous one");
            new_year = equinox_of(gregorian_year - 1)?;
        }
        Ok(YearDay {
            year: i32::from(new_year.year()) - i32::from(anchors.year_one().year()) + 1,
            day_index: days_between(new_year, date),
        })
    }

    fn inverse(
        &self,
        anchors: &EpochAnchors,
        year: i32,
        day_in_year: u16,
    ) -> Result<Date, ConversionError> {
        let gregorian_year = i32::from(anchors.year_one().year()) + year - 1;
        let new_year = equinox_of(gregorian_year)?;
        add_days(new_year, i64::from(day_in_year) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn forward(date: Date) -> YearDay {
        EquinoxEngine.forward(EpochAnchors::get(), date).unwrap()
    }

    #[test]
    fn test_forward_after_equinox() {
        assert_eq!(forward(date(2016, 9, 22)), YearDay { year: 225, day_index: 0 });
        assert_eq!(forward(date(2010, 12, 25)), YearDay { year: 219, day_index: 93 });
    }

    #[test]
    fn test_forward_before_equinox_uses_previous_year() {
        // 2011 new year fell on 23 September 2010
        assert_eq!(forward(date(2011, 7, 8)), YearDay { year: 219, day_index: 288 });
        // Last complementary day of year 0
        assert_eq!(forward(date(1792, 9, 21)), YearDay { year: 0, day_index: 364 });
        // Year -1 was leap: its equinox-to-equinox span lasted 366 days
        assert_eq!(forward(date(1791, 9, 22)), YearDay { year: -1, day_index: 365 });
    }

    #[test]
    fn test_inverse() {
        let anchors = EpochAnchors::get();
        assert_eq!(EquinoxEngine.inverse(anchors, 1, 1).unwrap(), date(1792, 9, 22));
        assert_eq!(EquinoxEngine.inverse(anchors, 4, 1).unwrap(), date(1795, 9, 23));
        assert_eq!(EquinoxEngine.inverse(anchors, 219, 289).unwrap(), date(2011, 7, 8));
    }

    #[test]
    fn test_unsupported_years() {
        let anchors = EpochAnchors::get();
        assert!(matches!(
            EquinoxEngine.forward(anchors, date(3001, 10, 1)),
            Err(ConversionError::UnsupportedYear { year: 3001 })
        ));
        assert!(matches!(
            EquinoxEngine.forward(anchors, date(-1000, 1, 1)),
            Err(ConversionError::UnsupportedYear { year: -1001 })
        ));
        assert!(matches!(
            EquinoxEngine.inverse(anchors, 1300, 1),
            Err(ConversionError::UnsupportedYear { year: 3091 })
        ));
    }
}
