use super::{MethodEngine, YearDay, add_days, days_between};
use crate::ConversionError;
use crate::anchors::EpochAnchors;
use crate::consts::{VON_MADLER_EXCEPTION_CYCLE, VON_MADLER_LEAP_CYCLE, VON_MADLER_YEAR_LENGTH};
use jiff::civil::Date;
use tracing::trace;

/// Von Mädler's rule: every fourth year is leap, except every 128th. Years are
/// counted in whole days from the start of the era.
#[derive(Debug, Clone, Copy, Default)]
pub struct VonMadlerEngine;

pub const fn is_von_madler_leap_year(year: i64) -> bool {
    year.rem_euclid(VON_MADLER_LEAP_CYCLE) == 0 && year.rem_euclid(VON_MADLER_EXCEPTION_CYCLE) != 0
}

/// Days from the start of the era to 1 Vendémiaire of `year`
pub const fn days_to_first_vendemiaire(year: i64) -> i64 {
    let previous = year - 1;
    365 * year + previous.div_euclid(VON_MADLER_LEAP_CYCLE)
        - previous.div_euclid(VON_MADLER_EXCEPTION_CYCLE)
}

impl MethodEngine for VonMadlerEngine {
    fn forward(&self, anchors: &EpochAnchors, date: Date) -> Result<YearDay, ConversionError> {
        let days = days_between(anchors.year_zero_date(), date);
        // The estimate overshoots by at most one year on the last day of a year
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let mut year = ((days + 1) as f64 / VON_MADLER_YEAR_LENGTH).floor() as i64;
        let mut day_index = days - days_to_first_vendemiaire(year);
        if day_index < 0 {
            trace!(days, year, "year estimate overshot, stepping back");
            year -= 1;
            day_index = days - days_to_first_vendemiaire(year);
        }
        let year = i32::try_from(year).map_err(|_| ConversionError::UnsupportedYear {
            year: i32::from(date.year()),
        })?;
        Ok(YearDay { year, day_index })
    }

    fn inverse(
        &self,
        anchors: &EpochAnchors,
        year: i32,
        day_in_year: u16,
    ) -> Result<Date, ConversionError> {
        let days = days_to_first_vendemiaire(i64::from(year)) + i64::from(day_in_year) - 1;
        add_days(anchors.year_zero_date(), days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn forward(date: Date) -> YearDay {
        VonMadlerEngine.forward(EpochAnchors::get(), date).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_von_madler_leap_year(4));
        assert!(is_von_madler_leap_year(124));
        assert!(!is_von_madler_leap_year(128));
        assert!(!is_von_madler_leap_year(0));
        assert!(!is_von_madler_leap_year(225));
        assert!(is_von_madler_leap_year(-4));
    }

    #[test]
    fn test_days_to_first_vendemiaire() {
        assert_eq!(days_to_first_vendemiaire(0), 0);
        assert_eq!(days_to_first_vendemiaire(1), 365);
        assert_eq!(days_to_first_vendemiaire(5), 5 * 365 + 1);
        assert_eq!(days_to_first_vendemiaire(129) - days_to_first_vendemiaire(128), 365);
        assert_eq!(days_to_first_vendemiaire(125) - days_to_first_vendemiaire(124), 366);
    }

    #[test]
    fn test_forward() {
        assert_eq!(forward(date(2016, 9, 23)), YearDay { year: 225, day_index: 0 });
        assert_eq!(forward(date(1791, 9, 24)), YearDay { year: 0, day_index: 1 });
        assert_eq!(forward(date(1791, 9, 22)), YearDay { year: -1, day_index: 364 });
    }

    #[test]
    fn test_forward_last_day_of_leap_year() {
        // Year 4 is leap and ends on 21 September 1796
        assert_eq!(forward(date(1796, 9, 21)), YearDay { year: 4, day_index: 365 });
        assert_eq!(forward(date(1796, 9, 22)), YearDay { year: 5, day_index: 0 });
    }

    #[test]
    fn test_new_years_follow_leap_rule() {
        for gregorian_year in 1920..2048 {
            let french_year = i64::from(gregorian_year) - 1791;
            let new_year = date(gregorian_year, 9, 23);
            assert_eq!(
                forward(new_year),
                YearDay { year: i32::try_from(french_year).unwrap(), day_index: 0 }
            );

            let eve = date(gregorian_year, 9, 22);
            let expected_last = if is_von_madler_leap_year(french_year - 1) { 365 } else { 364 };
            assert_eq!(forward(eve).day_index, expected_last, "eve of year {french_year}");
        }
    }

    #[test]
    fn test_inverse() {
        let anchors = EpochAnchors::get();
        assert_eq!(VonMadlerEngine.inverse(anchors, 0, 1).unwrap(), date(1791, 9, 23));
        assert_eq!(VonMadlerEngine.inverse(anchors, 4, 366).unwrap(), date(1796, 9, 21));
        assert_eq!(VonMadlerEngine.inverse(anchors, 225, 1).unwrap(), date(2016, 9, 23));
    }
}
