use super::{MethodEngine, YearDay, add_days, days_between};
use crate::ConversionError;
use crate::anchors::EpochAnchors;
use crate::consts::{ROMME_ANCHOR_YEAR, ROMME_YEAR_OFFSET};
use jiff::civil::{self, Date};

/// 1 Vendémiaire of year XX, shifted onto a Gregorian new year
const SYNTHETIC_ANCHOR: Date = civil::date(ROMME_YEAR_OFFSET + ROMME_ANCHOR_YEAR, 1, 1);

/// Romme's rule: French year `Y` is leap exactly when Gregorian year
/// `2000 + Y` is. Computed by shifting the distance from year XX onto the
/// Gregorian calendar starting at 1 January 2020 and reading the year and day
/// of year there.
///
/// Year 4000 is leap in the Gregorian calendar but not under Romme's rule, so
/// French years from 2000 onwards follow the Gregorian exception.
#[derive(Debug, Clone, Copy, Default)]
pub struct RommeEngine;

impl MethodEngine for RommeEngine {
    fn forward(&self, anchors: &EpochAnchors, date: Date) -> Result<YearDay, ConversionError> {
        let elapsed = days_between(anchors.era_end_date(), date);
        let synthetic = add_days(SYNTHETIC_ANCHOR, elapsed)?;
        Ok(YearDay {
            year: i32::from(synthetic.year()) - i32::from(ROMME_YEAR_OFFSET),
            day_index: i64::from(synthetic.day_of_year()) - 1,
        })
    }

    fn inverse(
        &self,
        anchors: &EpochAnchors,
        year: i32,
        day_in_year: u16,
    ) -> Result<Date, ConversionError> {
        let synthetic_year = i16::try_from(i32::from(ROMME_YEAR_OFFSET) + year)
            .map_err(|_| ConversionError::YearOutOfRange { year })?;
        let new_year = Date::new(synthetic_year, 1, 1)?;
        // A 366th day of a common year rolls over into the next year
        let synthetic = add_days(new_year, i64::from(day_in_year) - 1)?;
        add_days(anchors.era_end_date(), days_between(SYNTHETIC_ANCHOR, synthetic))
    }
}
