//! Autumn equinox provider.
//!
//! Precomputed day of September on which the autumn equinox falls in Paris,
//! for every Gregorian year from `FIRST_TABLE_YEAR` to `LAST_TABLE_YEAR`.
//! Values come from Meeus' September equinox series with ΔT applied, taken on
//! the Paris Observatory meridian. They reproduce the historical 1 Vendémiaire
//! of years II to XIV.

use crate::consts::EQUINOX_MONTH;
use jiff::civil::Date;

/// First Gregorian year with a known equinox
pub const FIRST_TABLE_YEAR: i32 = -1000;
/// Last Gregorian year with a known equinox
pub const LAST_TABLE_YEAR: i32 = 3000;

/// Table entries store the day minus this base, one ASCII digit per year
const DAY_BASE: i8 = 20;

/// Day of September of the autumn equinox in Paris, or `None` outside the
/// table.
pub fn autumn_equinox_day(year: i32) -> Option<i8> {
    let index = usize::try_from(year.checked_sub(FIRST_TABLE_YEAR)?).ok()?;
    let digit = *EQUINOX_DAYS.as_bytes().get(index)?;
    Some(DAY_BASE + (digit - b'0') as i8)
}

/// Civil date of the autumn equinox in Paris, or `None` outside the table.
pub fn autumn_equinox(year: i32) -> Option<Date> {
    let day = autumn_equinox_day(year)?;
    Date::new(i16::try_from(year).ok()?, EQUINOX_MONTH, day).ok()
}

// 50 years per line, first year of each line in the trailing comment
const EQUINOX_DAYS: &str = concat!(
    "33343334333333333333333333333333333333333333333323", // -1000
    "33233323332333233323332333233322332233223322332233", // -950
    "33443344334433443334333433343334333433343334333433", // -900
    "33333333333333333333333333333333332333233323332333", // -850
    "23332333233323332333223322332233223322332233223322", // -800
    "33222322232223222322232223222322232223222222222222", // -750
    "33333333333333333333333333332333233323332333233323", // -700
    "33233323332233223322332233223322332233223322332223", // -650
    "33343334333433343334333433343333333333333333333333", // -600
    "33333333333333233323332333233323332333233323332333", // -550
    "33443344334433443344334433443344333433343334333433", // -500
    "34333433343334333433333333333333333333333333333333", // -450
    "33332333233323332333233323332333233323332233223322", // -400
    "33223322332233223322332223222322232223222322232223", // -350
    "33343333333333333333333333333333333333332333233323", // -300
    "33233323332333233323332333223322332233223322332233", // -250
    "33443344333433343334333433343334333433343333333333", // -200
    "33333333333333333333333333333323332333233323332333", // -150
    "34443444344433443344334433443344334433443344333433", // -100
    "34333433343334333433343334333333333333333333333333", // -50
    "33333333333333332333233323332333233323332333233322", // 0
    "33223322332233223322332233223322232223222322232223", // 50
    "33343334333433333333333333333333333333333333333323", // 100
    "33233323332333233323332333233323332233223322332233", // 150
    "33443344334433443334333433343334333433343334333433", // 200
    "33333333333333333333333333333333332333233323332333", // 250
    "34443444344434443344334433443344334433443344334433", // 300
    "34333433343334333433343334333433333333333333333333", // 350
    "33333333333333332333233323332333233323332333233322", // 400
    "33223322332233223322332233223322232223222322232223", // 450
    "33343334333433343333333333333333333333333333333333", // 500
    "33233323332333233323332333233323332233223322332233", // 550
    "33443344334433443334333433343334333433343334333433", // 600
    "33333333333333333333333333333333332333233323332333", // 650
    "34443444344434443344334433443344334433443344333433", // 700
    "34333433343334333433343334333433333333333333333333", // 750
    "33333333333333332333233323332333233323332333233322", // 800
    "33223322332233223322332233222322232223222322232223", // 850
    "33343334333333333333333333333333333333333333333323", // 900
    "33233323332333233323332333233322332233223322332233", // 950
    "33443344333433343334333433343334333433343333333333", // 1000
    "33333333333333333333333333233323332333233323332333", // 1050
    "34443444334433443344334433443344334433343334333433", // 1100
    "34333433343334333433333333333333333333333333333333", // 1150
    "33332333233323332333233323332333233322332233223322", // 1200
    "33223322332233223322232223222322232223222322232223", // 1250
    "33333333333333333333333333333333333323332333233323", // 1300
    "33233323332333223322332233223322332233223322332223", // 1350
    "33343334333433343334333433343333333333333333333333", // 1400
    "33333333332333233323332333233323332333233322332233", // 1450
    "33443344334433443344334433343334333433343334333433", // 1500
    "34333433333333333333333333333333333333233323332333", // 1550
    "23332333233323332333223322332233223322332233223322", // 1600
    "33222322232223222322232223222322222222222222222222", // 1650
    "33333333333333332333233323332333233323332333233322", // 1700
    "33223322332233223322332233222322232223222322232223", // 1750
    "33343334333333333333333333333333333333333333233323", // 1800
    "33233323332333233323332233223322332233223322332233", // 1850
    "33443334333433343334333433343334333333333333333333", // 1900
    "33333333333333333323332333233323332333233323332333", // 1950
    "22332233223322332233223322332223222322232223222322", // 2000
    "23222322232222222222222222222222222222222212221222", // 2050
    "23332333233323332333223322332233223322332233223322", // 2100
    "33222322232223222322232223222322232222222222222222", // 2150
    "33333333333333332333233323332333233323332333233322", // 2200
    "33223322332233223322332233222322232223222322232223", // 2250
    "33343334333333333333333333333333333333332333233323", // 2300
    "33233323332333233322332233223322332233223322332233", // 2350
    "22232223222322232223222322232223222222222222222222", // 2400
    "22222222222222122212221222122212221222122211221122", // 2450
    "22332233223322332233223322232223222322232223222322", // 2500
    "23222222222222222222222222222222221222122212221222", // 2550
    "23332333233323332233223322332233223322332233222322", // 2600
    "23222322232223222322232223222222222222222222222222", // 2650
    "33333333233323332333233323332333233322332233223322", // 2700
    "33223322332233223322232223222322232223222322232222", // 2750
    "22222222222222222222222222221222122212221222122212", // 2800
    "22122212221122112211221122112211221122111211121112", // 2850
    "22232223222322232222222222222222222222222222222222", // 2900
    "22122212221222122212221222122211221122112211221122", // 2950
    "2", // 3000
);
