/// Start of the whole French era, the day count origin of the Von Mädler
/// method
pub const YEAR_ZERO_EPOCH: &str = "1791-09-23 00:00:00";
/// 1 Vendémiaire, year I (22 September 1792)
pub const YEAR_ONE_EPOCH: &str = "1792-09-22 00:00:00";
/// 1 Vendémiaire, year XX: end of the span where Equinox is the only
/// accepted method
pub const ERA_END_EPOCH: &str = "1811-09-23 00:00:00";

/// Last French year computed with the Equinox method regardless of the
/// configured method
pub const LAST_EQUINOX_ERA_YEAR: i32 = 19;

/// Hours in a civil day once both ends of a difference are read on the same
/// UTC wall clock
pub const HOURS_PER_DAY: i64 = 24;

/// Months in a French year (12 regular months plus the Sansculottides)
pub const MAX_MONTH: u8 = 13;
/// Month number of the complementary days
pub const SANSCULOTTIDES: u8 = 13;
/// Days in each of the twelve regular months
pub const DAYS_PER_MONTH: u8 = 30;
/// Complementary days in a leap year (5 in a common year)
pub const MAX_SANSCULOTTIDES_DAYS: u8 = 6;
/// Upper bound of the 1-based day-in-year index
pub const MAX_DAY_IN_YEAR: u16 = 366;

/// Days in a décade (the French ten-day week)
pub const DAYS_PER_DECADE: u8 = 10;
/// Month of the mineral days
pub const NIVOSE: u8 = 4;

/// Gregorian month of the autumn equinox
pub const EQUINOX_MONTH: i8 = 9;

/// Decimal hours per day
pub const DECIMAL_HOURS_PER_DAY: u8 = 10;
/// Decimal minutes per decimal hour, and decimal seconds per decimal minute
pub const DECIMAL_UNITS_PER_HOUR: u8 = 100;
/// Decimal seconds in a day
pub const DECIMAL_SECONDS_PER_DAY: i64 = 100_000;
/// Civil seconds in a day
pub const CIVIL_SECONDS_PER_DAY: i64 = 86_400;

/// Mean year length of the Von Mädler rule: 4-year leap cycle with every
/// 128th year dropped
pub const VON_MADLER_YEAR_LENGTH: f64 = 365.0 + 1.0 / 4.0 - 1.0 / 128.0;
/// Von Mädler leap cycle
pub(crate) const VON_MADLER_LEAP_CYCLE: i64 = 4;
/// Von Mädler exception cycle
pub(crate) const VON_MADLER_EXCEPTION_CYCLE: i64 = 128;

/// Gregorian year that the Romme method maps French year 0 onto. Romme and
/// Gregorian leap rules coincide when shifted by this many years.
pub const ROMME_YEAR_OFFSET: i16 = 2000;
/// French year whose first day is shifted onto 1 January of
/// `ROMME_YEAR_OFFSET + ROMME_ANCHOR_YEAR`
pub const ROMME_ANCHOR_YEAR: i16 = 20;

/// Date component separator of the canonical string form
pub const DATE_SEPARATOR: char = '-';
/// Time component separator of the canonical string form
pub const TIME_SEPARATOR: char = ':';
