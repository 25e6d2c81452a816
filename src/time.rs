//! Decimal time: the day split into 10 hours of 100 minutes of 100 seconds.

use crate::DateError;
use crate::consts::{
    CIVIL_SECONDS_PER_DAY, DECIMAL_HOURS_PER_DAY, DECIMAL_SECONDS_PER_DAY, DECIMAL_UNITS_PER_HOUR,
    TIME_SEPARATOR,
};
use jiff::civil::{self, Time};
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// A time of day on the decimal clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DecimalTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl DecimalTime {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a decimal time
    ///
    /// # Errors
    /// Returns `DateError::InvalidDecimalTime` unless `hour < 10`, `minute < 100`
    /// and `second < 100`.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, DateError> {
        if hour >= DECIMAL_HOURS_PER_DAY
            || minute >= DECIMAL_UNITS_PER_HOUR
            || second >= DECIMAL_UNITS_PER_HOUR
        {
            return Err(DateError::InvalidDecimalTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Decimal seconds elapsed since midnight, `0..100_000`
    pub const fn seconds_of_day(self) -> i64 {
        let per_hour = DECIMAL_UNITS_PER_HOUR as i64 * DECIMAL_UNITS_PER_HOUR as i64;
        self.hour as i64 * per_hour
            + self.minute as i64 * DECIMAL_UNITS_PER_HOUR as i64
            + self.second as i64
    }

    const fn from_seconds_of_day(total: i64) -> Self {
        let unit = DECIMAL_UNITS_PER_HOUR as i64;
        Self {
            hour: (total / (unit * unit)) as u8,
            minute: ((total / unit) % unit) as u8,
            second: (total % unit) as u8,
        }
    }
}

/// Converts a civil time of day to decimal time.
///
/// The decimal second is truncated, so 23:59:59 maps to 9:99:98 and the result
/// never reaches 10:00:00. Sub-second precision is ignored.
pub fn time_to_decimal(time: Time) -> DecimalTime {
    let civil_seconds = i64::from(time.hour()) * SECONDS_PER_HOUR
        + i64::from(time.minute()) * SECONDS_PER_MINUTE
        + i64::from(time.second());
    DecimalTime::from_seconds_of_day(civil_seconds * DECIMAL_SECONDS_PER_DAY / CIVIL_SECONDS_PER_DAY)
}

/// Converts a decimal time back to a civil time of day, rounded to the
/// nearest civil second. A round trip through [`time_to_decimal`] drifts by at
/// most one second.
pub fn decimal_to_time(decimal: DecimalTime) -> Time {
    let scaled = decimal.seconds_of_day() * CIVIL_SECONDS_PER_DAY;
    // Rounds half up; 99999 decimal seconds still lands on 23:59:59
    let civil_seconds = (scaled + DECIMAL_SECONDS_PER_DAY / 2) / DECIMAL_SECONDS_PER_DAY;
    civil::time(
        (civil_seconds / SECONDS_PER_HOUR) as i8,
        ((civil_seconds / SECONDS_PER_MINUTE) % SECONDS_PER_MINUTE) as i8,
        (civil_seconds % SECONDS_PER_MINUTE) as i8,
        0,
    )
}

impl From<Time> for DecimalTime {
    fn from(time: Time) -> Self {
        time_to_decimal(time)
    }
}

impl From<DecimalTime> for Time {
    fn from(decimal: DecimalTime) -> Self {
        decimal_to_time(decimal)
    }
}

impl fmt::Display for DecimalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}",
            self.hour, self.minute, self.second
        )
    }
}

impl FromStr for DecimalTime {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).collect();
        let [hour, minute, second] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected H{TIME_SEPARATOR}MM{TIME_SEPARATOR}SS, found {trimmed}"
            )));
        };
        let parse = |p: &str| {
            p.trim()
                .parse::<u8>()
                .map_err(|_| DateError::InvalidFormat(p.to_owned()))
        };
        Self::new(parse(hour)?, parse(minute)?, parse(second)?)
    }
}

impl serde::Serialize for DecimalTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DecimalTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
