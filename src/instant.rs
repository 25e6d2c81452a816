use crate::ConversionError;
use crate::prelude::*;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Zoned};

/// A Gregorian instant together with the time zone its civil fields
/// (year, month, day, hour, minute, second) are read in.
///
/// Dereferences to [`jiff::Zoned`] for field access.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, From, Into)]
pub struct GregorianInstant(Zoned);

impl GregorianInstant {
    /// Creates an instant from civil fields in the given zone. A gap or fold
    /// in the zone resolves with jiff's default "compatible" disambiguation.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the fields do not form a valid
    /// civil date and time.
    pub fn new(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        time_zone: TimeZone,
    ) -> Result<Self, ConversionError> {
        let datetime = DateTime::new(year, month, day, hour, minute, second, 0)?;
        Self::from_datetime(datetime, time_zone)
    }

    /// Creates an instant holding `datetime`'s civil fields in `time_zone`
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the instant is outside jiff's
    /// supported range.
    pub fn from_datetime(datetime: DateTime, time_zone: TimeZone) -> Result<Self, ConversionError> {
        Ok(Self(datetime.to_zoned(time_zone)?))
    }

    /// Civil fields of this instant in its own zone
    #[inline]
    pub fn civil(&self) -> DateTime {
        self.0.datetime()
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp().as_millisecond()
    }

    /// DST portion of the offset in effect: the current offset minus the
    /// standard offset before the latest switch to daylight time. Zero when
    /// standard time is in effect.
    pub fn dst_offset_seconds(&self) -> i32 {
        let time_zone = self.0.time_zone();
        let timestamp = self.0.timestamp();
        let info = time_zone.to_offset_info(timestamp);
        if info.dst().is_std() {
            return 0;
        }
        time_zone
            .preceding(timestamp)
            .find(|transition| transition.dst().is_std())
            .map_or(0, |standard| info.offset().seconds() - standard.offset().seconds())
    }

    /// Re-stamps the civil fields of this instant into another zone. The
    /// receiver is left untouched.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the result is outside jiff's
    /// supported range.
    pub fn with_civil_fields_in(&self, time_zone: TimeZone) -> Result<Self, ConversionError> {
        Self::from_datetime(self.civil(), time_zone)
    }

    /// The same civil fields read on a UTC wall clock. Differences between
    /// normalised instants count whole civil days regardless of DST or
    /// historical offset changes.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the result is outside jiff's
    /// supported range.
    pub fn to_utc_normalized(&self) -> Result<Self, ConversionError> {
        self.with_civil_fields_in(TimeZone::UTC)
    }

    /// Adds a signed number of milliseconds in absolute time
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` on overflow.
    pub fn checked_add_millis(&self, millis: i64) -> Result<Self, ConversionError> {
        Ok(Self(self.0.checked_add(SignedDuration::from_millis(millis))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_york() -> TimeZone {
        TimeZone::get("America/New_York").unwrap()
    }

    #[test]
    fn test_new_keeps_civil_fields() {
        let instant = GregorianInstant::new(1796, 8, 4, 11, 30, 30, new_york()).unwrap();
        assert_eq!(instant.civil(), jiff::civil::datetime(1796, 8, 4, 11, 30, 30, 0));
        assert_eq!(instant.year(), 1796);
        assert!(GregorianInstant::new(2011, 2, 30, 0, 0, 0, TimeZone::UTC).is_err());
    }

    #[test]
    fn test_dst_offset() {
        let summer = GregorianInstant::new(2016, 7, 1, 12, 0, 0, new_york()).unwrap();
        assert_eq!(summer.dst_offset_seconds(), 3_600);

        let winter = GregorianInstant::new(2016, 1, 1, 12, 0, 0, new_york()).unwrap();
        assert_eq!(winter.dst_offset_seconds(), 0);

        let utc = GregorianInstant::new(2016, 7, 1, 12, 0, 0, TimeZone::UTC).unwrap();
        assert_eq!(utc.dst_offset_seconds(), 0);
    }

    #[test]
    fn test_utc_normalized_holds_civil_fields() {
        let local = GregorianInstant::new(2016, 3, 13, 12, 0, 0, new_york()).unwrap();
        let normalized = local.to_utc_normalized().unwrap();
        assert_eq!(normalized.civil(), local.civil());
        assert_eq!(normalized.time_zone(), &TimeZone::UTC);
        // The receiver still reads in its own zone
        assert_eq!(local.offset().seconds(), -4 * 3_600);
    }

    #[test]
    fn test_normalized_difference_spans_whole_days_across_dst() {
        // 2016-03-13 is 23 hours long in New York
        let before = GregorianInstant::new(2016, 3, 13, 0, 0, 0, new_york()).unwrap();
        let after = GregorianInstant::new(2016, 3, 14, 0, 0, 0, new_york()).unwrap();
        assert_eq!(after.timestamp_millis() - before.timestamp_millis(), 23 * 3_600_000);

        let before = before.to_utc_normalized().unwrap();
        let after = after.to_utc_normalized().unwrap();
        assert_eq!(after.timestamp_millis() - before.timestamp_millis(), 24 * 3_600_000);
    }

    #[test]
    fn test_checked_add_millis() {
        let start = GregorianInstant::new(2016, 1, 1, 0, 0, 0, TimeZone::UTC).unwrap();
        let next = start.checked_add_millis(86_400_000).unwrap();
        assert_eq!(next.civil(), jiff::civil::datetime(2016, 1, 2, 0, 0, 0, 0));
        assert!(start.checked_add_millis(i64::MAX).is_err());
    }

    #[test]
    fn test_display_is_rfc9557() {
        let instant = GregorianInstant::new(2016, 9, 22, 0, 0, 0, TimeZone::UTC).unwrap();
        assert_eq!(instant.to_string(), "2016-09-22T00:00:00+00:00[UTC]");
    }
}
