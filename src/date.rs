use crate::consts::{DATE_SEPARATOR, DAYS_PER_DECADE, DAYS_PER_MONTH, MAX_DAY_IN_YEAR};
use crate::engine::YearDay;
use crate::labels::{Labels, labels_for};
use crate::time::DecimalTime;
use crate::types::{DailyObjectType, Day, Language, Month};
use crate::DateError;
use std::fmt;
use std::str::FromStr;

/// A date in the French Republican calendar with a decimal time of day.
///
/// Month and day are validated against each other on construction. The
/// language only affects the display accessors; equality includes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrenchDate {
    year: i32,
    month: Month,
    day: Day,
    time: DecimalTime,
    language: Language,
}

impl FrenchDate {
    /// Creates a date from raw components
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` if the
    /// components do not form a French date.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        time: DecimalTime,
        language: Language,
    ) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        let day = Day::new(day, month)?;
        Ok(Self::from_parts(year, month, day, time, language))
    }

    /// Creates a date from already validated components
    pub const fn from_parts(
        year: i32,
        month: Month,
        day: Day,
        time: DecimalTime,
        language: Language,
    ) -> Self {
        Self {
            year,
            month,
            day,
            time,
            language,
        }
    }

    /// Creates a date from its 1-based position in the year
    ///
    /// # Errors
    /// Returns `DateError::InvalidDayInYear` unless `day_in_year` is in `1..=366`.
    pub fn from_day_in_year(
        year: i32,
        day_in_year: u16,
        time: DecimalTime,
        language: Language,
    ) -> Result<Self, DateError> {
        Self::from_year_day(
            YearDay {
                year,
                day_index: i64::from(day_in_year) - 1,
            },
            time,
            language,
        )
    }

    pub(crate) fn from_year_day(
        position: YearDay,
        time: DecimalTime,
        language: Language,
    ) -> Result<Self, DateError> {
        let day_index = u16::try_from(position.day_index)
            .ok()
            .filter(|index| *index < MAX_DAY_IN_YEAR)
            .ok_or(DateError::InvalidDayInYear(position.day_index + 1))?;
        let per_month = u16::from(DAYS_PER_MONTH);
        // Both quotient and remainder fit in u8 once the index is below 366
        let month = Month::new((day_index / per_month + 1) as u8)?;
        let day = Day::new((day_index % per_month + 1) as u8, month)?;
        Ok(Self::from_parts(position.year, month, day, time, language))
    }

    /// French year, 1 for the year starting 22 September 1792. Years before
    /// the era are zero or negative.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 13 for the Sansculottides
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day_of_month(&self) -> u8 {
        self.day.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    #[inline]
    pub const fn time(&self) -> DecimalTime {
        self.time
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.time.hour()
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.time.minute()
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.time.second()
    }

    #[inline]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The same date displayed in another language
    pub const fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    /// The same date at another decimal time
    pub const fn with_time(self, time: DecimalTime) -> Self {
        Self { time, ..self }
    }

    /// Day of the décade, 1..=10
    pub const fn day_in_week(&self) -> u8 {
        (self.day.get() - 1) % DAYS_PER_DECADE + 1
    }

    /// Décade of the month, 1..=3
    pub const fn week_in_month(&self) -> u8 {
        (self.day.get() - 1) / DAYS_PER_DECADE + 1
    }

    /// 1-based day of the year, 1..=366
    pub const fn day_in_year(&self) -> u16 {
        (self.month.get() as u16 - 1) * DAYS_PER_MONTH as u16 + self.day.get() as u16
    }

    pub const fn object_type(&self) -> DailyObjectType {
        DailyObjectType::of(self.month, self.day)
    }

    /// Label tables of this date's language
    pub fn labels(&self) -> &'static Labels {
        labels_for(self.language)
    }

    pub fn month_name(&self) -> &'static str {
        self.labels().month_name(self.month)
    }

    pub fn weekday_name(&self) -> &'static str {
        self.labels().day_of_decade_name(self.day)
    }

    /// Name of the object celebrated on this day
    pub fn day_of_year_name(&self) -> &'static str {
        self.labels().day_of_year_name(self.month, self.day)
    }

    pub fn object_type_name(&self) -> &'static str {
        self.labels().object_type_name(self.object_type())
    }
}

impl fmt::Display for FrenchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02} {}",
            self.year,
            self.month.get(),
            self.day.get(),
            self.time
        )
    }
}

impl FromStr for FrenchDate {
    type Err = DateError;

    /// Parses `Y-MM-DD` or `Y-MM-DD H:MM:SS`. The year may be negative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let (date_part, time_part) = match trimmed.split_once(char::is_whitespace) {
            Some((date, time)) => (date, Some(time)),
            None => (trimmed, None),
        };

        let (negative, unsigned) = match date_part.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };
        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected Y{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {date_part}"
            )));
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
        let year = if negative { -year } else { year };
        let month = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;
        let time = time_part.map_or(Ok(DecimalTime::MIDNIGHT), str::parse::<DecimalTime>)?;

        Self::new(year, month, day, time, Language::default())
    }
}

impl serde::Serialize for FrenchDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for FrenchDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> FrenchDate {
        FrenchDate::new(year, month, day, DecimalTime::MIDNIGHT, Language::French).unwrap()
    }

    #[test]
    fn test_new_validates_day_against_month() {
        assert!(FrenchDate::new(4, 13, 6, DecimalTime::MIDNIGHT, Language::French).is_ok());
        assert!(matches!(
            FrenchDate::new(4, 13, 7, DecimalTime::MIDNIGHT, Language::French),
            Err(DateError::InvalidDay { month: 13, day: 7 })
        ));
        assert!(matches!(
            FrenchDate::new(4, 14, 1, DecimalTime::MIDNIGHT, Language::French),
            Err(DateError::InvalidMonth(14))
        ));
    }

    #[test]
    fn test_derived_fields() {
        struct TestCase {
            date:          FrenchDate,
            day_in_week:   u8,
            week_in_month: u8,
            day_in_year:   u16,
            object_type:   DailyObjectType,
        }

        let cases = [
            TestCase {
                date:          date(4, 11, 17),
                day_in_week:   7,
                week_in_month: 2,
                day_in_year:   317,
                object_type:   DailyObjectType::Plant,
            },
            TestCase {
                date:          date(219, 10, 20),
                day_in_week:   10,
                week_in_month: 2,
                day_in_year:   290,
                object_type:   DailyObjectType::Tool,
            },
            TestCase {
                date:          date(219, 4, 4),
                day_in_week:   4,
                week_in_month: 1,
                day_in_year:   94,
                object_type:   DailyObjectType::Mineral,
            },
            TestCase {
                date:          date(0, 13, 6),
                day_in_week:   6,
                week_in_month: 1,
                day_in_year:   366,
                object_type:   DailyObjectType::Concept,
            },
            TestCase {
                date:          date(1, 1, 1),
                day_in_week:   1,
                week_in_month: 1,
                day_in_year:   1,
                object_type:   DailyObjectType::Plant,
            },
        ];

        for case in cases {
            assert_eq!(case.date.day_in_week(), case.day_in_week, "{}", case.date);
            assert_eq!(case.date.week_in_month(), case.week_in_month, "{}", case.date);
            assert_eq!(case.date.day_in_year(), case.day_in_year, "{}", case.date);
            assert_eq!(case.date.object_type(), case.object_type, "{}", case.date);
        }
    }

    #[test]
    fn test_from_day_in_year() {
        let date = FrenchDate::from_day_in_year(4, 317, DecimalTime::MIDNIGHT, Language::French).unwrap();
        assert_eq!((date.month(), date.day_of_month()), (11, 17));

        let last = FrenchDate::from_day_in_year(4, 366, DecimalTime::MIDNIGHT, Language::French).unwrap();
        assert_eq!((last.month(), last.day_of_month()), (13, 6));

        assert!(matches!(
            FrenchDate::from_day_in_year(4, 0, DecimalTime::MIDNIGHT, Language::French),
            Err(DateError::InvalidDayInYear(0))
        ));
        assert!(matches!(
            FrenchDate::from_day_in_year(4, 367, DecimalTime::MIDNIGHT, Language::French),
            Err(DateError::InvalidDayInYear(367))
        ));
    }

    #[test]
    fn test_labels_follow_language() {
        let date = date(4, 11, 17);
        assert_eq!(date.weekday_name(), "Septidi");
        assert_eq!(date.month_name(), "Thermidor");
        assert_eq!(date.day_of_year_name(), "Lin");
        assert_eq!(date.object_type_name(), "La plante");

        let english = date.with_language(Language::English);
        assert_eq!(english.day_of_year_name(), "Flax");
        assert_eq!(english.object_type_name(), "The plant");
        assert_ne!(english, date);
    }

    #[test]
    fn test_display() {
        let time = DecimalTime::new(4, 79, 51).unwrap();
        assert_eq!(date(4, 11, 17).with_time(time).to_string(), "4-11-17 4:79:51");
        assert_eq!(date(-1, 13, 5).to_string(), "-1-13-05 0:00:00");
    }

    #[test]
    fn test_display_time_matches_decimal_time() {
        for (hour, minute, second) in [(0, 0, 0), (4, 79, 51), (9, 99, 99)] {
            let time = DecimalTime::new(hour, minute, second).unwrap();
            let shown = date(219, 10, 19).with_time(time).to_string();
            assert_eq!(shown, format!("219-10-19 {time}"));
        }
    }

    #[test]
    fn test_parse() {
        let parsed: FrenchDate = "219-10-19 09:58:32".parse().unwrap();
        assert_eq!(parsed.year(), 219);
        assert_eq!((parsed.month(), parsed.day_of_month()), (10, 19));
        assert_eq!(parsed.time(), DecimalTime::new(9, 58, 32).unwrap());

        let negative: FrenchDate = "-1-13-05".parse().unwrap();
        assert_eq!(negative, date(-1, 13, 5));

        assert!(matches!("".parse::<FrenchDate>(), Err(DateError::EmptyInput)));
        assert!(matches!("219-10".parse::<FrenchDate>(), Err(DateError::InvalidFormat(_))));
        assert!(matches!("219-xx-01".parse::<FrenchDate>(), Err(DateError::InvalidFormat(_))));
        assert!(matches!(
            "219-13-07".parse::<FrenchDate>(),
            Err(DateError::InvalidDay { month: 13, day: 7 })
        ));
        assert!(matches!(
            "219-10-19 10:00:00".parse::<FrenchDate>(),
            Err(DateError::InvalidDecimalTime { .. })
        ));
    }

    #[test]
    fn test_display_parse_round_trip() {
        let original = date(225, 1, 1).with_time(DecimalTime::new(9, 99, 98).unwrap());
        assert_eq!(original.to_string().parse::<FrenchDate>().unwrap(), original);
    }

    #[test]
    fn test_serde() {
        let date = date(219, 4, 4);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"219-04-04 0:00:00\"");
        let parsed: FrenchDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        assert!(serde_json::from_str::<FrenchDate>("\"219-13-30\"").is_err());
    }
}
