use crate::consts::{
    DAYS_PER_DECADE, DAYS_PER_MONTH, MAX_MONTH, MAX_SANSCULOTTIDES_DAYS, NIVOSE, SANSCULOTTIDES,
};
use crate::prelude::*;
use crate::{ConversionError, DateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A French month guaranteed to be in the range `1..=MAX_MONTH` (1..=13).
/// Month 13 holds the complementary days (Sansculottides).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// True for the complementary days at the end of the year
    #[inline]
    pub const fn is_sansculottides(self) -> bool {
        self.get() == SANSCULOTTIDES
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month guaranteed to be valid for its French month:
/// `1..=30` in months 1-12, `1..=6` in the Sansculottides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the given month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    // Without a month only the regular-month bound can be checked
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > DAYS_PER_MONTH {
            return Err(DateError::InvalidDay {
                month: 0,
                day: value,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            month: 0,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rule used to align French years with the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum CalculationMethod {
    /// Each year starts on the day of the autumn equinox in Paris
    #[display(fmt = "equinox")]
    Equinox,
    /// Leap years follow the Gregorian rule, shifted by 20 years
    #[default]
    #[display(fmt = "romme")]
    Romme,
    /// Leap every 4 years except every 128th
    #[display(fmt = "von_madler")]
    VonMadler,
}

impl CalculationMethod {
    pub const ALL: [Self; 3] = [Self::Equinox, Self::Romme, Self::VonMadler];
}

impl FromStr for CalculationMethod {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "equinox" => Ok(Self::Equinox),
            "romme" => Ok(Self::Romme),
            "vonmadler" | "vonmädler" => Ok(Self::VonMadler),
            _ => Err(ConversionError::UnsupportedConversion {
                method: s.to_owned(),
            }),
        }
    }
}

impl Serialize for CalculationMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalculationMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Kind of object a day of the year is named after.
/// Declaration order is the ordinal used to index label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DailyObjectType {
    #[display(fmt = "plant")]
    Plant,
    #[display(fmt = "animal")]
    Animal,
    #[display(fmt = "tool")]
    Tool,
    #[display(fmt = "mineral")]
    Mineral,
    #[display(fmt = "concept")]
    Concept,
}

impl DailyObjectType {
    /// Classifies a day. The first matching rule wins: the Sansculottides are
    /// concepts, every tenth day a tool, every fifth an animal, Nivôse minerals,
    /// and everything else a plant.
    pub const fn of(month: Month, day: Day) -> Self {
        let day = day.get();
        if month.is_sansculottides() {
            Self::Concept
        } else if day % DAYS_PER_DECADE == 0 {
            Self::Tool
        } else if day % (DAYS_PER_DECADE / 2) == 0 {
            Self::Animal
        } else if month.get() == NIVOSE {
            Self::Mineral
        } else {
            Self::Plant
        }
    }

    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

/// Languages with label tables. Unknown language codes fall back to French.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
pub enum Language {
    #[default]
    #[display(fmt = "fr")]
    French,
    #[display(fmt = "en")]
    English,
    #[display(fmt = "es")]
    Spanish,
    #[display(fmt = "ca")]
    Catalan,
    #[display(fmt = "it")]
    Italian,
    #[display(fmt = "de")]
    German,
    #[display(fmt = "eu")]
    Basque,
}

impl Language {
    pub const ALL: [Self; 7] = [
        Self::French,
        Self::English,
        Self::Spanish,
        Self::Catalan,
        Self::Italian,
        Self::German,
        Self::Basque,
    ];

    /// Resolves a language tag such as `"en"`, `"en-US"` or `"fr_CA"`.
    /// Only the primary subtag is considered; anything unknown is French.
    pub fn from_code(code: &str) -> Self {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Self::English,
            "es" => Self::Spanish,
            "ca" => Self::Catalan,
            "it" => Self::Italian,
            "de" => Self::German,
            "eu" => Self::Basque,
            _ => Self::French,
        }
    }

    /// Two-letter ISO 639-1 code
    pub const fn code(self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::English => "en",
            Self::Spanish => "es",
            Self::Catalan => "ca",
            Self::Italian => "it",
            Self::German => "de",
            Self::Basque => "eu",
        }
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_code(&s))
    }
}

// Helper functions

/// Days in a French month. The Sansculottides always allow a sixth day; whether
/// the year is actually leap depends on the calculation method.
pub const fn days_in_month(month: Month) -> u8 {
    if month.is_sansculottides() {
        MAX_SANSCULOTTIDES_DAYS
    } else {
        DAYS_PER_MONTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(value: u8) -> Month {
        Month::new(value).unwrap()
    }

    fn day(value: u8, month_value: u8) -> Day {
        Day::new(value, month(month_value)).unwrap()
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=13 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(14), Err(DateError::InvalidMonth(14))));
        assert!(matches!(Month::new(255), Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&month(13)).unwrap();
        assert_eq!(json, "13");
        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_sansculottides());
        assert!(serde_json::from_str::<Month>("14").is_err());
    }

    #[test]
    fn test_day_new_regular_month() {
        assert_eq!(day(1, 1).get(), 1);
        assert_eq!(day(30, 12).get(), 30);
        assert!(matches!(
            Day::new(31, month(12)),
            Err(DateError::InvalidDay { month: 12, day: 31 })
        ));
        assert!(matches!(
            Day::new(0, month(1)),
            Err(DateError::InvalidDay { month: 1, day: 0 })
        ));
    }

    #[test]
    fn test_day_new_sansculottides() {
        assert_eq!(day(6, 13).get(), 6);
        assert!(matches!(
            Day::new(7, month(13)),
            Err(DateError::InvalidDay { month: 13, day: 7 })
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        let d: Day = 30.try_into().unwrap();
        assert_eq!(d.get(), 30);
        assert!(Day::try_from(0).is_err());
        assert!(Day::try_from(31).is_err());
    }

    #[test]
    fn test_calculation_method_from_str() {
        assert_eq!("equinox".parse::<CalculationMethod>().unwrap(), CalculationMethod::Equinox);
        assert_eq!("ROMME".parse::<CalculationMethod>().unwrap(), CalculationMethod::Romme);
        assert_eq!("von_madler".parse::<CalculationMethod>().unwrap(), CalculationMethod::VonMadler);
        assert_eq!("Von Mädler".parse::<CalculationMethod>().unwrap(), CalculationMethod::VonMadler);
        assert_eq!("VON-MADLER".parse::<CalculationMethod>().unwrap(), CalculationMethod::VonMadler);

        let err = "julian".parse::<CalculationMethod>().unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedConversion { ref method } if method == "julian"));
    }

    #[test]
    fn test_calculation_method_display_round_trips() {
        for method in CalculationMethod::ALL {
            assert_eq!(method.to_string().parse::<CalculationMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_calculation_method_serde() {
        let json = serde_json::to_string(&CalculationMethod::VonMadler).unwrap();
        assert_eq!(json, "\"von_madler\"");
        let parsed: CalculationMethod = serde_json::from_str("\"Equinox\"").unwrap();
        assert_eq!(parsed, CalculationMethod::Equinox);
        assert!(serde_json::from_str::<CalculationMethod>("\"gregorian\"").is_err());
    }

    #[test]
    fn test_object_type_rules() {
        // Sansculottides win over the tenth/fifth-day rules
        assert_eq!(DailyObjectType::of(month(13), day(5, 13)), DailyObjectType::Concept);
        assert_eq!(DailyObjectType::of(month(4), day(10, 4)), DailyObjectType::Tool);
        assert_eq!(DailyObjectType::of(month(4), day(15, 4)), DailyObjectType::Animal);
        assert_eq!(DailyObjectType::of(month(4), day(4, 4)), DailyObjectType::Mineral);
        assert_eq!(DailyObjectType::of(month(11), day(17, 11)), DailyObjectType::Plant);
        assert_eq!(DailyObjectType::of(month(1), day(30, 1)), DailyObjectType::Tool);
    }

    #[test]
    fn test_object_type_ordinal() {
        assert_eq!(DailyObjectType::Plant.ordinal(), 0);
        assert_eq!(DailyObjectType::Animal.ordinal(), 1);
        assert_eq!(DailyObjectType::Tool.ordinal(), 2);
        assert_eq!(DailyObjectType::Mineral.ordinal(), 3);
        assert_eq!(DailyObjectType::Concept.ordinal(), 4);
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("en-US"), Language::English);
        assert_eq!(Language::from_code("ES_es"), Language::Spanish);
        assert_eq!(Language::from_code("eu"), Language::Basque);
        assert_eq!(Language::from_code("fr_CA"), Language::French);
        assert_eq!(Language::from_code("ja"), Language::French);
        assert_eq!(Language::from_code(""), Language::French);
    }

    #[test]
    fn test_language_code_round_trips() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), language);
            assert_eq!(language.to_string(), language.code());
        }
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::Catalan).unwrap();
        assert_eq!(json, "\"ca\"");
        let parsed: Language = serde_json::from_str("\"it-IT\"").unwrap();
        assert_eq!(parsed, Language::Italian);
    }
}
