use crate::types::{CalculationMethod, Language};
use crate::{ConversionError, FrenchRevolutionaryCalendar};
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

/// Construction inputs of a [`FrenchRevolutionaryCalendar`], deserialisable
/// from any serde format. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Language of the display labels, as a tag like `"en-US"`
    pub language: Language,
    pub method: CalculationMethod,
    /// IANA time zone name of the instants produced by inverse conversion.
    /// `None` uses the system time zone.
    pub time_zone: Option<String>,
}

impl CalendarConfig {
    /// Resolves the configured time zone
    ///
    /// # Errors
    /// Returns `ConversionError::UnknownTimeZone` if the zone name is not in
    /// the time zone database.
    pub fn resolve_time_zone(&self) -> Result<TimeZone, ConversionError> {
        match &self.time_zone {
            Some(name) => TimeZone::get(name).map_err(|source| ConversionError::UnknownTimeZone {
                name: name.clone(),
                source,
            }),
            None => Ok(TimeZone::system()),
        }
    }

    /// Builds the converter this configuration describes
    ///
    /// # Errors
    /// Returns a `ConversionError` if the time zone cannot be resolved.
    pub fn build(&self) -> Result<FrenchRevolutionaryCalendar, ConversionError> {
        FrenchRevolutionaryCalendar::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: CalendarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.language, Language::French);
        assert_eq!(config.method, CalculationMethod::Romme);
        assert_eq!(config.time_zone, None);
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"language": "en-US", "method": "von_madler", "time_zone": "Europe/Paris"}"#;
        let config: CalendarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.method, CalculationMethod::VonMadler);
        assert_eq!(config.resolve_time_zone().unwrap().iana_name(), Some("Europe/Paris"));
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = serde_json::from_str::<CalendarConfig>(r#"{"method": "julian"}"#).unwrap_err();
        assert!(err.to_string().contains("julian"));
    }

    #[test]
    fn test_unknown_time_zone() {
        let config = CalendarConfig {
            time_zone: Some("Mars/Olympus_Mons".to_owned()),
            ..CalendarConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(ConversionError::UnknownTimeZone { ref name, .. }) if name == "Mars/Olympus_Mons"
        ));
    }

    #[test]
    fn test_serialize() {
        let config = CalendarConfig {
            language: Language::Basque,
            method: CalculationMethod::Equinox,
            time_zone: Some("UTC".to_owned()),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"language":"eu","method":"equinox","time_zone":"UTC"}"#);
    }
}
