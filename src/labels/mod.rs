//! Label provider: weekday, month, day-of-year and object-type names.
//!
//! One immutable table per language, shared for the life of the process.

mod ca;
mod de;
mod en;
mod es;
mod eu;
mod fr;
mod it;

use crate::consts::{DAYS_PER_MONTH, MAX_DAY_IN_YEAR};
use crate::types::{DailyObjectType, Day, Language, Month};

/// Names used to display French dates in one language
#[derive(Debug)]
pub struct Labels {
    weekdays: &'static [&'static str; 10],
    months: &'static [&'static str; 13],
    days_of_year: &'static [&'static [&'static str]; 13],
    object_types: &'static [&'static str; 5],
}

impl Labels {
    /// Name of the `weekday`-th day of the décade, `None` outside `1..=10`
    pub fn weekday_name(&self, weekday: u8) -> Option<&'static str> {
        let index = usize::from(weekday).checked_sub(1)?;
        self.weekdays.get(index).copied()
    }

    /// Name of the décade day on which `day` falls
    pub fn day_of_decade_name(&self, day: Day) -> &'static str {
        self.weekdays[usize::from(day.get() - 1) % self.weekdays.len()]
    }

    pub fn month_name(&self, month: Month) -> &'static str {
        self.months[usize::from(month.get()) - 1]
    }

    /// Name of the object celebrated on a day
    pub fn day_of_year_name(&self, month: Month, day: Day) -> &'static str {
        self.days_of_year[usize::from(month.get()) - 1][usize::from(day.get()) - 1]
    }

    /// Name of the object celebrated on the `day_in_year`-th day of a year,
    /// `None` outside `1..=366`
    pub fn day_of_year_name_by_index(&self, day_in_year: u16) -> Option<&'static str> {
        if !(1..=MAX_DAY_IN_YEAR).contains(&day_in_year) {
            return None;
        }
        let index = usize::from(day_in_year) - 1;
        let per_month = usize::from(DAYS_PER_MONTH);
        self.days_of_year[index / per_month].get(index % per_month).copied()
    }

    pub fn object_type_name(&self, object_type: DailyObjectType) -> &'static str {
        self.object_types[object_type.ordinal()]
    }
}

/// Labels for a language
pub fn labels_for(language: Language) -> &'static Labels {
    match language {
        Language::French => &fr::LABELS,
        Language::English => &en::LABELS,
        Language::Spanish => &es::LABELS,
        Language::Catalan => &ca::LABELS,
        Language::Italian => &it::LABELS,
        Language::German => &de::LABELS,
        Language::Basque => &eu::LABELS,
    }
}

/// Labels for a language tag such as `"en-US"`; unknown tags get French
pub fn labels_for_code(code: &str) -> &'static Labels {
    labels_for(Language::from_code(code))
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
    fn test_french_labels() {
        let labels = labels_for(Language::French);
        assert_eq!(labels.weekday_name(7), Some("Septidi"));
        assert_eq!(labels.weekday_name(10), Some("Décadi"));
        assert_eq!(labels.month_name(month(11)), "Thermidor");
        assert_eq!(labels.month_name(month(13)), "Sansculotides");
        assert_eq!(labels.day_of_year_name(month(11), day(17, 11)), "Lin");
        assert_eq!(labels.day_of_year_name(month(10), day(20, 10)), "Parc");
        assert_eq!(labels.day_of_year_name(month(4), day(4, 4)), "Soufre");
        assert_eq!(labels.day_of_year_name(month(13), day(6, 13)), "Révolution");
        assert_eq!(labels.object_type_name(DailyObjectType::Plant), "La plante");
    }

    #[test]
    fn test_english_labels_share_french_names() {
        let labels = labels_for(Language::English);
        assert_eq!(labels.weekday_name(7), Some("Septidi"));
        assert_eq!(labels.month_name(month(11)), "Thermidor");
        assert_eq!(labels.day_of_year_name(month(11), day(17, 11)), "Flax");
        assert_eq!(labels.day_of_year_name(month(10), day(20, 10)), "Pen");
        assert_eq!(labels.day_of_year_name(month(4), day(4, 4)), "Sulphur");
        assert_eq!(labels.day_of_year_name(month(3), day(8, 3)), "Honey");
        assert_eq!(labels.object_type_name(DailyObjectType::Concept), "The concept");
    }

    #[test]
    fn test_languages_with_own_weekdays() {
        assert_eq!(labels_for(Language::Italian).weekday_name(1), Some("Primidì"));
        assert_eq!(labels_for(Language::Italian).month_name(month(1)), "Vendemmiaio");
        assert_eq!(labels_for(Language::German).month_name(month(1)), "Weinmonat");
        assert_eq!(labels_for(Language::German).weekday_name(1), Some("Primidi"));
        assert_ne!(labels_for(Language::Basque).weekday_name(1), Some("Primidi"));
    }

    #[test]
    fn test_day_of_year_by_index() {
        let labels = labels_for(Language::French);
        assert_eq!(labels.day_of_year_name_by_index(1), Some("Raisin"));
        assert_eq!(
            labels.day_of_year_name_by_index(317),
            Some(labels.day_of_year_name(month(11), day(17, 11)))
        );
        assert_eq!(labels.day_of_year_name_by_index(366), Some("Révolution"));
    }

    #[test]
    fn test_out_of_range_indices() {
        let labels = labels_for(Language::French);
        assert_eq!(labels.day_of_year_name_by_index(0), None);
        assert_eq!(labels.day_of_year_name_by_index(367), None);
        assert_eq!(labels.weekday_name(0), None);
        assert_eq!(labels.weekday_name(11), None);
        assert_eq!(labels.weekday_name(u8::MAX), None);
    }

    #[test]
    fn test_day_of_decade_name() {
        let labels = labels_for(Language::French);
        assert_eq!(labels.day_of_decade_name(day(1, 1)), "Primidi");
        assert_eq!(labels.day_of_decade_name(day(17, 11)), "Septidi");
        assert_eq!(labels.day_of_decade_name(day(30, 12)), "Décadi");
        assert_eq!(labels.day_of_decade_name(day(6, 13)), "Sextidi");
    }

    #[test]
    fn test_every_language_is_complete() {
        for language in Language::ALL {
            let labels = labels_for(language);
            for index in 1..=MAX_DAY_IN_YEAR {
                let name = labels.day_of_year_name_by_index(index);
                assert!(name.is_some_and(|name| !name.is_empty()), "{language} {index}");
            }
            for weekday in 1..=10 {
                assert!(labels.weekday_name(weekday).is_some_and(|name| !name.is_empty()));
            }
        }
    }

    #[test]
    fn test_labels_for_code_falls_back_to_french() {
        assert!(std::ptr::eq(labels_for_code("en-GB"), labels_for(Language::English)));
        assert!(std::ptr::eq(labels_for_code("pt-BR"), labels_for(Language::French)));
    }
}
