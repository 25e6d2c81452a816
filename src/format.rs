//! Pattern formatting of French dates.
//!
//! | Tag     | Field                          |
//! |---------|--------------------------------|
//! | `%y`    | year                           |
//! | `%MMMM` | month name                     |
//! | `%MM`   | month, two digits              |
//! | `%M`    | month                          |
//! | `%dd`   | day of month, two digits       |
//! | `%d`    | day of month                   |
//! | `%H`    | decimal hour                   |
//! | `%mm`   | decimal minute, two digits     |
//! | `%ss`   | decimal second, two digits     |
//! | `%E`    | weekday name                   |
//! | `%W`    | décade of the month            |
//! | `%T`    | object type name               |
//! | `%DDDD` | name of the day's object       |
//!
//! Any other text, including an unknown `%` sequence, is copied as is.

use crate::FrenchDate;
use std::fmt;

/// Pattern giving e.g. `Septidi, 17-Thermidor-4, 4:79:51, La plante:Lin`
pub const DEFAULT_PATTERN: &str = "%E, %dd-%MMMM-%y, %H:%mm:%ss, %T:%DDDD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    MonthName,
    MonthPadded,
    Month,
    DayPadded,
    Day,
    Hour,
    MinutePadded,
    SecondPadded,
    WeekdayName,
    WeekInMonth,
    ObjectTypeName,
    DayOfYearName,
}

// Longer tags first so `%MMMM` is not read as `%MM` followed by `MM`
const TAGS: [(&str, Field); 13] = [
    ("%MMMM", Field::MonthName),
    ("%DDDD", Field::DayOfYearName),
    ("%MM", Field::MonthPadded),
    ("%dd", Field::DayPadded),
    ("%mm", Field::MinutePadded),
    ("%ss", Field::SecondPadded),
    ("%y", Field::Year),
    ("%M", Field::Month),
    ("%d", Field::Day),
    ("%H", Field::Hour),
    ("%E", Field::WeekdayName),
    ("%W", Field::WeekInMonth),
    ("%T", Field::ObjectTypeName),
];

/// A date paired with a pattern, rendered through `Display`
#[derive(Debug, Clone, Copy)]
pub struct FormattedDate<'a> {
    date: &'a FrenchDate,
    pattern: &'a str,
}

impl FrenchDate {
    /// Renders this date with a pattern; see the module docs for the tags.
    pub const fn format<'a>(&'a self, pattern: &'a str) -> FormattedDate<'a> {
        FormattedDate {
            date: self,
            pattern,
        }
    }

    /// Long human-readable form in the date's language
    pub fn describe(&self) -> String {
        self.format(DEFAULT_PATTERN).to_string()
    }
}

impl FormattedDate<'_> {
    fn write_field(&self, f: &mut fmt::Formatter<'_>, field: Field) -> fmt::Result {
        let date = self.date;
        match field {
            Field::Year => write!(f, "{}", date.year()),
            Field::MonthName => f.write_str(date.month_name()),
            Field::MonthPadded => write!(f, "{:02}", date.month()),
            Field::Month => write!(f, "{}", date.month()),
            Field::DayPadded => write!(f, "{:02}", date.day_of_month()),
            Field::Day => write!(f, "{}", date.day_of_month()),
            Field::Hour => write!(f, "{}", date.hour()),
            Field::MinutePadded => write!(f, "{:02}", date.minute()),
            Field::SecondPadded => write!(f, "{:02}", date.second()),
            Field::WeekdayName => f.write_str(date.weekday_name()),
            Field::WeekInMonth => write!(f, "{}", date.week_in_month()),
            Field::ObjectTypeName => f.write_str(date.object_type_name()),
            Field::DayOfYearName => f.write_str(date.day_of_year_name()),
        }
    }
}

impl fmt::Display for FormattedDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.pattern;
        while let Some(position) = rest.find('%') {
            f.write_str(&rest[..position])?;
            rest = &rest[position..];
            match TAGS.iter().find(|(tag, _)| rest.starts_with(tag)) {
                Some((tag, field)) => {
                    self.write_field(f, *field)?;
                    rest = &rest[tag.len()..];
                }
                None => {
                    f.write_str("%")?;
                    rest = &rest[1..];
                }
            }
        }
        f.write_str(rest)
    }
}
