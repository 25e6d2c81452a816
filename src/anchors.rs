use crate::consts::{ERA_END_EPOCH, YEAR_ONE_EPOCH, YEAR_ZERO_EPOCH};
use jiff::civil::{Date, DateTime};
use std::sync::LazyLock;

static ANCHORS: LazyLock<EpochAnchors> = LazyLock::new(|| {
    EpochAnchors::parse()
        .unwrap_or_else(|e| panic!("invalid French era epoch literal: {e}"))
});

/// Fixed reference points of the French era, read as UTC wall-clock times.
///
/// Invariant: `year_zero < year_one < era_end`, all at civil midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochAnchors {
    year_zero: DateTime,
    year_one: DateTime,
    era_end: DateTime,
}

impl EpochAnchors {
    /// Process-wide anchors, parsed once on first use
    pub fn get() -> &'static Self {
        &ANCHORS
    }

    /// Parses the epoch literals
    ///
    /// # Errors
    /// Returns the parse error of the first malformed literal.
    pub fn parse() -> Result<Self, jiff::Error> {
        let anchors = Self {
            year_zero: YEAR_ZERO_EPOCH.parse()?,
            year_one: YEAR_ONE_EPOCH.parse()?,
            era_end: ERA_END_EPOCH.parse()?,
        };
        debug_assert!(anchors.year_zero < anchors.year_one && anchors.year_one < anchors.era_end);
        Ok(anchors)
    }

    /// Start of the French era
    pub const fn year_zero(&self) -> DateTime {
        self.year_zero
    }

    /// 1 Vendémiaire, year I
    pub const fn year_one(&self) -> DateTime {
        self.year_one
    }

    /// 1 Vendémiaire, year XX
    pub const fn era_end(&self) -> DateTime {
        self.era_end
    }

    /// True strictly between the proclamation of year I and the start of
    /// year XX. Boundaries themselves fall outside.
    pub fn within_era(&self, civil: DateTime) -> bool {
        self.year_one < civil && civil < self.era_end
    }

    pub(crate) fn year_zero_date(&self) -> Date {
        self.year_zero.date()
    }

    pub(crate) fn era_end_date(&self) -> Date {
        self.era_end.date()
    }
}
