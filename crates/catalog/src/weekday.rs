//! Weekday labels and week-cycle rotation.

/// Day of the week, in the label order used by weekly pattern columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All weekdays in Monday-first order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Returns the lowercase three-letter label used in column names.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }

    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Sat | Weekday::Sun)
    }

    /// Converts a Monday-based offset (0 = Monday .. 6 = Sunday) to a
    /// weekday. Returns `None` for offsets greater than 6.
    pub fn from_offset(offset: u8) -> Option<Weekday> {
        Weekday::ALL.get(offset as usize).copied()
    }
}

/// Returns the 7-day weekday cycle, optionally rotated so that
/// `week_start` becomes the first day.
///
/// With `None` (or `Some(Weekday::Mon)`) the cycle is Monday-first. The
/// rotation only relabels which calendar day each position renders;
/// weekend scaling follows the labels, not the positions.
pub fn week_cycle(week_start: Option<Weekday>) -> [Weekday; 7] {
    let start = week_start.map(|d| d as usize).unwrap_or(0);
    let mut cycle = Weekday::ALL;
    cycle.rotate_left(start);
    cycle
}
