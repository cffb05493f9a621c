//! Composition-sequence entries and day accounting.

use aether_catalog::{PatternCatalog, PatternKind};

use crate::error::ComposeError;

/// One entry of a composition sequence: append `count` consecutive days
/// or weeks of the named pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pattern: String,
    count: usize,
}

impl Segment {
    /// Creates a sequence entry.
    pub fn new(pattern: impl Into<String>, count: usize) -> Self {
        Self {
            pattern: pattern.into(),
            count,
        }
    }

    /// Returns the pattern name.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the repeat count (days for daily patterns, weeks for
    /// weekly patterns).
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Returns the total number of days a sequence will consume: seven per
/// repeat of a weekly pattern, one per repeat of a daily pattern.
///
/// # Errors
///
/// Returns [`ComposeError::UnknownPattern`] for entries matching neither
/// catalog set.
pub fn total_days(sequence: &[Segment], catalog: &PatternCatalog) -> Result<usize, ComposeError> {
    let mut days = 0;
    for seg in sequence {
        match catalog.classify(seg.pattern()) {
            PatternKind::Weekly => days += 7 * seg.count(),
            PatternKind::Daily => days += seg.count(),
            PatternKind::Unknown => {
                return Err(ComposeError::UnknownPattern {
                    name: seg.pattern().to_string(),
                });
            }
        }
    }
    Ok(days)
}
