use crate::domain::{DateRange, Entry, RangeError, RangeInput};
use chrono::NaiveDateTime;

/// Outcome of filtering one entry collection against a resolved range.
/// `Matches` is never constructed with zero entries; that case collapses
/// to `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportResult {
    Matches(Vec<Entry>),
    Empty,
}

impl ReportResult {
    /// Select every entry inside `range` (both bounds inclusive), ordered by
    /// date ascending. Equal dates keep the relative order of the input
    /// collection; there is no secondary sort key.
    pub fn build(range: DateRange, entries: Vec<Entry>) -> Self {
        let mut matched: Vec<Entry> = entries
            .into_iter()
            .filter(|entry| range.contains(entry.date))
            .collect();
        matched.sort_by_key(|entry| entry.date);

        if matched.is_empty() {
            Self::Empty
        } else {
            Self::Matches(matched)
        }
    }
}

/// Caller-visible terminal state of a report request. `InvalidRange` and
/// `NoData` overlap in presentation but are distinct outcomes and stay that
/// way here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    InvalidRange,
    NoData,
    Entries(Vec<Entry>),
}

impl ReportOutcome {
    /// Resolve raw bounds and filter in one pass. An inverted range short
    /// circuits before the entries are consulted.
    pub fn generate(input: RangeInput, now: NaiveDateTime, entries: Vec<Entry>) -> Self {
        let range = match DateRange::resolve(input, now) {
            Ok(range) => range,
            Err(RangeError::Inverted) => return Self::InvalidRange,
        };

        ReportResult::build(range, entries).into()
    }
}

impl From<ReportResult> for ReportOutcome {
    fn from(result: ReportResult) -> Self {
        match result {
            ReportResult::Empty => Self::NoData,
            ReportResult::Matches(matched) => Self::Entries(matched),
        }
    }
}
