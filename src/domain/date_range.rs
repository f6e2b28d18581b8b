use chrono::{Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Raw start/end bounds as supplied by a caller. Either side may be absent;
/// syntax validation of free-text input happens upstream, so any date that
/// reaches here is already well-formed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeInput {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeInput {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("end date precedes start date")]
    Inverted,
}

/// Inclusive calendar-date bound pair. `start <= end` always holds for a
/// range produced by [`DateRange::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Normalize raw bounds against the supplied clock reading.
    ///
    /// An absent start defaults to a week before `now`, an absent end to
    /// `now` itself (date portion only). An end past today is clamped back
    /// to today; a future start is deliberately left alone, so it falls out
    /// as `Inverted` once the clamped end lands behind it. The inversion
    /// check runs after the clamp for exactly that reason.
    pub fn resolve(input: RangeInput, now: NaiveDateTime) -> Result<Self, RangeError> {
        let today = now.date();

        let start = input.start.unwrap_or(today - Duration::days(7));
        let mut end = input.end.unwrap_or(today);
        if end > today {
            end = today;
        }

        if start > end {
            return Err(RangeError::Inverted);
        }

        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1592, 3, 14)
            .unwrap()
            .and_hms_opt(6, 53, 0)
            .unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        frozen_now().date() - Duration::days(n)
    }

    fn days_from_now(n: i64) -> NaiveDate {
        frozen_now().date() + Duration::days(n)
    }

    #[test]
    fn absent_bounds_default_to_trailing_week() {
        let range = DateRange::resolve(RangeInput::default(), frozen_now()).unwrap();

        assert_eq!(range.start, days_ago(7));
        assert_eq!(range.end, frozen_now().date());
    }

    #[test]
    fn explicit_bounds_pass_through() {
        let input = RangeInput::new(Some(days_ago(40)), Some(days_ago(20)));
        let range = DateRange::resolve(input, frozen_now()).unwrap();

        assert_eq!(range.start, days_ago(40));
        assert_eq!(range.end, days_ago(20));
    }

    #[test]
    fn future_end_clamps_to_today() {
        let input = RangeInput::new(Some(days_ago(4)), Some(days_from_now(5)));
        let range = DateRange::resolve(input, frozen_now()).unwrap();

        assert_eq!(range.start, days_ago(4));
        assert_eq!(range.end, frozen_now().date());
    }

    #[test]
    fn end_before_start_is_inverted() {
        let input = RangeInput::new(Some(days_ago(20)), Some(days_ago(40)));

        assert_eq!(
            DateRange::resolve(input, frozen_now()),
            Err(RangeError::Inverted)
        );
    }

    #[test]
    fn future_start_with_default_end_is_inverted() {
        // The defaulted end is today, which the future start overshoots.
        let input = RangeInput::new(Some(days_from_now(5)), None);

        assert_eq!(
            DateRange::resolve(input, frozen_now()),
            Err(RangeError::Inverted)
        );
    }

    #[test]
    fn fully_future_range_is_inverted_after_clamp() {
        let input = RangeInput::new(Some(days_from_now(5)), Some(days_from_now(10)));

        assert_eq!(
            DateRange::resolve(input, frozen_now()),
            Err(RangeError::Inverted)
        );
    }

    #[test]
    fn single_day_range_is_valid() {
        let today = frozen_now().date();
        let input = RangeInput::new(Some(today), Some(today));
        let range = DateRange::resolve(input, frozen_now()).unwrap();

        assert_eq!(range.start, range.end);
        assert!(range.contains(today));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let range = DateRange {
            start: days_ago(7),
            end: days_ago(1),
        };

        assert!(range.contains(days_ago(7)));
        assert!(range.contains(days_ago(1)));
        assert!(range.contains(days_ago(4)));
        assert!(!range.contains(days_ago(8)));
        assert!(!range.contains(frozen_now().date()));
    }
}
