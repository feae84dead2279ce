//! Seven-day paging over a fixed history/forecast span.
//!
//! The span runs from `today - history_days` (EARLIEST) to
//! `today + forecast_days` (LATEST). Offset `n` selects the window that starts
//! `7 * n` days after EARLIEST, pulled back so it never runs past LATEST.
//! The final window may therefore overlap the one before it.

use chrono::{Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::mem::replace;
use thiserror::Error;
use wxd_utils::dates::format_date;

/// Number of days in every window, inclusive of both ends.
pub const WINDOW_DAYS: i64 = 7;

/// Default number of past days reachable from today.
pub const DEFAULT_HISTORY_DAYS: i64 = 70;

/// Default number of forecast days reachable from today.
pub const DEFAULT_FORECAST_DAYS: i64 = 16;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum WindowError {
    #[error("history and forecast spans must be non-negative (got {history} and {forecast})")]
    NegativeSpan { history: i64, forecast: i64 },
    #[error("span of {span} days is too short for a 7-day window")]
    SpanTooShort { span: i64 },
    #[error("span of {history} days back and {forecast} days ahead leaves the calendar range")]
    SpanOutOfRange { history: i64, forecast: i64 },
}

/// An inclusive `[start, end]` calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Number of calendar days covered, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate every day in the window.
    pub fn days(&self) -> WindowDays {
        WindowDays(self.start, self.end)
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", format_date(&self.start), format_date(&self.end))
    }
}

/// Iterator that yields each date from the start through the end (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct WindowDays(NaiveDate, NaiveDate);

impl Iterator for WindowDays {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::days(1);
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

/// Maps integer offsets to date windows for one reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPager {
    today: NaiveDate,
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl WindowPager {
    pub fn new(today: NaiveDate, history_days: i64, forecast_days: i64) -> Result<Self, WindowError> {
        if history_days < 0 || forecast_days < 0 {
            return Err(WindowError::NegativeSpan {
                history: history_days,
                forecast: forecast_days,
            });
        }
        let out_of_range = WindowError::SpanOutOfRange {
            history: history_days,
            forecast: forecast_days,
        };
        let span = history_days.checked_add(forecast_days).ok_or(out_of_range)?;
        if span < WINDOW_DAYS - 1 {
            return Err(WindowError::SpanTooShort { span });
        }
        let earliest = TimeDelta::try_days(history_days)
            .and_then(|back| today.checked_sub_signed(back))
            .ok_or(out_of_range)?;
        let latest = TimeDelta::try_days(forecast_days)
            .and_then(|ahead| today.checked_add_signed(ahead))
            .ok_or(out_of_range)?;
        Ok(Self {
            today,
            earliest,
            latest,
        })
    }

    /// Pager with the default 70-day history and 16-day forecast.
    pub fn for_day(today: NaiveDate) -> Self {
        Self {
            today,
            earliest: today - TimeDelta::days(DEFAULT_HISTORY_DAYS),
            latest: today + TimeDelta::days(DEFAULT_FORECAST_DAYS),
        }
    }

    /// Default pager anchored on the local calendar date.
    pub fn for_local_today() -> Self {
        Self::for_day(Local::now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    pub fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// Highest offset whose window still contributes unseen days.
    ///
    /// Rounds up so the last window always reaches LATEST.
    pub fn max_offset(&self) -> u32 {
        let room = (self.latest - self.earliest).num_days() - (WINDOW_DAYS - 1);
        let pages = (room + WINDOW_DAYS - 1) / WINDOW_DAYS;
        pages.max(0) as u32
    }

    /// Offset of the window containing today, clamped to [`Self::max_offset`].
    pub fn initial_offset(&self) -> u32 {
        let since_earliest = (self.today - self.earliest).num_days();
        let offset = (since_earliest / WINDOW_DAYS) as u32;
        offset.min(self.max_offset())
    }

    /// Map any signed offset into `[0, max_offset]`.
    pub fn clamp_offset(&self, offset: i64) -> u32 {
        offset.clamp(0, self.max_offset() as i64) as u32
    }

    /// Window for `offset`. Offsets past [`Self::max_offset`] give the last window.
    pub fn window_for_offset(&self, offset: u32) -> DateWindow {
        let offset = offset.min(self.max_offset());
        let span = TimeDelta::days(WINDOW_DAYS - 1);
        // The span is at least one window long, so this is never before EARLIEST.
        let last_start = self.latest - span;
        let start = (self.earliest + TimeDelta::days(offset as i64 * WINDOW_DAYS)).min(last_start);
        DateWindow {
            start,
            end: start + span,
        }
    }

    /// Every valid offset paired with its window.
    pub fn windows(&self) -> impl Iterator<Item = (u32, DateWindow)> + '_ {
        (0..=self.max_offset()).map(move |offset| (offset, self.window_for_offset(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_default_bounds() {
        let pager = WindowPager::for_day(today());
        assert_eq!(pager.earliest(), NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        assert_eq!(pager.latest(), NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
        assert_eq!(pager.max_offset(), 12);
        assert_eq!(pager.initial_offset(), 10);
    }

    #[test]
    fn test_every_window_is_seven_days_within_bounds() {
        let pager = WindowPager::for_day(today());
        for (offset, window) in pager.windows() {
            assert_eq!(window.len_days(), WINDOW_DAYS, "offset {offset}");
            assert!(window.start >= pager.earliest(), "offset {offset}");
            assert!(window.end <= pager.latest(), "offset {offset}");
        }
    }

    #[test]
    fn test_first_and_last_windows_touch_bounds() {
        let pager = WindowPager::for_day(today());
        assert_eq!(pager.window_for_offset(0).start, pager.earliest());
        assert_eq!(pager.window_for_offset(pager.max_offset()).end, pager.latest());
    }

    #[test]
    fn test_last_window_overlaps_previous() {
        let pager = WindowPager::for_day(today());
        let last = pager.window_for_offset(pager.max_offset());
        let previous = pager.window_for_offset(pager.max_offset() - 1);
        assert!(last.start <= previous.end);
        assert_eq!(last.start, NaiveDate::from_ymd_opt(2026, 10, 26).unwrap());
    }

    #[test]
    fn test_initial_window_contains_today() {
        let pager = WindowPager::for_day(today());
        let window = pager.window_for_offset(pager.initial_offset());
        assert!(window.contains(today()));
    }

    #[test]
    fn test_offsets_past_the_end_clamp_to_latest() {
        let pager = WindowPager::for_day(today());
        let window = pager.window_for_offset(pager.max_offset() + 5);
        assert_eq!(window.end, pager.latest());
        assert_eq!(window.len_days(), WINDOW_DAYS);
    }

    #[test]
    fn test_largest_offset_gives_last_window() {
        let pager = WindowPager::for_day(today());
        let last = pager.window_for_offset(pager.max_offset());
        assert_eq!(pager.window_for_offset(u32::MAX), last);
    }

    #[test]
    fn test_clamp_offset() {
        let pager = WindowPager::for_day(today());
        assert_eq!(pager.clamp_offset(-3), 0);
        assert_eq!(pager.clamp_offset(4), 4);
        assert_eq!(pager.clamp_offset(99), pager.max_offset());
    }

    #[test]
    fn test_exact_fit_span_has_no_overlap() {
        // 13 days apart gives two disjoint windows.
        let pager = WindowPager::new(today(), 7, 6).unwrap();
        assert_eq!(pager.max_offset(), 1);
        let first = pager.window_for_offset(0);
        let second = pager.window_for_offset(1);
        assert_eq!(second.start, first.end + TimeDelta::days(1));
        assert_eq!(second.end, pager.latest());
    }

    #[test]
    fn test_single_window_span() {
        let pager = WindowPager::new(today(), 0, 6).unwrap();
        assert_eq!(pager.max_offset(), 0);
        assert_eq!(pager.initial_offset(), 0);
        let window = pager.window_for_offset(0);
        assert_eq!(window.start, today());
        assert_eq!(window.end, pager.latest());
    }

    #[test]
    fn test_rejects_short_or_negative_span() {
        assert_eq!(
            WindowPager::new(today(), 2, 3),
            Err(WindowError::SpanTooShort { span: 5 })
        );
        assert!(matches!(
            WindowPager::new(today(), -1, 20),
            Err(WindowError::NegativeSpan { .. })
        ));
    }

    #[test]
    fn test_rejects_span_beyond_calendar() {
        assert_eq!(
            WindowPager::new(today(), 1_000_000_000, 16),
            Err(WindowError::SpanOutOfRange {
                history: 1_000_000_000,
                forecast: 16
            })
        );
        assert!(matches!(
            WindowPager::new(today(), 0, i64::MAX),
            Err(WindowError::SpanOutOfRange { .. })
        ));
    }

    #[test]
    fn test_initial_offset_clamped_when_today_is_late() {
        // No forecast days: today is LATEST, inside the final window.
        let pager = WindowPager::new(today(), 20, 0).unwrap();
        assert_eq!(pager.max_offset(), 2);
        assert_eq!(pager.initial_offset(), 2);
        assert!(pager.window_for_offset(2).contains(today()));
    }

    #[test]
    fn test_window_days_iteration() {
        let pager = WindowPager::for_day(today());
        let window = pager.window_for_offset(3);
        let days: Vec<NaiveDate> = window.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], window.start);
        assert_eq!(days[6], window.end);
    }

    #[test]
    fn test_display() {
        let pager = WindowPager::for_day(today());
        assert_eq!(
            pager.window_for_offset(0).to_string(),
            "2026-08-07 to 2026-08-13"
        );
    }
}
