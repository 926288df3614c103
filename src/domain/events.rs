//! Location-based events and their ranking for partnership recommendations.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Maximum number of ranked events handed to downstream stages.
pub const TOP_EVENTS_LIMIT: usize = 50;

/// A location-scoped occurrence with an attendance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub category: String,
    pub description: String,
    pub attendance_score: u64,
    pub end_date: NaiveDate,
}

/// Parameters of an events search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub query: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub limit: u32,
}

impl EventQuery {
    /// Search window starting `today` and spanning `window_days`.
    pub fn for_city(
        city: &str,
        today: NaiveDate,
        window_days: u32,
        limit: u32,
    ) -> Result<Self, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::invalid_input("location", city, "must not be empty"));
        }
        let end_date = today.checked_add_days(Days::new(u64::from(window_days))).ok_or_else(|| {
            AppError::invalid_input(
                "window_days",
                window_days.to_string(),
                "search window overflows the calendar",
            )
        })?;

        Ok(Self { query: city.to_string(), start_date: today, end_date, limit })
    }
}

/// Order events by descending attendance, keep the top 50, then drop repeated titles.
///
/// The sort is stable, so equally attended events keep their fetch order, and
/// the first (highest-ranked) occurrence of a title wins.
pub fn rank_events(events: Vec<EventRecord>) -> Vec<EventRecord> {
    let mut events = events;
    events.sort_by(|a, b| b.attendance_score.cmp(&a.attendance_score));
    events.truncate(TOP_EVENTS_LIMIT);

    let mut seen = HashSet::new();
    events.retain(|event| seen.insert(event.title.clone()));
    events
}

/// Titles of the first `n` ranked events, in rank order.
pub fn top_titles(ranked: &[EventRecord], n: usize) -> Vec<String> {
    ranked.iter().take(n).map(|event| event.title.clone()).collect()
}
