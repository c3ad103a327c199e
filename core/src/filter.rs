// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Classifying events by date and narrowing a listing by text.
//!
//! Dates that cannot be parsed never satisfy any ordering, so such events are
//! neither ongoing, upcoming nor past.

use std::fmt::Display;
use std::str::FromStr;

use circular_api::Event;
use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;

/// Which events to show, relative to now.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFilter {
    /// Every event.
    #[default]
    All,

    /// Events that started and have not ended.
    Ongoing,

    /// Events that have not started.
    Upcoming,

    /// Events that have ended.
    Past,
}

const FILTER_ALL: &str = "all";
const FILTER_ONGOING: &str = "ongoing";
const FILTER_UPCOMING: &str = "upcoming";
const FILTER_PAST: &str = "past";

impl EventFilter {
    /// All selectors, in display order.
    pub const ALL: [EventFilter; 4] = [
        EventFilter::All,
        EventFilter::Ongoing,
        EventFilter::Upcoming,
        EventFilter::Past,
    ];

    /// Whether `event` passes this selector at `now`.
    pub fn matches(self, event: &Event, now: Timestamp) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Ongoing => is_ongoing(event, now),
            EventFilter::Upcoming => is_upcoming(event, now),
            EventFilter::Past => is_past(event, now),
        }
    }
}

impl AsRef<str> for EventFilter {
    fn as_ref(&self) -> &str {
        match self {
            EventFilter::All => FILTER_ALL,
            EventFilter::Ongoing => FILTER_ONGOING,
            EventFilter::Upcoming => FILTER_UPCOMING,
            EventFilter::Past => FILTER_PAST,
        }
    }
}

impl Display for EventFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventFilter {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            FILTER_ALL => Ok(EventFilter::All),
            FILTER_ONGOING => Ok(EventFilter::Ongoing),
            FILTER_UPCOMING => Ok(EventFilter::Upcoming),
            FILTER_PAST => Ok(EventFilter::Past),
            _ => Err(()),
        }
    }
}

/// Where an event lies relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalState {
    /// Started and not yet ended.
    Ongoing,

    /// Not yet started.
    Upcoming,

    /// Already ended.
    Past,
}

/// Parses an event date.
///
/// A bare date (`2025-01-01`) is midnight UTC. A date-time with an offset
/// (`2025-01-01T00:00:00.000Z`) is that instant; one without an offset is
/// taken in the system time zone. Anything else is `None`.
pub fn parse_event_date(s: &str) -> Option<Timestamp> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if !s.contains(['T', 't', ' ']) {
        return s
            .parse::<Date>()
            .ok()
            .and_then(|d| d.to_zoned(TimeZone::UTC).ok())
            .map(|z| z.timestamp());
    }

    if let Ok(ts) = s.parse::<Timestamp>() {
        return Some(ts);
    }

    s.parse::<DateTime>()
        .ok()
        .and_then(|dt| dt.to_zoned(TimeZone::system()).ok())
        .map(|z| z.timestamp())
}

fn bounds(event: &Event) -> (Option<Timestamp>, Option<Timestamp>) {
    (
        parse_event_date(&event.start_date),
        parse_event_date(&event.end_date),
    )
}

/// Started at or before `now` and ends at or after it.
pub fn is_ongoing(event: &Event, now: Timestamp) -> bool {
    match bounds(event) {
        (Some(start), Some(end)) => start <= now && end >= now,
        _ => false,
    }
}

/// Starts after `now`.
pub fn is_upcoming(event: &Event, now: Timestamp) -> bool {
    parse_event_date(&event.start_date).is_some_and(|start| start > now)
}

/// Ended before `now`.
pub fn is_past(event: &Event, now: Timestamp) -> bool {
    parse_event_date(&event.end_date).is_some_and(|end| end < now)
}

/// The temporal state of `event` at `now`, or `None` if its dates are invalid.
pub fn classify(event: &Event, now: Timestamp) -> Option<TemporalState> {
    if is_ongoing(event, now) {
        Some(TemporalState::Ongoing)
    } else if is_upcoming(event, now) {
        Some(TemporalState::Upcoming)
    } else if is_past(event, now) {
        Some(TemporalState::Past)
    } else {
        None
    }
}

/// Whether any searchable field contains `query`, ignoring case.
///
/// A query that is blank after trimming matches everything.
pub fn matches_search(event: &Event, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let q = query.to_lowercase();
    [
        Some(event.name.as_str()),
        event.venue.as_deref(),
        event.description.as_deref(),
        event.category.as_deref(),
        Some(event.time.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&q))
}

/// Conditions for narrowing an event listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventConditions {
    /// The instant events are classified against.
    pub now: Timestamp,

    /// Temporal selector, applied first.
    pub filter: EventFilter,

    /// Free-text search, applied second.
    pub search: String,
}

impl EventConditions {
    /// Conditions evaluated at the current time.
    pub fn new(filter: EventFilter, search: impl Into<String>) -> Self {
        Self::at(Timestamp::now(), filter, search)
    }

    /// Conditions evaluated at `now`.
    pub fn at(now: Timestamp, filter: EventFilter, search: impl Into<String>) -> Self {
        Self {
            now,
            filter,
            search: search.into(),
        }
    }

    /// Whether `event` satisfies both the selector and the search.
    pub fn matches(&self, event: &Event) -> bool {
        self.filter.matches(event, self.now) && matches_search(event, &self.search)
    }

    /// The matching events, in listing order.
    pub fn apply<'a, I>(&self, events: I) -> Vec<&'a Event>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Filters `events` by `filter` and `search` at `now`, preserving order.
pub fn filter_events<'a>(
    events: &'a [Event],
    filter: EventFilter,
    search: &str,
    now: Timestamp,
) -> Vec<&'a Event> {
    EventConditions::at(now, filter, search).apply(events)
}
