// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Properties that hold for any listing.

use circular_core::{
    Event, EventConditions, EventFilter, TemporalState, classify, filter_events, is_ongoing,
    is_past, is_upcoming,
};

use crate::common::{day, sample_events, test_event};

fn ids(events: &[&Event]) -> Vec<String> {
    events.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn filter_all_with_empty_query_is_identity() {
    let events = sample_events();
    for now in [day("2024-01-01"), day("2025-01-10"), day("2026-01-01")] {
        let found = filter_events(&events, EventFilter::All, "", now);
        assert_eq!(found.len(), events.len());
        assert!(found.iter().zip(&events).all(|(a, b)| *a == b));
    }
}

#[test]
fn filter_is_idempotent() {
    let events = sample_events();
    let now = day("2025-01-10");
    for filter in EventFilter::ALL {
        for query in ["", "tech", "HALL", "zzz", " a"] {
            let once: Vec<Event> = filter_events(&events, filter, query, now)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_events(&once, filter, query, now);
            assert_eq!(twice.len(), once.len(), "{filter} / {query:?}");
            assert!(twice.iter().zip(&once).all(|(a, b)| *a == b));
        }
    }
}

#[test]
fn search_is_case_insensitive() {
    let events = sample_events();
    let now = day("2025-01-10");
    for (upper, lower) in [("HALL A", "hall a"), ("LAB", "lab"), ("ALL DAY", "all day")] {
        let a = filter_events(&events, EventFilter::All, upper, now);
        let b = filter_events(&events, EventFilter::All, lower, now);
        assert_eq!(ids(&a), ids(&b));
        assert!(!a.is_empty());
    }
}

#[test]
fn filter_preserves_relative_order() {
    let events = sample_events();
    let found = filter_events(&events, EventFilter::All, "tech", day("2025-01-10"));
    assert_eq!(ids(&found), ["e2", "e4"]);

    let found = filter_events(&events, EventFilter::Past, "", day("2025-01-10"));
    assert_eq!(ids(&found), ["e1", "e6"]);
}

#[test]
fn valid_distinct_dates_have_exactly_one_state() {
    let event = test_event("e", "Week", "2025-01-01", "2025-01-07");
    for now in [
        day("2024-12-31"),
        day("2025-01-03"),
        day("2025-01-08"),
        "2025-01-04T13:45:00Z".parse().unwrap(),
    ] {
        let states = [
            is_ongoing(&event, now),
            is_upcoming(&event, now),
            is_past(&event, now),
        ];
        assert_eq!(states.iter().filter(|s| **s).count(), 1, "at {now}");
        assert!(classify(&event, now).is_some());
    }
}

#[test]
fn invalid_dates_have_no_state() {
    let now = day("2025-01-10");
    for (start, end) in [("soon", ""), ("", ""), ("01/02/2025", "01/03/2025")] {
        let event = test_event("e", "TBA", start, end);
        assert!(!is_ongoing(&event, now));
        assert!(!is_upcoming(&event, now));
        assert!(!is_past(&event, now));
        assert_eq!(classify(&event, now), None);
    }
}

#[test]
fn conditions_match_free_function() {
    let events = sample_events();
    let now = day("2025-01-10");
    for filter in EventFilter::ALL {
        let conds = EventConditions::at(now, filter, "a");
        assert_eq!(
            ids(&conds.apply(&events)),
            ids(&filter_events(&events, filter, "a", now))
        );
    }
}

#[test]
fn conditions_default_to_current_time() {
    let before = jiff::Timestamp::now();
    let conds = EventConditions::new(EventFilter::Upcoming, "");
    assert!(conds.now >= before);

    let future = test_event("e", "Far", "2999-01-01", "2999-01-02");
    assert!(conds.matches(&future));
    assert_eq!(classify(&future, conds.now), Some(TemporalState::Upcoming));
}
