// Host-side tests for scroll section tracking.

use animus_core::{Extent, Section, SectionChange, SectionTracker, TrackerConfig};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Id {
    A,
    B,
    C,
}

fn abc(lookahead: f64) -> SectionTracker<Id, Extent> {
    SectionTracker::new(
        TrackerConfig { lookahead },
        [
            (Id::A, Extent::between(0.0, 100.0)),
            (Id::B, Extent::between(100.0, 250.0)),
            (Id::C, Extent::between(250.0, 400.0)),
        ],
    )
}

fn record_entered(tracker: &mut SectionTracker<Id, Extent>) -> Rc<RefCell<Vec<(Id, f64)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    tracker.on_entered(move |e| sink.borrow_mut().push((e.section, e.offset)));
    log
}

#[test]
fn resolves_section_from_offset() {
    let tracker = abc(0.0);
    assert_eq!(tracker.resolve(150.0), Some(Id::B));
    assert_eq!(tracker.resolve(400.0), Some(Id::C));
    assert_eq!(tracker.resolve(-10.0), None);
    assert_eq!(tracker.resolve(401.0), None);
    assert_eq!(tracker.current(), None, "resolve does not change state");
}

#[test]
fn shared_edge_goes_to_first_registered() {
    let tracker = abc(0.0);
    assert_eq!(tracker.resolve(100.0), Some(Id::A));
    assert_eq!(tracker.resolve(250.0), Some(Id::B));
}

#[test]
fn lookahead_shifts_the_reference_point() {
    let tracker = abc(100.0);
    assert_eq!(tracker.lookahead(), 100.0);
    assert_eq!(tracker.resolve(0.0), Some(Id::A));
    assert_eq!(tracker.resolve(120.0), Some(Id::B));
    assert_eq!(tracker.resolve(200.0), Some(Id::C));
    assert_eq!(tracker.resolve(-110.0), None);
}

#[test]
fn default_lookahead_compensates_for_navbar() {
    assert_eq!(TrackerConfig::default().lookahead, 100.0);
}

#[test]
fn scroll_sequence_emits_three_entered_events() {
    let mut tracker = abc(0.0);
    let entered = record_entered(&mut tracker);
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    tracker.subscribe(move |c: &SectionChange<Id>| sink.borrow_mut().push(*c));

    for offset in [0.0, 120.0, 260.0, 50.0] {
        tracker.observe(offset);
    }

    assert_eq!(
        *entered.borrow(),
        vec![(Id::B, 120.0), (Id::C, 260.0), (Id::A, 50.0)]
    );
    let path: Vec<_> = changes.borrow().iter().map(|c| c.current).collect();
    assert_eq!(path, vec![Some(Id::A), Some(Id::B), Some(Id::C), Some(Id::A)]);
    assert_eq!(changes.borrow()[0].previous, None);
    assert_eq!(tracker.current(), Some(Id::A));
}

#[test]
fn same_section_is_a_noop() {
    let mut tracker = abc(0.0);
    let entered = record_entered(&mut tracker);
    assert!(tracker.observe(110.0).is_some());
    assert!(tracker.observe(130.0).is_none());
    assert!(tracker.observe(200.0).is_none());
    assert!(entered.borrow().is_empty());
}

#[test]
fn leaving_all_sections_clears_current_without_entered() {
    let mut tracker = abc(0.0);
    let entered = record_entered(&mut tracker);
    tracker.observe(50.0);
    let change = tracker.observe(900.0);
    assert_eq!(
        change,
        Some(SectionChange {
            previous: Some(Id::A),
            current: None
        })
    );
    assert!(entered.borrow().is_empty());

    tracker.observe(300.0);
    assert_eq!(*entered.borrow(), vec![(Id::C, 300.0)]);
}

#[test]
fn queued_scrolls_recompute_once_from_latest_offset() {
    let mut tracker = abc(0.0);
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    tracker.subscribe(move |_| *sink.borrow_mut() += 1);

    assert!(!tracker.has_pending());
    assert!(tracker.queue_scroll(10.0));
    assert!(!tracker.queue_scroll(150.0));
    assert!(!tracker.queue_scroll(300.0));
    assert!(tracker.has_pending());
    assert_eq!(tracker.current(), None, "nothing happens before the frame");

    let change = tracker.flush();
    assert_eq!(change.map(|c| c.current), Some(Some(Id::C)));
    assert_eq!(*count.borrow(), 1);
    assert!(!tracker.has_pending());

    assert!(tracker.flush().is_none(), "second flush in a frame is free");
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn unsubscribed_handlers_stop_receiving() {
    let mut tracker = abc(0.0);
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    let id = tracker.subscribe(move |_| *sink.borrow_mut() += 1);

    tracker.observe(50.0);
    assert!(tracker.unsubscribe(id));
    assert!(!tracker.unsubscribe(id));
    tracker.observe(150.0);
    assert_eq!(*count.borrow(), 1);
}

#[derive(Clone, Copy)]
struct Detached;

impl animus_core::SectionElement for Detached {
    fn extent(&self) -> Option<Extent> {
        None
    }
}

#[test]
fn unmeasurable_elements_are_skipped() {
    let tracker = SectionTracker::new(TrackerConfig { lookahead: 0.0 }, [(Id::A, Detached)]);
    assert_eq!(tracker.resolve(0.0), None);
    assert!(tracker.element(Id::A).is_some());
    assert!(tracker.element(Id::B).is_none());
}

#[test]
fn registry_ids_are_unique_and_round_trip() {
    let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
    for (i, id) in ids.iter().enumerate() {
        assert!(!ids[i + 1..].contains(id), "duplicate section id {}", id);
        assert_eq!(Section::from_id(id), Some(Section::ALL[i]));
    }
    assert_eq!(Section::from_id("nowhere"), None);
}

#[test]
fn registry_order_matches_layout() {
    let tracker = SectionTracker::new(
        TrackerConfig::default(),
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, &s)| (s, Extent::new(i as f64 * 800.0, 800.0))),
    );
    let ids: Vec<_> = tracker.section_ids().collect();
    assert_eq!(ids, Section::ALL.to_vec());
    assert_eq!(tracker.resolve(0.0), Some(Section::Hero));
    assert_eq!(tracker.resolve(4000.0), Some(Section::Story));
}
