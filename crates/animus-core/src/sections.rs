//! Scroll-driven "which section is in view" tracking.
//!
//! One tracker serves the whole page. Scroll handlers only queue the latest
//! offset (`queue_scroll`); the frame loop calls `flush` so the section is
//! recomputed at most once per animation frame. Consumers subscribe instead
//! of measuring the layout themselves, which keeps the navbar highlight and
//! the HUD readout in agreement.

use crate::constants::SECTION_LOOKAHEAD_PX;
use smallvec::SmallVec;

/// Vertical page extent of a section, in CSS pixels from the document top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn between(top: f64, bottom: f64) -> Self {
        Self {
            top,
            height: (bottom - top).max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Both edges are inclusive; shared edges are settled by registration order.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom()
    }
}

/// Anything that can report where it sits on the page. `None` means the
/// element is not laid out (detached, hidden) and is skipped.
pub trait SectionElement {
    fn extent(&self) -> Option<Extent>;
}

impl SectionElement for Extent {
    fn extent(&self) -> Option<Extent> {
        Some(*self)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TrackerConfig {
    /// Added to the scroll offset before testing containment.
    pub lookahead: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            lookahead: SECTION_LOOKAHEAD_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChange<Id> {
    pub previous: Option<Id>,
    pub current: Option<Id>,
}

/// Side-channel event for decorative consumers (HUD log, notification sound).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionEntered<Id> {
    pub section: Id,
    pub offset: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type ChangeHandler<Id> = Box<dyn FnMut(&SectionChange<Id>)>;
type EnterHandler<Id> = Box<dyn FnMut(&SectionEntered<Id>)>;

pub struct SectionTracker<Id, E> {
    sections: SmallVec<[(Id, E); 8]>,
    lookahead: f64,
    current: Option<Id>,
    // false until the first measurement that lands inside a section
    seeded: bool,
    pending: Option<f64>,
    on_change: SmallVec<[(SubscriptionId, ChangeHandler<Id>); 4]>,
    on_enter: SmallVec<[(SubscriptionId, EnterHandler<Id>); 4]>,
    next_id: u32,
}

impl<Id, E> SectionTracker<Id, E>
where
    Id: Copy + PartialEq + std::fmt::Debug,
    E: SectionElement,
{
    /// The section list is fixed for the tracker's lifetime.
    pub fn new(config: TrackerConfig, sections: impl IntoIterator<Item = (Id, E)>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
            lookahead: config.lookahead,
            current: None,
            seeded: false,
            pending: None,
            on_change: SmallVec::new(),
            on_enter: SmallVec::new(),
            next_id: 0,
        }
    }

    pub fn current(&self) -> Option<Id> {
        self.current
    }

    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }

    pub fn section_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.sections.iter().map(|(id, _)| *id)
    }

    pub fn element(&self, id: Id) -> Option<&E> {
        self.sections
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, el)| el)
    }

    /// First registered section containing `offset + lookahead`.
    pub fn resolve(&self, offset: f64) -> Option<Id> {
        let y = offset + self.lookahead;
        self.sections
            .iter()
            .find(|(_, el)| el.extent().is_some_and(|ext| ext.contains(y)))
            .map(|(id, _)| *id)
    }

    /// Record the latest scroll offset. Returns true when this is the first
    /// offset queued since the last flush.
    pub fn queue_scroll(&mut self, offset: f64) -> bool {
        self.pending.replace(offset).is_none()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Recompute from the most recently queued offset, if any.
    pub fn flush(&mut self) -> Option<SectionChange<Id>> {
        let offset = self.pending.take()?;
        self.observe(offset)
    }

    /// Recompute immediately and notify subscribers on a change.
    pub fn observe(&mut self, offset: f64) -> Option<SectionChange<Id>> {
        let next = self.resolve(offset);
        if next == self.current {
            return None;
        }
        let change = SectionChange {
            previous: self.current,
            current: next,
        };
        self.current = next;
        for (_, handler) in self.on_change.iter_mut() {
            handler(&change);
        }

        // The first placement only establishes where the visitor starts.
        if !self.seeded {
            self.seeded = true;
            log::debug!("[sections] initial section {:?}", next);
            return Some(change);
        }
        if let Some(section) = next {
            log::debug!("[sections] entered {:?} at {:.0}px", section, offset);
            let entered = SectionEntered { section, offset };
            for (_, handler) in self.on_enter.iter_mut() {
                handler(&entered);
            }
        }
        Some(change)
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&SectionChange<Id>) + 'static) -> SubscriptionId {
        let id = self.alloc_id();
        self.on_change.push((id, Box::new(handler)));
        id
    }

    pub fn on_entered(&mut self, handler: impl FnMut(&SectionEntered<Id>) + 'static) -> SubscriptionId {
        let id = self.alloc_id();
        self.on_enter.push((id, Box::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.on_change.len() + self.on_enter.len();
        self.on_change.retain(|(sid, _)| *sid != id);
        self.on_enter.retain(|(sid, _)| *sid != id);
        before != self.on_change.len() + self.on_enter.len()
    }

    fn alloc_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}
