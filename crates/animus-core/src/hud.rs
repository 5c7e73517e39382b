//! HUD overlay state: current location and a short notification log.

use crate::constants::HUD_LOG_CAPACITY;
use crate::registry::{Coordinates, Section};
use std::collections::VecDeque;

/// Bounded FIFO of notification lines. Pushing past capacity evicts the
/// oldest line.
#[derive(Clone, Debug)]
pub struct NotificationLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::with_capacity(HUD_LOG_CAPACITY)
    }
}

impl NotificationLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn newest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Display order: most recent first.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }
}

pub fn notification_for(section: Section) -> String {
    format!("Accessing {} data...", section.hud_name().to_lowercase())
}

pub fn format_coordinates(c: Coordinates) -> String {
    format!("Coordinates: {:.4}, {:.4}", c.lat, c.lng)
}

#[derive(Clone, Debug, Default)]
pub struct HudState {
    location: Option<Section>,
    log: NotificationLog,
}

impl HudState {
    pub fn location(&self) -> Option<Section> {
        self.location
    }

    pub fn log(&self) -> &NotificationLog {
        &self.log
    }

    /// Follow the tracker's current section without logging.
    pub fn set_location(&mut self, section: Option<Section>) {
        self.location = section;
    }

    /// A section was entered: update the readout and append a log line.
    pub fn enter(&mut self, section: Section) {
        self.location = Some(section);
        self.log.push(notification_for(section));
    }
}
