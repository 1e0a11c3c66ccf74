//! Canonical week timeline backing the codec.
//!
//! The grid is a cyclic 168-slot boolean timeline, one slot per hour of
//! the week starting at Sunday 00:00 in the zero-offset frame. Encoding
//! marks window hours onto it, decoding scans it back out. A fresh grid is
//! built for every call and never escapes the crate.

use crate::schedule::{LogonWindow, Weekday};
use crate::{HOURS_PER_DAY, HOURS_PER_WEEK};

/// One boolean slot per hour of the canonical week.
#[derive(Debug, Clone)]
pub(crate) struct WeekGrid {
    slots: [bool; HOURS_PER_WEEK],
}

impl WeekGrid {
    /// Creates a grid with no hour marked.
    pub(crate) fn new() -> Self {
        Self {
            slots: [false; HOURS_PER_WEEK],
        }
    }

    /// Marks the slot at a canonical hour index.
    pub(crate) fn set(&mut self, index: i32) {
        self.slots[Self::wrap(index)] = true;
    }

    /// Returns true if the slot at a canonical hour index is marked.
    pub(crate) fn is_set(&self, index: i32) -> bool {
        self.slots[Self::wrap(index)]
    }

    /// Wraps a signed hour index onto the cyclic timeline.
    ///
    /// Indices pushed past either end of the week by an offset land back
    /// on the grid, so Saturday 23:00 shifted forward two hours becomes
    /// Sunday 01:00 rather than an out-of-range slot.
    fn wrap(index: i32) -> usize {
        index.rem_euclid(HOURS_PER_WEEK as i32) as usize
    }

    /// Marks every hour granted by `window` onto the canonical timeline.
    ///
    /// Each local hour maps to the canonical slot `local - offset`, where
    /// `local` is the flat hour index of the window's day and hour.
    /// Marking only ever adds slots, so repeated or overlapping windows
    /// union together.
    pub(crate) fn mark(&mut self, window: &LogonWindow) {
        let day_start = (window.day().index() * HOURS_PER_DAY as usize) as i32;
        for hour in window.local_hours() {
            self.set(day_start + hour as i32 - window.utc_offset_hours());
        }
    }

    /// Scans the grid back into windows local to `utc_offset_hours`.
    ///
    /// Walks the local week from Sunday 00:00, looking up each local hour's
    /// canonical slot, and emits one window per maximal run of marked hours
    /// within a local day. A run still open at local midnight closes with
    /// end hour 24; a stretch crossing midnight therefore comes back as two
    /// windows, one ending at 24:00 and one starting at 00:00 the next day.
    pub(crate) fn windows(&self, utc_offset_hours: i32) -> Vec<LogonWindow> {
        let mut windows = Vec::new();
        for day in Weekday::all() {
            let day_start = (day.index() * HOURS_PER_DAY as usize) as i32;
            let mut run_begin: Option<u8> = None;
            for hour in 0..HOURS_PER_DAY {
                let marked = self.is_set(day_start + hour as i32 - utc_offset_hours);
                match (marked, run_begin) {
                    (true, None) => run_begin = Some(hour),
                    (false, Some(begin)) => {
                        windows.push(LogonWindow::from_run(day, begin, hour, utc_offset_hours));
                        run_begin = None;
                    }
                    _ => {}
                }
            }
            if let Some(begin) = run_begin {
                windows.push(LogonWindow::from_run(
                    day,
                    begin,
                    HOURS_PER_DAY,
                    utc_offset_hours,
                ));
            }
        }
        windows
    }
}
