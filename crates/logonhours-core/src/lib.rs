//! Logonhours Core - weekly permitted-logon schedule codec.
//!
//! Directory services keep a user's permitted logon hours as a packed
//! 21-byte attribute: one bit per hour of the week, Sunday first, three
//! bytes per day, all on a canonical zero-offset timeline. This crate
//! converts between that attribute and human-oriented weekly windows
//! (day, begin hour, end hour) expressed in a local whole-hour UTC
//! offset:
//!
//! - [`encode`] packs a set of [`LogonWindow`]s into a [`LogonMask`]
//! - [`decode`] unpacks raw attribute bytes back into windows
//!
//! Encoding shifts each local hour onto the canonical timeline and wraps
//! across the week boundary; decoding walks the local week and gathers
//! maximal runs of permitted hours, one window per run per day.
//!
//! # Example
//!
//! ```
//! use logonhours_core::{decode, encode, LogonWindow, Weekday};
//!
//! let windows = vec![
//!     LogonWindow::new(Weekday::Monday, 8, 10, -8).unwrap(),
//!     LogonWindow::new(Weekday::Wednesday, 13, 16, -8).unwrap(),
//! ];
//!
//! let mask = encode(&windows);
//! let decoded = decode(mask.as_bytes(), -8).unwrap();
//! assert_eq!(decoded, windows);
//! ```

pub mod error;
mod grid;
pub mod mask;
pub mod schedule;

pub use error::{Result, ScheduleError};
pub use mask::LogonMask;
pub use schedule::{LogonWindow, Weekday};

/// Hours in one day; also the exclusive upper bound for window end hours.
pub const HOURS_PER_DAY: u8 = 24;

/// Days covered by the mask, Sunday through Saturday.
pub const DAYS_PER_WEEK: usize = 7;

/// Hour slots in the canonical week timeline.
pub const HOURS_PER_WEEK: usize = HOURS_PER_DAY as usize * DAYS_PER_WEEK;

/// Exact byte length of a packed logon-hours mask.
pub const MASK_LEN: usize = HOURS_PER_WEEK / 8;

/// Packs logon windows into the 21-byte mask.
///
/// The mask is the union of every window's hours shifted onto the
/// canonical timeline; window order does not matter. An empty slice
/// yields the all-denied mask.
pub fn encode(windows: &[LogonWindow]) -> LogonMask {
    LogonMask::from_windows(windows)
}

/// Unpacks a 21-byte mask into windows local to `utc_offset_hours`.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidMaskLength`] if `bytes` is not exactly
/// 21 bytes long.
pub fn decode(bytes: &[u8], utc_offset_hours: i32) -> Result<Vec<LogonWindow>> {
    Ok(LogonMask::from_bytes(bytes)?.windows(utc_offset_hours))
}
