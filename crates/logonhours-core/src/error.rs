//! Schedule codec error types.

use thiserror::Error;

use crate::{HOURS_PER_DAY, MASK_LEN};

/// Errors that can occur when building logon windows or decoding masks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Window whose begin hour lies after its end hour.
    #[error("begin time cannot be after end time (begin {begin}, end {end})")]
    InvalidWindow {
        /// Begin hour of the rejected window.
        begin: u8,
        /// End hour of the rejected window.
        end: u8,
    },

    /// Hour value outside the permitted range.
    #[error("hour {hour} is out of range (0-{HOURS_PER_DAY})")]
    InvalidHour {
        /// The rejected hour value.
        hour: u8,
    },

    /// Mask input whose length is not exactly 21 bytes.
    #[error("mask must be exactly {MASK_LEN} bytes, got {len}")]
    InvalidMaskLength {
        /// Length of the rejected input.
        len: usize,
    },
}

/// Result type for schedule codec operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
