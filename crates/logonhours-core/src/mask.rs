//! The packed 21-byte logon-hours mask.
//!
//! Directory services store a week of permitted logon hours as 21 bytes:
//! three bytes per day starting with Sunday, low bit first, so bit `b` of
//! the day's byte `n` stands for the canonical hour `8n + b`. The whole
//! mask is expressed in the zero-offset frame; local wall-clock windows
//! are shifted onto it during encoding and shifted back out during
//! decoding.

use crate::error::{Result, ScheduleError};
use crate::grid::WeekGrid;
use crate::schedule::{LogonWindow, Weekday};
use crate::{DAYS_PER_WEEK, HOURS_PER_DAY, MASK_LEN};

/// Bytes covering one day of the week.
const BYTES_PER_DAY: usize = 3;

/// A packed weekly logon-hours mask.
///
/// One bit per hour of the canonical week, 21 bytes total, laid out
/// byte-for-byte the way directory services expect the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogonMask {
    bytes: [u8; MASK_LEN],
}

impl LogonMask {
    /// Mask with no permitted hours.
    pub fn empty() -> Self {
        Self {
            bytes: [0; MASK_LEN],
        }
    }

    /// Mask with every hour of the week permitted.
    pub fn full() -> Self {
        Self {
            bytes: [0xFF; MASK_LEN],
        }
    }

    /// Packs a set of logon windows into a mask.
    ///
    /// The result is the union of every window's hours shifted onto the
    /// canonical timeline, so order and overlap between windows do not
    /// matter. An empty slice yields the empty mask.
    pub fn from_windows(windows: &[LogonWindow]) -> Self {
        let mut grid = WeekGrid::new();
        for window in windows {
            grid.mark(window);
        }
        Self::from_grid(&grid)
    }

    /// Adopts raw bytes as a mask after checking the length.
    ///
    /// The length check is the only validation; every bit pattern in a
    /// 21-byte input is a meaningful mask.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidMaskLength`] unless `bytes` is
    /// exactly 21 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; MASK_LEN] = bytes
            .try_into()
            .map_err(|_| ScheduleError::InvalidMaskLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Unpacks the mask into windows local to `utc_offset_hours`.
    ///
    /// Emits one window per maximal run of permitted hours within each
    /// local day, walking the week from local Sunday 00:00. The result is
    /// empty exactly when no bit is set.
    pub fn windows(&self, utc_offset_hours: i32) -> Vec<LogonWindow> {
        self.to_grid().windows(utc_offset_hours)
    }

    /// Returns true if the canonical `hour` (0-23) of `day` is permitted.
    ///
    /// The query is in the mask's own zero-offset frame; hours 24 and
    /// above are never permitted.
    pub fn permits(&self, day: Weekday, hour: u8) -> bool {
        if hour >= HOURS_PER_DAY {
            return false;
        }
        let byte = day.index() * BYTES_PER_DAY + hour as usize / 8;
        self.bytes[byte] & (1 << (hour % 8)) != 0
    }

    /// Number of permitted hours in the week.
    pub fn hour_count(&self) -> u32 {
        self.bytes.iter().map(|byte| byte.count_ones()).sum()
    }

    /// Returns true if no hour is permitted.
    pub fn is_empty(&self) -> bool {
        self.bytes.iter().all(|&byte| byte == 0)
    }

    /// Borrows the raw attribute bytes.
    pub fn as_bytes(&self) -> &[u8; MASK_LEN] {
        &self.bytes
    }

    /// Consumes the mask into its raw attribute bytes.
    pub fn into_bytes(self) -> [u8; MASK_LEN] {
        self.bytes
    }

    /// Packs a canonical grid into the byte layout.
    fn from_grid(grid: &WeekGrid) -> Self {
        let mut bytes = [0u8; MASK_LEN];
        for day in 0..DAYS_PER_WEEK {
            for byte_in_day in 0..BYTES_PER_DAY {
                let mut packed = 0u8;
                for bit in 0..8 {
                    let hour = byte_in_day * 8 + bit;
                    if grid.is_set((day * HOURS_PER_DAY as usize + hour) as i32) {
                        packed |= 1 << bit;
                    }
                }
                bytes[day * BYTES_PER_DAY + byte_in_day] = packed;
            }
        }
        Self { bytes }
    }

    /// Unpacks the byte layout back onto a canonical grid.
    fn to_grid(&self) -> WeekGrid {
        let mut grid = WeekGrid::new();
        for (position, &byte) in self.bytes.iter().enumerate() {
            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    grid.set((position * 8 + bit) as i32);
                }
            }
        }
        grid
    }
}

impl Default for LogonMask {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<[u8; MASK_LEN]> for LogonMask {
    fn from(bytes: [u8; MASK_LEN]) -> Self {
        Self { bytes }
    }
}

impl TryFrom<&[u8]> for LogonMask {
    type Error = ScheduleError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for LogonMask {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for LogonMask {
    /// Formats the mask as 42 lowercase hex digits, no separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_windows() -> Vec<LogonWindow> {
        vec![
            LogonWindow::new(Weekday::Monday, 8, 10, -8).unwrap(),
            LogonWindow::new(Weekday::Wednesday, 13, 16, -8).unwrap(),
        ]
    }

    // ==================== Packing Tests ====================

    #[test]
    fn pacific_office_schedule_packs_to_known_bytes() {
        // Monday 08:00-10:00 local UTC-8 is canonical Monday 16:00-18:00,
        // Wednesday 13:00-16:00 local is canonical Wednesday 21:00-24:00.
        let mask = LogonMask::from_windows(&office_windows());
        let bytes = mask.as_bytes();

        assert_eq!(bytes[5], 0b0000_0011);
        assert_eq!(bytes[11], 0b1110_0000);
        for (index, &byte) in bytes.iter().enumerate() {
            if index != 5 && index != 11 {
                assert_eq!(byte, 0, "unexpected bits at byte {index}");
            }
        }
    }

    #[test]
    fn packing_is_order_independent() {
        let mut reversed = office_windows();
        reversed.reverse();
        assert_eq!(
            LogonMask::from_windows(&office_windows()),
            LogonMask::from_windows(&reversed)
        );
    }

    #[test]
    fn packing_unions_overlapping_windows() {
        let overlapping = vec![
            LogonWindow::new(Weekday::Tuesday, 8, 12, 0).unwrap(),
            LogonWindow::new(Weekday::Tuesday, 10, 14, 0).unwrap(),
        ];
        let merged = vec![LogonWindow::new(Weekday::Tuesday, 8, 14, 0).unwrap()];
        assert_eq!(
            LogonMask::from_windows(&overlapping),
            LogonMask::from_windows(&merged)
        );
    }

    #[test]
    fn zero_width_windows_pack_to_the_empty_mask() {
        let windows = vec![LogonWindow::new(Weekday::Friday, 9, 9, -5).unwrap()];
        assert_eq!(LogonMask::from_windows(&windows), LogonMask::empty());
    }

    #[test]
    fn saturday_night_wraps_into_sunday() {
        // Local Saturday 23:00-24:00 at UTC-2 is canonical Sunday 01:00.
        let windows = vec![LogonWindow::new(Weekday::Saturday, 23, 24, -2).unwrap()];
        let mask = LogonMask::from_windows(&windows);
        assert_eq!(mask.as_bytes()[0], 0b0000_0010);
        assert_eq!(mask.hour_count(), 1);
        assert_eq!(mask.windows(-2), windows);
    }

    #[test]
    fn sunday_morning_wraps_into_saturday() {
        // Local Sunday 00:00-01:00 at UTC+2 is canonical Saturday 22:00.
        let windows = vec![LogonWindow::new(Weekday::Sunday, 0, 1, 2).unwrap()];
        let mask = LogonMask::from_windows(&windows);
        assert_eq!(mask.as_bytes()[20], 0b0100_0000);
        assert_eq!(mask.hour_count(), 1);
        assert_eq!(mask.windows(2), windows);
    }

    // ==================== Unpacking Tests ====================

    #[test]
    fn unpacking_recovers_the_office_schedule() {
        let mask = LogonMask::from_windows(&office_windows());
        assert_eq!(mask.windows(-8), office_windows());
    }

    #[test]
    fn unpacking_the_empty_mask_yields_no_windows() {
        assert!(LogonMask::empty().windows(0).is_empty());
        assert!(LogonMask::empty().windows(11).is_empty());
    }

    #[test]
    fn unpacking_the_full_mask_yields_seven_whole_days() {
        let windows = LogonMask::full().windows(3);
        assert_eq!(windows.len(), 7);
        for (day, window) in Weekday::all().into_iter().zip(&windows) {
            assert_eq!(*window, LogonWindow::all_day(day, 3));
        }
    }

    #[test]
    fn decode_then_encode_preserves_the_mask() {
        let mask = LogonMask::from_windows(&office_windows());
        for offset in [-12, -8, 0, 3, 14] {
            let windows = mask.windows(offset);
            assert_eq!(LogonMask::from_windows(&windows), mask, "offset {offset}");
        }
    }

    #[test]
    fn decode_then_encode_preserves_arbitrary_bit_patterns() {
        let bytes: [u8; MASK_LEN] = [
            0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0xFF, 0x00, 0xAA, 0x55, 0x0F, 0xF0,
            0x3C, 0xC3, 0x81, 0x18, 0x66, 0x99, 0x7E,
        ];
        let mask = LogonMask::from(bytes);
        for offset in [-12, -1, 0, 2, 14] {
            let windows = mask.windows(offset);
            assert_eq!(LogonMask::from_windows(&windows), mask, "offset {offset}");
        }
    }

    // ==================== Byte Access Tests ====================

    #[test]
    fn from_bytes_requires_exactly_21_bytes() {
        assert_eq!(
            LogonMask::from_bytes(&[0u8; 20]).unwrap_err(),
            ScheduleError::InvalidMaskLength { len: 20 }
        );
        assert_eq!(
            LogonMask::from_bytes(&[0u8; 22]).unwrap_err(),
            ScheduleError::InvalidMaskLength { len: 22 }
        );
        assert_eq!(
            LogonMask::from_bytes(&[0u8; 0]).unwrap_err(),
            ScheduleError::InvalidMaskLength { len: 0 }
        );
        assert!(LogonMask::from_bytes(&[0u8; 21]).is_ok());
    }

    #[test]
    fn byte_conversions_round_trip() {
        let mask = LogonMask::from_windows(&office_windows());
        let raw = mask.into_bytes();
        assert_eq!(LogonMask::from(raw), mask);
        assert_eq!(LogonMask::try_from(&raw[..]).unwrap(), mask);
        assert_eq!(mask.as_ref(), &raw[..]);
    }

    #[test]
    fn permits_queries_the_canonical_frame() {
        let mask = LogonMask::from_windows(&office_windows());
        assert!(mask.permits(Weekday::Monday, 16));
        assert!(mask.permits(Weekday::Monday, 17));
        assert!(!mask.permits(Weekday::Monday, 8));
        assert!(mask.permits(Weekday::Wednesday, 21));
        assert!(!mask.permits(Weekday::Wednesday, 13));
        assert!(!mask.permits(Weekday::Sunday, 0));
        assert!(!mask.permits(Weekday::Monday, 24));
    }

    #[test]
    fn hour_counts_and_emptiness() {
        assert_eq!(LogonMask::empty().hour_count(), 0);
        assert!(LogonMask::empty().is_empty());
        assert_eq!(LogonMask::full().hour_count(), 168);
        assert!(!LogonMask::full().is_empty());
        assert_eq!(LogonMask::from_windows(&office_windows()).hour_count(), 5);
        assert_eq!(LogonMask::default(), LogonMask::empty());
    }

    #[test]
    fn display_is_42_hex_digits() {
        let mask = LogonMask::from_windows(&office_windows());
        let hex = mask.to_string();
        assert_eq!(hex.len(), 42);
        assert_eq!(hex, "0000000000030000000000e0000000000000000000");
        assert_eq!(
            LogonMask::empty().to_string(),
            "000000000000000000000000000000000000000000"
        );
    }
}
