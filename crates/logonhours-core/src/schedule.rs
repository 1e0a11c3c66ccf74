//! Weekly logon windows and the days they fall on.
//!
//! This module provides the human-facing half of the codec: a window names
//! one local weekday, a half-open hour range within that day, and the
//! whole-hour UTC offset its clock runs at. Windows never cross local
//! midnight; a span like 22:00-02:00 must be supplied as two windows, one
//! per day.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::HOURS_PER_DAY;

/// Days of the week, in mask order (Sunday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns all days of the week in mask order.
    pub fn all() -> Vec<Weekday> {
        vec![
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ]
    }

    /// Returns the working days (Monday through Friday).
    pub fn weekdays() -> Vec<Weekday> {
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ]
    }

    /// Returns the weekend days (Saturday and Sunday).
    pub fn weekends() -> Vec<Weekday> {
        vec![Weekday::Saturday, Weekday::Sunday]
    }

    /// Position of this day in the mask layout (Sunday = 0, Saturday = 6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at a mask position, if the index is below 7.
    pub fn from_index(index: usize) -> Option<Weekday> {
        match index {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Converts from chrono's weekday type.
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }

    /// Converts to chrono's weekday type.
    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }

    /// Lowercase day name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One permitted logon window on a single local weekday.
///
/// The window grants the hours `begin_hour..end_hour` (half-open, so an
/// 08:00-10:00 window grants the 08:00 and 09:00 hours but not 10:00).
/// `end_hour` may be 24 to reach the end of the day. `utc_offset_hours` is
/// how many whole hours the window's local clock runs ahead of the
/// canonical zero-offset timeline the mask is expressed in; western zones
/// carry negative offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLogonWindow")]
pub struct LogonWindow {
    day: Weekday,
    begin_hour: u8,
    end_hour: u8,
    utc_offset_hours: i32,
}

/// Mirror of [`LogonWindow`] used to validate deserialized values.
#[derive(Deserialize)]
struct RawLogonWindow {
    day: Weekday,
    begin_hour: u8,
    end_hour: u8,
    utc_offset_hours: i32,
}

impl TryFrom<RawLogonWindow> for LogonWindow {
    type Error = ScheduleError;

    fn try_from(raw: RawLogonWindow) -> Result<Self> {
        LogonWindow::new(raw.day, raw.begin_hour, raw.end_hour, raw.utc_offset_hours)
    }
}

impl LogonWindow {
    /// Creates a window after validating its hour range.
    ///
    /// `begin_hour == end_hour` is accepted and grants no hours.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidHour`] if either hour exceeds 24, or
    /// [`ScheduleError::InvalidWindow`] if the begin hour lies after the
    /// end hour.
    pub fn new(
        day: Weekday,
        begin_hour: u8,
        end_hour: u8,
        utc_offset_hours: i32,
    ) -> Result<Self> {
        for hour in [begin_hour, end_hour] {
            if hour > HOURS_PER_DAY {
                return Err(ScheduleError::InvalidHour { hour });
            }
        }
        if begin_hour > end_hour {
            return Err(ScheduleError::InvalidWindow {
                begin: begin_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            day,
            begin_hour,
            end_hour,
            utc_offset_hours,
        })
    }

    /// Creates a window spanning the whole of one local day.
    pub fn all_day(day: Weekday, utc_offset_hours: i32) -> Self {
        Self {
            day,
            begin_hour: 0,
            end_hour: HOURS_PER_DAY,
            utc_offset_hours,
        }
    }

    /// Creates a window from clock times, keeping only the hour components.
    ///
    /// The schedule is hour-granular, so minutes and seconds are discarded:
    /// 09:30-17:45 becomes the 09:00-17:00 window.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidWindow`] if the begin time's hour
    /// lies after the end time's hour.
    pub fn from_naive_times(
        day: Weekday,
        begin: NaiveTime,
        end: NaiveTime,
        utc_offset_hours: i32,
    ) -> Result<Self> {
        Self::new(day, begin.hour() as u8, end.hour() as u8, utc_offset_hours)
    }

    /// Constructor for ranges already known to be valid, used by the
    /// decode scan.
    pub(crate) fn from_run(
        day: Weekday,
        begin_hour: u8,
        end_hour: u8,
        utc_offset_hours: i32,
    ) -> Self {
        debug_assert!(begin_hour <= end_hour && end_hour <= HOURS_PER_DAY);
        Self {
            day,
            begin_hour,
            end_hour,
            utc_offset_hours,
        }
    }

    /// The local weekday this window falls on.
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// First local hour the window grants.
    pub fn begin_hour(&self) -> u8 {
        self.begin_hour
    }

    /// First local hour past the window (exclusive, up to 24).
    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// Whole hours the window's local clock runs ahead of the canonical
    /// timeline.
    pub fn utc_offset_hours(&self) -> i32 {
        self.utc_offset_hours
    }

    /// Local hours granted by this window, as a half-open range.
    pub fn local_hours(&self) -> std::ops::Range<u8> {
        self.begin_hour..self.end_hour
    }

    /// Number of hours the window grants.
    pub fn hour_count(&self) -> u8 {
        self.end_hour - self.begin_hour
    }

    /// Returns true if the window grants no hours.
    pub fn is_empty(&self) -> bool {
        self.begin_hour == self.end_hour
    }
}

impl std::fmt::Display for LogonWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:00-{:02}:00 UTC{:+}",
            self.day, self.begin_hour, self.end_hour, self.utc_offset_hours
        )
    }
}
