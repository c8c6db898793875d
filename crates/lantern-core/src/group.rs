//! Date bucketing for due dates.
//!
//! Maps a task's due date to a coarse, human-readable bucket relative to the
//! current day (Today, Yesterday, Previous 7 Days, ...) and defines a total
//! order over buckets for stable display. The classification is pure:
//! callers pass the reference day explicitly, and [`DateGroup::classify_now`]
//! is a thin convenience over the system clock.

use std::cmp::Ordering;
use std::fmt;

use jiff::{civil::Date, Zoned};

/// A coarse classification of a due date relative to a reference day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateGroup {
    /// Due exactly on the reference day
    Today,
    /// Due exactly one day after the reference day
    Tomorrow,
    /// Due exactly one day before the reference day
    Yesterday,
    /// Due 2 to 6 days before the reference day
    PreviousWeek,
    /// Due in the reference day's calendar month, not claimed above
    ThisMonth,
    /// No due date at all
    NoDueDate,
    /// Any other month, labeled like "March 2025"
    Month(String),
}

impl DateGroup {
    /// Classifies a due date against an explicit reference day.
    ///
    /// The near-day buckets win over the month buckets: a date five days in
    /// the past lands in `PreviousWeek` even when it shares the reference
    /// day's month.
    pub fn classify(due: Option<Date>, today: Date) -> DateGroup {
        let date = match due {
            Some(date) => date,
            None => return DateGroup::NoDueDate,
        };

        let delta = date.since(today).map(|s| s.get_days()).unwrap_or(i32::MAX);
        match delta {
            0 => DateGroup::Today,
            1 => DateGroup::Tomorrow,
            -1 => DateGroup::Yesterday,
            -6..=-2 => DateGroup::PreviousWeek,
            _ if date.year() == today.year() && date.month() == today.month() => {
                DateGroup::ThisMonth
            }
            _ => DateGroup::Month(date.strftime("%B %Y").to_string()),
        }
    }

    /// Classifies a due date against the system clock's current day.
    pub fn classify_now(due: Option<Date>) -> DateGroup {
        Self::classify(due, Zoned::now().date())
    }

    /// The display label for this bucket.
    pub fn label(&self) -> &str {
        match self {
            DateGroup::Today => "Today",
            DateGroup::Tomorrow => "Tomorrow",
            DateGroup::Yesterday => "Yesterday",
            DateGroup::PreviousWeek => "Previous 7 Days",
            DateGroup::ThisMonth => "This Month",
            DateGroup::NoDueDate => "No Due Date",
            DateGroup::Month(label) => label,
        }
    }

    /// Display rank for the fixed buckets; open-ended buckets have none and
    /// sort after every fixed bucket, lexicographically among themselves.
    fn rank(&self) -> Option<u8> {
        match self {
            DateGroup::Today => Some(0),
            DateGroup::Tomorrow => Some(1),
            DateGroup::Yesterday => Some(2),
            DateGroup::PreviousWeek => Some(3),
            DateGroup::ThisMonth => Some(4),
            DateGroup::NoDueDate | DateGroup::Month(_) => None,
        }
    }
}

impl Ord for DateGroup {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.label().cmp(other.label()),
        }
    }
}

impl PartialOrd for DateGroup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
