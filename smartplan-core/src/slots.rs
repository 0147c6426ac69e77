//! Working-day partitioning into focus and break blocks.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::energy::EnergyLevel;
use crate::time::{from_minute_of_day, hhmm, minute_of_day};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Focus,
    Break,
    Meeting,
    Flexible,
}

/// A block of wall-clock time within one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    /// Minutes, always `end - start`.
    pub duration: u32,
    #[serde(rename = "type")]
    pub slot_type: SlotType,
    pub energy_required: EnergyLevel,
}

impl TimeSlot {
    fn from_minutes(start: u32, end: u32, slot_type: SlotType) -> Option<Self> {
        let energy_required = match slot_type {
            SlotType::Focus => EnergyLevel::High,
            _ => EnergyLevel::Low,
        };
        Some(Self {
            start: from_minute_of_day(start)?,
            end: from_minute_of_day(end)?,
            duration: end - start,
            slot_type,
            energy_required,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Carve `[start, end)` into alternating focus and break blocks.
///
/// The last block is cut at `end`. An empty or inverted window, or a zero
/// focus length, yields no blocks.
pub fn generate_day_blocks(
    start: NaiveTime,
    end: NaiveTime,
    focus_minutes: u32,
    break_minutes: u32,
) -> Vec<TimeSlot> {
    let start_m = minute_of_day(start);
    let end_m = minute_of_day(end);
    if end_m <= start_m || focus_minutes == 0 {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    let mut cursor = start_m;

    while cursor < end_m {
        let focus_len = focus_minutes.min(end_m - cursor);
        let Some(focus) = TimeSlot::from_minutes(cursor, cursor + focus_len, SlotType::Focus) else {
            break;
        };
        blocks.push(focus);
        cursor += focus_len;

        let break_len = break_minutes.min(end_m - cursor);
        if break_len > 0 {
            if let Some(b) = TimeSlot::from_minutes(cursor, cursor + break_len, SlotType::Break) {
                blocks.push(b);
            }
            cursor += break_len;
        }
    }

    blocks
}

/// Focus slots only; these are what the scheduler assigns tasks to.
pub fn generate_time_slots(
    start: NaiveTime,
    end: NaiveTime,
    focus_minutes: u32,
    break_minutes: u32,
) -> Vec<TimeSlot> {
    generate_day_blocks(start, end, focus_minutes, break_minutes)
        .into_iter()
        .filter(|s| s.slot_type == SlotType::Focus)
        .collect()
}
