//! Slot scoring and best-slot selection for a single task.

use serde::Serialize;
use tracing::trace;

use crate::energy::EnergyLevel;
use crate::patterns::PatternTable;
use crate::slots::TimeSlot;
use crate::task::{Priority, Task};

const ENERGY_EXACT: f64 = 30.0;
const ENERGY_ADJACENT: f64 = 15.0;
const TASK_TYPE_MATCH: f64 = 25.0;
const FOCUS_CAPACITY_WEIGHT: f64 = 0.2;
const MORNING_URGENT_BONUS: f64 = 20.0;

/// Additive breakdown of how well a slot fits a task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotScore {
    pub energy_match: f64,
    pub task_type: f64,
    pub focus_capacity: f64,
    pub morning_bonus: f64,
    pub total: f64,
}

/// Score `slot` for `task` against the pattern of the slot's start hour.
///
/// Hours missing from the table use its first entry; an empty table only
/// contributes the morning bonus.
pub fn score_slot(task: &Task, slot: &TimeSlot, patterns: &PatternTable) -> SlotScore {
    let hour = slot.start_hour();
    let required = EnergyLevel::for_priority(task.priority);

    let (energy_match, task_type, focus_capacity) = match patterns.get_or_first(hour) {
        Some(p) => {
            let energy = match required.distance(p.energy_level) {
                0 => ENERGY_EXACT,
                1 => ENERGY_ADJACENT,
                _ => 0.0,
            };
            let affinity = if p.suits(task.priority) { TASK_TYPE_MATCH } else { 0.0 };
            (energy, affinity, f64::from(p.focus_capacity) * FOCUS_CAPACITY_WEIGHT)
        }
        None => (0.0, 0.0, 0.0),
    };

    let morning_bonus = if task.priority == Priority::Urgent && (9..=11).contains(&hour) {
        MORNING_URGENT_BONUS
    } else {
        0.0
    };

    SlotScore {
        energy_match,
        task_type,
        focus_capacity,
        morning_bonus,
        total: energy_match + task_type + focus_capacity + morning_bonus,
    }
}

/// Index of the best slot in `slots`, if any slot is long enough.
///
/// Ties keep the earliest slot.
pub fn find_optimal_slot_index(
    task: &Task,
    slots: &[TimeSlot],
    patterns: &PatternTable,
) -> Option<usize> {
    let needed = task.duration_minutes();
    let mut best: Option<(usize, f64)> = None;

    for (idx, slot) in slots.iter().enumerate() {
        if slot.duration < needed {
            continue;
        }
        let score = score_slot(task, slot, patterns);
        trace!(task = %task.id, slot_start = %slot.start, total = score.total, "scored slot");
        if best.is_none_or(|(_, top)| score.total > top) {
            best = Some((idx, score.total));
        }
    }

    best.map(|(idx, _)| idx)
}

/// Best slot for `task`, or `None` when no slot can hold it.
pub fn find_optimal_time_slot<'a>(
    task: &Task,
    slots: &'a [TimeSlot],
    patterns: &PatternTable,
) -> Option<&'a TimeSlot> {
    find_optimal_slot_index(task, slots, patterns).map(|idx| &slots[idx])
}
