//! smartplan-core: heuristic task prioritization and daily scheduling.
//!
//! Everything here is pure and synchronous. Functions that would read the
//! clock have `_now` wrappers over an explicit-time core.

pub mod energy;
pub mod patterns;
pub mod prioritize;
pub mod productivity;
pub mod schedule;
pub mod slot_finder;
pub mod slots;
pub mod task;
pub mod time;

pub use energy::EnergyLevel;
pub use patterns::{PatternTable, ProductivityPattern};
pub use prioritize::{compare_tasks, smart_task_prioritization};
pub use productivity::{
    analyze_productivity_and_suggest, analyze_productivity_now, analyze_productivity_with_patterns,
    ProductivityAnalysis,
};
pub use schedule::{
    ai_reason, create_daily_schedule, create_daily_schedule_now,
    create_daily_schedule_with_patterns, ScheduledTask, SmartSchedule, UserPreferences,
    WorkingHours,
};
pub use slot_finder::{find_optimal_slot_index, find_optimal_time_slot, score_slot, SlotScore};
pub use slots::{generate_day_blocks, generate_time_slots, SlotType, TimeSlot};
pub use task::{Priority, Task, TaskStatus, DEFAULT_ESTIMATED_MINUTES};
