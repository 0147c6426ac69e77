//! Daily schedule assembly.
//!
//! Greedy single pass: prioritized todo tasks each take the best remaining
//! focus slot. A slot is used at most once; tasks that fit nowhere are left
//! out of the schedule.

use chrono::{DateTime, FixedOffset, Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::patterns::PatternTable;
use crate::prioritize::smart_task_prioritization;
use crate::productivity::analyze_productivity_with_patterns;
use crate::slot_finder::find_optimal_slot_index;
use crate::slots::{generate_time_slots, TimeSlot};
use crate::task::{Priority, Task, TaskStatus};
use crate::time::{hhmm, on_date};

const REASON_PREFIX: &str = "Запланировано: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingHours {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
        }
    }
}

/// User planning preferences. Every field falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Focus block length in minutes.
    pub focus_time: u32,
    /// Break length in minutes.
    pub break_time: u32,
    pub working_hours: WorkingHours,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            focus_time: 90,
            break_time: 15,
            working_hours: WorkingHours::default(),
        }
    }
}

impl UserPreferences {
    /// Focus slots for one day under these preferences.
    pub fn focus_slots(&self) -> Vec<TimeSlot> {
        generate_time_slots(
            self.working_hours.start,
            self.working_hours.end,
            self.focus_time,
            self.break_time,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    #[serde(flatten)]
    pub task: Task,
    pub scheduled_start: DateTime<FixedOffset>,
    pub scheduled_end: DateTime<FixedOffset>,
    pub time_slot: TimeSlot,
    pub ai_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartSchedule {
    pub date: DateTime<FixedOffset>,
    /// Assignment order.
    pub slots: Vec<ScheduledTask>,
    pub productivity_score: u32,
    pub recommendations: Vec<String>,
}

impl SmartSchedule {
    /// Ids of todo tasks in `tasks` that did not get a slot.
    pub fn unscheduled_ids<'a>(&self, tasks: &'a [Task]) -> Vec<&'a str> {
        tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Todo)
            .filter(|t| !self.slots.iter().any(|s| s.task.id == t.id))
            .map(|t| t.id.as_str())
            .collect()
    }
}

/// Human-readable explanation for placing `task` into `slot`.
pub fn ai_reason(task: &Task, slot: &TimeSlot) -> String {
    let mut parts = Vec::new();
    if task.priority == Priority::Urgent {
        parts.push("срочная задача");
    }
    if matches!(slot.start.hour(), 9 | 10) {
        parts.push("утренний пик продуктивности");
    }
    if task.duration_minutes() <= 30 {
        parts.push("быстрая задача для импульса");
    }
    format!("{REASON_PREFIX}{}", parts.join(", "))
}

pub fn create_daily_schedule(
    tasks: &[Task],
    preferences: &UserPreferences,
    date: &DateTime<FixedOffset>,
) -> SmartSchedule {
    create_daily_schedule_with_patterns(tasks, preferences, date, &PatternTable::default())
}

/// Same as [`create_daily_schedule`] for today on the local clock.
pub fn create_daily_schedule_now(tasks: &[Task], preferences: &UserPreferences) -> SmartSchedule {
    create_daily_schedule(tasks, preferences, &Local::now().fixed_offset())
}

/// Build the schedule for the calendar day of `date`.
///
/// `date` also serves as "now" for the productivity analysis.
pub fn create_daily_schedule_with_patterns(
    tasks: &[Task],
    preferences: &UserPreferences,
    date: &DateTime<FixedOffset>,
    patterns: &PatternTable,
) -> SmartSchedule {
    let mut pool = preferences.focus_slots();

    let todo: Vec<Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Todo)
        .cloned()
        .collect();
    let ordered = smart_task_prioritization(&todo);

    debug!(
        date = %date.date_naive(),
        slots = pool.len(),
        tasks = ordered.len(),
        "assembling daily schedule"
    );

    let mut scheduled = Vec::new();
    for task in ordered {
        let Some(idx) = find_optimal_slot_index(&task, &pool, patterns) else {
            debug!(
                task = %task.id,
                minutes = task.duration_minutes(),
                "no slot fits, leaving task out"
            );
            continue;
        };

        let slot = &pool[idx];
        let (Some(start), Some(end)) = (on_date(date, slot.start), on_date(date, slot.end)) else {
            continue;
        };

        let slot = pool.remove(idx);
        debug!(task = %task.id, start = %slot.start, end = %slot.end, "task placed");
        let reason = ai_reason(&task, &slot);
        scheduled.push(ScheduledTask {
            task,
            scheduled_start: start,
            scheduled_end: end,
            time_slot: slot,
            ai_reason: reason,
        });
    }

    let completed: Vec<Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .cloned()
        .collect();
    let analysis = analyze_productivity_with_patterns(&completed, date, patterns);

    SmartSchedule {
        date: *date,
        slots: scheduled,
        productivity_score: analysis.score,
        recommendations: analysis.recommendations,
    }
}
