//! Productivity score and suggestions from today's completed tasks.

use chrono::{DateTime, FixedOffset, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::energy::EnergyLevel;
use crate::patterns::PatternTable;
use crate::task::{Priority, Task};

const POINTS_PER_TASK: u32 = 15;
const MAX_COMPLETION_POINTS: u32 = 60;
const URGENT_BONUS: u32 = 25;
const HIGH_BONUS: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductivityAnalysis {
    /// 0-100.
    pub score: u32,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Analyze `completed` tasks finished on the calendar day of `now`.
pub fn analyze_productivity_and_suggest(
    completed: &[Task],
    now: &DateTime<FixedOffset>,
) -> ProductivityAnalysis {
    analyze_productivity_with_patterns(completed, now, &PatternTable::default())
}

/// Same as [`analyze_productivity_and_suggest`] against the local clock.
pub fn analyze_productivity_now(completed: &[Task]) -> ProductivityAnalysis {
    analyze_productivity_and_suggest(completed, &Local::now().fixed_offset())
}

/// Completion points for `count` tasks, capped at 60.
fn completion_points(count: usize) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_TASK)
        .min(MAX_COMPLETION_POINTS)
}

pub fn analyze_productivity_with_patterns(
    completed: &[Task],
    now: &DateTime<FixedOffset>,
    patterns: &PatternTable,
) -> ProductivityAnalysis {
    let today = now.date_naive();
    let done_today: Vec<&Task> = completed
        .iter()
        .filter(|t| {
            t.completed_at
                .is_some_and(|at| at.with_timezone(now.offset()).date_naive() == today)
        })
        .collect();

    let count = done_today.len();
    let urgent = done_today.iter().filter(|t| t.priority == Priority::Urgent).count();
    let high = done_today.iter().filter(|t| t.priority == Priority::High).count();

    let mut score = completion_points(count);
    if urgent > 0 {
        score += URGENT_BONUS;
    }
    if high > 0 {
        score += HIGH_BONUS;
    }
    let score = score.min(100);

    let mut insights = Vec::new();
    let mut recommendations = Vec::new();

    if count == 0 {
        insights.push("Сегодня ещё не выполнено ни одной задачи".to_string());
        recommendations.push("Начните с простой задачи, чтобы набрать темп".to_string());
    } else {
        insights.push(format!("Выполнено задач сегодня: {count}"));
    }
    if urgent > 0 {
        insights.push(format!("Отлично! Закрыто срочных задач: {urgent}"));
    }
    if high > 0 {
        insights.push(format!("Хорошая работа с важными задачами: {high}"));
    }

    let hour = now.hour();
    if let Some(pattern) = patterns.get(hour) {
        let advice = match pattern.energy_level {
            EnergyLevel::High => "Сейчас пик энергии: беритесь за самые сложные задачи",
            EnergyLevel::Medium => "Хорошее время для задач средней сложности",
            EnergyLevel::Low => "Энергия на спаде: отдохните или займитесь простыми задачами",
        };
        recommendations.push(advice.to_string());
    }

    if (9..=11).contains(&hour) {
        recommendations.push("Лучшее время для творческой работы".to_string());
    }
    if (14..=16).contains(&hour) {
        recommendations.push("Подходящее время для встреч и общения".to_string());
    }
    if hour >= 17 {
        recommendations.push("Пора спланировать задачи на завтра".to_string());
    }

    ProductivityAnalysis {
        score,
        insights,
        recommendations,
    }
}
