//! Task ordering: priority, then deadline, then duration.

use std::cmp::Ordering;

use crate::task::Task;

/// Total order used by [`smart_task_prioritization`].
///
/// 1. Higher priority weight first.
/// 2. Earlier due date first; a task with a due date beats one without.
/// 3. Shorter estimated duration first (30 minutes when unset).
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    b.priority
        .weight()
        .cmp(&a.priority.weight())
        .then_with(|| match (a.due_date, b.due_date) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.duration_minutes().cmp(&b.duration_minutes()))
}

/// Return the tasks in planning order. Input order is kept among ties.
pub fn smart_task_prioritization(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    // `sort_by` is stable.
    sorted.sort_by(compare_tasks);
    sorted
}
