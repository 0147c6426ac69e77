//! Per-hour productivity heuristics.
//!
//! The built-in table covers the working hours 9..=17. It is a plain value so
//! callers can substitute their own table.

use serde::{Deserialize, Serialize};

use crate::energy::EnergyLevel;
use crate::task::Priority;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityPattern {
    /// Hour of day, 0-23.
    pub hour: u32,
    pub energy_level: EnergyLevel,
    /// 0-100.
    pub focus_capacity: u8,
    /// Priorities that suit this hour.
    pub task_types: Vec<Priority>,
}

impl ProductivityPattern {
    pub fn new(
        hour: u32,
        energy_level: EnergyLevel,
        focus_capacity: u8,
        task_types: &[Priority],
    ) -> Self {
        Self {
            hour,
            energy_level,
            focus_capacity: focus_capacity.min(100),
            task_types: task_types.to_vec(),
        }
    }

    pub fn suits(&self, priority: Priority) -> bool {
        self.task_types.contains(&priority)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternTable {
    patterns: Vec<ProductivityPattern>,
}

impl PatternTable {
    pub fn new(patterns: Vec<ProductivityPattern>) -> Self {
        Self { patterns }
    }

    pub fn get(&self, hour: u32) -> Option<&ProductivityPattern> {
        self.patterns.iter().find(|p| p.hour == hour)
    }

    /// Pattern for `hour`, or the first entry when the hour is not listed.
    pub fn get_or_first(&self, hour: u32) -> Option<&ProductivityPattern> {
        self.get(hour).or_else(|| self.patterns.first())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductivityPattern> {
        self.patterns.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        use EnergyLevel::{High, Low, Medium};
        use Priority::{High as P1, Low as P3, Medium as P2, Urgent as P0};

        Self::new(vec![
            ProductivityPattern::new(9, High, 90, &[P0, P1]),
            ProductivityPattern::new(10, High, 95, &[P0, P1]),
            ProductivityPattern::new(11, High, 85, &[P1, P2]),
            ProductivityPattern::new(12, Medium, 60, &[P2, P3]),
            ProductivityPattern::new(13, Low, 40, &[P3]),
            ProductivityPattern::new(14, Medium, 70, &[P2, P1]),
            ProductivityPattern::new(15, Medium, 75, &[P2, P1]),
            ProductivityPattern::new(16, Medium, 65, &[P2, P3]),
            ProductivityPattern::new(17, Low, 50, &[P3]),
        ])
    }
}
