//! Energy levels shared by slots, patterns and tasks.

use serde::{Deserialize, Serialize};

use crate::task::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    /// Ordinal scale: low=1, medium=2, high=3.
    pub fn ordinal(self) -> u8 {
        match self {
            EnergyLevel::Low => 1,
            EnergyLevel::Medium => 2,
            EnergyLevel::High => 3,
        }
    }

    /// Energy a task of the given priority needs.
    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::Urgent | Priority::High => EnergyLevel::High,
            Priority::Medium => EnergyLevel::Medium,
            Priority::Low => EnergyLevel::Low,
        }
    }

    /// Steps between two levels on the ordinal scale.
    pub fn distance(self, other: EnergyLevel) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_mapping() {
        assert_eq!(EnergyLevel::for_priority(Priority::Urgent), EnergyLevel::High);
        assert_eq!(EnergyLevel::for_priority(Priority::High), EnergyLevel::High);
        assert_eq!(EnergyLevel::for_priority(Priority::Medium), EnergyLevel::Medium);
        assert_eq!(EnergyLevel::for_priority(Priority::Low), EnergyLevel::Low);
    }

    #[test]
    fn test_distance() {
        assert_eq!(EnergyLevel::High.distance(EnergyLevel::High), 0);
        assert_eq!(EnergyLevel::High.distance(EnergyLevel::Medium), 1);
        assert_eq!(EnergyLevel::Low.distance(EnergyLevel::High), 2);
    }
}
