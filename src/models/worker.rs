//! Worker model.
//!
//! Workers are the staff pool shifts are drawn against. Each worker has a
//! weekly assignment cap, an optional monthly minimum quota, and an
//! unavailability map listing the shift types they cannot take on a given
//! period unit.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{PeriodKey, ShiftType};

/// A worker who can be assigned shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Maximum shifts per week bucket.
    pub weekly_cap: u32,
    /// Minimum shifts per planning period. `None` = no quota (cycle planning).
    pub monthly_quota: Option<u32>,
    /// Shift types the worker cannot take, per period unit.
    pub unavailability: HashMap<PeriodKey, HashSet<ShiftType>>,
}

impl Worker {
    /// Creates a worker with the given id and weekly cap.
    pub fn new(id: impl Into<String>, weekly_cap: u32) -> Self {
        Self {
            id: id.into(),
            weekly_cap,
            monthly_quota: None,
            unavailability: HashMap::new(),
        }
    }

    /// Sets the monthly minimum quota.
    pub fn with_quota(mut self, quota: u32) -> Self {
        self.monthly_quota = Some(quota);
        self
    }

    /// Marks the worker unavailable for the given shift types on a period unit.
    ///
    /// Repeated calls for the same key merge the type sets.
    pub fn unavailable(
        mut self,
        key: PeriodKey,
        types: impl IntoIterator<Item = ShiftType>,
    ) -> Self {
        self.unavailability.entry(key).or_default().extend(types);
        self
    }

    /// Marks the worker unavailable for both shift types on a period unit.
    pub fn unavailable_all_day(self, key: PeriodKey) -> Self {
        self.unavailable(key, [ShiftType::Day, ShiftType::Night])
    }

    /// Whether the worker can take a shift of `shift_type` on `key`.
    pub fn is_available(&self, key: &PeriodKey, shift_type: ShiftType) -> bool {
        match self.unavailability.get(key) {
            None => true,
            Some(types) => !types.contains(&shift_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new("Alice", 4)
            .with_quota(15)
            .unavailable(PeriodKey::Weekday(Weekday::Thu), [ShiftType::Day]);

        assert_eq!(w.id, "Alice");
        assert_eq!(w.weekly_cap, 4);
        assert_eq!(w.monthly_quota, Some(15));
        assert_eq!(w.unavailability.len(), 1);
    }

    #[test]
    fn test_availability_lookup() {
        let thu = PeriodKey::Weekday(Weekday::Thu);
        let fri = PeriodKey::Weekday(Weekday::Fri);
        let w = Worker::new("Bob", 3).unavailable(thu, [ShiftType::Night]);

        // Listed key vetoes only the listed types.
        assert!(w.is_available(&thu, ShiftType::Day));
        assert!(!w.is_available(&thu, ShiftType::Night));
        // Unlisted keys are fully available.
        assert!(w.is_available(&fri, ShiftType::Day));
        assert!(w.is_available(&fri, ShiftType::Night));
    }

    #[test]
    fn test_unavailable_merges_types() {
        let sun = PeriodKey::Weekday(Weekday::Sun);
        let w = Worker::new("Eve", 3)
            .unavailable(sun, [ShiftType::Day])
            .unavailable(sun, [ShiftType::Night]);

        assert!(!w.is_available(&sun, ShiftType::Day));
        assert!(!w.is_available(&sun, ShiftType::Night));
        assert_eq!(w.unavailability.len(), 1);
    }

    #[test]
    fn test_unavailable_all_day() {
        let mon = PeriodKey::Weekday(Weekday::Mon);
        let w = Worker::new("Dana", 4).unavailable_all_day(mon);
        assert!(!w.is_available(&mon, ShiftType::Day));
        assert!(!w.is_available(&mon, ShiftType::Night));
    }

    #[test]
    fn test_worker_from_json_fixture() {
        // Workers arrive from an injected data source; the core shape must
        // round-trip through serde.
        let json = r#"{
            "id": "Wetzler",
            "weekly_cap": 4,
            "monthly_quota": 15,
            "unavailability": {}
        }"#;
        let w: Worker = serde_json::from_str(json).unwrap();
        assert_eq!(w.id, "Wetzler");
        assert_eq!(w.weekly_cap, 4);
        assert_eq!(w.monthly_quota, Some(15));
        assert!(w.unavailability.is_empty());
    }
}
