use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Activity, NewActivity};

/// Append-only activity sequence, most recent first.
///
/// Ordering follows submission order only. Two activities stamped with the
/// same instant still appear in the order they were appended. Nothing here
/// caches derived values; totals and tips are recomputed by the caller.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    entries: Vec<Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a fresh id and the current time, then insert at the front.
    pub fn append(&mut self, candidate: NewActivity) -> Activity {
        self.append_at(candidate, Utc::now())
    }

    /// Like [`append`](Self::append) with an explicit timestamp.
    pub fn append_at(&mut self, candidate: NewActivity, timestamp: DateTime<Utc>) -> Activity {
        let activity = Activity {
            id: Uuid::new_v4(),
            activity_type: candidate.activity_type,
            category: candidate.category,
            duration: candidate.duration,
            timestamp,
        };
        tracing::debug!(
            id = %activity.id,
            activity_type = %activity.activity_type,
            category = %activity.category,
            duration = activity.duration,
            "activity appended"
        );
        self.entries.insert(0, activity.clone());
        activity
    }

    /// All activities, most recent first.
    pub fn activities(&self) -> &[Activity] {
        &self.entries
    }

    /// The `limit` most recent activities.
    pub fn recent(&self, limit: usize) -> &[Activity] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
