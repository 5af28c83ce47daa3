use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::activity::Category;

/// Every session state change produces an Event.
/// Front ends drain them to know when to re-render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ActivityLogged {
        id: Uuid,
        activity_type: String,
        category: Category,
        duration: f64,
        at: DateTime<Utc>,
    },
    /// Submission failed validation; the store is unchanged.
    SubmissionRejected {
        reason: String,
        at: DateTime<Utc>,
    },
}
