//! The single-user tracking session.
//!
//! A [`Session`] owns the activity store for as long as the process runs.
//! [`Session::submit`] validates and appends in one step, so anything read
//! afterwards already sees the new activity.

use chrono::Utc;

use crate::activity::{validate, Activity, ActivityForm, ActivityStore, NewActivity};
use crate::aggregate::{aggregate, UsageSummary};
use crate::dashboard::{Dashboard, RECENT_LIMIT};
use crate::error::ValidationError;
use crate::events::Event;
use crate::tips::{select_tips, Tip, TIP_CATALOG};

#[derive(Debug, Clone)]
pub struct Session {
    store: ActivityStore,
    events: Vec<Event>,
    recent_limit: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_recent_limit(RECENT_LIMIT)
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recent_limit(recent_limit: usize) -> Self {
        Self {
            store: ActivityStore::new(),
            events: Vec::new(),
            recent_limit,
        }
    }

    /// Validate a form and log it.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] describing why the form was rejected.
    /// The store is untouched in that case.
    pub fn submit(&mut self, form: &ActivityForm) -> Result<Activity, ValidationError> {
        match validate(form) {
            Ok(candidate) => Ok(self.log(candidate)),
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Submit raw text fields, category included.
    ///
    /// An unrecognised category is rejected the same way as any other
    /// invalid field.
    pub fn submit_fields(
        &mut self,
        category: &str,
        activity_type: &str,
        duration: &str,
    ) -> Result<Activity, ValidationError> {
        match ActivityForm::from_fields(category, activity_type, duration) {
            Ok(form) => self.submit(&form),
            Err(err) => Err(self.reject(err)),
        }
    }

    fn reject(&mut self, err: ValidationError) -> ValidationError {
        tracing::info!(reason = %err, "submission rejected");
        self.events.push(Event::SubmissionRejected {
            reason: err.to_string(),
            at: Utc::now(),
        });
        err
    }

    /// Log an already validated candidate.
    pub fn log(&mut self, candidate: NewActivity) -> Activity {
        let activity = self.store.append(candidate);
        self.events.push(Event::ActivityLogged {
            id: activity.id,
            activity_type: activity.activity_type.clone(),
            category: activity.category,
            duration: activity.duration,
            at: activity.timestamp,
        });
        activity
    }

    /// Activities, most recent first.
    pub fn activities(&self) -> &[Activity] {
        self.store.activities()
    }

    pub fn summary(&self) -> UsageSummary {
        aggregate(self.store.activities())
    }

    pub fn tips(&self) -> Vec<Tip> {
        select_tips(self.store.activities(), &TIP_CATALOG)
    }

    pub fn recent(&self) -> &[Activity] {
        self.store.recent(self.recent_limit)
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(self.store.activities(), self.recent_limit)
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
