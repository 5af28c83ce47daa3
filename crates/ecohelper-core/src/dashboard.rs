//! View model for the tracking dashboard.
//!
//! Everything here is derived from the activity sequence on each call; no
//! field is cached between submissions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::activity::{Activity, Category, Icon};
use crate::aggregate::{aggregate, UsageSummary};
use crate::tips::{select_tips, TipCard, TIP_CATALOG};

/// Default length of the recent-activity list.
pub const RECENT_LIMIT: usize = 10;

/// A usage card: one category's total with its potential saving.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub icon: Icon,
    pub potential_saving: i64,
}

impl MetricCard {
    fn for_category(category: Category, summary: &UsageSummary) -> Self {
        let (title, icon) = match category {
            Category::Water => ("Water Usage", Icon::Droplets),
            Category::Energy => ("Energy Usage", Icon::Zap),
        };
        Self {
            title,
            value: summary.total(category),
            unit: category.unit(),
            icon,
            potential_saving: summary.saving(category),
        }
    }

    /// Savings of zero are not worth showing.
    pub fn shows_saving(&self) -> bool {
        self.potential_saving > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountCard {
    pub title: &'static str,
    pub count: usize,
    pub note: &'static str,
}

impl CountCard {
    fn new(count: usize) -> Self {
        Self {
            title: "Activities Logged",
            count,
            note: if count > 0 {
                "Great tracking!"
            } else {
                "Start logging activities"
            },
        }
    }
}

/// One row of the recent-activity list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentEntry {
    pub id: Uuid,
    pub label: String,
    pub icon: Icon,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
    pub amount: f64,
    pub unit: &'static str,
}

impl From<&Activity> for RecentEntry {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            label: activity.label().to_string(),
            icon: activity.icon(),
            category: activity.category,
            timestamp: activity.timestamp,
            amount: activity.duration,
            unit: activity.category.short_unit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub water: MetricCard,
    pub energy: MetricCard,
    pub activities: CountCard,
    pub recent: Vec<RecentEntry>,
    pub tips: Vec<TipCard>,
}

impl Dashboard {
    /// Build the dashboard from a most-recent-first activity slice.
    pub fn build(activities: &[Activity], recent_limit: usize) -> Self {
        let summary = aggregate(activities);
        Self {
            water: MetricCard::for_category(Category::Water, &summary),
            energy: MetricCard::for_category(Category::Energy, &summary),
            activities: CountCard::new(summary.activity_count),
            recent: activities
                .iter()
                .take(recent_limit)
                .map(RecentEntry::from)
                .collect(),
            tips: select_tips(activities, &TIP_CATALOG)
                .into_iter()
                .map(TipCard::from)
                .collect(),
        }
    }
}
