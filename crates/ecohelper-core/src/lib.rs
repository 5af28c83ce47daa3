//! # Eco Helper Core Library
//!
//! This library provides the core logic for Eco Helper, a personal tracker for
//! household water and energy use. The CLI binary is a thin front end over the
//! same library.
//!
//! ## Architecture
//!
//! - **Activity Store**: in-memory log of activities, most recent first
//! - **Aggregator**: per-category totals and fixed-percentage saving estimates
//! - **Tip Selector**: ranks a static tip catalog by what the user has logged
//! - **Session**: validate, append and recompute as one step per submission
//!
//! Nothing about the activity log is persisted; only configuration lives on
//! disk.
//!
//! ## Key Components
//!
//! - [`Session`]: owns the activity log for the running process
//! - [`aggregate`]: computes a [`UsageSummary`]
//! - [`select_tips`]: picks up to [`MAX_TIPS`] tips
//! - [`Dashboard`]: view model for rendering
//! - [`Config`]: application configuration management

pub mod activity;
pub mod aggregate;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod tips;

pub use activity::{
    validate, Activity, ActivityForm, ActivityStore, ActivityTypeDescriptor, Category, Icon,
    NewActivity, ACTIVITY_TYPES,
};
pub use aggregate::{aggregate, UsageSummary, ENERGY_SAVING_RATE, WATER_SAVING_RATE};
pub use dashboard::{Dashboard, RecentEntry, RECENT_LIMIT};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use session::Session;
pub use storage::Config;
pub use tips::{select_tips, Impact, Tip, TipCard, TipCategory, MAX_TIPS, TIP_CATALOG};
