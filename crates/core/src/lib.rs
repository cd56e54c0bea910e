//! Notification triage: urgency scoring, critical filtering, digest rendering.

pub mod config;
pub mod io;
pub mod triage;
pub mod types;

pub use config::{ConfigError, PriorityRules};
pub use io::digest::render;
pub use triage::ranking::{TriageStats, critical, rank};
pub use triage::scoring::{breakdown, is_critical, score};
pub use types::{NotificationRecord, PriorityLevel, ScoreBreakdown, ScoredRecord};
