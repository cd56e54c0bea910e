use serde::Serialize;

use crate::config::PriorityRules;
use crate::types::{NotificationRecord, ScoredRecord};

use super::scoring;

/// Score every record and sort by score descending.
/// The sort is stable: equal scores keep their input order.
pub fn rank(
    records: Vec<NotificationRecord>,
    rules: &PriorityRules,
    now: i64,
) -> Vec<ScoredRecord> {
    let mut ranked: Vec<ScoredRecord> = records
        .into_iter()
        .map(|record| {
            let breakdown = scoring::breakdown(&record, rules, now);
            ScoredRecord::new(record, breakdown)
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        total = ranked.len(),
        critical = ranked.iter().filter(|s| s.is_critical).count(),
        top_score = ranked.first().map(|s| s.score),
        "records ranked"
    );
    ranked
}

/// Critical records of an already-ranked batch, in ranked order.
pub fn critical(ranked: &[ScoredRecord]) -> Vec<&NotificationRecord> {
    ranked
        .iter()
        .filter(|s| s.is_critical)
        .map(|s| &s.record)
        .collect()
}

/// Summary statistics for a ranked batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageStats {
    pub total: usize,
    pub critical: usize,
    /// Share of critical records as a whole percent, truncated after the
    /// floating-point product, so 29 of 100 reports 28.
    pub critical_percent: u32,
    pub average_score: f64,
    pub min_score: Option<i32>,
    pub max_score: Option<i32>,
}

impl TriageStats {
    pub fn from_ranked(ranked: &[ScoredRecord]) -> Self {
        let total = ranked.len();
        let critical = ranked.iter().filter(|s| s.is_critical).count();
        let (critical_percent, average_score) = if total == 0 {
            (0, 0.0)
        } else {
            let sum: i64 = ranked.iter().map(|s| i64::from(s.score)).sum();
            let share = critical as f64 / total as f64;
            ((share * 100.0) as u32, sum as f64 / total as f64)
        };
        Self {
            total,
            critical,
            critical_percent,
            average_score,
            min_score: ranked.iter().map(|s| s.score).min(),
            max_score: ranked.iter().map(|s| s.score).max(),
        }
    }
}
