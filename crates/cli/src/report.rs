use verdure_core::ScoredRecord;
use verdure_core::TriageStats;

/// `Score: 24 [CRITICAL] | Gmail           | URGENT: Interview tomorrow`
pub fn table_line(scored: &ScoredRecord) -> String {
    let marker = if scored.is_critical { " [CRITICAL]" } else { "" };
    let title = scored
        .record
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("(no title)");
    format!(
        "Score: {:>2}{marker} | {:<15} | {title}",
        scored.score, scored.record.app_name
    )
}

pub fn stats_block(stats: &TriageStats) -> String {
    let range = match (stats.min_score, stats.max_score) {
        (Some(lo), Some(hi)) => format!("{lo} to {hi}"),
        _ => "n/a".to_owned(),
    };
    format!(
        "Total notifications: {}\nCRITICAL notifications: {} ({}%)\nAverage score: {:.1}\nScore range: {range}",
        stats.total, stats.critical, stats.critical_percent, stats.average_score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdure_core::{NotificationRecord, ScoreBreakdown};

    fn scored(title: Option<&str>, content: i32) -> ScoredRecord {
        let mut r = NotificationRecord::new(1, "Gmail", 0);
        r.title = title.map(str::to_owned);
        ScoredRecord::new(r, ScoreBreakdown { content, ..Default::default() })
    }

    #[test]
    fn critical_line_is_marked() {
        assert_eq!(
            table_line(&scored(Some("Hi"), 20)),
            "Score: 20 [CRITICAL] | Gmail           | Hi"
        );
    }

    #[test]
    fn missing_title_placeholder() {
        assert_eq!(
            table_line(&scored(None, 3)),
            "Score:  3 | Gmail           | (no title)"
        );
    }

    #[test]
    fn stats_for_empty_batch() {
        let out = stats_block(&TriageStats::from_ranked(&[]));
        assert!(out.ends_with("Score range: n/a"));
        assert!(out.contains("CRITICAL notifications: 0 (0%)"));
    }
}
