use crate::config::PriorityRules;
use crate::triage::keywords::{self, contains_any, contains_any_fragment, fragment_matches};
use crate::types::{CRITICAL_THRESHOLD, NotificationRecord, ScoreBreakdown};

const MINUTE_MS: i64 = 60 * 1000;
const FRESH_MS: i64 = 5 * MINUTE_MS;
const RECENT_MS: i64 = 30 * MINUTE_MS;
const STALE_MS: i64 = 24 * 60 * MINUTE_MS;

/// Per-keyword bonus and its cap.
const KEYWORD_BONUS: i32 = 2;
const KEYWORD_CAP: i32 = 6;
const DOMAIN_BONUS: i32 = 2;

/// Rule-based urgency score for one record, clamped into [-5, 24].
/// `now` is milliseconds since the Unix epoch.
pub fn score(record: &NotificationRecord, rules: &PriorityRules, now: i64) -> i32 {
    breakdown(record, rules, now).total()
}

pub fn is_critical(record: &NotificationRecord, rules: &PriorityRules, now: i64) -> bool {
    score(record, rules, now) >= CRITICAL_THRESHOLD
}

/// The five independent contributions behind `score`.
pub fn breakdown(record: &NotificationRecord, rules: &PriorityRules, now: i64) -> ScoreBreakdown {
    let breakdown = ScoreBreakdown {
        app: score_app(&record.app_name, rules),
        user_rules: score_user_rules(record, rules),
        content: score_content(record.title.as_deref(), record.text.as_deref()),
        recency: score_recency(record.timestamp, now),
        metadata: score_metadata(record),
    };
    tracing::trace!(
        id = record.id,
        app = breakdown.app,
        user_rules = breakdown.user_rules,
        content = breakdown.content,
        recency = breakdown.recency,
        metadata = breakdown.metadata,
        total = breakdown.total(),
        "record scored"
    );
    breakdown
}

/// App identity: first matching rule wins. User rules outrank built-in tiers.
fn score_app(app_name: &str, rules: &PriorityRules) -> i32 {
    if contains_any_fragment(app_name, &rules.high_priority_apps) {
        4
    } else if contains_any_fragment(app_name, &rules.financial_apps) {
        3
    } else if contains_any(app_name, &keywords::COMMUNICATION_TIER1) {
        3
    } else if contains_any(app_name, &keywords::COMMUNICATION_TIER2) {
        2
    } else if contains_any(app_name, &keywords::COMMUNICATION_TIER3) {
        1
    } else if contains_any_fragment(app_name, &rules.neutral_apps) {
        0
    } else if contains_any(app_name, &keywords::LOW_PRIORITY_APPS) {
        -2
    } else {
        0
    }
}

/// User keywords (distinct, capped) plus trusted domains (each, uncapped).
fn score_user_rules(record: &NotificationRecord, rules: &PriorityRules) -> i32 {
    let content = record.combined_text().to_lowercase();

    let mut seen: Vec<String> = Vec::new();
    for keyword in &rules.keywords {
        let lower = keyword.to_lowercase();
        if fragment_matches(&content, &lower) && !seen.contains(&lower) {
            seen.push(lower);
        }
    }
    let keyword_score = (seen.len() as i32 * KEYWORD_BONUS).min(KEYWORD_CAP);

    let domain_score = rules
        .domains
        .iter()
        .filter(|domain| fragment_matches(&content, domain))
        .count() as i32
        * DOMAIN_BONUS;

    keyword_score + domain_score
}

/// Urgency tier of a lowercased text. Tiers are exclusive: the highest present wins.
fn urgency_bonus(text: &str) -> i32 {
    [
        (&keywords::URGENCY_TIER1, 5),
        (&keywords::URGENCY_TIER2, 3),
        (&keywords::URGENCY_TIER3, 2),
    ]
    .into_iter()
    .find(|(group, _)| contains_any(text, group))
    .map_or(0, |(_, bonus)| bonus)
}

fn score_content(title: Option<&str>, text: Option<&str>) -> i32 {
    let combined = format!("{} {}", title.unwrap_or(""), text.unwrap_or("")).to_lowercase();
    if combined.trim().is_empty() {
        return 0;
    }

    let mut score = urgency_bonus(&combined);

    let additive = [
        (&keywords::REQUEST, 3),
        (&keywords::MEETING, 3),
        (&keywords::TEMPORAL, 2),
        (&keywords::FINANCIAL, 2),
    ];
    score += additive
        .into_iter()
        .filter(|(group, _)| contains_any(&combined, group))
        .map(|(_, bonus)| bonus)
        .sum::<i32>();

    if combined.contains('?') {
        score += 2;
    }
    if combined.matches('!').count() >= 2 {
        score += 1;
    }
    if contains_any(&combined, &keywords::PERSONAL) {
        score += 1;
    }
    score
}

/// Recency buckets. Exact boundary values fall through to the next bucket.
fn score_recency(timestamp: i64, now: i64) -> i32 {
    let age = now.saturating_sub(timestamp);
    if age < FRESH_MS {
        2
    } else if age < RECENT_MS {
        1
    } else if age > STALE_MS {
        -1
    } else {
        0
    }
}

fn score_metadata(record: &NotificationRecord) -> i32 {
    let mut score = if record.priority.is_elevated() {
        3
    } else if record.priority.is_suppressed() {
        -1
    } else {
        0
    };
    if record.has_actions {
        score += 1;
    }
    if record.has_image {
        score += 1;
    }
    if record.is_ongoing {
        score -= 3;
    }
    score
}
