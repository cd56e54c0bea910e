//! Built-in phrase tables used by the scorer.
//!
//! Every group is a process-lifetime constant. Groups may share phrases
//! ("due" is both an urgency and a temporal marker); a shared phrase
//! contributes to every dimension that checks it.

/// A named set of case-insensitive phrases, used only for containment tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordGroup {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
}

impl KeywordGroup {
    pub const fn new(name: &'static str, phrases: &'static [&'static str]) -> Self {
        Self { name, phrases }
    }
}

// ── App tiers ───────────────────────────────────────────────────

pub const COMMUNICATION_TIER1: KeywordGroup = KeywordGroup::new(
    "communication_tier1",
    &["WhatsApp", "Signal", "Messages", "Phone", "Telegram"],
);

pub const COMMUNICATION_TIER2: KeywordGroup = KeywordGroup::new(
    "communication_tier2",
    &["Gmail", "Outlook", "Slack", "Discord", "Teams", "Email", "Mail"],
);

pub const COMMUNICATION_TIER3: KeywordGroup = KeywordGroup::new(
    "communication_tier3",
    &["Instagram", "Twitter", "X", "Facebook", "LinkedIn", "Reddit"],
);

pub const LOW_PRIORITY_APPS: KeywordGroup = KeywordGroup::new(
    "low_priority_apps",
    &["Games", "News", "Shopping", "YouTube", "Netflix", "Spotify"],
);

// ── Content markers ─────────────────────────────────────────────

pub const URGENCY_TIER1: KeywordGroup = KeywordGroup::new(
    "urgency_tier1",
    &["urgent", "critical", "asap", "emergency", "immediately", "911"],
);

pub const URGENCY_TIER2: KeywordGroup = KeywordGroup::new(
    "urgency_tier2",
    &["important", "deadline", "due", "tonight", "today", "expires"],
);

pub const URGENCY_TIER3: KeywordGroup = KeywordGroup::new(
    "urgency_tier3",
    &["tomorrow", "this week", "reminder", "follow up", "upcoming", "soon"],
);

pub const REQUEST: KeywordGroup = KeywordGroup::new(
    "request",
    &["please reply", "need response", "waiting for", "respond by", "confirm", "rsvp"],
);

pub const MEETING: KeywordGroup = KeywordGroup::new(
    "meeting",
    &["meeting", "call", "zoom", "interview", "appointment", "event"],
);

pub const TEMPORAL: KeywordGroup = KeywordGroup::new(
    "temporal",
    &["due", "deadline", "expires", "ends", "starts", "schedule", "calendar"],
);

pub const FINANCIAL: KeywordGroup = KeywordGroup::new(
    "financial",
    &["payment", "invoice", "bill", "charge", "transaction", "bank", "fraud"],
);

/// Surrounding spaces are significant: " you " must not match "your" or "young".
pub const PERSONAL: KeywordGroup = KeywordGroup::new(
    "personal",
    &[" you ", " your ", "you're", "you've", "you'll"],
);

/// True iff any phrase in `group` occurs in `text`, ignoring case.
pub fn contains_any(text: &str, group: &KeywordGroup) -> bool {
    if text.is_empty() {
        return false;
    }
    let lower = text.to_lowercase();
    group
        .phrases
        .iter()
        .any(|phrase| !phrase.is_empty() && lower.contains(&phrase.to_lowercase()))
}

/// Plain substring test over user-supplied rule fragments, ignoring case.
/// An empty fragment is a substring of everything, so it always matches.
pub fn contains_any_fragment<S: AsRef<str>>(text: &str, fragments: &[S]) -> bool {
    let lower = text.to_lowercase();
    fragments.iter().any(|f| fragment_matches(&lower, f.as_ref()))
}

/// `lower_text` must already be lowercased.
pub(crate) fn fragment_matches(lower_text: &str, fragment: &str) -> bool {
    lower_text.contains(&fragment.to_lowercase())
}
