use serde::{Deserialize, Serialize};

/// Scores at or above this are critical.
pub const CRITICAL_THRESHOLD: i32 = 15;
/// Upper clamp for the summed contributions.
pub const SCORE_CAP_MAX: i32 = 24;
/// Lower clamp for the summed contributions.
pub const SCORE_CAP_MIN: i32 = -5;

// ── Record types ────────────────────────────────────────────────

/// Platform notification priority.
/// Serialized as the raw platform integer: MIN=-2, LOW=-1, DEFAULT=0, HIGH=1, MAX=2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum PriorityLevel {
    Min,
    Low,
    #[default]
    Default,
    High,
    Max,
}

impl PriorityLevel {
    /// Elevated levels get a metadata bonus.
    pub fn is_elevated(self) -> bool {
        matches!(self, Self::High | Self::Max)
    }

    /// Suppressed levels get a metadata penalty.
    pub fn is_suppressed(self) -> bool {
        matches!(self, Self::Low | Self::Min)
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Self::Min => -2,
            Self::Low => -1,
            Self::Default => 0,
            Self::High => 1,
            Self::Max => 2,
        }
    }
}

/// Out-of-range platform values are treated as the neutral level.
impl From<i32> for PriorityLevel {
    fn from(raw: i32) -> Self {
        match raw {
            -2 => Self::Min,
            -1 => Self::Low,
            1 => Self::High,
            2 => Self::Max,
            _ => Self::Default,
        }
    }
}

impl From<PriorityLevel> for i32 {
    fn from(level: PriorityLevel) -> Self {
        level.as_raw()
    }
}

/// A materialized notification as delivered by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: u64,
    #[serde(default)]
    pub package_name: String,
    pub app_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: PriorityLevel,
    #[serde(default)]
    pub has_actions: bool,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub is_ongoing: bool,
}

impl NotificationRecord {
    /// Minimal record with neutral priority and no flags set.
    pub fn new(id: u64, app_name: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id,
            package_name: String::new(),
            app_name: app_name.into(),
            title: None,
            text: None,
            timestamp,
            category: None,
            priority: PriorityLevel::Default,
            has_actions: false,
            has_image: false,
            is_ongoing: false,
        }
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Title and body joined by a single space, missing parts as empty strings.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title_or_empty(), self.text_or_empty())
    }
}

// ── Scoring types ───────────────────────────────────────────────

/// Per-dimension contributions to an urgency score.
/// Total = clamp(app + user_rules + content + recency + metadata, -5, 24)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub app: i32,
    pub user_rules: i32,
    pub content: i32,
    pub recency: i32,
    pub metadata: i32,
}

impl ScoreBreakdown {
    /// Unclamped sum of all contributions.
    pub fn raw(&self) -> i32 {
        self.app + self.user_rules + self.content + self.recency + self.metadata
    }

    /// Final score, clamped into [SCORE_CAP_MIN, SCORE_CAP_MAX].
    pub fn total(&self) -> i32 {
        self.raw().clamp(SCORE_CAP_MIN, SCORE_CAP_MAX)
    }

    pub fn is_critical(&self) -> bool {
        self.total() >= CRITICAL_THRESHOLD
    }
}

/// A record paired with its score and criticality.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    pub record: NotificationRecord,
    pub score: i32,
    pub is_critical: bool,
    pub breakdown: ScoreBreakdown,
}

impl ScoredRecord {
    pub fn new(record: NotificationRecord, breakdown: ScoreBreakdown) -> Self {
        Self {
            record,
            score: breakdown.total(),
            is_critical: breakdown.is_critical(),
            breakdown,
        }
    }
}
