use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// User-declared priority rules. Loaded from a JSON file by the caller and
/// treated as read-only for the duration of a scoring pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityRules {
    /// Free-text triggers, +2 each, capped at +6.
    pub keywords: Vec<String>,
    /// App name fragments, +4. Outranks every other app rule.
    pub high_priority_apps: Vec<String>,
    /// App name fragments, +3.
    pub financial_apps: Vec<String>,
    /// App name fragments, 0. Shields an app from the low-priority penalty.
    pub neutral_apps: Vec<String>,
    /// Trusted domain fragments, +2 per match, uncapped.
    pub domains: Vec<String>,
    /// Reserved. Accepted and preserved, no scoring effect.
    pub senders: Vec<String>,
    /// Reserved. Accepted and preserved, no scoring effect.
    pub contacts: Vec<String>,
}

/// Error type for rule loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rules json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown rule key: {0}")]
    UnknownKey(String),
}

impl PriorityRules {
    /// Load rules from a JSON file. Missing lists default to empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            keywords = rules.keywords.len(),
            high_priority_apps = rules.high_priority_apps.len(),
            domains = rules.domains.len(),
            "priority rules loaded"
        );
        Ok(rules)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Replace individual rule lists from `key -> "a,b,c"` entries.
    /// Empty items are dropped; an empty value clears the list.
    pub fn apply_overrides(&mut self, m: &HashMap<String, String>) -> Result<(), ConfigError> {
        for (key, value) in m {
            let slot = self
                .list_mut(key)
                .ok_or_else(|| ConfigError::UnknownKey(key.clone()))?;
            *slot = split_list(value);
        }
        Ok(())
    }

    fn list_mut(&mut self, key: &str) -> Option<&mut Vec<String>> {
        match key {
            "keywords" => Some(&mut self.keywords),
            "high_priority_apps" => Some(&mut self.high_priority_apps),
            "financial_apps" => Some(&mut self.financial_apps),
            "neutral_apps" => Some(&mut self.neutral_apps),
            "domains" => Some(&mut self.domains),
            "senders" => Some(&mut self.senders),
            "contacts" => Some(&mut self.contacts),
            _ => None,
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_defaults_missing_lists() {
        let rules = PriorityRules::from_json(r#"{"keywords": ["asap"]}"#).unwrap();
        assert_eq!(rules.keywords, vec!["asap"]);
        assert!(rules.domains.is_empty());
        assert!(rules.contacts.is_empty());
    }

    #[test]
    fn reserved_fields_survive_round_trip() {
        let raw = r#"{"senders": ["boss@corp.com"], "contacts": ["Mom"]}"#;
        let rules = PriorityRules::from_json(raw).unwrap();
        let back = PriorityRules::from_json(&serde_json::to_string(&rules).unwrap()).unwrap();
        assert_eq!(back.senders, vec!["boss@corp.com"]);
        assert_eq!(back.contacts, vec!["Mom"]);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = PriorityRules::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"high_priority_apps": ["Gmail", "Slack"]}}"#).unwrap();
        let rules = PriorityRules::load(file.path()).unwrap();
        assert_eq!(rules.high_priority_apps, vec!["Gmail", "Slack"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PriorityRules::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn overrides_replace_lists() {
        let mut rules = PriorityRules {
            keywords: vec!["old".into()],
            ..Default::default()
        };
        let m = HashMap::from([
            ("keywords".to_string(), " urgent, asap ,,".to_string()),
            ("domains".to_string(), ".edu".to_string()),
        ]);
        rules.apply_overrides(&m).unwrap();
        assert_eq!(rules.keywords, vec!["urgent", "asap"]);
        assert_eq!(rules.domains, vec![".edu"]);
    }

    #[test]
    fn overrides_reject_unknown_keys() {
        let mut rules = PriorityRules::default();
        let m = HashMap::from([("threshold".to_string(), "10".to_string())]);
        let err = rules.apply_overrides(&m).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(k) if k == "threshold"));
    }
}
