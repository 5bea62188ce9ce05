//! Smaller configuration sections: templates, notifications, logging

use serde::Deserialize;
use std::path::PathBuf;

/// Template catalog source
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TemplatesConfig {
    /// YAML catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
}

/// Completion notifications
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Log output format
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_defaults() {
        assert!(TemplatesConfig::default().path.is_none());
        assert!(NotificationsConfig::default().enabled);
        assert!(!LoggingConfig::default().json);
    }

    #[test]
    fn test_notifications_deserialization() {
        let config: NotificationsConfig = serde_json::from_str("{}").unwrap();
        assert!(config.enabled);

        let config: NotificationsConfig = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert!(!config.enabled);
    }
}
