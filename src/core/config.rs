//! Formatting configuration for human-readable card summaries.

use serde::{Deserialize, Serialize};

/// Controls how `Card::format_summary_with` renders a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Text placed between categories and attributes (default: `" / "`).
    pub separator: String,

    /// Show the pronunciation in parentheses after the name.
    pub show_pronunciation: bool,

    /// Prefix attack and defence with their `ATK`/`DEF` labels.
    pub show_status_labels: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            separator: " / ".to_string(),
            show_pronunciation: true,
            show_status_labels: true,
        }
    }
}

impl SummaryConfig {
    /// Use a custom separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Toggle the pronunciation.
    #[must_use]
    pub fn with_pronunciation(mut self, show: bool) -> Self {
        self.show_pronunciation = show;
        self
    }

    /// Toggle the `ATK`/`DEF` labels.
    #[must_use]
    pub fn with_status_labels(mut self, show: bool) -> Self {
        self.show_status_labels = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SummaryConfig::default();
        assert_eq!(config.separator, " / ");
        assert!(config.show_pronunciation);
        assert!(config.show_status_labels);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SummaryConfig::default()
            .with_separator(", ")
            .with_pronunciation(false)
            .with_status_labels(false);

        assert_eq!(config.separator, ", ");
        assert!(!config.show_pronunciation);
        assert!(!config.show_status_labels);
    }

    #[test]
    fn test_partial_deserialization() {
        let config: SummaryConfig = serde_json::from_str(r#"{"separator": "|"}"#).unwrap();
        assert_eq!(config.separator, "|");
        assert!(config.show_pronunciation);
    }
}
