//! Rule-based intake: turns free text into a suggested task title and priority.

use core_config::{ConfigError, FromEnv, env_parse_or_default};

use crate::models::{IntakeSuggestion, TaskPriority};

/// Length limit for derived titles when nothing else is configured.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 80;

const HIGH_PRIORITY_KEYWORDS: [&str; 2] = ["urgent", "asap"];
const LOW_PRIORITY_KEYWORDS: [&str; 2] = ["later", "someday"];

/// Intake settings loaded from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeConfig {
    pub title_max_chars: usize,
}

impl FromEnv for IntakeConfig {
    /// - INTAKE_TITLE_MAX_CHARS: defaults to 80
    fn from_env() -> Result<Self, ConfigError> {
        let title_max_chars = env_parse_or_default(
            "INTAKE_TITLE_MAX_CHARS",
            &DEFAULT_TITLE_MAX_CHARS.to_string(),
        )?;
        Ok(Self { title_max_chars })
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

/// Pure keyword classifier; holds only its title length limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntakeClassifier {
    title_max_chars: usize,
}

impl IntakeClassifier {
    pub fn new(config: &IntakeConfig) -> Self {
        Self {
            title_max_chars: config.title_max_chars,
        }
    }

    pub fn title_max_chars(&self) -> usize {
        self.title_max_chars
    }

    /// Derive a title and priority from `input`.
    ///
    /// Priority is matched case-insensitively, first rule wins: `urgent`/`asap`
    /// is High, then `later`/`someday` is Low, otherwise Med. The title is the
    /// text before the first `.`, trimmed, cut to `title_max_chars` characters,
    /// with its original casing.
    pub fn classify(&self, input: &str) -> IntakeSuggestion {
        IntakeSuggestion {
            title: self.derive_title(input),
            priority: derive_priority(input),
        }
    }

    fn derive_title(&self, input: &str) -> String {
        let first_sentence = input.split('.').next().unwrap_or_default();
        first_sentence
            .trim()
            .chars()
            .take(self.title_max_chars)
            .collect()
    }
}

impl Default for IntakeClassifier {
    fn default() -> Self {
        Self::new(&IntakeConfig::default())
    }
}

fn derive_priority(input: &str) -> TaskPriority {
    let text = input.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    if mentions(&HIGH_PRIORITY_KEYWORDS) {
        TaskPriority::High
    } else if mentions(&LOW_PRIORITY_KEYWORDS) {
        TaskPriority::Low
    } else {
        TaskPriority::Med
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(input: &str) -> IntakeSuggestion {
        IntakeClassifier::default().classify(input)
    }

    #[test]
    fn test_priority_rules() {
        let cases = [
            ("urgent fix the bug", TaskPriority::High),
            ("Need this ASAP", TaskPriority::High),
            ("URGENT but maybe later", TaskPriority::High),
            ("do it later", TaskPriority::Low),
            ("Someday refactor", TaskPriority::Low),
            ("plain request", TaskPriority::Med),
            ("", TaskPriority::Med),
        ];

        for (input, expected) in cases {
            assert_eq!(classify(input).priority, expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_keywords_match_as_substrings() {
        assert_eq!(classify("laterally").priority, TaskPriority::Low);
        assert_eq!(classify("nonurgent").priority, TaskPriority::High);
    }

    #[test]
    fn test_title_is_first_sentence() {
        let suggestion = classify("Fix the bug. Ship today.");
        assert_eq!(suggestion.title, "Fix the bug");
        assert_eq!(suggestion.priority, TaskPriority::Med);
    }

    #[test]
    fn test_title_keeps_casing_and_trims() {
        assert_eq!(classify("  Call BOB asap  ").title, "Call BOB asap");
        assert_eq!(classify("Fix it . then rest").title, "Fix it");
    }

    #[test]
    fn test_title_without_period_is_whole_input() {
        assert_eq!(classify("urgent fix the bug").title, "urgent fix the bug");
    }

    #[test]
    fn test_leading_period_gives_empty_title() {
        assert_eq!(classify(".hidden").title, "");
    }

    #[test]
    fn test_empty_input() {
        let suggestion = classify("");
        assert_eq!(suggestion.title, "");
        assert_eq!(suggestion.priority, TaskPriority::Med);
    }

    #[test]
    fn test_title_truncated_to_limit() {
        let input = "a".repeat(200);
        assert_eq!(classify(&input).title.chars().count(), DEFAULT_TITLE_MAX_CHARS);

        let short = IntakeClassifier::new(&IntakeConfig { title_max_chars: 5 });
        assert_eq!(short.classify("abcdefgh").title, "abcde");
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let short = IntakeClassifier::new(&IntakeConfig { title_max_chars: 3 });
        assert_eq!(short.classify("ééééé").title, "ééé");
    }

    #[test]
    fn test_intake_config_from_env() {
        temp_env::with_var_unset("INTAKE_TITLE_MAX_CHARS", || {
            assert_eq!(IntakeConfig::from_env().unwrap(), IntakeConfig::default());
        });

        temp_env::with_var("INTAKE_TITLE_MAX_CHARS", Some("50"), || {
            assert_eq!(IntakeConfig::from_env().unwrap().title_max_chars, 50);
        });

        temp_env::with_var("INTAKE_TITLE_MAX_CHARS", Some("-1"), || {
            assert!(IntakeConfig::from_env().is_err());
        });
    }
}
