//! Animation timing and content configuration
//!
//! Read from the `[typing]` and `[scroll]` tables of a page file. Every
//! field has a default, so a page may omit either table entirely.

use std::time::Duration;

use serde::Deserialize;

/// Phrases cycled by the typing animation when a page supplies none
pub const DEFAULT_PHRASES: [&str; 3] = [
    "a Computer Engineer",
    "a Data Analyst",
    "a .NET Backend Engineer",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    /// Delay between revealed characters
    pub typing_speed_ms: u64,
    /// Delay between removed characters
    pub deleting_speed_ms: u64,
    /// How long a fully typed phrase is held before deleting starts
    pub delay_between_phrases_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingConfig {
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
            typing_speed_ms: 100,
            deleting_speed_ms: 50,
            delay_between_phrases_ms: 1500,
        }
    }
}

// Typing ticks reschedule themselves, so every delay is at least 1 ms
// to keep the clock moving.
impl TypingConfig {
    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms.max(1))
    }

    pub fn deleting_speed(&self) -> Duration {
        Duration::from_millis(self.deleting_speed_ms.max(1))
    }

    pub fn delay_between_phrases(&self) -> Duration {
        Duration::from_millis(self.delay_between_phrases_ms.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Elements whose top is within this distance of the viewport bottom
    /// are not yet considered visible
    pub reveal_margin_px: i32,
    /// Delay between a bar becoming visible and its fill being set
    pub fill_delay_ms: u64,
    /// Delay between load and the first sweep
    pub initial_sweep_delay_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            reveal_margin_px: 100,
            fill_delay_ms: 100,
            initial_sweep_delay_ms: 500,
        }
    }
}

impl ScrollConfig {
    pub fn fill_delay(&self) -> Duration {
        Duration::from_millis(self.fill_delay_ms)
    }

    pub fn initial_sweep_delay(&self) -> Duration {
        Duration::from_millis(self.initial_sweep_delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub typing: TypingConfig,
    pub scroll: ScrollConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_tables_keep_defaults() {
        let config: PresentationConfig = toml::from_str(
            r#"
            [typing]
            typing_speed_ms = 80

            [scroll]
            reveal_margin_px = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.typing.typing_speed(), Duration::from_millis(80));
        assert_eq!(config.typing.deleting_speed(), Duration::from_millis(50));
        assert_eq!(config.typing.phrases.len(), 3);
        assert_eq!(config.scroll.reveal_margin_px, 40);
        assert_eq!(config.scroll.fill_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_zero_typing_delays_become_one_millisecond() {
        let config: TypingConfig = toml::from_str(
            r#"
            typing_speed_ms = 0
            deleting_speed_ms = 0
            delay_between_phrases_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.typing_speed(), Duration::from_millis(1));
        assert_eq!(config.deleting_speed(), Duration::from_millis(1));
        assert_eq!(config.delay_between_phrases(), Duration::from_millis(1));
    }
}
