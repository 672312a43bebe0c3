//! Typing/deleting text animation
//!
//! An explicit state machine advanced one character per tick. The owner
//! schedules each tick after the delay returned by the previous one.
//!
//! Every [`restart`](TypingAnimator::restart) starts a new *generation*.
//! Ticks are scheduled under the generation that was current at the time,
//! and a tick whose generation is no longer current must be dropped. That
//! keeps exactly one live tick chain no matter how often the hero pane is
//! re-entered.

use std::time::Duration;

use crate::config::TypingConfig;

/// Snapshot of the animation position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    pub char_index: usize,
    pub is_deleting: bool,
}

/// Output of one tick: the text to display and when to tick again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub next_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    typing_speed: Duration,
    deleting_speed: Duration,
    delay_between_phrases: Duration,
    state: TypingState,
    generation: u64,
}

impl TypingAnimator {
    pub fn new(config: &TypingConfig) -> Self {
        // An empty phrase would have nothing to type; skip it
        let phrases = config
            .phrases
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect();
        TypingAnimator {
            phrases,
            typing_speed: config.typing_speed(),
            deleting_speed: config.deleting_speed(),
            delay_between_phrases: config.delay_between_phrases(),
            state: TypingState {
                phrase_index: 0,
                char_index: 0,
                is_deleting: false,
            },
            generation: 0,
        }
    }

    /// Whether there is anything to animate
    pub fn is_enabled(&self) -> bool {
        !self.phrases.is_empty()
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Delay before the first tick after a restart
    pub fn start_delay(&self) -> Duration {
        self.typing_speed
    }

    /// Reset to the start of the first phrase and invalidate older ticks
    pub fn restart(&mut self) -> u64 {
        self.state = TypingState {
            phrase_index: 0,
            char_index: 0,
            is_deleting: false,
        };
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Length, in characters, of the phrase currently being animated
    pub fn current_len(&self) -> usize {
        self.phrases
            .get(self.state.phrase_index)
            .map_or(0, |p| p.chars().count())
    }

    /// Advance by one character. Returns `None` when there are no phrases.
    pub fn tick(&mut self) -> Option<TypingStep> {
        let phrase = self.phrases.get(self.state.phrase_index)?;
        let len = phrase.chars().count();
        let state = &mut self.state;

        if state.is_deleting {
            state.char_index = state.char_index.saturating_sub(1);
        } else {
            state.char_index = (state.char_index + 1).min(len);
        }
        let text: String = phrase.chars().take(state.char_index).collect();

        let next_delay = if !state.is_deleting && state.char_index == len {
            state.is_deleting = true;
            self.delay_between_phrases
        } else if state.is_deleting && state.char_index == 0 {
            state.is_deleting = false;
            state.phrase_index = (state.phrase_index + 1) % self.phrases.len();
            self.typing_speed
        } else if state.is_deleting {
            self.deleting_speed
        } else {
            self.typing_speed
        };

        Some(TypingStep { text, next_delay })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn animator(phrases: &[&str]) -> TypingAnimator {
        TypingAnimator::new(&TypingConfig {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            ..TypingConfig::default()
        })
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_types_pauses_deletes_and_advances() {
        let mut anim = animator(&["ab", "xyz"]);

        let step = anim.tick().unwrap();
        assert_eq!(step, TypingStep { text: "a".into(), next_delay: ms(100) });
        let step = anim.tick().unwrap();
        assert_eq!(step, TypingStep { text: "ab".into(), next_delay: ms(1500) });
        assert!(anim.state().is_deleting);

        let step = anim.tick().unwrap();
        assert_eq!(step, TypingStep { text: "a".into(), next_delay: ms(50) });
        let step = anim.tick().unwrap();
        assert_eq!(step, TypingStep { text: "".into(), next_delay: ms(100) });
        assert_eq!(anim.state().phrase_index, 1);
        assert!(!anim.state().is_deleting);

        assert_eq!(anim.tick().unwrap().text, "x");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut anim = animator(&["a"]);
        // type "a", delete it, then type "a" again
        assert_eq!(anim.tick().unwrap().text, "a");
        assert_eq!(anim.tick().unwrap().text, "");
        assert_eq!(anim.state().phrase_index, 0);
        assert_eq!(anim.tick().unwrap().text, "a");
    }

    #[test]
    fn test_restart_invalidates_generation() {
        let mut anim = animator(&["hello"]);
        let first = anim.restart();
        anim.tick();
        anim.tick();
        let second = anim.restart();
        assert!(!anim.is_current(first));
        assert!(anim.is_current(second));
        assert_eq!(anim.state().char_index, 0);
        assert_eq!(anim.tick().unwrap().text, "h");
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut anim = animator(&["héé"]);
        assert_eq!(anim.tick().unwrap().text, "h");
        assert_eq!(anim.tick().unwrap().text, "hé");
        assert_eq!(anim.current_len(), 3);
    }

    #[test]
    fn test_no_phrases() {
        let mut anim = animator(&["", ""]);
        assert!(!anim.is_enabled());
        assert_eq!(anim.tick(), None);
    }

    proptest! {
        #[test]
        fn char_index_stays_within_phrase(
            phrases in prop::collection::vec("[a-z ]{1,8}", 1..5),
            ticks in 0usize..200,
        ) {
            let refs: Vec<&str> = phrases.iter().map(String::as_str).collect();
            let mut anim = animator(&refs);
            for _ in 0..ticks {
                anim.tick();
                let state = anim.state();
                prop_assert!(state.phrase_index < anim.phrases().len());
                prop_assert!(state.char_index <= anim.current_len());
            }
        }
    }
}
