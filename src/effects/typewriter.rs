//! Endless type / pause / delete loop over a list of phrases.

use crate::config::TypewriterSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Full phrase on screen, waiting before deleting.
    Pausing,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    texts: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: Phase,
    /// Bumped on every transition so observers can tell two equal frames apart.
    step: u64,
    timing: TypewriterSettings,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(texts: &[S], timing: TypewriterSettings) -> Self {
        Self {
            texts: texts.iter().map(|text| text.as_ref().chars().collect()).collect(),
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            step: 0,
            timing,
        }
    }

    /// Nothing to type: the cycler never schedules a tick.
    pub fn is_idle(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    fn current(&self) -> &[char] {
        self.texts.get(self.index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn displayed(&self) -> String {
        self.current()[..self.shown].iter().collect()
    }

    /// Milliseconds to wait before the next call to [`Typewriter::advance`].
    pub fn delay(&self) -> u32 {
        match self.phase {
            Phase::Typing => self.timing.type_ms,
            Phase::Pausing => self.timing.pause_ms,
            Phase::Deleting => self.timing.delete_ms,
        }
    }

    pub fn advance(&mut self) {
        if self.is_idle() {
            return;
        }
        self.step += 1;

        match self.phase {
            Phase::Typing => {
                let len = self.current().len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown == len {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.texts.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_frames(typewriter: &mut Typewriter, steps: usize) -> Vec<String> {
        let mut frames = vec![typewriter.displayed()];
        for _ in 0..steps {
            typewriter.advance();
            let shown = typewriter.displayed();
            if frames.last() != Some(&shown) {
                frames.push(shown);
            }
        }
        frames
    }

    #[test]
    fn cycles_through_phrases_character_by_character() {
        let mut typewriter = Typewriter::new(&["A", "BB"], TypewriterSettings::default());
        let frames = distinct_frames(&mut typewriter, 20);
        assert_eq!(
            &frames[..9],
            &["", "A", "", "B", "BB", "B", "", "A", ""]
        );
    }

    #[test]
    fn shown_text_never_exceeds_target() {
        let texts = ["Full-Stack Application.", "AI Multi-Agent Tools.", "x", ""];
        let mut typewriter = Typewriter::new(&texts, TypewriterSettings::default());
        for _ in 0..500 {
            typewriter.advance();
            let target = texts[typewriter.current_index()];
            assert!(typewriter.displayed().chars().count() <= target.chars().count());
        }
    }

    #[test]
    fn index_advances_only_when_emptied_by_deleting() {
        let mut typewriter = Typewriter::new(&["ab", "c"], TypewriterSettings::default());
        let mut previous = typewriter.current_index();
        let mut was_deleting = false;
        for _ in 0..100 {
            typewriter.advance();
            if typewriter.current_index() != previous {
                assert!(was_deleting);
                assert_eq!(typewriter.displayed(), "");
                assert_eq!(typewriter.phase(), Phase::Typing);
                previous = typewriter.current_index();
            }
            was_deleting = typewriter.phase() == Phase::Deleting;
        }
    }

    #[test]
    fn delays_follow_phase() {
        let mut typewriter = Typewriter::new(&["ok"], TypewriterSettings::default());
        assert_eq!(typewriter.delay(), 100);
        typewriter.advance();
        assert_eq!(typewriter.delay(), 100);
        typewriter.advance();
        assert_eq!(typewriter.phase(), Phase::Pausing);
        assert_eq!(typewriter.delay(), 2_000);
        typewriter.advance();
        assert_eq!(typewriter.phase(), Phase::Deleting);
        assert_eq!(typewriter.displayed(), "ok");
        assert_eq!(typewriter.delay(), 50);
    }

    fn assert_total_eq<T: Eq>(_: &T) {}

    #[test]
    fn snapshots_compare_by_full_state() {
        let timing = TypewriterSettings {
            pause_ms: 500,
            ..TypewriterSettings::default()
        };
        let mut typewriter = Typewriter::new(&["go"], timing.clone());
        let snapshot = typewriter.clone();
        assert_total_eq(&snapshot);
        assert_eq!(typewriter, snapshot);

        typewriter.advance();
        assert_ne!(typewriter, snapshot);
        assert_ne!(
            Typewriter::new(&["go"], timing),
            Typewriter::new(&["go"], TypewriterSettings::default())
        );
    }

    #[test]
    fn unicode_is_typed_per_character() {
        let mut typewriter = Typewriter::new(&["日本"], TypewriterSettings::default());
        typewriter.advance();
        assert_eq!(typewriter.displayed(), "日");
    }

    #[test]
    fn empty_list_stays_idle() {
        let mut typewriter = Typewriter::new::<&str>(&[], TypewriterSettings::default());
        typewriter.advance();
        assert!(typewriter.is_idle());
        assert_eq!(typewriter.displayed(), "");
        assert_eq!(typewriter.step(), 0);
    }
}
