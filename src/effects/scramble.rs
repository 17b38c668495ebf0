//! "Decrypting" text reveal: random symbols resolve left to right.

use rand::Rng;

use crate::config::ScrambleSettings;

pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    /// The run is over and `text` equals the original string.
    pub done: bool,
}

/// Reveal state for one piece of text.
///
/// The cursor advances by `1 / ticks_per_char` characters per tick. It is
/// stored as a whole tick count so the resolved prefix never suffers from
/// float drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    target: Vec<char>,
    symbols: Vec<char>,
    ticks_per_char: u32,
    ticks: u32,
    running: bool,
}

impl Scramble {
    pub fn new(text: &str, settings: &ScrambleSettings) -> Self {
        Self {
            target: text.chars().collect(),
            symbols: SYMBOLS.chars().collect(),
            ticks_per_char: settings.ticks_per_char.max(1),
            ticks: 0,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resolve cursor in characters.
    pub fn iterations(&self) -> f64 {
        f64::from(self.ticks) / f64::from(self.ticks_per_char)
    }

    /// Starts a fresh run, discarding any progress of the current one.
    pub fn restart(&mut self) {
        self.ticks = 0;
        self.running = true;
    }

    fn is_resolved(&self, index: usize) -> bool {
        // index < ticks / ticks_per_char, without the division.
        (index as u64) * u64::from(self.ticks_per_char) < u64::from(self.ticks)
    }

    /// Renders the current frame, then moves the cursor. The frame rendered
    /// once the cursor has passed the end is the original text and ends the
    /// run.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> ScrambleFrame {
        let done = self.iterations() >= self.target.len() as f64;
        let text = self
            .target
            .iter()
            .enumerate()
            .map(|(index, &ch)| {
                if done || self.is_resolved(index) {
                    ch
                } else {
                    self.symbols[rng.random_range(0..self.symbols.len())]
                }
            })
            .collect();

        if done {
            self.running = false;
        } else {
            self.ticks += 1;
        }

        ScrambleFrame { text, done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn run_to_end(scramble: &mut Scramble, rng: &mut Pcg32) -> Vec<ScrambleFrame> {
        scramble.restart();
        let mut frames = Vec::new();
        loop {
            let frame = scramble.tick(rng);
            let done = frame.done;
            frames.push(frame);
            if done {
                return frames;
            }
            assert!(frames.len() < 1_000, "scramble never finished");
        }
    }

    #[test]
    fn resolves_to_original_text() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut scramble = Scramble::new("Hi", &ScrambleSettings::default());
        let frames = run_to_end(&mut scramble, &mut rng);

        assert_eq!(frames.last().unwrap().text, "Hi");
        assert!(!scramble.is_running());
        // Cursor reaches 2.0 after six ticks; the seventh renders the text.
        assert_eq!(frames.len(), 7);
    }

    #[test]
    fn prefix_resolves_and_rest_is_noise() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut scramble = Scramble::new("Eric Li", &ScrambleSettings::default());
        scramble.restart();
        let original: Vec<char> = "Eric Li".chars().collect();

        while scramble.is_running() {
            let iterations = scramble.iterations();
            let frame = scramble.tick(&mut rng);
            let shown: Vec<char> = frame.text.chars().collect();
            assert_eq!(shown.len(), original.len());

            let resolved = iterations.floor() as usize;
            assert_eq!(&shown[..resolved.min(shown.len())], &original[..resolved.min(shown.len())]);
            if !frame.done {
                for (index, ch) in shown.iter().enumerate() {
                    if (index as f64) >= iterations {
                        assert!(SYMBOLS.contains(*ch), "{ch:?} is not a scramble symbol");
                    }
                }
            }
        }
    }

    #[test]
    fn cursor_moves_a_third_of_a_character_per_tick() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut scramble = Scramble::new("abc", &ScrambleSettings::default());
        scramble.restart();
        scramble.tick(&mut rng);
        scramble.tick(&mut rng);
        scramble.tick(&mut rng);
        assert!((scramble.iterations() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn restart_discards_progress() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut scramble = Scramble::new("restart", &ScrambleSettings::default());
        scramble.restart();
        for _ in 0..5 {
            scramble.tick(&mut rng);
        }
        scramble.restart();
        assert_eq!(scramble.iterations(), 0.0);
        assert!(scramble.is_running());
    }

    #[test]
    fn empty_text_finishes_immediately() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut scramble = Scramble::new("", &ScrambleSettings::default());
        let frames = run_to_end(&mut scramble, &mut rng);
        assert_eq!(frames, vec![ScrambleFrame { text: String::new(), done: true }]);
    }
}
