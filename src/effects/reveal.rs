//! One-shot "fade in when scrolled into view" latch.

use crate::config::RevealSettings;

/// A single report from the intersection observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The block just became visible; the caller should stop observing it.
    Revealed,
    Ignored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Feeds one observer report. The threshold is enforced by the observer
    /// itself, so only the intersecting flag is consulted here.
    pub fn observe(&mut self, entry: Intersection) -> Observation {
        if self.visible || !entry.is_intersecting {
            return Observation::Ignored;
        }
        self.visible = true;
        Observation::Revealed
    }

    pub fn classes(self) -> &'static str {
        if self.visible {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-20"
        }
    }
}

pub fn transition_delay_style(delay_ms: u32, settings: &RevealSettings) -> String {
    format!(
        "transition-duration: {}ms; transition-delay: {delay_ms}ms;",
        settings.duration_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(is_intersecting: bool) -> Intersection {
        Intersection {
            is_intersecting,
            ratio: if is_intersecting { 0.5 } else { 0.0 },
        }
    }

    #[test]
    fn starts_hidden() {
        let reveal = Reveal::new();
        assert!(!reveal.is_visible());
        assert_eq!(reveal.classes(), "opacity-0 translate-y-20");
    }

    #[test]
    fn reveals_once_and_stays_visible() {
        let mut reveal = Reveal::new();
        assert_eq!(reveal.observe(entry(false)), Observation::Ignored);
        assert_eq!(reveal.observe(entry(true)), Observation::Revealed);
        assert_eq!(reveal.observe(entry(false)), Observation::Ignored);
        assert_eq!(reveal.observe(entry(true)), Observation::Ignored);
        assert!(reveal.is_visible());
        assert_eq!(reveal.classes(), "opacity-100 translate-y-0");
    }

    #[test]
    fn delay_is_rendered_in_milliseconds() {
        let style = transition_delay_style(300, &RevealSettings::default());
        assert_eq!(style, "transition-duration: 1000ms; transition-delay: 300ms;");
    }

    proptest! {
        #[test]
        fn visibility_is_monotonic(reports in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut reveal = Reveal::new();
            let mut revealed = 0;
            let mut seen_visible = false;
            for is_intersecting in reports {
                if reveal.observe(entry(is_intersecting)) == Observation::Revealed {
                    revealed += 1;
                }
                if seen_visible {
                    prop_assert!(reveal.is_visible());
                }
                seen_visible = reveal.is_visible();
            }
            prop_assert!(revealed <= 1);
        }
    }
}
