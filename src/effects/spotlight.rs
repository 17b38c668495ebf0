use crate::config::SpotlightSettings;

/// Radial glow that follows the pointer across the whole viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spotlight {
    x: f64,
    y: f64,
    opacity: f64,
}

impl Spotlight {
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.opacity = 1.0;
    }

    /// Fades out but keeps the last position so the glow does not jump.
    pub fn pointer_left(&mut self) {
        self.opacity = 0.0;
    }

    pub fn position(self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn opacity(self) -> f64 {
        self.opacity
    }

    pub fn background(self, settings: &SpotlightSettings) -> String {
        format!(
            "radial-gradient({}px circle at {}px {}px, {}, transparent 50%)",
            settings.radius_px, self.x, self.y, settings.color
        )
    }

    pub fn style(self, settings: &SpotlightSettings) -> String {
        format!(
            "opacity: {}; background: {};",
            self.opacity,
            self.background(settings)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_pointer_moves() {
        let spotlight = Spotlight::default();
        assert_eq!(spotlight.opacity(), 0.0);
    }

    #[test]
    fn follows_pointer_and_fades_on_leave() {
        let mut spotlight = Spotlight::default();
        spotlight.pointer_moved(120.0, 48.5);
        assert_eq!(spotlight.opacity(), 1.0);
        assert_eq!(spotlight.position(), (120.0, 48.5));

        spotlight.pointer_left();
        assert_eq!(spotlight.opacity(), 0.0);
        assert_eq!(spotlight.position(), (120.0, 48.5));
    }

    #[test]
    fn gradient_is_centred_on_pointer() {
        let mut spotlight = Spotlight::default();
        spotlight.pointer_moved(10.0, 20.0);
        assert_eq!(
            spotlight.background(&SpotlightSettings::default()),
            "radial-gradient(600px circle at 10px 20px, rgba(251, 191, 36, 0.15), transparent 50%)"
        );
    }
}
