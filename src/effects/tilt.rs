//! Pointer-driven 3D tilt for cards.

use crate::config::TiltSettings;

/// Bounding box of the tilted element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Keeps `-0` out of the generated CSS.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    rotate_x: f64,
    rotate_y: f64,
    hovering: bool,
}

impl Tilt {
    /// Rotates proportionally to the pointer's offset from the centre. The
    /// vertical axis is inverted so the card leans toward the pointer.
    pub fn pointer_moved(
        &mut self,
        bounds: Bounds,
        client_x: f64,
        client_y: f64,
        settings: &TiltSettings,
    ) {
        let center_x = bounds.width / 2.0;
        let center_y = bounds.height / 2.0;
        if center_x <= 0.0 || center_y <= 0.0 {
            return;
        }

        let x = client_x - bounds.left;
        let y = client_y - bounds.top;
        let max = settings.max_angle;

        // Edge events can land a pixel outside the box.
        self.rotate_x = unsigned_zero((((y - center_y) / center_y) * -max).clamp(-max, max));
        self.rotate_y = unsigned_zero((((x - center_x) / center_x) * max).clamp(-max, max));
        self.hovering = true;
    }

    pub fn pointer_left(&mut self) {
        *self = Self::default();
    }

    /// `(rotate_x, rotate_y)` in degrees; zero whenever the pointer is away.
    pub fn rotation(self) -> (f64, f64) {
        if self.hovering {
            (self.rotate_x, self.rotate_y)
        } else {
            (0.0, 0.0)
        }
    }

    pub fn is_hovering(self) -> bool {
        self.hovering
    }

    pub fn transform(self, settings: &TiltSettings) -> String {
        let (rotate_x, rotate_y) = self.rotation();
        let scale = if self.hovering {
            settings.hover_scale
        } else {
            1.0
        };
        format!(
            "transform: perspective({}px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale({scale});",
            settings.perspective_px
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn centre_is_flat() {
        let mut tilt = Tilt::default();
        tilt.pointer_moved(CARD, 200.0, 100.0, &TiltSettings::default());
        assert!(tilt.is_hovering());
        assert_eq!(tilt.rotation(), (0.0, 0.0));
    }

    #[test]
    fn corners_hit_full_deflection() {
        let settings = TiltSettings::default();
        let mut tilt = Tilt::default();

        tilt.pointer_moved(CARD, 100.0, 50.0, &settings);
        assert_eq!(tilt.rotation(), (10.0, -10.0));

        tilt.pointer_moved(CARD, 300.0, 150.0, &settings);
        assert_eq!(tilt.rotation(), (-10.0, 10.0));
    }

    #[test]
    fn leaving_resets() {
        let settings = TiltSettings::default();
        let mut tilt = Tilt::default();
        tilt.pointer_moved(CARD, 120.0, 60.0, &settings);
        tilt.pointer_left();

        assert!(!tilt.is_hovering());
        assert_eq!(tilt.rotation(), (0.0, 0.0));
        assert_eq!(
            tilt.transform(&settings),
            "transform: perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1);"
        );
    }

    #[test]
    fn hover_transform_scales_up() {
        let settings = TiltSettings::default();
        let mut tilt = Tilt::default();
        tilt.pointer_moved(CARD, 300.0, 100.0, &settings);
        assert_eq!(
            tilt.transform(&settings),
            "transform: perspective(1000px) rotateX(0deg) rotateY(10deg) scale(1.02);"
        );
    }

    #[test]
    fn zero_sized_box_is_ignored() {
        let mut tilt = Tilt::default();
        let empty = Bounds {
            width: 0.0,
            ..CARD
        };
        tilt.pointer_moved(empty, 100.0, 50.0, &TiltSettings::default());
        assert!(!tilt.is_hovering());
    }

    proptest! {
        #[test]
        fn rotation_is_bounded(
            width in 1.0f64..2_000.0,
            height in 1.0f64..2_000.0,
            fx in 0.0f64..=1.0,
            fy in 0.0f64..=1.0,
        ) {
            let bounds = Bounds { left: 13.0, top: 7.0, width, height };
            let mut tilt = Tilt::default();
            tilt.pointer_moved(
                bounds,
                bounds.left + fx * width,
                bounds.top + fy * height,
                &TiltSettings::default(),
            );
            let (rx, ry) = tilt.rotation();
            prop_assert!(rx.abs() <= 10.0);
            prop_assert!(ry.abs() <= 10.0);

            tilt.pointer_left();
            prop_assert_eq!(tilt.rotation(), (0.0, 0.0));
        }
    }
}
