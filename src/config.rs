//! Tunables for the animation layer.
//!
//! Every field has a default matching the shipped page. The content manifest may
//! override any subset under its `effects` key; values are clamped into the
//! bounds below before use.

use serde::Deserialize;

const TICK_MS_BOUNDS: (u32, u32) = (10, 1_000);
const PAUSE_MS_BOUNDS: (u32, u32) = (0, 60_000);
const DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const MAX_ANGLE_BOUNDS: (f64, f64) = (0.0, 45.0);
const PERSPECTIVE_BOUNDS: (f64, f64) = (100.0, 5_000.0);
const HOVER_SCALE_BOUNDS: (f64, f64) = (1.0, 1.5);
const RADIUS_BOUNDS: (f64, f64) = (50.0, 2_000.0);
const TICKS_PER_CHAR_BOUNDS: (u32, u32) = (1, 20);
const AREA_PER_PARTICLE_BOUNDS: (f64, f64) = (1_000.0, 1_000_000.0);
const LINK_DISTANCE_BOUNDS: (f64, f64) = (1.0, 1_000.0);
const MAX_SPEED_BOUNDS: (f64, f64) = (0.0, 10.0);
const SCROLL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 2_000.0);

fn clamp_u32(value: u32, bounds: (u32, u32)) -> u32 {
    value.clamp(bounds.0, bounds.1)
}

fn clamp_f64(value: f64, bounds: (f64, f64)) -> f64 {
    if value.is_nan() {
        return bounds.0;
    }
    value.clamp(bounds.0, bounds.1)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Fraction of the block that must be inside the viewport.
    pub threshold: f64,
    /// CSS margin applied around the viewport before intersecting.
    pub root_margin: String,
    pub duration_ms: u32,
    /// Extra delay per item when a grid reveals its children one by one.
    pub stagger_ms: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: String::from("50px"),
            duration_ms: 1_000,
            stagger_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpotlightSettings {
    pub radius_px: f64,
    pub color: String,
}

impl Default for SpotlightSettings {
    fn default() -> Self {
        Self {
            radius_px: 600.0,
            color: String::from("rgba(251, 191, 36, 0.15)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltSettings {
    /// Rotation in degrees when the pointer sits on an edge.
    pub max_angle: f64,
    pub perspective_px: f64,
    pub hover_scale: f64,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            max_angle: 10.0,
            perspective_px: 1_000.0,
            hover_scale: 1.02,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrambleSettings {
    pub tick_ms: u32,
    /// Ticks spent on each character before it resolves.
    pub ticks_per_char: u32,
}

impl Default for ScrambleSettings {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            ticks_per_char: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypewriterSettings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 2_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    /// Square pixels of viewport per particle.
    pub area_per_particle: f64,
    pub link_distance: f64,
    /// Largest absolute velocity component, in pixels per frame.
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub fill: String,
    pub stroke: String,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            area_per_particle: 15_000.0,
            link_distance: 120.0,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            fill: String::from("rgba(251, 191, 36, 0.4)"),
            stroke: String::from("rgba(251, 191, 36, 0.15)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavSettings {
    pub scroll_threshold: f64,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    pub reveal: RevealSettings,
    pub spotlight: SpotlightSettings,
    pub tilt: TiltSettings,
    pub scramble: ScrambleSettings,
    pub typewriter: TypewriterSettings,
    pub particles: ParticleSettings,
    pub nav: NavSettings,
}

impl EffectSettings {
    /// Returns a copy with every numeric value forced into its supported range.
    pub fn sanitized(&self) -> Self {
        let mut next = self.clone();

        next.reveal.threshold = clamp_f64(next.reveal.threshold, THRESHOLD_BOUNDS);
        next.reveal.duration_ms = clamp_u32(next.reveal.duration_ms, DELAY_MS_BOUNDS);
        next.reveal.stagger_ms = clamp_u32(next.reveal.stagger_ms, DELAY_MS_BOUNDS);

        next.spotlight.radius_px = clamp_f64(next.spotlight.radius_px, RADIUS_BOUNDS);

        next.tilt.max_angle = clamp_f64(next.tilt.max_angle, MAX_ANGLE_BOUNDS);
        next.tilt.perspective_px = clamp_f64(next.tilt.perspective_px, PERSPECTIVE_BOUNDS);
        next.tilt.hover_scale = clamp_f64(next.tilt.hover_scale, HOVER_SCALE_BOUNDS);

        next.scramble.tick_ms = clamp_u32(next.scramble.tick_ms, TICK_MS_BOUNDS);
        next.scramble.ticks_per_char =
            clamp_u32(next.scramble.ticks_per_char, TICKS_PER_CHAR_BOUNDS);

        next.typewriter.type_ms = clamp_u32(next.typewriter.type_ms, TICK_MS_BOUNDS);
        next.typewriter.delete_ms = clamp_u32(next.typewriter.delete_ms, TICK_MS_BOUNDS);
        next.typewriter.pause_ms = clamp_u32(next.typewriter.pause_ms, PAUSE_MS_BOUNDS);

        let particles = &mut next.particles;
        particles.area_per_particle =
            clamp_f64(particles.area_per_particle, AREA_PER_PARTICLE_BOUNDS);
        particles.link_distance = clamp_f64(particles.link_distance, LINK_DISTANCE_BOUNDS);
        particles.max_speed = clamp_f64(particles.max_speed, MAX_SPEED_BOUNDS);
        particles.min_radius = clamp_f64(particles.min_radius, (0.1, 20.0));
        particles.max_radius = clamp_f64(particles.max_radius, (particles.min_radius, 20.0));

        next.nav.scroll_threshold = clamp_f64(next.nav.scroll_threshold, SCROLL_THRESHOLD_BOUNDS);

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_sanitizing() {
        let settings = EffectSettings::default();
        assert_eq!(settings.sanitized(), settings);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let settings: EffectSettings =
            serde_json::from_str(r#"{ "typewriter": { "pause_ms": 500 } }"#).unwrap();
        assert_eq!(settings.typewriter.pause_ms, 500);
        assert_eq!(settings.typewriter.type_ms, 100);
        assert_eq!(settings.particles, ParticleSettings::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let settings: EffectSettings = serde_json::from_str(
            r#"{
                "scramble": { "tick_ms": 1, "ticks_per_char": 0 },
                "tilt": { "max_angle": 90.0 },
                "particles": { "area_per_particle": 10.0, "min_radius": 4.0, "max_radius": 2.0 },
                "reveal": { "threshold": 3.0 }
            }"#,
        )
        .unwrap();
        let clean = settings.sanitized();

        assert_eq!(clean.scramble.tick_ms, 10);
        assert_eq!(clean.scramble.ticks_per_char, 1);
        assert_eq!(clean.tilt.max_angle, 45.0);
        assert_eq!(clean.particles.area_per_particle, 1_000.0);
        assert_eq!(clean.particles.max_radius, 4.0);
        assert_eq!(clean.reveal.threshold, 1.0);
    }

    #[test]
    fn nan_falls_back_to_lower_bound() {
        let mut settings = EffectSettings::default();
        settings.tilt.perspective_px = f64::NAN;
        assert_eq!(settings.sanitized().tilt.perspective_px, 100.0);
    }
}
