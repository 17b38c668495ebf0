//! Drifting particle network drawn behind the page.

use glam::DVec2;
use rand::Rng;

use crate::config::ParticleSettings;

/// Drawing backend. The browser implements it over a 2D canvas context.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Particle {
    fn spawn<R: Rng>(rng: &mut R, size: DVec2, settings: &ParticleSettings) -> Self {
        let speed = settings.max_speed;
        Self {
            pos: DVec2::new(
                rng.random::<f64>() * size.x,
                rng.random::<f64>() * size.y,
            ),
            vel: DVec2::new(
                (rng.random::<f64>() - 0.5) * 2.0 * speed,
                (rng.random::<f64>() - 0.5) * 2.0 * speed,
            ),
            radius: settings.min_radius
                + rng.random::<f64>() * (settings.max_radius - settings.min_radius),
        }
    }

    /// Moves one step and reflects off the field edges. Overshoot is not
    /// corrected: the particle comes back on the next step.
    fn advance(&mut self, size: DVec2) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > size.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > size.y {
            self.vel.y = -self.vel.y;
        }
    }
}

/// A line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: DVec2,
    pub to: DVec2,
    /// `1 - distance / link_distance`, in `(0, 1]`.
    pub weight: f64,
}

pub fn particle_count(width: f64, height: f64, settings: &ParticleSettings) -> usize {
    let area = width.max(0.0) * height.max(0.0);
    (area / settings.area_per_particle).floor() as usize
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    size: DVec2,
    particles: Vec<Particle>,
    settings: ParticleSettings,
}

impl ParticleField {
    pub fn new<R: Rng>(width: f64, height: f64, settings: ParticleSettings, rng: &mut R) -> Self {
        let mut field = Self {
            size: DVec2::ZERO,
            particles: Vec::new(),
            settings,
        };
        field.resize(width, height, rng);
        field
    }

    /// Replaces every particle with a fresh set sized for the new area.
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.size = DVec2::new(width.max(0.0), height.max(0.0));
        let count = particle_count(width, height, &self.settings);
        self.particles = (0..count)
            .map(|_| Particle::spawn(rng, self.size, &self.settings))
            .collect();
        log::debug!("particle field {width}x{height}: {count} particles");
    }

    pub fn size(&self) -> (f64, f64) {
        (self.size.x, self.size.y)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step(&mut self) {
        let size = self.size;
        for particle in &mut self.particles {
            particle.advance(size);
        }
    }

    /// Every unordered pair closer than the link distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max = self.settings.link_distance;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let distance = a.pos.distance(b.pos);
                (distance < max).then(|| Link {
                    from: a.pos,
                    to: b.pos,
                    weight: 1.0 - distance / max,
                })
            })
        })
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.size.x, self.size.y);
        for particle in &self.particles {
            surface.fill_circle(particle.pos, particle.radius);
        }
        for link in self.links() {
            surface.stroke_line(link.from, link.to, link.weight);
        }
    }

    /// One animation frame: move, then redraw.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) {
        self.step();
        self.draw(surface);
    }

    #[cfg(test)]
    fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            size: DVec2::new(width, height),
            particles,
            settings: ParticleSettings::default(),
        }
    }
}
