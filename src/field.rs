// The backdrop's particle pool. The pool size is fixed between resizes;
// advancing and painting walk it in index order, and a resize throws the
// whole population away rather than rescaling it.

use crate::options::{Boundary, ConnectOptions, FieldOptions};
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

pub struct ParticleField {
    width: f64,
    height: f64,
    options: FieldOptions,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(
        width: f64,
        height: f64,
        options: FieldOptions,
        rng: &mut R,
    ) -> ParticleField {
        let mut field = ParticleField {
            width,
            height,
            options,
            particles: Vec::new(),
        };
        field.populate(rng);
        field
    }

    fn populate<R: Rng>(&mut self, rng: &mut R) {
        let count = self.options.population(self.width);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::random(rng, self.width, self.height, &self.options));
        }
    }

    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.populate(rng);
    }

    // One animation frame. Velocities are in pixels per frame; like the page
    // this replaces, the step is not scaled by wall-clock delta.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        let width = self.width;
        let height = self.height;
        let options = &self.options;

        for particle in &mut self.particles {
            particle.pos[0] += particle.vel[0];
            particle.pos[1] += particle.vel[1];

            match options.boundary {
                Boundary::Respawn => {
                    let escaped = particle.pos[0] < 0.0
                        || particle.pos[0] > width
                        || particle.pos[1] < 0.0
                        || particle.pos[1] > height;
                    if escaped {
                        *particle = Particle::random(rng, width, height, options);
                    }
                }
                Boundary::Wrap => {
                    for (axis, &dim) in [width, height].iter().enumerate() {
                        if particle.pos[axis] < 0.0 {
                            particle.pos[axis] += dim;
                        } else if particle.pos[axis] >= dim {
                            particle.pos[axis] -= dim;
                        }
                    }
                }
            }

            particle.opacity += particle.opacity_dir * options.twinkle;
            if particle.opacity <= options.opacity_min {
                particle.opacity = options.opacity_min;
                particle.opacity_dir = 1.0;
            } else if particle.opacity >= options.opacity_max {
                particle.opacity = options.opacity_max;
                particle.opacity_dir = -1.0;
            }
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.width, self.height);

        for particle in &self.particles {
            let color = particle.color.rgba(particle.opacity);
            surface.fill_circle(particle.pos[0], particle.pos[1], particle.radius, &color);
        }

        if let Some(connect) = self.options.connect {
            self.render_connections(surface, &connect);
        }
    }

    // O(n^2) over the pool; population() keeps n small enough for that.
    fn render_connections(&self, surface: &mut dyn Surface, connect: &ConnectOptions) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a: Vector2<f64> = self.particles[i].pos;
                let b: Vector2<f64> = self.particles[j].pos;
                let dist = vecmath::vec2_len(vecmath::vec2_sub(a, b));
                if let Some(alpha) = connection_alpha(dist, connect) {
                    let color = self.particles[i].color.rgba(alpha);
                    surface.stroke_line(a, b, &color, connect.line_width);
                }
            }
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

// Line opacity falls off linearly with pair distance and vanishes at the
// threshold.
fn connection_alpha(dist: f64, connect: &ConnectOptions) -> Option<f64> {
    if dist < connect.threshold {
        Some(connect.base_alpha * (1.0 - dist / connect.threshold))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn options_with_count(count: usize) -> FieldOptions {
        // density 1.0 makes population() return min(count, width)
        FieldOptions {
            max_particles: count,
            density: 1.0,
            ..FieldOptions::default()
        }
    }

    #[test]
    fn new_field_spawns_every_particle_in_bounds() {
        let mut rng = rng();
        let field = ParticleField::new(800.0, 600.0, options_with_count(60), &mut rng);
        assert_eq!(field.particles().len(), 60);
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
        }
    }

    #[test]
    fn wrap_policy_never_lets_a_particle_escape() {
        let mut rng = rng();
        let mut options = options_with_count(60);
        options.boundary = Boundary::Wrap;
        let mut field = ParticleField::new(800.0, 600.0, options, &mut rng);
        for _ in 0..1000 {
            field.advance(&mut rng);
            for p in field.particles() {
                assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
                assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            }
        }
    }

    #[test]
    fn wrap_carries_coordinates_to_the_opposite_edge() {
        let mut rng = rng();
        let mut options = options_with_count(1);
        options.boundary = Boundary::Wrap;
        let mut field = ParticleField::new(100.0, 100.0, options, &mut rng);
        field.particles[0].pos = [99.9, 0.05];
        field.particles[0].vel = [0.2, -0.2];
        field.advance(&mut rng);
        let p = field.particles[0];
        assert!((p.pos[0] - 0.1).abs() < 1e-9);
        assert!((p.pos[1] - 99.85).abs() < 1e-9);
    }

    #[test]
    fn respawn_rerandomizes_escaped_particles_in_bounds() {
        let mut rng = rng();
        let mut field = ParticleField::new(200.0, 100.0, options_with_count(1), &mut rng);
        field.particles[0].pos = [199.95, 50.0];
        field.particles[0].vel = [0.1, 0.0];
        field.advance(&mut rng);
        let p = field.particles[0];
        assert!(p.pos[0] >= 0.0 && p.pos[0] < 200.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] < 100.0);
    }

    #[test]
    fn opacity_stays_in_bounds_and_flips_once_per_crossing() {
        let mut rng = rng();
        let options = options_with_count(1);
        let (min, max, twinkle) = (options.opacity_min, options.opacity_max, options.twinkle);
        let mut field = ParticleField::new(800.0, 600.0, options, &mut rng);
        field.particles[0].vel = [0.0, 0.0];
        field.particles[0].opacity = max - twinkle / 2.0;
        field.particles[0].opacity_dir = 1.0;

        // Crossing the upper bound clamps and turns the twinkle around.
        field.advance(&mut rng);
        assert_eq!(field.particles[0].opacity, max);
        assert_eq!(field.particles[0].opacity_dir, -1.0);

        // The next frame walks away from the bound without flipping again.
        field.advance(&mut rng);
        assert_eq!(field.particles[0].opacity, max - twinkle);
        assert_eq!(field.particles[0].opacity_dir, -1.0);

        // A long run never leaves the band.
        for _ in 0..5000 {
            field.advance(&mut rng);
            let p = field.particles[0];
            assert!(p.opacity >= min && p.opacity <= max);
        }
    }

    #[test]
    fn empty_field_only_clears_the_surface() {
        let mut rng = rng();
        let field = ParticleField::new(800.0, 600.0, options_with_count(0), &mut rng);
        let mut surface = RecordingSurface::default();
        field.render(&mut surface);
        assert_eq!(
            surface.calls,
            vec![DrawCall::Clear {
                width: 800.0,
                height: 600.0
            }]
        );
    }

    #[test]
    fn render_draws_one_circle_per_particle_with_live_opacity() {
        let mut rng = rng();
        let mut options = options_with_count(2);
        options.connect = None;
        let mut field = ParticleField::new(800.0, 600.0, options, &mut rng);
        field.particles[0].opacity = 0.25;
        field.particles[1].opacity = 0.6;

        let mut surface = RecordingSurface::default();
        field.render(&mut surface);

        let circles: Vec<_> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle { color, .. } => Some(color.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            circles,
            vec![
                "rgba(0, 217, 255, 0.25)".to_owned(),
                "rgba(0, 217, 255, 0.60)".to_owned(),
            ]
        );
    }

    #[test]
    fn close_pairs_get_a_line_and_distant_pairs_do_not() {
        let mut rng = rng();
        let mut field = ParticleField::new(800.0, 600.0, options_with_count(2), &mut rng);
        field.particles[0].pos = [100.0, 100.0];
        field.particles[1].pos = [150.0, 100.0];

        let mut surface = RecordingSurface::default();
        field.render(&mut surface);
        let lines = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count();
        assert_eq!(lines, 1);

        field.particles[1].pos = [250.0, 100.0];
        let mut surface = RecordingSurface::default();
        field.render(&mut surface);
        let lines = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count();
        assert_eq!(lines, 0);
    }

    #[test]
    fn connection_alpha_falls_off_linearly() {
        let connect = ConnectOptions::default();
        let alpha = connection_alpha(50.0, &connect).unwrap();
        assert!((alpha - 0.06 * (1.0 - 50.0 / 120.0)).abs() < 1e-12);
        assert!((alpha - 0.035).abs() < 1e-9);
        assert_eq!(connection_alpha(150.0, &connect), None);
        assert_eq!(connection_alpha(120.0, &connect), None);
    }

    #[test]
    fn resize_rebuilds_the_population_for_the_new_viewport() {
        let mut rng = rng();
        let options = FieldOptions::default();
        let mut field = ParticleField::new(800.0, 600.0, options, &mut rng);
        assert_eq!(field.particles().len(), 53);

        field.resize(400.0, 300.0, &mut rng);
        assert_eq!(field.particles().len(), 26);
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 400.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 300.0);
        }
    }
}
