// Tunables for the particle backdrop. The defaults are the values the page
// ships with; everything is adjustable so alternate pages can dial the
// effect up or down without touching the field code.

use crate::color::Color;

// Aeonis accent cyan, RRGGBBAA.
pub const AEONIS_CYAN: u32 = 0x00d9ffff;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Boundary {
    // Re-randomize a particle once it drifts out of the viewport.
    Respawn,
    // Carry an escaping coordinate over to the opposite edge.
    Wrap,
}

#[derive(Copy, Clone, Debug)]
pub struct ConnectOptions {
    pub threshold: f64,
    pub base_alpha: f64,
    pub line_width: f64,
}

impl Default for ConnectOptions {
    fn default() -> ConnectOptions {
        ConnectOptions {
            threshold: 120.0,
            base_alpha: 0.06,
            line_width: 0.5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldOptions {
    pub max_particles: usize,
    pub density: f64,
    pub speed: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    pub twinkle: f64,
    pub boundary: Boundary,
    pub connect: Option<ConnectOptions>,
    pub palette: Vec<Color>,
}

impl FieldOptions {
    // Particle count for a viewport width: one particle per `density` pixels,
    // capped so the pair-connection pass stays cheap on wide screens.
    pub fn population(&self, width: f64) -> usize {
        let scaled = (width / self.density).floor();
        (self.max_particles as f64).min(scaled).max(0.0) as usize
    }
}

impl Default for FieldOptions {
    fn default() -> FieldOptions {
        FieldOptions {
            max_particles: 80,
            density: 15.0,
            speed: 0.3,
            radius_min: 0.5,
            radius_max: 2.5,
            opacity_min: 0.1,
            opacity_max: 0.6,
            twinkle: 0.003,
            boundary: Boundary::Respawn,
            connect: Some(ConnectOptions::default()),
            palette: vec![Color::from_u32(AEONIS_CYAN)],
        }
    }
}
