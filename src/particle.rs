// Single backdrop particle: drift position and velocity, dot size, and the
// twinkle state driving its opacity each frame.

use crate::color::Color;
use crate::options::FieldOptions;
use rand::Rng;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub opacity: f64,
    pub opacity_dir: f64,
    pub color: Color,
}

impl Particle {
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        options: &FieldOptions,
    ) -> Particle {
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let vel = [
            (rng.gen::<f64>() - 0.5) * options.speed,
            (rng.gen::<f64>() - 0.5) * options.speed,
        ];
        let radius =
            rng.gen::<f64>() * (options.radius_max - options.radius_min) + options.radius_min;
        let opacity =
            rng.gen::<f64>() * (options.opacity_max - options.opacity_min) + options.opacity_min;
        let opacity_dir = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        let color = options.palette[rng.gen_range(0, options.palette.len())];

        Particle {
            pos,
            vel,
            radius,
            opacity,
            opacity_dir,
            color,
        }
    }
}
