use super::{MAX_OCTAVE, Module, ModuleKind, Sources, parse_param, unknown_param};
use crate::NoiseGenerator;
use crate::error::Result;
use crate::interpolate::Quality;
use crate::noisegen::gradient_coherent_3d;

const OFFSET: f64 = 1.0;
const GAIN: f64 = 2.0;
// Spectral exponent of the octave weights
const H: f64 = 1.0;

// Ridged multifractal noise: sharp ridges where the base noise crosses zero.
// Each octave is weighted by the previous one, so detail piles up on the
// ridges and valleys stay smooth.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgedMulti {
    pub frequency: f64,
    pub quality: Quality,
    pub seed: i32,
    pub seed_offset: i32,
    lacunarity: f64,
    octave_count: usize,
    spectral_weights: [f64; MAX_OCTAVE],
}

impl Default for RidgedMulti {
    fn default() -> Self {
        let mut ridged = Self {
            frequency: 1.0,
            quality: Quality::Cubic,
            seed: 0,
            seed_offset: 0,
            lacunarity: 2.0,
            octave_count: 6,
            spectral_weights: [0.0; MAX_OCTAVE],
        };
        ridged.rebuild_spectral_weights();
        ridged
    }
}

impl RidgedMulti {
    pub fn new(seed: i32, frequency: f64, lacunarity: f64, octaves: usize) -> Self {
        let mut ridged = Self {
            seed,
            frequency,
            ..Self::default()
        };
        ridged.set_lacunarity(lacunarity);
        ridged.set_octave_count(octaves);
        ridged
    }

    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.lacunarity = lacunarity;
        self.rebuild_spectral_weights();
    }

    pub fn octave_count(&self) -> usize {
        self.octave_count
    }

    // Clamped to 1..=MAX_OCTAVE
    pub fn set_octave_count(&mut self, octaves: usize) {
        self.octave_count = octaves.clamp(1, MAX_OCTAVE);
        self.rebuild_spectral_weights();
    }

    // weight[i] = lacunarity^(-i * H)
    fn rebuild_spectral_weights(&mut self) {
        let mut frequency = 1.0_f64;
        for weight in self.spectral_weights.iter_mut().take(self.octave_count) {
            *weight = frequency.powf(-H);
            frequency *= self.lacunarity;
        }
    }

    fn octave_seed(&self, octave: usize) -> i32 {
        self.seed
            .wrapping_add(self.seed_offset)
            .wrapping_add(octave as i32)
            & 0x7fff_ffff
    }
}

impl NoiseGenerator for RidgedMulti {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut x = x * self.frequency;
        let mut y = y * self.frequency;
        let mut z = z * self.frequency;
        let mut value = 0.0;
        let mut weight = 1.0;

        for octave in 0..self.octave_count {
            let signal = gradient_coherent_3d(x, y, z, self.octave_seed(octave), self.quality);

            // Fold into ridges, sharpen, then weight by the previous octave
            let mut signal = OFFSET - signal.abs();
            signal *= signal;
            signal *= weight;

            weight = (signal * GAIN).clamp(0.0, 1.0);
            value += signal * self.spectral_weights[octave];

            x *= self.lacunarity;
            y *= self.lacunarity;
            z *= self.lacunarity;
        }
        value * 1.25 - 1.0
    }
}

impl Module for RidgedMulti {
    fn kind(&self) -> ModuleKind {
        ModuleKind::RidgedMulti
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(self.get3(x, y, z))
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        let kind = self.kind();
        match name {
            "frequency" => self.frequency = parse_param(kind, name, value)?,
            "lacunarity" => self.set_lacunarity(parse_param(kind, name, value)?),
            "octaveCount" => self.set_octave_count(parse_param(kind, name, value)?),
            "quality" => self.quality = parse_param(kind, name, value)?,
            "seed" => self.seed = parse_param(kind, name, value)?,
            "seedOffset" => self.seed_offset = parse_param(kind, name, value)?,
            _ => return Err(unknown_param(kind, name)),
        }
        Ok(())
    }
}
