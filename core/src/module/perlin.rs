use super::{Module, ModuleKind, Sources, parse_param, unknown_param};
use crate::NoiseGenerator;
use crate::error::Result;
use crate::interpolate::Quality;
use crate::noisegen::gradient_coherent_3d;

// Highest octave count any fractal generator accepts
pub const MAX_OCTAVE: usize = 30;

// Octave parameters shared by Perlin and Billow
macro_rules! octave_params {
    ($name:ident) => {
        impl $name {
            pub fn new(seed: i32, frequency: f64, persistence: f64, octaves: usize) -> Self {
                let mut noise = Self {
                    seed,
                    frequency,
                    persistence,
                    ..Self::default()
                };
                noise.set_octave_count(octaves);
                noise
            }

            pub fn octave_count(&self) -> usize {
                self.octave_count
            }

            // Clamped to 1..=MAX_OCTAVE
            pub fn set_octave_count(&mut self, octaves: usize) {
                self.octave_count = octaves.clamp(1, MAX_OCTAVE);
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    frequency: 1.0,
                    lacunarity: 2.0,
                    persistence: 0.5,
                    seed: 0,
                    quality: Quality::Cubic,
                    octave_count: 6,
                }
            }
        }

        impl Module for $name {
            fn kind(&self) -> ModuleKind {
                ModuleKind::$name
            }

            fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
                Ok(self.get3(x, y, z))
            }

            fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
                let kind = self.kind();
                match name {
                    "frequency" => self.frequency = parse_param(kind, name, value)?,
                    "lacunarity" => self.lacunarity = parse_param(kind, name, value)?,
                    "persistence" => self.persistence = parse_param(kind, name, value)?,
                    "seed" => self.seed = parse_param(kind, name, value)?,
                    "quality" => self.quality = parse_param(kind, name, value)?,
                    "octaveCount" => self.set_octave_count(parse_param(kind, name, value)?),
                    _ => return Err(unknown_param(kind, name)),
                }
                Ok(())
            }
        }
    };
}

// Fractal sum of gradient-coherent noise.
// Each octave multiplies the frequency by `lacunarity` and the amplitude by
// `persistence`; octave i uses seed + i.
#[derive(Debug, Clone, PartialEq)]
pub struct Perlin {
    pub frequency: f64,
    pub lacunarity: f64,
    pub persistence: f64,
    pub seed: i32,
    pub quality: Quality,
    octave_count: usize,
}

octave_params!(Perlin);

impl NoiseGenerator for Perlin {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut x = x * self.frequency;
        let mut y = y * self.frequency;
        let mut z = z * self.frequency;
        let mut value = 0.0;
        let mut amplitude = 1.0;

        for octave in 0..self.octave_count {
            let seed = self.seed.wrapping_add(octave as i32);
            value += gradient_coherent_3d(x, y, z, seed, self.quality) * amplitude;

            x *= self.lacunarity;
            y *= self.lacunarity;
            z *= self.lacunarity;
            amplitude *= self.persistence;
        }
        value
    }
}

// Like Perlin, but every octave is folded into 2|n| - 1, which gives puffy,
// cloud-like lumps.
#[derive(Debug, Clone, PartialEq)]
pub struct Billow {
    pub frequency: f64,
    pub lacunarity: f64,
    pub persistence: f64,
    pub seed: i32,
    pub quality: Quality,
    octave_count: usize,
}

octave_params!(Billow);

impl NoiseGenerator for Billow {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut x = x * self.frequency;
        let mut y = y * self.frequency;
        let mut z = z * self.frequency;
        let mut value = 0.0;
        let mut amplitude = 1.0;

        for octave in 0..self.octave_count {
            let seed = self.seed.wrapping_add(octave as i32);
            let signal = gradient_coherent_3d(x, y, z, seed, self.quality);
            value += (2.0 * signal.abs() - 1.0) * amplitude;

            x *= self.lacunarity;
            y *= self.lacunarity;
            z *= self.lacunarity;
            amplitude *= self.persistence;
        }
        value + 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn single_octave_is_plain_gradient_noise() {
        let p = Perlin::new(5, 1.0, 0.5, 1);
        for i in 0..20 {
            let (x, y, z) = (i as f64 * 0.31, i as f64 * -0.17, 0.77);
            let expected = gradient_coherent_3d(x, y, z, 5, Quality::Cubic);
            assert_eq!(p.get3(x, y, z), expected);
        }
    }

    #[test]
    fn octave_count_is_clamped() {
        let mut p = Perlin::default();
        p.set_octave_count(0);
        assert_eq!(p.octave_count(), 1);
        p.set_octave_count(100);
        assert_eq!(p.octave_count(), MAX_OCTAVE);
        p.set_param("octaveCount", "4").unwrap();
        assert_eq!(p.octave_count(), 4);
    }

    #[test]
    fn defaults() {
        let b = Billow::default();
        assert_eq!(b.frequency, 1.0);
        assert_eq!(b.lacunarity, 2.0);
        assert_eq!(b.persistence, 0.5);
        assert_eq!(b.octave_count(), 6);
        assert_eq!(b.quality, Quality::Cubic);
    }

    #[test]
    fn billow_single_octave_folds_signal() {
        let b = Billow::new(3, 1.0, 0.5, 1);
        let (x, y, z) = (0.4, 1.3, -2.2);
        let n = gradient_coherent_3d(x, y, z, 3, Quality::Cubic);
        assert_abs_diff_eq!(b.get3(x, y, z), 2.0 * n.abs() - 0.5, epsilon = 1e-12);
    }

    #[test]
    fn seed_changes_output() {
        let a = Perlin::new(1, 1.0, 0.5, 3);
        let b = Perlin::new(2, 1.0, 0.5, 3);
        let differs = (0..20).any(|i| {
            let t = i as f64 * 0.37 + 0.1;
            a.get3(t, t * 0.5, -t) != b.get3(t, t * 0.5, -t)
        });
        assert!(differs);
    }

    #[test]
    fn params_from_text() {
        let mut p = Perlin::default();
        p.set_param("frequency", "0.25").unwrap();
        p.set_param("quality", "quint").unwrap();
        p.set_param("seed", "-12").unwrap();
        assert_eq!(p.frequency, 0.25);
        assert_eq!(p.quality, Quality::Quint);
        assert_eq!(p.seed, -12);
        assert!(p.set_param("quality", "ultra").is_err());
        assert!(p.set_param("gain", "2").is_err());
    }
}
