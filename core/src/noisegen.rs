// Lattice noise primitives shared by the coherent-noise modules.
// All functions are pure: the same inputs always give the same output.

use crate::interpolate::{Quality, linear};
use crate::vectors::VECTORS;

// These constants are primes and must stay prime for the hash to spread well.
const X_NOISE_GEN: i32 = 1619;
const Y_NOISE_GEN: i32 = 31337;
const Z_NOISE_GEN: i32 = 6971;
const SEED_NOISE_GEN: i32 = 1013;
const SHIFT_NOISE_GEN: u32 = 8;

// Scales a gradient dot product into roughly [-1, 1]
const GRADIENT_SCALE: f64 = 2.12;

#[inline]
fn lattice_hash(x: i32, y: i32, z: i32, seed: i32) -> i32 {
    X_NOISE_GEN
        .wrapping_mul(x)
        .wrapping_add(Y_NOISE_GEN.wrapping_mul(y))
        .wrapping_add(Z_NOISE_GEN.wrapping_mul(z))
        .wrapping_add(SEED_NOISE_GEN.wrapping_mul(seed))
}

// Integer noise for a lattice point, in [0, 2^31 - 1]
pub fn int_value_3d(x: i32, y: i32, z: i32, seed: i32) -> i32 {
    let mut n = lattice_hash(x, y, z, seed) & 0x7fff_ffff;
    n ^= n >> 13;
    n.wrapping_mul(
        n.wrapping_mul(n)
            .wrapping_mul(60493)
            .wrapping_add(19_990_303),
    )
    .wrapping_add(1_376_312_589)
        & 0x7fff_ffff
}

// Value noise for a lattice point, in (-1, 1]
#[inline]
pub fn value_3d(x: i32, y: i32, z: i32, seed: i32) -> f64 {
    1.0 - int_value_3d(x, y, z, seed) as f64 / 1_073_741_824.0
}

// Gradient noise contribution of lattice point (ix, iy, iz) at (fx, fy, fz).
// The point must lie within one unit of the lattice point on every axis.
pub fn gradient_3d(fx: f64, fy: f64, fz: f64, ix: i32, iy: i32, iz: i32, seed: i32) -> f64 {
    let mut index = lattice_hash(ix, iy, iz, seed) as u32;
    index ^= index >> SHIFT_NOISE_GEN;
    let g = VECTORS[(index & 0xff) as usize];

    let dx = fx - ix as f64;
    let dy = fy - iy as f64;
    let dz = fz - iz as f64;

    (g[0] * dx + g[1] * dy + g[2] * dz) * GRADIENT_SCALE
}

// The unit cell containing a point plus the shaped offsets inside it
struct Cell {
    x0: i32,
    y0: i32,
    z0: i32,
    xs: f64,
    ys: f64,
    zs: f64,
}

impl Cell {
    #[inline]
    fn locate(x: f64, y: f64, z: f64, quality: Quality) -> Self {
        let x0 = x.floor() as i32;
        let y0 = y.floor() as i32;
        let z0 = z.floor() as i32;
        Self {
            x0,
            y0,
            z0,
            xs: quality.shape(x - x0 as f64),
            ys: quality.shape(y - y0 as f64),
            zs: quality.shape(z - z0 as f64),
        }
    }

    // Trilinear blend of a per-corner function over the cell
    #[inline]
    fn blend(&self, corner: impl Fn(i32, i32, i32) -> f64) -> f64 {
        let (x0, y0, z0) = (self.x0, self.y0, self.z0);
        let (x1, y1, z1) = (x0.wrapping_add(1), y0.wrapping_add(1), z0.wrapping_add(1));

        let ix0 = linear(corner(x0, y0, z0), corner(x1, y0, z0), self.xs);
        let ix1 = linear(corner(x0, y1, z0), corner(x1, y1, z0), self.xs);
        let iy0 = linear(ix0, ix1, self.ys);

        let ix0 = linear(corner(x0, y0, z1), corner(x1, y0, z1), self.xs);
        let ix1 = linear(corner(x0, y1, z1), corner(x1, y1, z1), self.xs);
        let iy1 = linear(ix0, ix1, self.ys);

        linear(iy0, iy1, self.zs)
    }
}

// Gradient-coherent noise: the workhorse behind Perlin, Billow, RidgedMulti
// and Turbulence. Usually in [-1, 1], but the 2.12 scale lets a small share
// of samples reach past it, up to 2.12 * sqrt(3) / 2 in magnitude.
pub fn gradient_coherent_3d(x: f64, y: f64, z: f64, seed: i32, quality: Quality) -> f64 {
    Cell::locate(x, y, z, quality).blend(|ix, iy, iz| gradient_3d(x, y, z, ix, iy, iz, seed))
}

// Value-coherent noise, always in [-1, 1]
pub fn value_coherent_3d(x: f64, y: f64, z: f64, seed: i32, quality: Quality) -> f64 {
    Cell::locate(x, y, z, quality).blend(|ix, iy, iz| value_3d(ix, iy, iz, seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const QUALITIES: [Quality; 4] = [
        Quality::Linear,
        Quality::Cosine,
        Quality::Cubic,
        Quality::Quint,
    ];

    fn sample_points() -> impl Iterator<Item = (f64, f64, f64)> {
        (0..20).flat_map(|i| {
            (0..20).flat_map(move |j| {
                (0..5).map(move |k| {
                    (
                        i as f64 * 0.37 - 3.13,
                        j as f64 * 0.41 - 4.07,
                        k as f64 * 0.53 + 0.11,
                    )
                })
            })
        })
    }

    #[test]
    fn int_value_is_non_negative() {
        for x in -50..50 {
            for seed in [0, 1, -7, i32::MAX] {
                let n = int_value_3d(x, x * 3, -x, seed);
                assert!(n >= 0);
            }
        }
    }

    #[test]
    fn int_value_depends_on_seed() {
        assert_ne!(int_value_3d(3, 4, 5, 0), int_value_3d(3, 4, 5, 1));
    }

    #[test]
    fn value_noise_range() {
        for x in -100..100 {
            let v = value_3d(x, 2 * x, 7, 42);
            assert!(v > -1.0 && v <= 1.0);
        }
    }

    #[test]
    fn value_coherent_stays_in_range() {
        for q in QUALITIES {
            for (x, y, z) in sample_points() {
                let v = value_coherent_3d(x, y, z, 3, q);
                assert!((-1.0..=1.0).contains(&v), "{v} out of range for {q}");
            }
        }
    }

    #[test]
    fn gradient_coherent_mostly_in_range() {
        // unit gradients scaled by 2.12 leave a thin tail outside [-1, 1]
        let envelope = GRADIENT_SCALE * 3f64.sqrt() / 2.0;
        for q in QUALITIES {
            let mut total = 0;
            let mut inside = 0;
            for (x, y, z) in sample_points() {
                let v = gradient_coherent_3d(x, y, z, 7, q);
                assert!(v.abs() <= envelope, "{v} outside {envelope}");
                total += 1;
                if v.abs() <= 1.0 {
                    inside += 1;
                }
            }
            assert!(inside as f64 / total as f64 >= 0.98, "{q}: {inside}/{total}");
        }
    }

    #[test]
    fn coherent_noise_is_deterministic() {
        for q in QUALITIES {
            let a = gradient_coherent_3d(1.23, -4.56, 7.89, 11, q);
            let b = gradient_coherent_3d(1.23, -4.56, 7.89, 11, q);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn gradient_noise_vanishes_on_lattice() {
        for q in QUALITIES {
            assert_abs_diff_eq!(gradient_coherent_3d(3.0, -2.0, 5.0, 1, q), 0.0);
        }
    }

    #[test]
    fn gradient_noise_converges_at_lattice_point() {
        let corner = gradient_3d(2.0, 1.0, -1.0, 2, 1, -1, 9);
        let mut prev = f64::MAX;
        for step in 1..8 {
            let eps = 10f64.powi(-step);
            let v = gradient_coherent_3d(2.0 + eps, 1.0 + eps, -1.0 + eps, 9, Quality::Cubic);
            let diff = (v - corner).abs();
            assert!(diff <= prev + 1e-15);
            prev = diff;
        }
        assert!(prev < 1e-6);
    }

    #[test]
    fn value_noise_matches_corner_on_lattice() {
        let v = value_coherent_3d(4.0, 5.0, 6.0, 2, Quality::Cubic);
        assert_abs_diff_eq!(v, value_3d(4, 5, 6, 2));
    }
}
