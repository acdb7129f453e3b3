use glam::DVec3;

use super::{Module, ModuleKind, Sources, parse_bool, parse_param, unknown_param};
use crate::NoiseGenerator;
use crate::error::Result;
use crate::noisegen::value_3d;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

// Cellular noise. Every unit cube holds one pseudo-random seed point; each
// sample takes the value attached to the nearest seed point, optionally plus
// the distance to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voronoi {
    pub frequency: f64,
    pub displacement: f64,
    pub seed: i32,
    pub enable_distance: bool,
}

impl Default for Voronoi {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            displacement: 1.0,
            seed: 0,
            enable_distance: false,
        }
    }
}

impl Voronoi {
    pub fn new(seed: i32, displacement: f64, frequency: f64, enable_distance: bool) -> Self {
        Self {
            frequency,
            displacement,
            seed,
            enable_distance,
        }
    }

    // Seed point of the unit cube at (ix, iy, iz)
    fn seed_point(&self, ix: i32, iy: i32, iz: i32) -> DVec3 {
        DVec3::new(
            ix as f64 + value_3d(ix, iy, iz, self.seed),
            iy as f64 + value_3d(ix, iy, iz, self.seed.wrapping_add(1)),
            iz as f64 + value_3d(ix, iy, iz, self.seed.wrapping_add(2)),
        )
    }

    // Nearest seed point to a point already scaled by `frequency`.
    //
    // Seed points can stray one unit outside their cube, so the search
    // covers the 5x5x5 block of cubes around `p`. Ties keep the first hit in
    // z, y, x order.
    pub fn nearest_seed(&self, p: DVec3) -> DVec3 {
        let base = p.floor().as_ivec3();
        let mut min_dist = f64::MAX;
        let mut nearest = DVec3::ZERO;

        for iz in base.z - 2..=base.z + 2 {
            for iy in base.y - 2..=base.y + 2 {
                for ix in base.x - 2..=base.x + 2 {
                    let candidate = self.seed_point(ix, iy, iz);
                    let dist = candidate.distance_squared(p);
                    if dist < min_dist {
                        min_dist = dist;
                        nearest = candidate;
                    }
                }
            }
        }
        nearest
    }
}

impl NoiseGenerator for Voronoi {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        let p = DVec3::new(x, y, z) * self.frequency;
        let nearest = self.nearest_seed(p);

        let value = if self.enable_distance {
            nearest.distance(p) * SQRT_3 - 1.0
        } else {
            0.0
        };

        let cell = nearest.floor().as_ivec3();
        value + self.displacement * value_3d(cell.x, cell.y, cell.z, 0)
    }
}

impl Module for Voronoi {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Voronoi
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(self.get3(x, y, z))
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        let kind = self.kind();
        match name {
            "frequency" => self.frequency = parse_param(kind, name, value)?,
            "displacement" => self.displacement = parse_param(kind, name, value)?,
            "seed" => self.seed = parse_param(kind, name, value)?,
            "enableDistance" => self.enable_distance = parse_bool(kind, name, value)?,
            _ => return Err(unknown_param(kind, name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn points() -> impl Iterator<Item = DVec3> {
        (0..30).map(|i| {
            let t = i as f64;
            DVec3::new(t * 0.53 - 7.0, t * -0.29 + 3.1, t * 0.17)
        })
    }

    #[test]
    fn constant_inside_a_cell() {
        // Cells are convex and contain their seed point, so moving toward the
        // seed never leaves the cell.
        let v = Voronoi::new(11, 1.0, 1.0, false);
        for p in points() {
            let seed = v.nearest_seed(p);
            let q = p + (seed - p) * 0.3;
            let r = p + (seed - p) * 0.9;
            assert_eq!(v.get3(p.x, p.y, p.z), v.get3(q.x, q.y, q.z));
            assert_eq!(v.get3(p.x, p.y, p.z), v.get3(r.x, r.y, r.z));
        }
    }

    #[test]
    fn distance_is_zero_at_seed_point() {
        let v = Voronoi::new(2, 0.0, 1.0, true);
        let seed = v.seed_point(3, -1, 4);
        assert_abs_diff_eq!(v.get3(seed.x, seed.y, seed.z), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn displacement_scales_cell_value() {
        let a = Voronoi::new(5, 1.0, 1.0, false);
        let b = Voronoi::new(5, 0.5, 1.0, false);
        for p in points() {
            assert_abs_diff_eq!(a.get3(p.x, p.y, p.z) * 0.5, b.get3(p.x, p.y, p.z));
            assert!(a.get3(p.x, p.y, p.z).abs() <= 1.0);
        }
    }

    #[test]
    fn nearest_seed_beats_neighbours() {
        let v = Voronoi::new(9, 1.0, 1.0, false);
        for p in points() {
            let best = v.nearest_seed(p).distance_squared(p);
            let c = p.floor().as_ivec3();
            for dx in -1..=1 {
                let other = v.seed_point(c.x + dx, c.y, c.z);
                assert!(best <= other.distance_squared(p));
            }
        }
    }

    #[test]
    fn enable_distance_parses() {
        let mut v = Voronoi::default();
        v.set_param("enableDistance", "true").unwrap();
        assert!(v.enable_distance);
        assert!(v.set_param("enableDistance", "sometimes").is_err());
    }
}
