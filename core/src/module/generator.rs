// Generators that need no source modules and carry no octave state.

use super::{Module, ModuleKind, Sources, parse_param, unknown_param};
use crate::NoiseGenerator;
use crate::error::Result;
use crate::simplex;

// Outputs the same value everywhere
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Const {
    pub value: f64,
}

impl Const {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl NoiseGenerator for Const {
    fn get3(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.value
    }
}

impl Module for Const {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Const
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(self.get3(x, y, z))
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "value" | "val" => self.value = parse_param(self.kind(), name, value)?,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }
}

// Unit cubes alternating between +1 and -1
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckerBoard;

impl NoiseGenerator for CheckerBoard {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        let ix = x.floor() as i32;
        let iy = y.floor() as i32;
        let iz = z.floor() as i32;
        if (ix & 1) ^ (iy & 1) ^ (iz & 1) != 0 {
            -1.0
        } else {
            1.0
        }
    }
}

impl Module for CheckerBoard {
    fn kind(&self) -> ModuleKind {
        ModuleKind::CheckerBoard
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(self.get3(x, y, z))
    }
}

// Maps the distance to the nearest unit shell into [-1, 1]:
// +1 on a shell, -1 halfway between two shells.
#[inline]
fn shell_value(dist_from_center: f64) -> f64 {
    let inner = dist_from_center - dist_from_center.floor();
    let outer = 1.0 - inner;
    1.0 - inner.min(outer) * 4.0
}

// Concentric cylinders around the y axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinders {
    pub frequency: f64,
}

impl Cylinders {
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }
}

impl Default for Cylinders {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl NoiseGenerator for Cylinders {
    fn get3(&self, x: f64, _y: f64, z: f64) -> f64 {
        let x = x * self.frequency;
        let z = z * self.frequency;
        shell_value((x * x + z * z).sqrt())
    }
}

impl Module for Cylinders {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Cylinders
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(self.get3(x, y, z))
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "frequency" => self.frequency = parse_param(self.kind(), name, value)?,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }
}

// Concentric spheres around the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spheres {
    pub frequency: f64,
}

impl Spheres {
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }
}

impl Default for Spheres {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl NoiseGenerator for Spheres {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        let x = x * self.frequency;
        let y = y * self.frequency;
        let z = z * self.frequency;
        shell_value((x * x + y * y + z * z).sqrt())
    }
}

impl Module for Spheres {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Spheres
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(self.get3(x, y, z))
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "frequency" => self.frequency = parse_param(self.kind(), name, value)?,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }
}

// 3D simplex noise, see `simplex::sample3`
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplex;

impl NoiseGenerator for Simplex {
    fn get2(&self, x: f64, y: f64) -> f64 {
        simplex::sample2(x, y)
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        simplex::sample3(x, y, z)
    }
}

impl Module for Simplex {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Simplex
    }

    fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(self.get3(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn checkerboard_parity() {
        let c = CheckerBoard;
        assert_eq!(c.get3(0.0, 0.0, 0.0), 1.0);
        assert_eq!(c.get3(1.0, 0.0, 0.0), -1.0);
        assert_eq!(c.get3(1.5, 1.5, 0.5), 1.0);
        assert_eq!(c.get3(-0.5, 0.2, 0.2), -1.0);
        assert_eq!(c.get3(-0.5, -0.5, -0.5), -1.0);
    }

    #[test]
    fn cylinders_ignore_y() {
        let c = Cylinders::new(2.0);
        for i in 0..50 {
            let t = i as f64 * 0.13;
            assert_eq!(c.get3(t, 0.0, -t), c.get3(t, 100.0 * t, -t));
        }
    }

    #[test]
    fn shells_peak_on_unit_radius() {
        let s = Spheres::default();
        assert_abs_diff_eq!(s.get3(1.0, 0.0, 0.0), 1.0);
        assert_abs_diff_eq!(s.get3(0.0, 0.0, 1.5), -1.0);
        assert_abs_diff_eq!(Cylinders::default().get3(0.6, 5.0, 0.8), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn shells_stay_in_range() {
        let s = Spheres::new(3.7);
        for i in -40..40 {
            let v = s.get3(i as f64 * 0.11, i as f64 * -0.07, 0.3);
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn const_accepts_both_keys() {
        let mut c = Const::default();
        c.set_param("value", "2.5").unwrap();
        assert_eq!(c.value, 2.5);
        c.set_param("val", "-1").unwrap();
        assert_eq!(c.value, -1.0);
        assert!(c.set_param("frequency", "1").is_err());
        assert!(c.set_param("value", "abc").is_err());
    }
}
