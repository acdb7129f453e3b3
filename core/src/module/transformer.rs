// Modules that move the sample point before asking their source.

use glam::{DMat3, DVec3, EulerRot};

use super::{Module, ModuleKind, Perlin, Sources, parse_param, parse_vec3, unknown_param};
use crate::NoiseGenerator;
use crate::error::Result;

// Parameters shared by ScalePoint and TranslatePoint: the whole vector as
// "x,y,z" under `vector_key`, or a single axis.
fn set_vec3_param(
    kind: ModuleKind,
    vector: &mut DVec3,
    vector_key: &str,
    name: &str,
    value: &str,
) -> Result<()> {
    match name {
        "x" => vector.x = parse_param(kind, name, value)?,
        "y" => vector.y = parse_param(kind, name, value)?,
        "z" => vector.z = parse_param(kind, name, value)?,
        _ if name == vector_key => *vector = parse_vec3(kind, name, value)?,
        _ => return Err(unknown_param(kind, name)),
    }
    Ok(())
}

// Multiplies the sample point componentwise by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePoint {
    pub scale: DVec3,
}

impl ScalePoint {
    pub fn new(scale: DVec3) -> Self {
        Self { scale }
    }
}

impl Default for ScalePoint {
    fn default() -> Self {
        Self::new(DVec3::ONE)
    }
}

impl Module for ScalePoint {
    fn kind(&self) -> ModuleKind {
        ModuleKind::ScalePoint
    }

    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        sources.get_vec(0, DVec3::new(x, y, z) * self.scale)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        set_vec3_param(self.kind(), &mut self.scale, "scale", name, value)
    }
}

// Offsets the sample point by `translate`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TranslatePoint {
    pub translate: DVec3,
}

impl TranslatePoint {
    pub fn new(translate: DVec3) -> Self {
        Self { translate }
    }
}

impl Module for TranslatePoint {
    fn kind(&self) -> ModuleKind {
        ModuleKind::TranslatePoint
    }

    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        sources.get_vec(0, DVec3::new(x, y, z) + self.translate)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        set_vec3_param(self.kind(), &mut self.translate, "translate", name, value)
    }
}

// Rotates the sample point by Euler angles in degrees.
//
// Rotation order is z, then x, then y, the convention of most game engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatePoint {
    angles: DVec3,
    matrix: DMat3,
}

impl Default for RotatePoint {
    fn default() -> Self {
        Self::new(DVec3::ZERO)
    }
}

impl RotatePoint {
    pub fn new(degrees: DVec3) -> Self {
        let mut rotate = Self {
            angles: DVec3::ZERO,
            matrix: DMat3::IDENTITY,
        };
        rotate.set_angles(degrees);
        rotate
    }

    pub fn angles(&self) -> DVec3 {
        self.angles
    }

    pub fn set_angles(&mut self, degrees: DVec3) {
        let r = degrees * (std::f64::consts::PI / 180.0);
        self.angles = degrees;
        self.matrix = DMat3::from_euler(EulerRot::YXZ, r.y, r.x, r.z);
    }
}

impl Module for RotatePoint {
    fn kind(&self) -> ModuleKind {
        ModuleKind::RotatePoint
    }

    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        sources.get_vec(0, self.matrix * DVec3::new(x, y, z))
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        let kind = self.kind();
        match name {
            "rotation" | "rotateParam" => self.set_angles(parse_vec3(kind, name, value)?),
            _ => return Err(unknown_param(kind, name)),
        }
        Ok(())
    }
}

// Samples source0 at a point displaced by sources 1, 2 and 3.
//
// Slots: 0 is the displaced source, 1..=3 give the x, y and z offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Displace;

impl Module for Displace {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Displace
    }

    fn source_count(&self) -> usize {
        4
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        let dx = x + sources.get(1, x, y, z)?;
        let dy = y + sources.get(2, x, y, z)?;
        let dz = z + sources.get(3, x, y, z)?;
        sources.get(0, dx, dy, dz)
    }
}

// Offsets that keep the three distortion lookups off the integer lattice,
// where gradient noise is always zero.
const X_OFFSET: DVec3 = DVec3::new(12414.0 / 65536.0, 65124.0 / 65536.0, 31337.0 / 65536.0);
const Y_OFFSET: DVec3 = DVec3::new(26519.0 / 65536.0, 18128.0 / 65536.0, 60493.0 / 65536.0);
const Z_OFFSET: DVec3 = DVec3::new(53820.0 / 65536.0, 11213.0 / 65536.0, 44845.0 / 65536.0);

// Randomly jitters the sample point with three internal Perlin generators.
#[derive(Debug, Clone, PartialEq)]
pub struct Turbulence {
    pub power: f64,
    x_distort: Perlin,
    y_distort: Perlin,
    z_distort: Perlin,
}

impl Default for Turbulence {
    fn default() -> Self {
        let mut turbulence = Self {
            power: 1.0,
            x_distort: Perlin::default(),
            y_distort: Perlin::default(),
            z_distort: Perlin::default(),
        };
        turbulence.set_seed(0);
        turbulence
    }
}

impl Turbulence {
    pub fn new(seed: i32, frequency: f64, power: f64, roughness: usize) -> Self {
        let mut turbulence = Self {
            power,
            ..Self::default()
        };
        turbulence.set_seed(seed);
        turbulence.set_frequency(frequency);
        turbulence.set_roughness(roughness);
        turbulence
    }

    fn distorters(&mut self) -> [&mut Perlin; 3] {
        [&mut self.x_distort, &mut self.y_distort, &mut self.z_distort]
    }

    pub fn seed(&self) -> i32 {
        self.x_distort.seed
    }

    // The y and z generators use seed + 1 and seed + 2
    pub fn set_seed(&mut self, seed: i32) {
        for (i, perlin) in self.distorters().into_iter().enumerate() {
            perlin.seed = seed.wrapping_add(i as i32);
        }
    }

    pub fn frequency(&self) -> f64 {
        self.x_distort.frequency
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        for perlin in self.distorters() {
            perlin.frequency = frequency;
        }
    }

    pub fn roughness(&self) -> usize {
        self.x_distort.octave_count()
    }

    // Octave count of the distortion noise
    pub fn set_roughness(&mut self, roughness: usize) {
        for perlin in self.distorters() {
            perlin.set_octave_count(roughness);
        }
    }

    // The point the source is sampled at.
    pub fn distort(&self, p: DVec3) -> DVec3 {
        let offset = |perlin: &Perlin, shift: DVec3| {
            let q = p + shift;
            perlin.get3(q.x, q.y, q.z) * self.power
        };
        p + DVec3::new(
            offset(&self.x_distort, X_OFFSET),
            offset(&self.y_distort, Y_OFFSET),
            offset(&self.z_distort, Z_OFFSET),
        )
    }
}

impl Module for Turbulence {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Turbulence
    }

    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        sources.get_vec(0, self.distort(DVec3::new(x, y, z)))
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        let kind = self.kind();
        match name {
            "power" => self.power = parse_param(kind, name, value)?,
            "frequency" => self.set_frequency(parse_param(kind, name, value)?),
            "roughnessCount" => self.set_roughness(parse_param(kind, name, value)?),
            "seed" => self.set_seed(parse_param(kind, name, value)?),
            _ => return Err(unknown_param(kind, name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ModuleGraph;
    use crate::module::Const;
    use crate::module::testing::AxisProbe;
    use approx::assert_abs_diff_eq;

    // Evaluates `module` over each axis probe and returns the probed point
    fn probe<M: Module + Clone + 'static>(module: M, p: DVec3) -> DVec3 {
        let mut graph = ModuleGraph::new();
        let mut out = [0.0; 3];
        for (i, axis) in [AxisProbe::X, AxisProbe::Y, AxisProbe::Z].into_iter().enumerate() {
            let source = graph.add(axis);
            let id = graph.add(module.clone());
            graph.set_source(id, 0, source).unwrap();
            out[i] = graph.get_value_vec(id, p).unwrap();
        }
        DVec3::from_array(out)
    }

    #[test]
    fn scale_and_translate() {
        let p = DVec3::new(1.0, -2.0, 0.5);
        let scaled = probe(ScalePoint::new(DVec3::new(2.0, 3.0, -1.0)), p);
        assert_eq!(scaled, DVec3::new(2.0, -6.0, -0.5));
        let moved = probe(TranslatePoint::new(DVec3::new(0.5, 0.5, -0.5)), p);
        assert_eq!(moved, DVec3::new(1.5, -1.5, 0.0));
    }

    #[test]
    fn rotate_about_single_axes() {
        let z90 = probe(RotatePoint::new(DVec3::new(0.0, 0.0, 90.0)), DVec3::X);
        assert_abs_diff_eq!(z90.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z90.y, 1.0, epsilon = 1e-12);

        let y90 = probe(RotatePoint::new(DVec3::new(0.0, 90.0, 0.0)), DVec3::X);
        assert_abs_diff_eq!(y90.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_order_is_z_x_y() {
        let angles = DVec3::new(30.0, 45.0, 60.0);
        let p = DVec3::new(0.3, -1.2, 2.0);
        let r = angles * (std::f64::consts::PI / 180.0);
        let expected = DMat3::from_rotation_y(r.y)
            * (DMat3::from_rotation_x(r.x) * (DMat3::from_rotation_z(r.z) * p));
        let got = probe(RotatePoint::new(angles), p);
        assert_abs_diff_eq!(got.x, expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(got.y, expected.y, epsilon = 1e-12);
        assert_abs_diff_eq!(got.z, expected.z, epsilon = 1e-12);
        assert_abs_diff_eq!(got.length(), p.length(), epsilon = 1e-12);
    }

    #[test]
    fn displace_adds_offsets() {
        let mut graph = ModuleGraph::new();
        let x = graph.add(AxisProbe::X);
        let dx = graph.add(Const::new(0.5));
        let dy = graph.add(Const::new(1.0));
        let dz = graph.add(Const::new(-2.0));
        let displace = graph.add(Displace);
        graph.connect(displace, &[x, dx, dy, dz]).unwrap();
        assert_eq!(graph.get_value(displace, 1.0, 0.0, 0.0).unwrap(), 1.5);

        let y = graph.add(AxisProbe::Y);
        let d2 = graph.add(Displace);
        graph.connect(d2, &[y, dx, dy, dz]).unwrap();
        assert_eq!(graph.get_value(d2, 0.0, 3.0, 0.0).unwrap(), 4.0);
    }

    #[test]
    fn turbulence_seeds_and_bounds() {
        let t = Turbulence::new(10, 2.0, 0.25, 3);
        assert_eq!(t.y_distort.seed, 11);
        assert_eq!(t.z_distort.seed, 12);
        assert_eq!(t.roughness(), 3);
        for i in 0..50 {
            let p = DVec3::new(i as f64 * 0.3, 1.0, -0.7 * i as f64);
            let d = t.distort(p) - p;
            // three octaves of persistence 0.5 stay within 1.75 * the noise envelope
            assert!(d.abs().max_element() <= 0.25 * 1.75 * 2.0);
        }
    }

    #[test]
    fn zero_power_is_identity() {
        let p = DVec3::new(0.7, -3.3, 1.1);
        let got = probe(Turbulence::new(1, 1.0, 0.0, 4), p);
        assert_eq!(got, p);
    }

    #[test]
    fn turbulence_moves_lattice_points() {
        let t = Turbulence::default();
        let p = DVec3::new(2.0, 3.0, -1.0);
        assert_ne!(t.distort(p), p);
    }

    #[test]
    fn params_from_text() {
        let mut s = ScalePoint::default();
        s.set_param("scale", "2,3,4").unwrap();
        s.set_param("y", "-1").unwrap();
        assert_eq!(s.scale, DVec3::new(2.0, -1.0, 4.0));
        assert!(s.set_param("translate", "1,1,1").is_err());

        let mut r = RotatePoint::default();
        r.set_param("rotateParam", "0, 90, 0").unwrap();
        assert_eq!(r.angles(), DVec3::new(0.0, 90.0, 0.0));

        let mut t = Turbulence::default();
        t.set_param("seed", "4").unwrap();
        t.set_param("roughnessCount", "2").unwrap();
        assert_eq!(t.seed(), 4);
        assert_eq!(t.z_distort.seed, 6);
        assert_eq!(t.roughness(), 2);
    }
}
