// Control-point driven shapers: Curve maps the source through a cubic
// spline, Terrace through squared steps.

use super::{Module, ModuleKind, Sources, parse_bool, parse_pair, parse_param, unknown_param};
use crate::error::{NoiseError, Result};
use crate::interpolate::{cubic, linear};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub input: f64,
    pub output: f64,
}

// Index at which `input` keeps `inputs` sorted, or an error if already present
fn insertion_pos(inputs: impl Iterator<Item = f64>, input: f64) -> Result<usize> {
    let mut pos = 0;
    for existing in inputs {
        if input < existing {
            break;
        }
        if input == existing {
            tracing::warn!(input, "control point input already exists");
            return Err(NoiseError::DuplicateControlPoint { input });
        }
        pos += 1;
    }
    Ok(pos)
}

// First index whose input is greater than `value`
fn bracket(inputs: impl Iterator<Item = f64>, value: f64) -> usize {
    let mut pos = 0;
    for input in inputs {
        if value < input {
            break;
        }
        pos += 1;
    }
    pos
}

fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

// Maps the source value through a cubic spline over sorted control points.
//
// Needs at least four control points. Outside the control-point range the
// output flattens to the nearest end point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<ControlPoint>,
}

impl Curve {
    pub const MIN_CONTROL_POINTS: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    // Inserts a point, keeping the points sorted by input.
    //
    // Fails with `NoiseError::DuplicateControlPoint` if a point with the same
    // input exists; the curve is left unchanged.
    pub fn add_control_point(&mut self, input: f64, output: f64) -> Result<()> {
        let pos = insertion_pos(self.points.iter().map(|p| p.input), input)?;
        self.points.insert(pos, ControlPoint { input, output });
        Ok(())
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    pub fn clear_control_points(&mut self) {
        self.points.clear();
    }

    // Evaluates the spline at `value`.
    pub fn map(&self, value: f64) -> Result<f64> {
        let n = self.points.len();
        if n < Self::MIN_CONTROL_POINTS {
            return Err(NoiseError::InsufficientControlPoints {
                kind: ModuleKind::Curve,
                required: Self::MIN_CONTROL_POINTS,
                found: n,
            });
        }

        let pos = bracket(self.points.iter().map(|p| p.input), value) as isize;
        let i0 = clamp_index(pos - 2, n);
        let i1 = clamp_index(pos - 1, n);
        let i2 = clamp_index(pos, n);
        let i3 = clamp_index(pos + 1, n);

        if i1 == i2 {
            return Ok(self.points[i1].output);
        }

        let in0 = self.points[i1].input;
        let in1 = self.points[i2].input;
        let alpha = (value - in0) / (in1 - in0);

        Ok(cubic(
            self.points[i0].output,
            self.points[i1].output,
            self.points[i2].output,
            self.points[i3].output,
            alpha,
        ))
    }
}

impl Module for Curve {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Curve
    }

    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        self.map(sources.get(0, x, y, z)?)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "point" => {
                let (input, output) = parse_pair(self.kind(), name, value)?;
                self.add_control_point(input, output)
            }
            _ => Err(unknown_param(self.kind(), name)),
        }
    }
}

// Terrace-forming shaper.
//
// Between two neighbouring control points the output rises quadratically,
// so the source is flattened into steps with sharp risers. Needs at least
// two control points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Terrace {
    points: Vec<f64>,
    pub invert: bool,
}

impl Terrace {
    pub const MIN_CONTROL_POINTS: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_control_point(&mut self, value: f64) -> Result<()> {
        let pos = insertion_pos(self.points.iter().copied(), value)?;
        self.points.insert(pos, value);
        Ok(())
    }

    pub fn control_points(&self) -> &[f64] {
        &self.points
    }

    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    pub fn clear_control_points(&mut self) {
        self.points.clear();
    }

    // Replaces the control points with `count` terraces spaced evenly over
    // [-1, 1].
    pub fn make_control_points(&mut self, count: usize) -> Result<()> {
        if count < Self::MIN_CONTROL_POINTS {
            return Err(NoiseError::InsufficientControlPoints {
                kind: ModuleKind::Terrace,
                required: Self::MIN_CONTROL_POINTS,
                found: count,
            });
        }
        let step = 2.0 / (count as f64 - 1.0);
        self.points = (0..count).map(|i| -1.0 + step * i as f64).collect();
        Ok(())
    }

    pub fn map(&self, value: f64) -> Result<f64> {
        let n = self.points.len();
        if n < Self::MIN_CONTROL_POINTS {
            return Err(NoiseError::InsufficientControlPoints {
                kind: ModuleKind::Terrace,
                required: Self::MIN_CONTROL_POINTS,
                found: n,
            });
        }

        let pos = bracket(self.points.iter().copied(), value) as isize;
        let i0 = clamp_index(pos - 1, n);
        let i1 = clamp_index(pos, n);
        if i0 == i1 {
            return Ok(self.points[i1]);
        }

        let (mut v0, mut v1) = (self.points[i0], self.points[i1]);
        let mut alpha = (value - v0) / (v1 - v0);
        if self.invert {
            alpha = 1.0 - alpha;
            std::mem::swap(&mut v0, &mut v1);
        }
        alpha *= alpha;
        Ok(linear(v0, v1, alpha))
    }
}

impl Module for Terrace {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Terrace
    }

    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        self.map(sources.get(0, x, y, z)?)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        let kind = self.kind();
        match name {
            "point" => self.add_control_point(parse_param(kind, name, value)?),
            "terraceCount" => self.make_control_points(parse_param(kind, name, value)?),
            "invert" => {
                self.invert = parse_bool(kind, name, value)?;
                Ok(())
            }
            _ => Err(unknown_param(kind, name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn near_identity() -> Curve {
        let mut curve = Curve::new();
        for (i, o) in [(0.5, 0.5), (-1.0, -1.0), (1.0, 1.0), (0.0, 0.0)] {
            curve.add_control_point(i, o).unwrap();
        }
        curve
    }

    #[test]
    fn points_stay_sorted() {
        let curve = near_identity();
        let inputs: Vec<f64> = curve.control_points().iter().map(|p| p.input).collect();
        assert_eq!(inputs, vec![-1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn duplicate_input_is_rejected() {
        let mut curve = near_identity();
        let err = curve.add_control_point(0.5, 0.9).unwrap_err();
        assert!(matches!(err, NoiseError::DuplicateControlPoint { input } if input == 0.5));
        assert_eq!(curve.control_point_count(), 4);
        assert_eq!(curve.control_points()[2].output, 0.5);
    }

    #[test]
    fn curve_interpolates_between_points() {
        let curve = near_identity();
        let v = curve.map(0.25).unwrap();
        assert!(v > 0.0 && v < 0.5);
        assert_abs_diff_eq!(v, 0.3125, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.map(0.5).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn curve_flattens_outside_range() {
        let curve = near_identity();
        assert_eq!(curve.map(-3.0).unwrap(), -1.0);
        assert_eq!(curve.map(7.0).unwrap(), 1.0);
    }

    #[test]
    fn curve_needs_four_points() {
        let mut curve = Curve::new();
        for i in 0..3 {
            curve.add_control_point(i as f64, 0.0).unwrap();
        }
        assert!(matches!(
            curve.map(0.5),
            Err(NoiseError::InsufficientControlPoints { required: 4, found: 3, .. })
        ));
    }

    #[test]
    fn terrace_steps() {
        let mut terrace = Terrace::new();
        terrace.make_control_points(3).unwrap();
        assert_eq!(terrace.control_points(), &[-1.0, 0.0, 1.0]);
        // halfway between -1 and 0 the squared alpha gives a quarter rise
        assert_abs_diff_eq!(terrace.map(-0.5).unwrap(), -0.75);
        assert_eq!(terrace.map(0.0).unwrap(), 0.0);
        assert_eq!(terrace.map(2.0).unwrap(), 1.0);
        assert_eq!(terrace.map(-2.0).unwrap(), -1.0);
    }

    #[test]
    fn inverted_terrace() {
        let mut terrace = Terrace::new();
        terrace.make_control_points(3).unwrap();
        terrace.invert = true;
        // alpha 0.5 -> 0.5 -> squared 0.25 from the upper end
        assert_abs_diff_eq!(terrace.map(-0.5).unwrap(), -0.25);
    }

    #[test]
    fn terrace_needs_two_points() {
        let mut terrace = Terrace::new();
        terrace.add_control_point(0.0).unwrap();
        assert!(terrace.map(0.3).is_err());
        assert!(terrace.make_control_points(1).is_err());
        assert!(terrace.add_control_point(0.0).is_err());
    }

    #[test]
    fn params_from_text() {
        let mut curve = Curve::new();
        curve.set_param("point", "-1,-1").unwrap();
        curve.set_param("point", "1, 1").unwrap();
        assert_eq!(curve.control_point_count(), 2);

        let mut terrace = Terrace::new();
        terrace.set_param("terraceCount", "5").unwrap();
        terrace.set_param("invert", "true").unwrap();
        assert_eq!(terrace.control_point_count(), 5);
        assert!(terrace.invert);
    }
}
