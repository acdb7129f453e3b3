// Noise module kinds and the trait every node of a `ModuleGraph` implements.
//
// Modules fall into four families:
// - generators, which need no sources (`Perlin`, `Voronoi`, `Const`, ...)
// - combiners, which merge several sources (`Add`, `Blend`, `Select`, ...)
// - modifiers, which reshape one source's output (`Clamp`, `Curve`, ...)
// - transformers, which move the sample point before asking a source
//   (`ScalePoint`, `Displace`, `Turbulence`, ...)
//
// The slot index of a source carries meaning per kind; each kind documents
// its slots.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use glam::DVec3;

use crate::error::{NoiseError, Result};
use crate::graph::{ModuleGraph, ModuleId};

mod combiner;
mod curve;
mod generator;
mod modifier;
mod perlin;
mod ridged;
mod select;
mod transformer;
mod voronoi;

pub use combiner::{Add, Blend, Max, Min, Multiply, Power, Sum};
pub use curve::{ControlPoint, Curve, Terrace};
pub use generator::{CheckerBoard, Const, Cylinders, Simplex, Spheres};
pub use modifier::{Abs, Clamp, Exponent, Invert, ScaleBias};
pub use perlin::{Billow, MAX_OCTAVE, Perlin};
pub use ridged::RidgedMulti;
pub use select::Select;
pub use transformer::{Displace, RotatePoint, ScalePoint, TranslatePoint, Turbulence};
pub use voronoi::Voronoi;

// Every module kind the built-in registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Const,
    CheckerBoard,
    Cylinders,
    Spheres,
    Perlin,
    Billow,
    RidgedMulti,
    Voronoi,
    Simplex,
    Add,
    Multiply,
    Max,
    Min,
    Power,
    Abs,
    Invert,
    Clamp,
    ScaleBias,
    Exponent,
    ScalePoint,
    TranslatePoint,
    RotatePoint,
    Displace,
    Turbulence,
    Blend,
    Select,
    Curve,
    Terrace,
    Sum,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 29] = [
        ModuleKind::Const,
        ModuleKind::CheckerBoard,
        ModuleKind::Cylinders,
        ModuleKind::Spheres,
        ModuleKind::Perlin,
        ModuleKind::Billow,
        ModuleKind::RidgedMulti,
        ModuleKind::Voronoi,
        ModuleKind::Simplex,
        ModuleKind::Add,
        ModuleKind::Multiply,
        ModuleKind::Max,
        ModuleKind::Min,
        ModuleKind::Power,
        ModuleKind::Abs,
        ModuleKind::Invert,
        ModuleKind::Clamp,
        ModuleKind::ScaleBias,
        ModuleKind::Exponent,
        ModuleKind::ScalePoint,
        ModuleKind::TranslatePoint,
        ModuleKind::RotatePoint,
        ModuleKind::Displace,
        ModuleKind::Turbulence,
        ModuleKind::Blend,
        ModuleKind::Select,
        ModuleKind::Curve,
        ModuleKind::Terrace,
        ModuleKind::Sum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModuleKind::Const => "Const",
            ModuleKind::CheckerBoard => "CheckerBoard",
            ModuleKind::Cylinders => "Cylinders",
            ModuleKind::Spheres => "Spheres",
            ModuleKind::Perlin => "Perlin",
            ModuleKind::Billow => "Billow",
            ModuleKind::RidgedMulti => "RidgedMulti",
            ModuleKind::Voronoi => "Voronoi",
            ModuleKind::Simplex => "Simplex",
            ModuleKind::Add => "Add",
            ModuleKind::Multiply => "Multiply",
            ModuleKind::Max => "Max",
            ModuleKind::Min => "Min",
            ModuleKind::Power => "Power",
            ModuleKind::Abs => "Abs",
            ModuleKind::Invert => "Invert",
            ModuleKind::Clamp => "Clamp",
            ModuleKind::ScaleBias => "ScaleBias",
            ModuleKind::Exponent => "Exponent",
            ModuleKind::ScalePoint => "ScalePoint",
            ModuleKind::TranslatePoint => "TranslatePoint",
            ModuleKind::RotatePoint => "RotatePoint",
            ModuleKind::Displace => "Displace",
            ModuleKind::Turbulence => "Turbulence",
            ModuleKind::Blend => "Blend",
            ModuleKind::Select => "Select",
            ModuleKind::Curve => "Curve",
            ModuleKind::Terrace => "Terrace",
            ModuleKind::Sum => "Sum",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleKind {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ModuleKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| NoiseError::UnknownModuleKind(s.to_string()))
    }
}

// Lets the graph hand out typed references to boxed modules
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// A node of the module graph.
//
// Evaluation takes `&self` and never mutates the module, so a graph can be
// sampled from many threads at once as long as nobody edits parameters
// meanwhile.
pub trait Module: AsAny + fmt::Debug + Send + Sync {
    fn kind(&self) -> ModuleKind;

    // Number of source slots this module reads.
    fn source_count(&self) -> usize {
        0
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64>;

    // Assign a parameter from its textual form, as found in a collection
    // description. Unknown names return `NoiseError::UnknownParameter`.
    fn set_param(&mut self, name: &str, _value: &str) -> Result<()> {
        Err(unknown_param(self.kind(), name))
    }
}

// The source modules wired into one node, handed to `Module::get_value`.
pub struct Sources<'a> {
    graph: &'a ModuleGraph,
    owner: ModuleId,
    kind: ModuleKind,
    slots: &'a [Option<ModuleId>],
}

impl<'a> Sources<'a> {
    pub(crate) fn new(
        graph: &'a ModuleGraph,
        owner: ModuleId,
        kind: ModuleKind,
        slots: &'a [Option<ModuleId>],
    ) -> Self {
        Self {
            graph,
            owner,
            kind,
            slots,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // Evaluate the source in slot `index` at (x, y, z).
    pub fn get(&self, index: usize, x: f64, y: f64, z: f64) -> Result<f64> {
        match self.slots.get(index).copied().flatten() {
            Some(id) => self.graph.get_value(id, x, y, z),
            None => Err(NoiseError::MissingSourceModule {
                module: self.owner,
                kind: self.kind,
                index,
            }),
        }
    }

    pub fn get_vec(&self, index: usize, p: DVec3) -> Result<f64> {
        self.get(index, p.x, p.y, p.z)
    }
}

pub(crate) fn unknown_param(kind: ModuleKind, name: &str) -> NoiseError {
    NoiseError::UnknownParameter {
        kind,
        name: name.to_string(),
    }
}

fn invalid_param(kind: ModuleKind, name: &str, value: &str) -> NoiseError {
    NoiseError::InvalidParameter {
        kind,
        name: name.to_string(),
        value: value.to_string(),
    }
}

pub(crate) fn parse_param<T: FromStr>(kind: ModuleKind, name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid_param(kind, name, value))
}

pub(crate) fn parse_bool(kind: ModuleKind, name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(invalid_param(kind, name, value)),
    }
}

// "x, y, z"
pub(crate) fn parse_vec3(kind: ModuleKind, name: &str, value: &str) -> Result<DVec3> {
    let parts: Vec<&str> = value.split(',').collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(invalid_param(kind, name, value));
    };
    Ok(DVec3::new(
        parse_param(kind, name, x)?,
        parse_param(kind, name, y)?,
        parse_param(kind, name, z)?,
    ))
}

// "a, b"
pub(crate) fn parse_pair(kind: ModuleKind, name: &str, value: &str) -> Result<(f64, f64)> {
    let (a, b) = value
        .split_once(',')
        .ok_or_else(|| invalid_param(kind, name, value))?;
    Ok((parse_param(kind, name, a)?, parse_param(kind, name, b)?))
}

// Sources that echo one coordinate, handy for checking point transforms
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    pub(crate) enum AxisProbe {
        X,
        Y,
        Z,
    }

    impl Module for AxisProbe {
        fn kind(&self) -> ModuleKind {
            ModuleKind::Const
        }

        fn get_value(&self, _sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
            Ok(match self {
                AxisProbe::X => x,
                AxisProbe::Y => y,
                AxisProbe::Z => z,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in ModuleKind::ALL {
            assert_eq!(kind.name().parse::<ModuleKind>().unwrap(), kind);
        }
        assert_eq!("ridgedmulti".parse::<ModuleKind>().unwrap(), ModuleKind::RidgedMulti);
    }

    #[test]
    fn unknown_kind_is_reported() {
        let err = "Fractal".parse::<ModuleKind>().unwrap_err();
        assert!(matches!(err, NoiseError::UnknownModuleKind(name) if name == "Fractal"));
    }

    #[test]
    fn parses_vectors_and_pairs() {
        let v = parse_vec3(ModuleKind::ScalePoint, "scale", " 1, 2.5 ,-3").unwrap();
        assert_eq!(v, DVec3::new(1.0, 2.5, -3.0));
        assert!(parse_vec3(ModuleKind::ScalePoint, "scale", "1, 2").is_err());

        let p = parse_pair(ModuleKind::Curve, "point", "-1, 0.5").unwrap();
        assert_eq!(p, (-1.0, 0.5));
        assert!(parse_pair(ModuleKind::Curve, "point", "0.5").is_err());
    }

    #[test]
    fn parses_bools_loosely() {
        assert!(parse_bool(ModuleKind::Voronoi, "enableDistance", "True").unwrap());
        assert!(!parse_bool(ModuleKind::Voronoi, "enableDistance", "0").unwrap());
        assert!(parse_bool(ModuleKind::Voronoi, "enableDistance", "maybe").is_err());
    }
}
