// Modules that reshape the output value of a single source.

use super::{Module, ModuleKind, Sources, parse_param, unknown_param};
use crate::error::Result;

macro_rules! single_source {
    () => {
        fn source_count(&self) -> usize {
            1
        }
    };
}

// Absolute value of the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct Abs;

impl Module for Abs {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Abs
    }

    single_source!();

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(sources.get(0, x, y, z)?.abs())
    }
}

// Negated source.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invert;

impl Module for Invert {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Invert
    }

    single_source!();

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(-sources.get(0, x, y, z)?)
    }
}

// Clamps the source into `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamp {
    pub min: f64,
    pub max: f64,
}

impl Clamp {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for Clamp {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

impl Module for Clamp {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Clamp
    }

    single_source!();

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        let value = sources.get(0, x, y, z)?;
        // max then min, so a reversed range never panics
        Ok(value.max(self.min).min(self.max))
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "min" => self.min = parse_param(self.kind(), name, value)?,
            "max" => self.max = parse_param(self.kind(), name, value)?,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }
}

// `source * scale + bias`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBias {
    pub scale: f64,
    pub bias: f64,
}

impl ScaleBias {
    pub fn new(scale: f64, bias: f64) -> Self {
        Self { scale, bias }
    }
}

impl Default for ScaleBias {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl Module for ScaleBias {
    fn kind(&self) -> ModuleKind {
        ModuleKind::ScaleBias
    }

    single_source!();

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(sources.get(0, x, y, z)? * self.scale + self.bias)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "scale" => self.scale = parse_param(self.kind(), name, value)?,
            "bias" => self.bias = parse_param(self.kind(), name, value)?,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }
}

// Maps the source from [-1, 1] onto [0, 1], raises it to `exponent`, and
// maps back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponent {
    pub exponent: f64,
}

impl Exponent {
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }
}

impl Default for Exponent {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Module for Exponent {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Exponent
    }

    single_source!();

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        let value = sources.get(0, x, y, z)?;
        Ok(((value + 1.0) / 2.0).abs().powf(self.exponent) * 2.0 - 1.0)
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "exponent" => self.exponent = parse_param(self.kind(), name, value)?,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }
}
