use super::{Module, ModuleKind, Sources, parse_param, unknown_param};
use crate::error::Result;
use crate::interpolate::{curve_cubic, linear};

// Picks source0 or source1 depending on the control value of source2.
//
// Inside `[lower_bound, upper_bound]` the output comes from source1, outside
// from source0. With a positive edge falloff the switch is smoothed over a
// window of `2 * edge_falloff` centred on each bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Select {
    lower_bound: f64,
    upper_bound: f64,
    edge_falloff: f64,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            lower_bound: -1.0,
            upper_bound: 1.0,
            edge_falloff: 0.0,
        }
    }
}

impl Select {
    pub fn new(lower: f64, upper: f64, edge_falloff: f64) -> Self {
        let mut select = Self::default();
        select.set_bounds(lower, upper);
        select.set_edge_falloff(edge_falloff);
        select
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn edge_falloff(&self) -> f64 {
        self.edge_falloff
    }

    // Also re-clamps the falloff against the new range
    pub fn set_bounds(&mut self, lower: f64, upper: f64) {
        self.lower_bound = lower.min(upper);
        self.upper_bound = lower.max(upper);
        self.set_edge_falloff(self.edge_falloff);
    }

    // The two falloff windows never overlap
    pub fn set_edge_falloff(&mut self, falloff: f64) {
        let half_range = (self.upper_bound - self.lower_bound) * 0.5;
        self.edge_falloff = falloff.clamp(0.0, half_range);
    }
}

impl Module for Select {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Select
    }

    fn source_count(&self) -> usize {
        3
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        let control = sources.get(2, x, y, z)?;
        let (lower, upper, falloff) = (self.lower_bound, self.upper_bound, self.edge_falloff);

        if falloff <= 0.0 {
            let index = if control < lower || control > upper { 0 } else { 1 };
            return sources.get(index, x, y, z);
        }

        if control < lower - falloff {
            sources.get(0, x, y, z)
        } else if control < lower + falloff {
            let alpha = curve_cubic((control - (lower - falloff)) / (2.0 * falloff));
            Ok(linear(sources.get(0, x, y, z)?, sources.get(1, x, y, z)?, alpha))
        } else if control < upper - falloff {
            sources.get(1, x, y, z)
        } else if control < upper + falloff {
            let alpha = curve_cubic((control - (upper - falloff)) / (2.0 * falloff));
            Ok(linear(sources.get(1, x, y, z)?, sources.get(0, x, y, z)?, alpha))
        } else {
            sources.get(0, x, y, z)
        }
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        let kind = self.kind();
        match name {
            "lowerBound" => self.set_bounds(parse_param(kind, name, value)?, self.upper_bound),
            "upperBound" => self.set_bounds(self.lower_bound, parse_param(kind, name, value)?),
            "edgeFalloff" => self.set_edge_falloff(parse_param(kind, name, value)?),
            _ => return Err(unknown_param(kind, name)),
        }
        Ok(())
    }
}
