// Modules that merge the outputs of several sources at the same point.

use super::{Module, ModuleKind, Sources};
use crate::error::Result;
use crate::interpolate::linear;

// Two-source elementwise operators
macro_rules! binary_combiner {
    ($(#[$doc:meta])* $name:ident, |$a:ident, $b:ident| $op:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Module for $name {
            fn kind(&self) -> ModuleKind {
                ModuleKind::$name
            }

            fn source_count(&self) -> usize {
                2
            }

            fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
                let $a = sources.get(0, x, y, z)?;
                let $b = sources.get(1, x, y, z)?;
                Ok($op)
            }
        }
    };
}

binary_combiner!(
    // source0 + source1
    Add, |a, b| a + b
);
binary_combiner!(
    // source0 * source1
    Multiply, |a, b| a * b
);
binary_combiner!(
    // Larger of the two sources
    Max, |a, b| a.max(b)
);
binary_combiner!(
    // Smaller of the two sources
    Min, |a, b| a.min(b)
);
binary_combiner!(
    // source0 raised to the power of source1
    Power, |a, b| a.powf(b)
);

// Linear blend of source0 and source1, weighted by source2.
//
// A control value of 0 yields source0, 1 yields source1. The control value
// is used as is, so values outside [0, 1] extrapolate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blend;

impl Module for Blend {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Blend
    }

    fn source_count(&self) -> usize {
        3
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        let lhs = sources.get(0, x, y, z)?;
        let rhs = sources.get(1, x, y, z)?;
        let control = sources.get(2, x, y, z)?;
        Ok(linear(lhs, rhs, control))
    }
}

// Sum of any number of sources. A Sum already in a graph is resized with
// ModuleGraph::set_source_count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum {
    count: usize,
}

impl Sum {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    // Only the graph resizes a placed Sum, so its slots follow the count
    pub(crate) fn set_count(&mut self, count: usize) {
        self.count = count;
    }
}

impl Module for Sum {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Sum
    }

    fn source_count(&self) -> usize {
        self.count
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64> {
        (0..sources.len()).try_fold(0.0, |acc, i| Ok(acc + sources.get(i, x, y, z)?))
    }
}
