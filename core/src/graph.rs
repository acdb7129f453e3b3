// Arena that owns every module of a noise graph.
//
// Modules refer to their sources by `ModuleId`, so one module can feed any
// number of parents. Wiring goes through `ModuleGraph::set_source`, which
// refuses edges that would close a cycle; evaluation therefore always
// terminates.

use std::fmt;

use glam::DVec3;

use crate::error::{NoiseError, Result};
use crate::module::{AsAny, Module, ModuleKind, Sources, Sum};

// Stable handle of a module inside one `ModuleGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(usize);

impl ModuleId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Node {
    module: Box<dyn Module>,
    sources: Vec<Option<ModuleId>>,
}

#[derive(Debug, Default)]
pub struct ModuleGraph {
    nodes: Vec<Node>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add<M: Module + 'static>(&mut self, module: M) -> ModuleId {
        self.add_boxed(Box::new(module))
    }

    pub fn add_boxed(&mut self, module: Box<dyn Module>) -> ModuleId {
        let id = ModuleId(self.nodes.len());
        let sources = vec![None; module.source_count()];
        self.nodes.push(Node { module, sources });
        id
    }

    fn node(&self, id: ModuleId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(NoiseError::UnknownModule(id))
    }

    fn node_mut(&mut self, id: ModuleId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(NoiseError::UnknownModule(id))
    }

    pub fn kind(&self, id: ModuleId) -> Result<ModuleKind> {
        Ok(self.node(id)?.module.kind())
    }

    pub fn sources(&self, id: ModuleId) -> Result<&[Option<ModuleId>]> {
        Ok(&self.node(id)?.sources)
    }

    pub fn dyn_module(&self, id: ModuleId) -> Result<&dyn Module> {
        Ok(self.node(id)?.module.as_ref())
    }

    // Typed access to a module, `None` if the id is unknown or the type differs.
    pub fn module<T: Module + 'static>(&self, id: ModuleId) -> Option<&T> {
        let node = self.nodes.get(id.0)?;
        <dyn Module as AsAny>::as_any(node.module.as_ref()).downcast_ref()
    }

    pub fn module_mut<T: Module + 'static>(&mut self, id: ModuleId) -> Option<&mut T> {
        let node = self.nodes.get_mut(id.0)?;
        <dyn Module as AsAny>::as_any_mut(node.module.as_mut()).downcast_mut()
    }

    pub fn set_param(&mut self, id: ModuleId, name: &str, value: &str) -> Result<()> {
        self.node_mut(id)?.module.set_param(name, value)
    }

    // Resize a variable-arity module (Sum). Slots past the new count are dropped.
    pub fn set_source_count(&mut self, id: ModuleId, count: usize) -> Result<()> {
        let node = self.node_mut(id)?;
        let any = <dyn Module as AsAny>::as_any_mut(node.module.as_mut());
        if let Some(sum) = any.downcast_mut::<Sum>() {
            sum.set_count(count);
        }
        let count = node.module.source_count();
        node.sources.resize(count, None);
        Ok(())
    }

    // Wire `source` into slot `index` of `parent`.
    pub fn set_source(&mut self, parent: ModuleId, index: usize, source: ModuleId) -> Result<()> {
        self.node(source)?;
        let count = self.node(parent)?.sources.len();
        if index >= count {
            return Err(NoiseError::InvalidSourceSlot {
                module: parent,
                index,
                count,
            });
        }
        if source == parent || self.reaches(source, parent) {
            return Err(NoiseError::CycleDetected {
                parent,
                source_module: source,
            });
        }
        self.node_mut(parent)?.sources[index] = Some(source);
        Ok(())
    }

    // Wire `sources` into slots 0.. of `parent`, in order.
    pub fn connect(&mut self, parent: ModuleId, sources: &[ModuleId]) -> Result<()> {
        for (index, &source) in sources.iter().enumerate() {
            self.set_source(parent, index, source)?;
        }
        Ok(())
    }

    pub fn clear_source(&mut self, parent: ModuleId, index: usize) -> Result<()> {
        let node = self.node_mut(parent)?;
        let count = node.sources.len();
        let slot = node.sources.get_mut(index).ok_or(NoiseError::InvalidSourceSlot {
            module: parent,
            index,
            count,
        })?;
        *slot = None;
        Ok(())
    }

    // Depth-first search along source edges
    fn reaches(&self, from: ModuleId, target: ModuleId) -> bool {
        let mut stack = vec![from];
        let mut seen = vec![false; self.nodes.len()];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if std::mem::replace(&mut seen[id.0], true) {
                continue;
            }
            stack.extend(self.nodes[id.0].sources.iter().flatten().copied());
        }
        false
    }

    // Evaluate module `id` at (x, y, z).
    pub fn get_value(&self, id: ModuleId, x: f64, y: f64, z: f64) -> Result<f64> {
        let node = self.node(id)?;
        let sources = Sources::new(self, id, node.module.kind(), &node.sources);
        node.module.get_value(&sources, x, y, z)
    }

    pub fn get_value_vec(&self, id: ModuleId, p: DVec3) -> Result<f64> {
        self.get_value(id, p.x, p.y, p.z)
    }
}
