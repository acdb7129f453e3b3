// Named module graphs built from declarative descriptions.
//
// A description is a list of `ModuleInfo` records, usually read from JSON:
//
// [
//   { "name": "base", "type": "Perlin", "parameters": ["frequency=0.5", "octaveCount=4"] },
//   { "name": "flat", "type": "ScaleBias", "parameters": ["scale=0.25"], "sourceModules": ["base"] }
// ]
//
// Bad entries inside a record (unknown kind, unknown or unparsable
// parameter) are logged, kept in `ModuleCollection::warnings` and skipped.
// Wiring problems (a source name that matches no module, a name used twice,
// a cycle) fail the whole build.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{NoiseError, Result};
use crate::graph::{ModuleGraph, ModuleId};
use crate::registry::ModuleRegistry;

// One module of a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    // "key=value" strings
    #[serde(default)]
    pub parameters: Vec<String>,
    // Source names, in slot order
    #[serde(default)]
    pub source_modules: Vec<String>,
}

impl ModuleInfo {
    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            parameters: Vec::new(),
            source_modules: Vec::new(),
        }
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.parameters.push(format!("{key}={}", value.to_string()));
        self
    }

    pub fn sources(mut self, names: &[&str]) -> Self {
        self.source_modules = names.iter().map(|n| n.to_string()).collect();
        self
    }
}

#[derive(Debug, Default)]
pub struct ModuleCollection {
    graph: ModuleGraph,
    names: HashMap<String, ModuleId>,
    warnings: Vec<NoiseError>,
}

impl ModuleCollection {
    // Parses a JSON array of `ModuleInfo` and builds it with the built-in
    // registry.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with(ModuleRegistry::global(), json)
    }

    pub fn from_json_with(registry: &ModuleRegistry, json: &str) -> Result<Self> {
        let infos: Vec<ModuleInfo> = serde_json::from_str(json)?;
        Self::from_infos_with(registry, &infos)
    }

    pub fn from_infos(infos: &[ModuleInfo]) -> Result<Self> {
        Self::from_infos_with(ModuleRegistry::global(), infos)
    }

    // Builds every module first, then wires sources by name, so a record may
    // name sources declared after it.
    pub fn from_infos_with(registry: &ModuleRegistry, infos: &[ModuleInfo]) -> Result<Self> {
        let mut collection = Self::default();
        let mut built = Vec::with_capacity(infos.len());

        for info in infos {
            if collection.names.contains_key(&info.name) {
                return Err(NoiseError::DuplicateModuleName(info.name.clone()));
            }
            match registry.create(&info.kind, info.source_modules.len()) {
                Ok(mut module) => {
                    for parameter in &info.parameters {
                        if let Err(err) = apply_parameter(module.as_mut(), parameter) {
                            collection.warn(&info.name, err);
                        }
                    }
                    let id = collection.graph.add_boxed(module);
                    collection.names.insert(info.name.clone(), id);
                    built.push((info, id));
                }
                Err(err) => collection.warn(&info.name, err),
            }
        }

        for (info, id) in built {
            collection.wire(info, id)?;
        }

        debug!(
            modules = collection.graph.len(),
            warnings = collection.warnings.len(),
            "built module collection"
        );
        Ok(collection)
    }

    fn warn(&mut self, module: &str, err: NoiseError) {
        warn!(module, "{err}");
        self.warnings.push(err);
    }

    fn wire(&mut self, info: &ModuleInfo, id: ModuleId) -> Result<()> {
        let slots = self.graph.sources(id)?.len();
        if info.source_modules.len() > slots {
            self.warn(
                &info.name,
                NoiseError::InvalidSourceSlot {
                    module: id,
                    index: slots,
                    count: slots,
                },
            );
        }

        for (index, source_name) in info.source_modules.iter().take(slots).enumerate() {
            let source = *self.names.get(source_name).ok_or_else(|| {
                NoiseError::UnresolvedSourceModule {
                    module: info.name.clone(),
                    source_name: source_name.clone(),
                }
            })?;
            self.graph.set_source(id, index, source)?;
        }
        Ok(())
    }

    // Id of the module called `name`.
    pub fn get(&self, name: &str) -> Option<ModuleId> {
        self.names.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn graph(&self) -> &ModuleGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut ModuleGraph {
        &mut self.graph
    }

    pub fn into_graph(self) -> ModuleGraph {
        self.graph
    }

    // Problems that were skipped while building.
    pub fn warnings(&self) -> &[NoiseError] {
        &self.warnings
    }

    // Evaluates the module called `name`; `None` if there is no such module.
    pub fn get_value(&self, name: &str, x: f64, y: f64, z: f64) -> Option<Result<f64>> {
        self.get(name).map(|id| self.graph.get_value(id, x, y, z))
    }
}

// "key=value" -> module.set_param(key, value)
fn apply_parameter(module: &mut dyn crate::module::Module, parameter: &str) -> Result<()> {
    let (key, value) = parameter
        .split_once('=')
        .ok_or_else(|| NoiseError::MalformedParameter(parameter.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(NoiseError::MalformedParameter(parameter.to_string()));
    }
    module.set_param(key, value.trim())
}
