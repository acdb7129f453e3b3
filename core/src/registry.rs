// Registry of module factories, keyed by kind name.
//
// Collections build their modules through a registry rather than matching
// on kind names themselves, so callers can add their own module types next
// to the built-in ones. `ModuleRegistry::global()` holds the built-ins.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{NoiseError, Result};
use crate::module::*;

// Builds a module; the argument is the number of sources the description
// wires in, which only variable-arity kinds use.
pub type ModuleFactory = fn(usize) -> Box<dyn Module>;

#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    // lowercase name -> (display name, factory)
    factories: HashMap<String, (String, ModuleFactory)>,
}

impl ModuleRegistry {
    // An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // A registry with every built-in `ModuleKind`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in ModuleKind::ALL {
            registry.register(kind.name(), builtin_factory(kind));
        }
        registry
    }

    // Shared built-in registry, created on first use.
    pub fn global() -> &'static ModuleRegistry {
        static INSTANCE: OnceLock<ModuleRegistry> = OnceLock::new();
        INSTANCE.get_or_init(ModuleRegistry::builtin)
    }

    // Registers a factory under `name`, replacing any previous entry.
    // Lookup ignores ASCII case.
    pub fn register(&mut self, name: &str, factory: ModuleFactory) {
        self.factories
            .insert(name.to_ascii_lowercase(), (name.to_string(), factory));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.trim().to_ascii_lowercase())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.values().map(|(name, _)| name.as_str())
    }

    // Builds a module of kind `name` sized for `source_count` sources.
    pub fn create(&self, name: &str, source_count: usize) -> Result<Box<dyn Module>> {
        let name = name.trim();
        let (_, factory) = self
            .factories
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| NoiseError::UnknownModuleKind(name.to_string()))?;
        Ok(factory(source_count))
    }
}

fn builtin_factory(kind: ModuleKind) -> ModuleFactory {
    match kind {
        ModuleKind::Const => boxed::<Const>,
        ModuleKind::CheckerBoard => boxed::<CheckerBoard>,
        ModuleKind::Cylinders => boxed::<Cylinders>,
        ModuleKind::Spheres => boxed::<Spheres>,
        ModuleKind::Perlin => boxed::<Perlin>,
        ModuleKind::Billow => boxed::<Billow>,
        ModuleKind::RidgedMulti => boxed::<RidgedMulti>,
        ModuleKind::Voronoi => boxed::<Voronoi>,
        ModuleKind::Simplex => boxed::<Simplex>,
        ModuleKind::Add => boxed::<Add>,
        ModuleKind::Multiply => boxed::<Multiply>,
        ModuleKind::Max => boxed::<Max>,
        ModuleKind::Min => boxed::<Min>,
        ModuleKind::Power => boxed::<Power>,
        ModuleKind::Abs => boxed::<Abs>,
        ModuleKind::Invert => boxed::<Invert>,
        ModuleKind::Clamp => boxed::<Clamp>,
        ModuleKind::ScaleBias => boxed::<ScaleBias>,
        ModuleKind::Exponent => boxed::<Exponent>,
        ModuleKind::ScalePoint => boxed::<ScalePoint>,
        ModuleKind::TranslatePoint => boxed::<TranslatePoint>,
        ModuleKind::RotatePoint => boxed::<RotatePoint>,
        ModuleKind::Displace => boxed::<Displace>,
        ModuleKind::Turbulence => boxed::<Turbulence>,
        ModuleKind::Blend => boxed::<Blend>,
        ModuleKind::Select => boxed::<Select>,
        ModuleKind::Curve => boxed::<Curve>,
        ModuleKind::Terrace => boxed::<Terrace>,
        ModuleKind::Sum => sum,
    }
}

fn boxed<M: Module + Default + 'static>(_: usize) -> Box<dyn Module> {
    Box::new(M::default())
}

fn sum(count: usize) -> Box<dyn Module> {
    Box::new(Sum::new(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_kind() {
        let registry = ModuleRegistry::builtin();
        for kind in ModuleKind::ALL {
            let module = registry.create(kind.name(), 2).unwrap();
            assert_eq!(module.kind(), kind);
        }
        assert_eq!(registry.names().count(), ModuleKind::ALL.len());
    }

    #[test]
    fn lookup_ignores_case() {
        let module = ModuleRegistry::global().create("ridgedMULTI", 0).unwrap();
        assert_eq!(module.kind(), ModuleKind::RidgedMulti);
    }

    #[test]
    fn sum_takes_requested_arity() {
        let sum = ModuleRegistry::global().create("Sum", 5).unwrap();
        assert_eq!(sum.source_count(), 5);
        let add = ModuleRegistry::global().create("Add", 5).unwrap();
        assert_eq!(add.source_count(), 2);
    }

    #[test]
    fn unknown_kind() {
        assert!(matches!(
            ModuleRegistry::global().create("Fractal", 0),
            Err(NoiseError::UnknownModuleKind(name)) if name == "Fractal"
        ));
    }

    #[test]
    fn custom_kinds_can_be_added() {
        let mut registry = ModuleRegistry::builtin();
        registry.register("Ones", |_| Box::new(Const::new(1.0)));
        assert!(registry.contains("ones"));
        assert_eq!(registry.create("Ones", 0).unwrap().kind(), ModuleKind::Const);
    }
}
