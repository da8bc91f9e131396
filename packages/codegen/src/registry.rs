use indexmap::IndexMap;

use blueprint_schema::Framework;

use crate::generator::{
    AngularGenerator, Generator, ReactGenerator, VanillaGenerator, VueGenerator,
};

#[derive(Debug, thiserror::Error)]
#[error("no generator registered for framework '{0}'")]
pub struct UnsupportedFrameworkError(pub Framework);

type GeneratorFactory = fn() -> Box<dyn Generator>;

/// Maps frameworks to generator factories. Registration order is preserved,
/// so supported_frameworks() reports a stable listing.
pub struct GeneratorRegistry {
    factories: IndexMap<Framework, GeneratorFactory>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    pub fn register(&mut self, framework: Framework, factory: GeneratorFactory) {
        self.factories.insert(framework, factory);
    }

    pub fn create(
        &self,
        framework: Framework,
    ) -> Result<Box<dyn Generator>, UnsupportedFrameworkError> {
        self.factories
            .get(&framework)
            .map(|factory| factory())
            .ok_or(UnsupportedFrameworkError(framework))
    }

    pub fn is_supported(&self, framework: Framework) -> bool {
        self.factories.contains_key(&framework)
    }

    pub fn supported_frameworks(&self) -> Vec<Framework> {
        self.factories.keys().copied().collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A registry with all built-in generators registered.
pub fn build_registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    registry.register(Framework::React, || Box::new(ReactGenerator));
    registry.register(Framework::Vue, || Box::new(VueGenerator));
    registry.register(Framework::Angular, || Box::new(AngularGenerator));
    registry.register(Framework::Vanilla, || Box::new(VanillaGenerator));
    registry
}
