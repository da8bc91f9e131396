mod generator;
mod registry;

pub use generator::{
    AngularGenerator, Generator, ReactGenerator, VanillaGenerator, VueGenerator,
};
pub use registry::{build_registry, GeneratorRegistry, UnsupportedFrameworkError};

#[cfg(test)]
mod tests;
