use blueprint_common::GenerateError;
use blueprint_schema::{
    ComponentMetadata, Framework, GenerationResult, GeneratorConfig, PageDefinition,
    ProjectDefinition,
};

/// Uniform interface over the per-framework generators. Implementations are
/// stateless, so a registry can hand out fresh instances per request.
pub trait Generator: Send + Sync {
    fn framework(&self) -> Framework;

    fn generate_component(
        &self,
        metadata: &ComponentMetadata,
        config: &GeneratorConfig,
    ) -> Result<GenerationResult, GenerateError>;

    fn generate_page(
        &self,
        page: &PageDefinition,
        components: &[ComponentMetadata],
        config: &GeneratorConfig,
    ) -> Result<GenerationResult, GenerateError>;

    fn generate_project(
        &self,
        project: &ProjectDefinition,
        config: &GeneratorConfig,
    ) -> Result<GenerationResult, GenerateError>;
}

impl std::fmt::Debug for dyn Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generator({})", self.framework())
    }
}

macro_rules! framework_generator {
    ($name:ident, $framework:expr, $module:ident) => {
        pub struct $name;

        impl Generator for $name {
            fn framework(&self) -> Framework {
                $framework
            }

            fn generate_component(
                &self,
                metadata: &ComponentMetadata,
                config: &GeneratorConfig,
            ) -> Result<GenerationResult, GenerateError> {
                tracing::debug!(framework = %self.framework(), component = %metadata.name, "generating component");
                match $module::generate_component(metadata, config) {
                    Ok(result) => Ok(result),
                    Err(err) => {
                        tracing::warn!(framework = %self.framework(), component = %metadata.name, error = %err, "component generation failed");
                        Err(err)
                    }
                }
            }

            fn generate_page(
                &self,
                page: &PageDefinition,
                components: &[ComponentMetadata],
                config: &GeneratorConfig,
            ) -> Result<GenerationResult, GenerateError> {
                tracing::debug!(framework = %self.framework(), page = %page.name, "generating page");
                match $module::generate_page(page, components, config) {
                    Ok(result) => Ok(result),
                    Err(err) => {
                        tracing::warn!(framework = %self.framework(), page = %page.name, error = %err, "page generation failed");
                        Err(err)
                    }
                }
            }

            fn generate_project(
                &self,
                project: &ProjectDefinition,
                config: &GeneratorConfig,
            ) -> Result<GenerationResult, GenerateError> {
                tracing::debug!(framework = %self.framework(), project = %project.name, "generating project");
                match $module::generate_project(project, config) {
                    Ok(result) => Ok(result),
                    Err(err) => {
                        tracing::warn!(framework = %self.framework(), project = %project.name, error = %err, "project generation failed");
                        Err(err)
                    }
                }
            }
        }
    };
}

framework_generator!(ReactGenerator, Framework::React, blueprint_codegen_react);
framework_generator!(VueGenerator, Framework::Vue, blueprint_codegen_vue);
framework_generator!(AngularGenerator, Framework::Angular, blueprint_codegen_angular);
framework_generator!(VanillaGenerator, Framework::Vanilla, blueprint_codegen_vanilla);
