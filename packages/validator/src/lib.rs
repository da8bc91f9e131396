mod diagnostic;
mod rules;
mod validator;

pub use diagnostic::{Diagnostic, DiagnosticLevel, ValidationReport};
pub use rules::{AngularRule, ElementRule, ReactRule, StructureRule, VanillaRule, VueRule};
pub use validator::{validate_component, ValidateOptions};
