pub mod frameworks;
pub mod generate;
pub mod init;
pub mod validate;

pub use frameworks::{frameworks, FrameworksArgs};
pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use validate::{validate, ValidateArgs};
