mod component;
mod page;
mod project;

pub use component::generate_component;
pub use page::generate_page;
pub use project::generate_project;
