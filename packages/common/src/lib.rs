pub mod buffer;
pub mod error;
pub mod literal;
pub mod naming;

pub use buffer::*;
pub use error::*;
pub use literal::*;
pub use naming::*;
