pub mod product;
pub mod color;
pub mod order;
pub mod section;

pub use product::*;
pub use color::*;
pub use order::*;
pub use section::*;
