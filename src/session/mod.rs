//! A shopper's session: their cart plus what they are currently looking at.

mod actions;
pub mod entity;
pub mod error;
mod payloads;
pub mod view;

pub use actions::*;
pub use entity::*;
pub use error::*;
pub use payloads::*;
pub use view::*;
