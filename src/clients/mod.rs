//! Typed handles for talking to actors.

mod macros;
mod session_client;

pub use session_client::*;
