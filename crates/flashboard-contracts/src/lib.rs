// Public contracts for the Flashboard API
// This crate defines the DTOs shared by the server and every client.

pub mod common;
pub mod event;
pub mod summary;

pub use common::*;
pub use event::*;
pub use summary::*;
