//! Core types for Zapatos.

pub mod id;
pub mod shoe;

pub use id::*;
pub use shoe::{ShoePayload, ShoeRecord, SizeValue};
