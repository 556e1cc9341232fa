//! Zapatos Core - Shared types and the in-memory shoe registry.
//!
//! This crate provides the domain layer used by the server binary:
//! - [`types`] - The shoe record, request payload, and ID types
//! - [`registry`] - The in-memory store that owns all records
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP. The
//! server crate wraps [`registry::ShoeRegistry`] in shared state and maps
//! its results onto HTTP responses.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod registry;
pub mod types;

pub use registry::{RegistryError, ShoeRegistry};
pub use types::*;
