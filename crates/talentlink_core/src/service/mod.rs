//! Profile-facing vocabulary services.
//!
//! # Responsibility
//! - Turn stored profile values into catalogue-backed display data.
//! - Keep UI/FFI layers decoupled from catalogue internals.

pub mod skill_service;
