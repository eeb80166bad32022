//! Fixed vocabulary catalogues.
//!
//! # Responsibility
//! - Hold the process-wide skill-tag and profession tables.
//! - Answer pure read-only queries over those tables.
//!
//! # Invariants
//! - Tables are fixed at compile time; derived indexes are built lazily
//!   exactly once and never mutated.
//! - Every query preserves declaration order.

pub mod professions;
pub mod skill_tags;
