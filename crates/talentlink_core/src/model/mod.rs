//! Vocabulary domain model.
//!
//! # Responsibility
//! - Define the canonical skill-tag and profession data shapes.
//! - Keep one stable code-string contract for storage and API layers.
//!
//! # Invariants
//! - Every vocabulary entry is identified by a stable machine code.
//! - Display names are presentation values, never lookup keys.

pub mod profession;
pub mod skill_tag;
