//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `talentlink_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use talentlink_core::catalog::skill_tags;

fn main() {
    // Tiny probe that validates core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("talentlink_core ping={}", talentlink_core::ping());
    println!("talentlink_core version={}", talentlink_core::core_version());
    println!("catalog total={}", skill_tags::len());
    println!("catalog tool={}", skill_tags::tool_tags().len());
    println!("catalog field={}", skill_tags::field_tags().len());
    println!("catalog skill={}", skill_tags::skill_tags().len());
}
