//! Vocabulary core for the TalentLink designer-talent platform.
//! This crate is the single source of truth for the skill-tag and
//! profession vocabularies that designer profiles are tagged with.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::profession::{Profession, ProfessionGroup, ProfessionOption};
pub use model::skill_tag::{SkillCategory, SkillTag, SkillTagData};
pub use service::skill_service::{CategoryStats, GroupedTags};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
