//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level vocabulary queries to Dart via FRB.
//! - Keep every return shape FFI-plain: owned strings, flat structs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Category and profession values cross the boundary as their stable
//!   code strings.

use log::debug;
use talentlink_core::catalog::{professions, skill_tags};
use talentlink_core::service::skill_service;
use talentlink_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Profession, SkillCategory, SkillTag, SkillTagData,
};

/// Catalogue or resolved tag entry with the category as its code string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTagItem {
    /// Stable machine code (e.g. `figma`).
    pub code: String,
    /// Display label (e.g. `Figma`, `交互设计`).
    pub name: String,
    /// Category code: `tool|field|skill`.
    pub category: String,
}

/// Catalogue size summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Total record count.
    pub total: u32,
    /// Tool records.
    pub tool: u32,
    /// Professional-field records.
    pub field: u32,
    /// Skill/method records.
    pub skill: u32,
}

/// Per-category counts for one profile's stored skill codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSkillStats {
    pub tool: u32,
    pub field: u32,
    pub skill: u32,
}

/// One profile's stored skill codes bucketed by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSkillGroups {
    pub tool: Vec<String>,
    pub field: Vec<String>,
    pub skill: Vec<String>,
}

/// Profession entry for grouped display lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessionItem {
    /// Stable SCREAMING_SNAKE code (e.g. `UI_DESIGNER`).
    pub code: String,
    /// Chinese display name.
    pub display_name: String,
    /// Short English name.
    pub english_name: String,
    /// Display group name: `digital|visual|multimedia|spatial`.
    pub group: String,
}

/// (value, label) pair for profession selection lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessionOptionItem {
    /// Profession code, or empty string for the "全部" placeholder.
    pub value: String,
    /// Chinese display label.
    pub label: String,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => {
            debug!("event=ffi_init_logging module=ffi status=ok level={level}");
            String::new()
        }
        // No-op when no logger is active; the message still reaches Dart.
        Err(err) => {
            debug!("event=ffi_init_logging module=ffi status=error reason={err}");
            err
        }
    }
}

/// Returns the full skill-tag catalogue in declaration order.
///
/// # FFI contract
/// - Sync call over in-memory data, non-blocking.
/// - Never panics; the catalogue is fixed at build time.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_skill_tags() -> Vec<CatalogTagItem> {
    skill_tags::all_tags().iter().map(to_tag_item).collect()
}

/// Returns catalogue records of one category, in declaration order.
///
/// # FFI contract
/// - Sync call over in-memory data, non-blocking.
/// - Unknown category strings yield an empty list, never an error.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_skill_tags_by_category(category: String) -> Vec<CatalogTagItem> {
    match SkillCategory::from_code(category.as_str()) {
        Some(category) => skill_tags::get_by_category(category)
            .into_iter()
            .map(to_tag_item)
            .collect(),
        None => Vec::new(),
    }
}

/// Returns catalogue size counts.
///
/// # FFI contract
/// - Sync call over in-memory data, non-blocking.
/// - Counts are stable for a given core version.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_summary() -> CatalogSummary {
    CatalogSummary {
        total: skill_tags::len() as u32,
        tool: skill_tags::tool_tags().len() as u32,
        field: skill_tags::field_tags().len() as u32,
        skill: skill_tags::skill_tags().len() as u32,
    }
}

/// Display name for a stored skill code.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Unknown codes are returned unchanged so the UI can still render them.
#[flutter_rust_bridge::frb(sync)]
pub fn tag_display_name(code: String) -> String {
    skill_service::tag_display_name(code.as_str()).to_owned()
}

/// Parses a stored profile `skill_tags` value into a code list.
///
/// Accepts the JSON-array form and the legacy comma-separated form.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; malformed input yields an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_parse_skills(raw: String) -> Vec<String> {
    skill_service::parse_skill_tags(raw.as_str())
}

/// Resolves stored skill codes to display records, order preserved.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Unknown codes are kept with render-safe fallbacks, never dropped.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_resolve_skills(codes: Vec<String>) -> Vec<CatalogTagItem> {
    skill_service::resolve_tags(&codes)
        .into_iter()
        .map(to_resolved_item)
        .collect()
}

/// Per-category counts for one profile's stored skill codes.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Unknown codes count toward `skill`.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_skill_stats(codes: Vec<String>) -> ProfileSkillStats {
    let stats = skill_service::category_stats(&codes);
    ProfileSkillStats {
        tool: stats.tool as u32,
        field: stats.field as u32,
        skill: stats.skill as u32,
    }
}

/// Buckets one profile's stored skill codes by category.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Unknown codes land in the `skill` bucket; input order is preserved
///   within each bucket.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_group_skills(codes: Vec<String>) -> ProfileSkillGroups {
    let grouped = skill_service::group_by_category(&codes);
    ProfileSkillGroups {
        tool: grouped.tool,
        field: grouped.field,
        skill: grouped.skill,
    }
}

/// Returns all professions with names and group, in declaration order.
///
/// # FFI contract
/// - Sync call over in-memory data, non-blocking.
/// - Never panics; the enumeration is fixed at build time.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_professions() -> Vec<ProfessionItem> {
    professions::all()
        .iter()
        .map(|profession| to_profession_item(*profession))
        .collect()
}

/// Display name for a stored profession code.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Unknown codes are returned unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn profession_display_name(code: String) -> String {
    professions::display_name_for(code.as_str()).to_owned()
}

/// Profession options for selection lists.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - With `include_all` set, a leading `{"", "全部"}` entry is prepended.
#[flutter_rust_bridge::frb(sync)]
pub fn profession_options(include_all: bool) -> Vec<ProfessionOptionItem> {
    professions::select_options(include_all)
        .into_iter()
        .map(|option| ProfessionOptionItem {
            value: option.value,
            label: option.label,
        })
        .collect()
}

/// Case-insensitive profession search over label, code and English name.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Blank keywords return the full option list; misses return empty.
#[flutter_rust_bridge::frb(sync)]
pub fn profession_search(keyword: String) -> Vec<ProfessionOptionItem> {
    professions::search(keyword.as_str())
        .into_iter()
        .map(|option| ProfessionOptionItem {
            value: option.value,
            label: option.label,
        })
        .collect()
}

fn to_tag_item(record: &SkillTag) -> CatalogTagItem {
    CatalogTagItem {
        code: record.code.to_owned(),
        name: record.name.to_owned(),
        category: record.category.code().to_owned(),
    }
}

fn to_resolved_item(data: SkillTagData) -> CatalogTagItem {
    CatalogTagItem {
        code: data.code,
        name: data.name,
        category: data.category.code().to_owned(),
    }
}

fn to_profession_item(profession: Profession) -> ProfessionItem {
    ProfessionItem {
        code: profession.code().to_owned(),
        display_name: profession.display_name().to_owned(),
        english_name: profession.english_name().to_owned(),
        group: profession.group().name().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        catalog_professions, catalog_skill_tags, catalog_skill_tags_by_category, catalog_summary,
        core_version, init_logging, ping, profession_display_name, profession_options,
        profession_search, profile_group_skills, profile_parse_skills, profile_resolve_skills,
        profile_skill_stats, tag_display_name,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    fn codes(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_succeeds_and_stays_idempotent() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        let log_dir = std::env::temp_dir()
            .join(format!("talentlink-ffi-logging-{}-{nanos}", std::process::id()));
        let log_dir_str = log_dir
            .to_str()
            .expect("temp dir should be valid UTF-8")
            .to_string();

        let first = init_logging("info".to_string(), log_dir_str.clone());
        assert!(first.is_empty(), "{first}");

        let repeat = init_logging("info".to_string(), log_dir_str);
        assert!(repeat.is_empty(), "{repeat}");
    }

    #[test]
    fn catalog_summary_counts_add_up() {
        let summary = catalog_summary();
        assert_eq!(summary.total, 54);
        assert_eq!(summary.tool + summary.field + summary.skill, summary.total);
    }

    #[test]
    fn full_catalogue_crosses_the_boundary_with_category_codes() {
        let items = catalog_skill_tags();
        assert_eq!(items.len(), 54);
        let figma = items
            .iter()
            .find(|item| item.code == "figma")
            .expect("figma should be in the catalogue");
        assert_eq!(figma.name, "Figma");
        assert_eq!(figma.category, "tool");
    }

    #[test]
    fn category_filter_handles_unknown_category_strings() {
        assert_eq!(catalog_skill_tags_by_category("field".to_string()).len(), 14);
        assert!(catalog_skill_tags_by_category("gadget".to_string()).is_empty());
        assert!(catalog_skill_tags_by_category(String::new()).is_empty());
    }

    #[test]
    fn tag_display_name_keeps_unknown_codes() {
        assert_eq!(tag_display_name("figma".to_string()), "Figma");
        assert_eq!(tag_display_name("mystery".to_string()), "mystery");
    }

    #[test]
    fn profile_skill_pipeline_is_consistent() {
        let parsed = profile_parse_skills(r#"["figma","ui_design","mystery"]"#.to_string());
        assert_eq!(parsed, codes(&["figma", "ui_design", "mystery"]));

        let resolved = profile_resolve_skills(parsed.clone());
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[2].category, "skill");

        let stats = profile_skill_stats(parsed.clone());
        assert_eq!((stats.tool, stats.field, stats.skill), (1, 1, 1));

        let grouped = profile_group_skills(parsed);
        assert_eq!(grouped.tool, codes(&["figma"]));
        assert_eq!(grouped.field, codes(&["ui_design"]));
        assert_eq!(grouped.skill, codes(&["mystery"]));
    }

    #[test]
    fn professions_cross_the_boundary_with_group_names() {
        let items = catalog_professions();
        assert_eq!(items.len(), 15);
        let architect = items
            .iter()
            .find(|item| item.code == "ARCHITECT")
            .expect("architect should be listed");
        assert_eq!(architect.display_name, "建筑师");
        assert_eq!(architect.english_name, "Architect");
        assert_eq!(architect.group, "spatial");
    }

    #[test]
    fn profession_helpers_mirror_core_semantics() {
        assert_eq!(
            profession_display_name("UI_DESIGNER".to_string()),
            "UI设计师"
        );
        assert_eq!(profession_display_name("retired".to_string()), "retired");

        let options = profession_options(true);
        assert_eq!(options.len(), 16);
        assert_eq!(options[0].label, "全部");

        let hits = profession_search("motion".to_string());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value, "MOTION_DESIGNER");
    }
}
