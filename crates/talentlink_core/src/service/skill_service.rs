//! Profile skill-tag helpers.
//!
//! # Responsibility
//! - Parse stored profile skill values into code lists.
//! - Resolve, group and count caller-supplied codes with render-safe
//!   fallbacks.
//!
//! # Invariants
//! - Unknown codes are kept, never dropped: they resolve to themselves
//!   and are categorized as `skill`.
//! - Input order is preserved through resolution and within grouping
//!   buckets.
//! - No helper here performs I/O or returns an error.

use crate::catalog::skill_tags;
use crate::model::skill_tag::{SkillCategory, SkillTagData};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Codes bucketed by category, input order preserved within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedTags {
    pub tool: Vec<String>,
    pub field: Vec<String>,
    pub skill: Vec<String>,
}

/// Per-category occurrence counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub tool: usize,
    pub field: usize,
    pub skill: usize,
}

/// Category of a stored code.
///
/// Unknown codes fall back to [`SkillCategory::Skill`] so profiles with
/// retired codes still get a usable classification.
pub fn tag_category(code: &str) -> SkillCategory {
    skill_tags::get_by_code(code)
        .map(|record| record.category)
        .unwrap_or(SkillCategory::Skill)
}

/// Display name for a stored code; unknown codes render as themselves.
pub fn tag_display_name(code: &str) -> &str {
    match skill_tags::get_by_code(code) {
        Some(record) => record.name,
        None => code,
    }
}

/// Parses the stored profile `skill_tags` value into a code list.
///
/// Profiles persist a JSON-encoded string array; older imports used a
/// comma-separated string. Contract:
/// - blank input yields an empty list;
/// - a JSON array yields its string elements (other element kinds are
///   ignored);
/// - any other valid JSON value yields an empty list;
/// - everything else is split on commas, entries trimmed, blanks dropped.
pub fn parse_skill_tags(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(code) => Some(code),
                _ => None,
            })
            .collect(),
        Ok(_) => Vec::new(),
        Err(_) => raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Resolves stored codes to display records, order preserved.
///
/// Unknown codes are kept with the documented fallbacks rather than
/// dropped, so every stored value stays renderable.
pub fn resolve_tags(codes: &[String]) -> Vec<SkillTagData> {
    codes
        .iter()
        .map(|code| SkillTagData {
            code: code.clone(),
            name: tag_display_name(code).to_string(),
            category: tag_category(code),
        })
        .collect()
}

/// Buckets stored codes by category; unknown codes land in `skill`.
pub fn group_by_category(codes: &[String]) -> GroupedTags {
    let mut grouped = GroupedTags::default();
    for code in codes {
        let bucket = match tag_category(code) {
            SkillCategory::Tool => &mut grouped.tool,
            SkillCategory::Field => &mut grouped.field,
            SkillCategory::Skill => &mut grouped.skill,
        };
        bucket.push(code.clone());
    }
    grouped
}

/// Per-category counts over stored codes, with the same fallback.
pub fn category_stats(codes: &[String]) -> CategoryStats {
    let mut stats = CategoryStats::default();
    for code in codes {
        match tag_category(code) {
            SkillCategory::Tool => stats.tool += 1,
            SkillCategory::Field => stats.field += 1,
            SkillCategory::Skill => stats.skill += 1,
        }
    }
    stats
}

/// Keeps only the codes of one category, input order preserved.
pub fn filter_by_category(codes: &[String], category: SkillCategory) -> Vec<String> {
    codes
        .iter()
        .filter(|code| tag_category(code) == category)
        .cloned()
        .collect()
}

/// Whether a stored code classifies as a tool.
pub fn is_tool_tag(code: &str) -> bool {
    tag_category(code) == SkillCategory::Tool
}

/// Whether a stored code classifies as a professional field.
pub fn is_field_tag(code: &str) -> bool {
    tag_category(code) == SkillCategory::Field
}

/// Whether a stored code classifies as a skill/method.
pub fn is_skill_tag(code: &str) -> bool {
    tag_category(code) == SkillCategory::Skill
}

/// Logs one diagnostic line per code plus a summary stats line.
///
/// Debug-level, metadata only: codes, resolved names and counts, no
/// free-form profile text.
pub fn log_tag_diagnostics(codes: &[String]) {
    for (index, code) in codes.iter().enumerate() {
        debug!(
            "event=skill_tag_inspect module=skill_service status=ok index={} code={} name={} category={}",
            index,
            code,
            tag_display_name(code),
            tag_category(code).code()
        );
    }
    let stats = category_stats(codes);
    debug!(
        "event=skill_tag_stats module=skill_service status=ok total={} tool={} field={} skill={}",
        codes.len(),
        stats.tool,
        stats.field,
        stats.skill
    );
}
