//! Skill-tag catalogue queries.
//!
//! # Responsibility
//! - Hold the fixed skill-tag table in its normative declaration order.
//! - Expose exact-match lookup and category filtering over the table.
//!
//! # Invariants
//! - `code` is unique across all records.
//! - `name` is not unique: `brand_design` and the legacy `branding` both
//!   display "品牌设计"; name lookup is first-match in declaration order.
//! - Lookups never error; absence is `None` or an empty `Vec`.

use crate::model::skill_tag::{SkillCategory, SkillTag};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

const fn tag(code: &'static str, name: &'static str, category: SkillCategory) -> SkillTag {
    SkillTag {
        code,
        name,
        category,
    }
}

/// The full catalogue. Declaration order is normative: tools, fields,
/// skills, then the legacy entries kept for profiles stored before the
/// current vocabulary.
static CATALOG: [SkillTag; 54] = [
    // Design tools / software
    tag("figma", "Figma", SkillCategory::Tool),
    tag("sketch", "Sketch", SkillCategory::Tool),
    tag("axure_rp", "Axure RP", SkillCategory::Tool),
    tag("photoshop", "Photoshop", SkillCategory::Tool),
    tag("illustrator", "Illustrator", SkillCategory::Tool),
    tag("after_effects", "After Effects", SkillCategory::Tool),
    tag("cinema_4d", "Cinema 4D", SkillCategory::Tool),
    tag("blender", "Blender", SkillCategory::Tool),
    tag("3d_max", "3D Max", SkillCategory::Tool),
    tag("maya", "Maya", SkillCategory::Tool),
    tag("adobe_xd", "Adobe XD", SkillCategory::Tool),
    tag("invision", "InVision", SkillCategory::Tool),
    tag("framer", "Framer", SkillCategory::Tool),
    tag("principle", "Principle", SkillCategory::Tool),
    tag("zeplin", "Zeplin", SkillCategory::Tool),
    tag("abstract", "Abstract", SkillCategory::Tool),
    // Professional design fields
    tag("interaction_design", "交互设计", SkillCategory::Field),
    tag("ui_design", "UI设计", SkillCategory::Field),
    tag("brand_design", "品牌设计", SkillCategory::Field),
    tag("product_design", "产品设计", SkillCategory::Field),
    tag("motion_design", "动效设计", SkillCategory::Field),
    tag("game_art", "游戏美术", SkillCategory::Field),
    tag("web_design", "网页设计", SkillCategory::Field),
    tag("mobile_design", "移动端设计", SkillCategory::Field),
    tag("graphic_design", "平面设计", SkillCategory::Field),
    tag("logo_design", "LOGO设计", SkillCategory::Field),
    tag("interface_design", "界面设计", SkillCategory::Field),
    tag("brand_identity", "品牌标识", SkillCategory::Field),
    tag("animation_design", "动画制作", SkillCategory::Field),
    // Skills and methods
    tag("user_experience", "用户体验", SkillCategory::Skill),
    tag("user_research", "用户研究", SkillCategory::Skill),
    tag("prototype_design", "原型设计", SkillCategory::Skill),
    tag("design_system", "设计系统", SkillCategory::Skill),
    tag("information_architecture", "信息架构", SkillCategory::Skill),
    tag("visual_system", "视觉系统", SkillCategory::Skill),
    tag("wireframing", "线框设计", SkillCategory::Skill),
    tag("user_testing", "用户测试", SkillCategory::Skill),
    tag("persona_design", "用户画像", SkillCategory::Skill),
    tag("journey_mapping", "用户旅程", SkillCategory::Skill),
    tag("usability_testing", "可用性测试", SkillCategory::Skill),
    tag("visual_design", "视觉设计", SkillCategory::Skill),
    tag("typography", "字体设计", SkillCategory::Skill),
    tag("color_theory", "色彩理论", SkillCategory::Skill),
    tag("illustration", "插画", SkillCategory::Skill),
    tag("character_design", "角色设计", SkillCategory::Skill),
    tag("scene_design", "场景设计", SkillCategory::Skill),
    tag("visual_identity", "视觉识别", SkillCategory::Skill),
    tag("lottie", "Lottie", SkillCategory::Skill),
    tag("animation", "动画", SkillCategory::Skill),
    tag("effects", "动效", SkillCategory::Skill),
    tag("3d_modeling", "3D建模", SkillCategory::Skill),
    // Legacy codes kept so stored profiles keep rendering
    tag("branding", "品牌设计", SkillCategory::Field),
    tag("photography", "摄影", SkillCategory::Skill),
    tag("video_editing", "视频剪辑", SkillCategory::Skill),
];

static CODE_INDEX: Lazy<BTreeMap<&'static str, &'static SkillTag>> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|record| (record.code, record))
        .collect()
});

static NAME_INDEX: Lazy<BTreeMap<&'static str, &'static SkillTag>> = Lazy::new(|| {
    let mut index = BTreeMap::new();
    for record in &CATALOG {
        // First-wins: keeps "品牌设计" resolving to brand_design, not the
        // legacy branding entry declared later.
        index.entry(record.name).or_insert(record);
    }
    index
});

/// The whole catalogue in declaration order.
pub fn all_tags() -> &'static [SkillTag] {
    &CATALOG
}

/// Looks up one record by its machine code.
///
/// Exact, case-sensitive, untrimmed match; `None` when absent. Callers
/// must supply codes verbatim as stored.
pub fn get_by_code(code: &str) -> Option<&'static SkillTag> {
    CODE_INDEX.get(code).copied()
}

/// Looks up one record by its display name.
///
/// Exact match; when several records share a name, the one declared
/// earliest wins ("品牌设计" resolves to `brand_design`, never `branding`).
pub fn get_by_name(name: &str) -> Option<&'static SkillTag> {
    NAME_INDEX.get(name).copied()
}

/// Every record's code, in declaration order.
pub fn all_codes() -> Vec<&'static str> {
    CATALOG.iter().map(|record| record.code).collect()
}

/// Every record's display name, in declaration order.
///
/// Duplicate names are preserved; the result contains "品牌设计" twice.
pub fn all_names() -> Vec<&'static str> {
    CATALOG.iter().map(|record| record.name).collect()
}

/// All records of one category, in declaration order.
pub fn get_by_category(category: SkillCategory) -> Vec<&'static SkillTag> {
    CATALOG
        .iter()
        .filter(|record| record.category == category)
        .collect()
}

/// All tool records.
pub fn tool_tags() -> Vec<&'static SkillTag> {
    get_by_category(SkillCategory::Tool)
}

/// All professional-field records.
pub fn field_tags() -> Vec<&'static SkillTag> {
    get_by_category(SkillCategory::Field)
}

/// All skill/method records.
pub fn skill_tags() -> Vec<&'static SkillTag> {
    get_by_category(SkillCategory::Skill)
}

/// Whether a code is in the catalogue.
pub fn contains_code(code: &str) -> bool {
    CODE_INDEX.contains_key(code)
}

/// Total record count.
pub fn len() -> usize {
    CATALOG.len()
}

/// Whether the catalogue is empty. Never true for the shipped data.
pub fn is_empty() -> bool {
    CATALOG.is_empty()
}
