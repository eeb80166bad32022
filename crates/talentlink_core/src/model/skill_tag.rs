//! Skill-tag domain model.
//!
//! # Responsibility
//! - Define the closed three-way category classification for skill tags.
//! - Define the catalogue record shape and its owned projection.
//!
//! # Invariants
//! - `SkillCategory` is a closed set; unknown category codes never
//!   deserialize into a variant.
//! - A catalogue record's `code` is the stable storage key; `name` is a
//!   display label and may repeat across records.

use serde::{Deserialize, Serialize};

/// Closed classification for skill tags.
///
/// Serialized as the lowercase category code (`tool|field|skill`), which is
/// the value stored and sent over the wire. Unknown codes fail to
/// deserialize; the code set is part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    /// Design software and tooling (Figma, Photoshop, ...).
    Tool,
    /// Professional design domains (UI设计, 品牌设计, ...).
    Field,
    /// Skills and methods (用户研究, 原型设计, ...).
    Skill,
}

impl SkillCategory {
    /// All categories in their fixed declaration order.
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Tool,
        SkillCategory::Field,
        SkillCategory::Skill,
    ];

    /// Stable machine code for this category.
    pub fn code(self) -> &'static str {
        match self {
            SkillCategory::Tool => "tool",
            SkillCategory::Field => "field",
            SkillCategory::Skill => "skill",
        }
    }

    /// Chinese display label.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Tool => "工具",
            SkillCategory::Field => "专业领域",
            SkillCategory::Skill => "技能方法",
        }
    }

    /// Longer Chinese description used by grouped displays.
    pub fn description(self) -> &'static str {
        match self {
            SkillCategory::Tool => "设计工具/软件类",
            SkillCategory::Field => "设计专业领域类",
            SkillCategory::Skill => "设计技能/方法类",
        }
    }

    /// Resolves a category from its machine code.
    ///
    /// Exact match only; returns `None` for anything outside the closed
    /// code set. Absence is not an error condition here.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tool" => Some(SkillCategory::Tool),
            "field" => Some(SkillCategory::Field),
            "skill" => Some(SkillCategory::Skill),
            _ => None,
        }
    }
}

/// One fixed catalogue record.
///
/// Records live in a compile-time table; all fields are `'static`. `code`
/// is unique across the catalogue, `name` is not (two records deliberately
/// share "品牌设计" so that profiles stored under the legacy `branding`
/// code still render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillTag {
    /// Stable machine code, the primary key (e.g. `figma`).
    pub code: &'static str,
    /// Display label (e.g. `Figma`, `交互设计`).
    pub name: &'static str,
    /// The single category this record belongs to.
    pub category: SkillCategory,
}

impl SkillTag {
    /// Owned projection of this record.
    pub fn to_data(&self) -> SkillTagData {
        SkillTagData {
            code: self.code.to_string(),
            name: self.name.to_string(),
            category: self.category,
        }
    }
}

/// Owned skill-tag projection for caller-supplied code lists.
///
/// Unlike [`SkillTag`] this shape can carry codes that are not in the
/// catalogue: resolution of stored profile values keeps unknown codes
/// (rendered as themselves, categorized as `skill`) instead of dropping
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTagData {
    /// Machine code as supplied by the caller.
    pub code: String,
    /// Resolved display name, or the raw code when unknown.
    pub name: String,
    /// Resolved category, `skill` when unknown.
    pub category: SkillCategory,
}

#[cfg(test)]
mod tests {
    use super::{SkillCategory, SkillTag, SkillTagData};

    #[test]
    fn category_codes_round_trip() {
        for category in SkillCategory::ALL {
            assert_eq!(
                SkillCategory::from_code(category.code()),
                Some(category),
                "code {} should resolve back to its category",
                category.code()
            );
        }
    }

    #[test]
    fn category_from_code_rejects_unknown_and_unnormalized_input() {
        assert_eq!(SkillCategory::from_code("gadget"), None);
        assert_eq!(SkillCategory::from_code("Tool"), None);
        assert_eq!(SkillCategory::from_code(" tool "), None);
        assert_eq!(SkillCategory::from_code(""), None);
    }

    #[test]
    fn category_labels_match_the_platform_vocabulary() {
        assert_eq!(SkillCategory::Tool.label(), "工具");
        assert_eq!(SkillCategory::Field.label(), "专业领域");
        assert_eq!(SkillCategory::Skill.label(), "技能方法");
    }

    #[test]
    fn category_descriptions_match_the_platform_vocabulary() {
        assert_eq!(SkillCategory::Tool.description(), "设计工具/软件类");
        assert_eq!(SkillCategory::Field.description(), "设计专业领域类");
        assert_eq!(SkillCategory::Skill.description(), "设计技能/方法类");
    }

    #[test]
    fn category_serializes_as_lowercase_code() {
        let json = serde_json::to_value(SkillCategory::Field).expect("category should serialize");
        assert_eq!(json, "field");

        let decoded: SkillCategory =
            serde_json::from_value(json).expect("category code should deserialize");
        assert_eq!(decoded, SkillCategory::Field);
    }

    #[test]
    fn category_deserialize_rejects_unknown_code() {
        let result = serde_json::from_str::<SkillCategory>("\"gadget\"");
        assert!(result.is_err(), "unknown category codes must not decode");
    }

    #[test]
    fn to_data_copies_all_fields() {
        let tag = SkillTag {
            code: "figma",
            name: "Figma",
            category: SkillCategory::Tool,
        };
        assert_eq!(
            tag.to_data(),
            SkillTagData {
                code: "figma".to_string(),
                name: "Figma".to_string(),
                category: SkillCategory::Tool,
            }
        );
    }

    #[test]
    fn tag_data_serializes_category_as_code_string() {
        let data = SkillTagData {
            code: "brand_design".to_string(),
            name: "品牌设计".to_string(),
            category: SkillCategory::Field,
        };
        let json = serde_json::to_value(&data).expect("tag data should serialize");
        assert_eq!(json["code"], "brand_design");
        assert_eq!(json["name"], "品牌设计");
        assert_eq!(json["category"], "field");

        let decoded: SkillTagData =
            serde_json::from_value(json).expect("tag data should deserialize");
        assert_eq!(decoded, data);
    }
}
