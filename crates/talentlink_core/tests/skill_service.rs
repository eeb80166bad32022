use talentlink_core::service::skill_service;
use talentlink_core::{SkillCategory, SkillTagData};

fn codes(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn stored_json_profile_value_round_trips_to_display_data() {
    let raw = r#"["figma","brand_design","user_research"]"#;
    let parsed = skill_service::parse_skill_tags(raw);
    let resolved = skill_service::resolve_tags(&parsed);

    assert_eq!(
        resolved,
        vec![
            SkillTagData {
                code: "figma".to_string(),
                name: "Figma".to_string(),
                category: SkillCategory::Tool,
            },
            SkillTagData {
                code: "brand_design".to_string(),
                name: "品牌设计".to_string(),
                category: SkillCategory::Field,
            },
            SkillTagData {
                code: "user_research".to_string(),
                name: "用户研究".to_string(),
                category: SkillCategory::Skill,
            },
        ]
    );
}

#[test]
fn legacy_comma_profile_value_still_parses() {
    let parsed = skill_service::parse_skill_tags("figma, sketch , branding");
    assert_eq!(parsed, codes(&["figma", "sketch", "branding"]));
}

#[test]
fn non_array_json_values_parse_to_nothing() {
    assert!(skill_service::parse_skill_tags(r#"{"skills":["figma"]}"#).is_empty());
    assert!(skill_service::parse_skill_tags("true").is_empty());
    assert!(skill_service::parse_skill_tags("").is_empty());
}

#[test]
fn unknown_codes_survive_resolution_with_fallbacks() {
    let resolved = skill_service::resolve_tags(&codes(&["figma", "cobol"]));
    assert_eq!(resolved.len(), 2, "unknown codes are kept, not dropped");
    assert_eq!(resolved[1].code, "cobol");
    assert_eq!(resolved[1].name, "cobol");
    assert_eq!(resolved[1].category, SkillCategory::Skill);
}

#[test]
fn grouping_and_stats_agree() {
    let input = codes(&["figma", "maya", "ui_design", "photography", "mystery"]);
    let grouped = skill_service::group_by_category(&input);
    let stats = skill_service::category_stats(&input);

    assert_eq!(grouped.tool.len(), stats.tool);
    assert_eq!(grouped.field.len(), stats.field);
    assert_eq!(grouped.skill.len(), stats.skill);
    assert_eq!(stats.tool + stats.field + stats.skill, input.len());

    assert_eq!(grouped.tool, codes(&["figma", "maya"]));
    assert_eq!(grouped.field, codes(&["ui_design"]));
    assert_eq!(grouped.skill, codes(&["photography", "mystery"]));
}

#[test]
fn grouped_tags_serialize_with_stable_field_names() {
    let grouped = skill_service::group_by_category(&codes(&["figma", "ui_design"]));
    let json = serde_json::to_value(&grouped).expect("grouped tags should serialize");
    assert_eq!(json["tool"], serde_json::json!(["figma"]));
    assert_eq!(json["field"], serde_json::json!(["ui_design"]));
    assert_eq!(json["skill"], serde_json::json!([]));
}

#[test]
fn category_filter_composes_with_parsing() {
    let parsed = skill_service::parse_skill_tags(r#"["figma","ui_design","zeplin"]"#);
    let tools = skill_service::filter_by_category(&parsed, SkillCategory::Tool);
    assert_eq!(tools, codes(&["figma", "zeplin"]));
}

#[test]
fn diagnostics_logging_accepts_any_input() {
    // Emits debug events only; must not panic even without a logger and
    // with unknown codes in the list.
    skill_service::log_tag_diagnostics(&codes(&["figma", "mystery", ""]));
    skill_service::log_tag_diagnostics(&[]);
}
