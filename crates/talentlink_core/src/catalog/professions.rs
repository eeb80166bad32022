//! Profession vocabulary queries.
//!
//! # Responsibility
//! - Answer lookup, grouping, selection-list and search queries over the
//!   fixed profession enumeration.
//!
//! # Invariants
//! - Results follow the enumeration's declaration order.
//! - Unknown codes fall back to themselves in display helpers; they are
//!   never an error.

use crate::model::profession::{Profession, ProfessionGroup, ProfessionOption};
use std::collections::BTreeMap;

/// Label used for the leading placeholder entry of filter dropdowns.
const ALL_OPTION_LABEL: &str = "全部";

/// All professions in declaration order.
pub fn all() -> &'static [Profession] {
    &Profession::ALL
}

/// Resolves a profession from its Chinese display name.
///
/// Exact match, first match wins. Display names are unique in the shipped
/// data, so the first match is the only match.
pub fn find_by_display_name(name: &str) -> Option<Profession> {
    Profession::ALL
        .iter()
        .copied()
        .find(|profession| profession.display_name() == name)
}

/// Members of one display group, in declaration order.
pub fn by_group(group: ProfessionGroup) -> &'static [Profession] {
    group.members()
}

/// (code, label) pairs for selection lists.
///
/// With `include_all` set, a leading `{"", "全部"}` entry is prepended for
/// filter dropdowns.
pub fn select_options(include_all: bool) -> Vec<ProfessionOption> {
    let mut options = Vec::with_capacity(Profession::ALL.len() + usize::from(include_all));
    if include_all {
        options.push(ProfessionOption {
            value: String::new(),
            label: ALL_OPTION_LABEL.to_string(),
        });
    }
    options.extend(Profession::ALL.iter().map(|profession| ProfessionOption {
        value: profession.code().to_string(),
        label: profession.display_name().to_string(),
    }));
    options
}

/// Case-insensitive substring search over label, code and English name.
///
/// A blank keyword returns the full option list (without the "全部"
/// entry). Non-blank keywords are matched verbatim, surrounding
/// whitespace included, so `" ui "` only hits names that actually
/// contain that spacing.
pub fn search(keyword: &str) -> Vec<ProfessionOption> {
    if keyword.trim().is_empty() {
        return select_options(false);
    }

    let needle = keyword.to_lowercase();
    Profession::ALL
        .iter()
        .filter(|profession| {
            profession.display_name().to_lowercase().contains(&needle)
                || profession.code().to_lowercase().contains(&needle)
                || profession.english_name().to_lowercase().contains(&needle)
        })
        .map(|profession| ProfessionOption {
            value: profession.code().to_string(),
            label: profession.display_name().to_string(),
        })
        .collect()
}

/// Batch projection to Chinese display names.
pub fn display_names(professions: &[Profession]) -> Vec<&'static str> {
    professions
        .iter()
        .map(|profession| profession.display_name())
        .collect()
}

/// Chinese display name for a stored profession code.
///
/// Unknown codes render as themselves so stale stored values stay visible
/// instead of disappearing.
pub fn display_name_for(code: &str) -> &str {
    match Profession::from_code(code) {
        Some(profession) => profession.display_name(),
        None => code,
    }
}

/// Occurrence counts for a list of stored codes, keyed by display name.
///
/// Unknown codes are counted under their raw value.
pub fn statistics(codes: &[String]) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for code in codes {
        let key = display_name_for(code).to_string();
        *stats.entry(key).or_insert(0) += 1;
    }
    stats
}
