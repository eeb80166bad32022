//! Profession domain model.
//!
//! # Responsibility
//! - Define the closed designer-profession enumeration and its grouping.
//! - Keep the SCREAMING_SNAKE profession codes as the API/storage contract.
//!
//! # Invariants
//! - The four groups partition all fifteen professions.
//! - Chinese display names are unique in the shipped data.

use serde::{Deserialize, Serialize};

/// A designer's primary occupation.
///
/// Serialized as the SCREAMING_SNAKE code (`UI_DESIGNER`, ...), the value
/// persisted on profiles and exchanged with the API. Unknown codes fail to
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    UiDesigner,
    UxDesigner,
    UiUxDesigner,
    VisualDesigner,
    InteractionDesigner,
    ProductDesigner,
    BrandDesigner,
    MotionDesigner,
    ThreeDDesigner,
    GraphicDesigner,
    WebDesigner,
    Illustrator,
    InteriorDesigner,
    Architect,
    LandscapeDesigner,
}

impl Profession {
    /// All professions in their fixed declaration order.
    pub const ALL: [Profession; 15] = [
        Profession::UiDesigner,
        Profession::UxDesigner,
        Profession::UiUxDesigner,
        Profession::VisualDesigner,
        Profession::InteractionDesigner,
        Profession::ProductDesigner,
        Profession::BrandDesigner,
        Profession::MotionDesigner,
        Profession::ThreeDDesigner,
        Profession::GraphicDesigner,
        Profession::WebDesigner,
        Profession::Illustrator,
        Profession::InteriorDesigner,
        Profession::Architect,
        Profession::LandscapeDesigner,
    ];

    /// Stable SCREAMING_SNAKE machine code, the wire/storage value.
    pub fn code(self) -> &'static str {
        match self {
            Profession::UiDesigner => "UI_DESIGNER",
            Profession::UxDesigner => "UX_DESIGNER",
            Profession::UiUxDesigner => "UI_UX_DESIGNER",
            Profession::VisualDesigner => "VISUAL_DESIGNER",
            Profession::InteractionDesigner => "INTERACTION_DESIGNER",
            Profession::ProductDesigner => "PRODUCT_DESIGNER",
            Profession::BrandDesigner => "BRAND_DESIGNER",
            Profession::MotionDesigner => "MOTION_DESIGNER",
            Profession::ThreeDDesigner => "THREE_D_DESIGNER",
            Profession::GraphicDesigner => "GRAPHIC_DESIGNER",
            Profession::WebDesigner => "WEB_DESIGNER",
            Profession::Illustrator => "ILLUSTRATOR",
            Profession::InteriorDesigner => "INTERIOR_DESIGNER",
            Profession::Architect => "ARCHITECT",
            Profession::LandscapeDesigner => "LANDSCAPE_DESIGNER",
        }
    }

    /// Chinese display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Profession::UiDesigner => "UI设计师",
            Profession::UxDesigner => "UX设计师",
            Profession::UiUxDesigner => "UI/UX设计师",
            Profession::VisualDesigner => "视觉设计师",
            Profession::InteractionDesigner => "交互设计师",
            Profession::ProductDesigner => "产品设计师",
            Profession::BrandDesigner => "品牌设计师",
            Profession::MotionDesigner => "动效设计师",
            Profession::ThreeDDesigner => "3D设计师",
            Profession::GraphicDesigner => "平面设计师",
            Profession::WebDesigner => "网页设计师",
            Profession::Illustrator => "插画师",
            Profession::InteriorDesigner => "室内设计师",
            Profession::Architect => "建筑师",
            Profession::LandscapeDesigner => "景观设计师",
        }
    }

    /// Short English display name.
    pub fn english_name(self) -> &'static str {
        match self {
            Profession::UiDesigner => "UI Designer",
            Profession::UxDesigner => "UX Designer",
            Profession::UiUxDesigner => "UI/UX Designer",
            Profession::VisualDesigner => "Visual Designer",
            Profession::InteractionDesigner => "Interaction Designer",
            Profession::ProductDesigner => "Product Designer",
            Profession::BrandDesigner => "Brand Designer",
            Profession::MotionDesigner => "Motion Designer",
            Profession::ThreeDDesigner => "3D Designer",
            Profession::GraphicDesigner => "Graphic Designer",
            Profession::WebDesigner => "Web Designer",
            Profession::Illustrator => "Illustrator",
            Profession::InteriorDesigner => "Interior Designer",
            Profession::Architect => "Architect",
            Profession::LandscapeDesigner => "Landscape Designer",
        }
    }

    /// The display group this profession belongs to.
    pub fn group(self) -> ProfessionGroup {
        match self {
            Profession::UiDesigner
            | Profession::UxDesigner
            | Profession::UiUxDesigner
            | Profession::InteractionDesigner
            | Profession::ProductDesigner
            | Profession::WebDesigner => ProfessionGroup::Digital,
            Profession::VisualDesigner
            | Profession::BrandDesigner
            | Profession::GraphicDesigner
            | Profession::Illustrator => ProfessionGroup::Visual,
            Profession::MotionDesigner | Profession::ThreeDDesigner => ProfessionGroup::Multimedia,
            Profession::InteriorDesigner
            | Profession::Architect
            | Profession::LandscapeDesigner => ProfessionGroup::Spatial,
        }
    }

    /// Resolves a profession from its SCREAMING_SNAKE code.
    ///
    /// Exact match only; `None` for anything outside the closed code set.
    pub fn from_code(code: &str) -> Option<Self> {
        Profession::ALL
            .iter()
            .copied()
            .find(|profession| profession.code() == code)
    }
}

/// Closed display grouping over [`Profession`].
///
/// Serialized as the lowercase group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfessionGroup {
    /// Screen-product work: UI/UX, interaction, product, web.
    Digital,
    /// Visual identity work: visual, brand, graphic, illustration.
    Visual,
    /// Motion and 3D work.
    Multimedia,
    /// Built-environment work: interior, architecture, landscape.
    Spatial,
}

impl ProfessionGroup {
    /// All groups in their fixed declaration order.
    pub const ALL: [ProfessionGroup; 4] = [
        ProfessionGroup::Digital,
        ProfessionGroup::Visual,
        ProfessionGroup::Multimedia,
        ProfessionGroup::Spatial,
    ];

    /// Stable lowercase group name.
    pub fn name(self) -> &'static str {
        match self {
            ProfessionGroup::Digital => "digital",
            ProfessionGroup::Visual => "visual",
            ProfessionGroup::Multimedia => "multimedia",
            ProfessionGroup::Spatial => "spatial",
        }
    }

    /// Group members in declaration order.
    pub fn members(self) -> &'static [Profession] {
        match self {
            ProfessionGroup::Digital => &[
                Profession::UiDesigner,
                Profession::UxDesigner,
                Profession::UiUxDesigner,
                Profession::InteractionDesigner,
                Profession::ProductDesigner,
                Profession::WebDesigner,
            ],
            ProfessionGroup::Visual => &[
                Profession::VisualDesigner,
                Profession::BrandDesigner,
                Profession::GraphicDesigner,
                Profession::Illustrator,
            ],
            ProfessionGroup::Multimedia => {
                &[Profession::MotionDesigner, Profession::ThreeDDesigner]
            }
            ProfessionGroup::Spatial => &[
                Profession::InteriorDesigner,
                Profession::Architect,
                Profession::LandscapeDesigner,
            ],
        }
    }

    /// Resolves a group from its lowercase name; `None` when unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "digital" => Some(ProfessionGroup::Digital),
            "visual" => Some(ProfessionGroup::Visual),
            "multimedia" => Some(ProfessionGroup::Multimedia),
            "spatial" => Some(ProfessionGroup::Spatial),
            _ => None,
        }
    }
}

/// Plain (code, label) pair used by selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionOption {
    /// Profession code, or empty string for the "全部" placeholder entry.
    pub value: String,
    /// Chinese display label.
    pub label: String,
}
