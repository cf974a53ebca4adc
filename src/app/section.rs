// SPDX-License-Identifier: MPL-2.0
//! Page sections, feature cards, and the fixed page geometry.
//!
//! The landing page is a single scrollable column of four sections. Their
//! heights are fixed, which keeps every scroll target and reveal region a
//! compile-time constant: navigation, the progress ribbon, and the reveal
//! tracker all share this one source of truth.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::state::reveal::Region;

/// Vertical space reserved for the features heading and subheading.
pub const FEATURES_HEADING_BLOCK: f32 = 96.0;

/// Height of the hero section.
pub const HERO_HEIGHT: f32 = 560.0;

/// Height of the features grid section.
pub const FEATURES_HEIGHT: f32 = 2.0 * spacing::XL
    + FEATURES_HEADING_BLOCK
    + 2.0 * (sizing::CARD_LIFT + sizing::CARD_HEIGHT)
    + spacing::LG;

/// Height of the mentor call-to-action section.
pub const MENTOR_HEIGHT: f32 = 420.0;

/// Height of the footer.
pub const FOOTER_HEIGHT: f32 = 300.0;

/// The four sections of the page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Features,
    Mentor,
    Footer,
}

impl SectionId {
    /// All sections in scroll order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::Mentor,
        SectionId::Footer,
    ];

    /// Anchor name used by navigation links.
    #[must_use]
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::Features => "features",
            SectionId::Mentor => "mentor",
            SectionId::Footer => "contact",
        }
    }

    /// Resolves an anchor name back to its section.
    ///
    /// Unknown anchors resolve to `None`; callers treat that as a no-op
    /// rather than an error.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// i18n key for the navbar link label.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            SectionId::Hero => "navbar-link-home",
            SectionId::Features => "navbar-link-features",
            SectionId::Mentor => "navbar-link-mentor",
            SectionId::Footer => "navbar-link-contact",
        }
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        match self {
            SectionId::Hero => HERO_HEIGHT,
            SectionId::Features => FEATURES_HEIGHT,
            SectionId::Mentor => MENTOR_HEIGHT,
            SectionId::Footer => FOOTER_HEIGHT,
        }
    }
}

/// Absolute offset of a section's top edge within the page.
#[must_use]
pub fn section_offset(section: SectionId) -> f32 {
    let mut offset = 0.0;
    for candidate in SectionId::ALL {
        if candidate == section {
            break;
        }
        offset += candidate.height();
    }
    offset
}

/// Total height of the scrollable page.
#[must_use]
pub fn page_height() -> f32 {
    SectionId::ALL.iter().map(SectionId::height).sum()
}

/// The four feature cards, in grid order (left to right, top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    Roadmaps,
    Plans,
    Mentor,
    Playlists,
}

impl FeatureId {
    /// All cards in grid order, which is also their stagger order.
    pub const ALL: [FeatureId; 4] = [
        FeatureId::Roadmaps,
        FeatureId::Plans,
        FeatureId::Mentor,
        FeatureId::Playlists,
    ];

    /// Position in the grid.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            FeatureId::Roadmaps => 0,
            FeatureId::Plans => 1,
            FeatureId::Mentor => 2,
            FeatureId::Playlists => 3,
        }
    }

    /// i18n key for the card title.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            FeatureId::Roadmaps => "feature-roadmaps-title",
            FeatureId::Plans => "feature-plans-title",
            FeatureId::Mentor => "feature-mentor-title",
            FeatureId::Playlists => "feature-playlists-title",
        }
    }

    /// i18n key for the card body.
    #[must_use]
    pub fn body_key(&self) -> &'static str {
        match self {
            FeatureId::Roadmaps => "feature-roadmaps-body",
            FeatureId::Plans => "feature-plans-body",
            FeatureId::Mentor => "feature-mentor-body",
            FeatureId::Playlists => "feature-playlists-body",
        }
    }
}

/// Everything the reveal tracker watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    FeatureCard(FeatureId),
    MentorPanel,
    Footer,
}

/// Page-absolute region of a feature card, including its hover-lift allowance.
///
/// Cards sit in a two-column grid below the section heading; the lift
/// allowance above each card belongs to its row so hovering never shifts
/// the grid.
#[must_use]
pub fn feature_card_region(card: FeatureId) -> Region {
    let first_row_top = section_offset(SectionId::Features) + spacing::XL + FEATURES_HEADING_BLOCK;
    let row_height = sizing::CARD_LIFT + sizing::CARD_HEIGHT;
    let row_stride = row_height + spacing::LG;
    let row = (card.index() / 2) as f32;

    Region {
        top: first_row_top + row * row_stride,
        height: row_height,
    }
}

/// Page-absolute region of the mentor call-to-action panel.
#[must_use]
pub fn mentor_region() -> Region {
    Region {
        top: section_offset(SectionId::Mentor),
        height: MENTOR_HEIGHT,
    }
}

/// Page-absolute region of the footer.
#[must_use]
pub fn footer_region() -> Region {
    Region {
        top: section_offset(SectionId::Footer),
        height: FOOTER_HEIGHT,
    }
}
