//! Rendering dispatcher.
//!
//! Pure mapping from `(kind, config, visibility)` to a typed visual tree.
//! Hidden sections produce nothing at all; unknown kinds produce a
//! labeled placeholder so silent data loss stays observable. Every
//! optional field degrades gracefully, so this function has no failure
//! mode.

use serde::Serialize;
use serde_json::Value;

use crate::kind::SectionKind;
use crate::section::{
    Alignment, BackgroundType, GalleryImage, ProductItem, SectionConfig, StatItem,
};
use crate::templates::DEFAULT_HERO_GRADIENT;
use crate::types::DbId;

/// Fallback gallery column count when the stored value is out of range.
pub const DEFAULT_GALLERY_COLUMNS: u8 = 2;
/// Supported gallery column range.
pub const GALLERY_COLUMN_RANGE: std::ops::RangeInclusive<i64> = 1..=4;

/// Resolved hero background layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum HeroBackground {
    Gradient(String),
    Color(String),
    Image(String),
}

/// Hero call-to-action, present only when the config carries a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction {
    pub text: String,
    pub url: String,
}

/// One rendered section of the visual tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderedSection {
    Hero {
        title: String,
        subtitle: String,
        background: HeroBackground,
        alignment: Alignment,
        cta: Option<CallToAction>,
    },
    Stats {
        heading: String,
        stats: Vec<StatItem>,
    },
    Products {
        heading: String,
        products: Vec<ProductItem>,
    },
    Video {
        heading: String,
        video_url: String,
        thumbnail: Option<String>,
        autoplay: bool,
        description: Option<String>,
    },
    Gallery {
        heading: String,
        columns: u8,
        images: Vec<GalleryImage>,
    },
    Text {
        heading: String,
        content: String,
        alignment: Alignment,
    },
    /// Visible placeholder naming the unrecognized kind.
    Unknown { unknown_kind: String },
}

/// The data a renderer needs from one stored section.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub id: DbId,
    pub kind: SectionKind,
    pub sort_order: i64,
    pub is_visible: bool,
    pub config: Value,
}

/// Render one section. Hidden sections yield `None`: fully absent from
/// the output, not an empty placeholder.
pub fn render_section(kind: &SectionKind, config: &Value, is_visible: bool) -> Option<RenderedSection> {
    if !is_visible {
        return None;
    }

    let rendered = match SectionConfig::from_value(kind, config) {
        SectionConfig::Hero(hero) => {
            let background = match hero.background_type {
                BackgroundType::Color => hero.background_color.map(HeroBackground::Color),
                BackgroundType::Image => hero.background_image.map(HeroBackground::Image),
                BackgroundType::Gradient => {
                    hero.background_gradient.map(HeroBackground::Gradient)
                }
            }
            // A declared background with no matching value falls back to
            // the built-in gradient rather than failing.
            .unwrap_or_else(|| HeroBackground::Gradient(DEFAULT_HERO_GRADIENT.to_string()));

            let cta = hero.cta_text.map(|text| CallToAction {
                text,
                url: hero.cta_url.unwrap_or_else(|| "#".to_string()),
            });

            RenderedSection::Hero {
                title: hero.title,
                subtitle: hero.subtitle,
                background,
                alignment: hero.alignment,
                cta,
            }
        }
        SectionConfig::Stats(stats) => RenderedSection::Stats {
            heading: stats.heading,
            stats: stats.stats,
        },
        SectionConfig::Products(products) => RenderedSection::Products {
            heading: products.heading,
            products: products.products,
        },
        SectionConfig::Video(video) => RenderedSection::Video {
            heading: video.heading,
            video_url: video.video_url,
            thumbnail: video.thumbnail,
            autoplay: video.autoplay,
            description: video.description,
        },
        SectionConfig::Gallery(gallery) => RenderedSection::Gallery {
            heading: gallery.heading,
            columns: gallery
                .columns
                .filter(|c| GALLERY_COLUMN_RANGE.contains(c))
                .map(|c| c as u8)
                .unwrap_or(DEFAULT_GALLERY_COLUMNS),
            images: gallery.images,
        },
        SectionConfig::Text(text) => RenderedSection::Text {
            heading: text.heading,
            content: text.content,
            alignment: text.alignment,
        },
        SectionConfig::Unknown(_) => RenderedSection::Unknown {
            unknown_kind: kind.as_str().to_string(),
        },
    };

    Some(rendered)
}

/// Render a project's visual tree: the visible subset sorted ascending by
/// sort key, ties broken by id (insertion sequence). Deterministic for
/// identical input.
pub fn render_project(sections: &[SectionView]) -> Vec<RenderedSection> {
    let mut ordered: Vec<&SectionView> = sections.iter().collect();
    ordered.sort_by_key(|s| (s.sort_order, s.id));
    ordered
        .into_iter()
        .filter_map(|s| render_section(&s.kind, &s.config, s.is_visible))
        .collect()
}
