//! Canonical default configs per section kind.
//!
//! These seed newly added sections and double as the reference shape for
//! each kind. Lookup is total: unknown kinds get an empty object so that
//! adding a section of an unregistered kind still succeeds.

use serde_json::{json, Value};

use crate::kind::SectionKind;

/// Built-in hero gradient, also the renderer's fallback background.
pub const DEFAULT_HERO_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

/// Canonical default configuration for a section kind.
///
/// Pure lookup; never fails. Unknown kinds yield an empty object.
pub fn section_template(kind: &SectionKind) -> Value {
    match kind {
        SectionKind::Hero => json!({
            "title": "Welcome to Our Presentation",
            "subtitle": "Create stunning landing pages with AI assistance",
            "backgroundType": "gradient",
            "backgroundGradient": DEFAULT_HERO_GRADIENT,
            "alignment": "center",
            "ctaText": "Get Started",
            "ctaUrl": "#",
        }),
        SectionKind::Stats => json!({
            "heading": "Key Statistics",
            "stats": [
                { "label": "Customers", "value": "10,000+", "description": "Active users worldwide" },
                { "label": "Projects", "value": "50,000+", "description": "Successfully completed" },
                { "label": "Satisfaction", "value": "99%", "description": "Customer satisfaction rate" },
            ],
        }),
        SectionKind::Products => json!({
            "heading": "Our Products",
            "products": [
                { "name": "Product One", "description": "High-quality solution for your needs", "price": "$99" },
                { "name": "Product Two", "description": "Premium features and support", "price": "$199" },
                { "name": "Product Three", "description": "Enterprise-grade platform", "price": "$299" },
            ],
        }),
        SectionKind::Video => json!({
            "heading": "Watch Our Demo",
            "videoUrl": "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "autoplay": false,
            "description": "See how our platform works in action",
        }),
        SectionKind::Gallery => json!({
            "heading": "Photo Gallery",
            "images": [
                { "url": "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe", "caption": "Image 1" },
                { "url": "https://images.unsplash.com/photo-1618005198919-d3d4b5a92ead", "caption": "Image 2" },
                { "url": "https://images.unsplash.com/photo-1618004912476-29818d81ae2e", "caption": "Image 3" },
                { "url": "https://images.unsplash.com/photo-1617957738682-9fdf76736e9e", "caption": "Image 4" },
            ],
            "columns": 2,
        }),
        SectionKind::Text => json!({
            "heading": "About Us",
            "content": "We are dedicated to creating the best presentation tools for businesses worldwide. Our platform combines powerful features with an intuitive interface to help you create stunning landing pages in minutes.",
            "alignment": "left",
        }),
        SectionKind::Other(_) => json!({}),
    }
}

#[cfg(test)]
mod tests {
    use crate::section::SectionConfig;

    use super::*;

    #[test]
    fn every_known_template_passes_strict_validation() {
        for tag in crate::kind::KNOWN_KINDS {
            let kind = SectionKind::parse(tag);
            let template = section_template(&kind);
            SectionConfig::validate(&kind, &template)
                .unwrap_or_else(|e| panic!("{tag} template invalid: {e}"));
        }
    }

    #[test]
    fn unknown_kind_gets_empty_object() {
        let template = section_template(&SectionKind::Other("faq".into()));
        assert_eq!(template, json!({}));
    }

    #[test]
    fn gallery_template_defaults_two_columns() {
        let template = section_template(&SectionKind::Gallery);
        assert_eq!(template["columns"], 2);
        assert_eq!(template["images"].as_array().unwrap().len(), 4);
    }
}
