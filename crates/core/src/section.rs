//! Typed section configuration variants.
//!
//! Stored configs are free-form JSON documents tagged by the owning
//! section's kind. [`SectionConfig`] is the sum type over those shapes,
//! with two decoding paths:
//!
//! - [`SectionConfig::from_value`] is *lenient*: missing or mistyped
//!   fields degrade to blank/default values so any stored document can be
//!   rendered without a crash.
//! - [`SectionConfig::validate`] is *strict*: required fields must be
//!   present with the right JSON types, yielding
//!   [`CoreError::Validation`] naming the offending field. Applied at the
//!   storage boundary before a config is persisted.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::kind::SectionKind;

/// Horizontal alignment of section content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Lenient parse with a caller-supplied fallback.
    fn parse_or(tag: Option<&str>, fallback: Alignment) -> Alignment {
        match tag {
            Some("left") => Alignment::Left,
            Some("center") => Alignment::Center,
            Some("right") => Alignment::Right,
            _ => fallback,
        }
    }
}

/// Hero background selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Gradient,
    Color,
    Image,
}

impl BackgroundType {
    fn parse_or_default(tag: Option<&str>) -> BackgroundType {
        match tag {
            Some("color") => BackgroundType::Color,
            Some("image") => BackgroundType::Image,
            _ => BackgroundType::Gradient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub background_type: BackgroundType,
    pub background_color: Option<String>,
    pub background_gradient: Option<String>,
    pub background_image: Option<String>,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatItem {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsConfig {
    pub heading: String,
    pub stats: Vec<StatItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductItem {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsConfig {
    pub heading: String,
    pub products: Vec<ProductItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConfig {
    pub heading: String,
    pub video_url: String,
    pub thumbnail: Option<String>,
    pub autoplay: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryImage {
    pub url: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryConfig {
    pub heading: String,
    pub images: Vec<GalleryImage>,
    /// Raw column count as stored. The renderer clamps out-of-range
    /// values to the 2-column fallback.
    pub columns: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextConfig {
    pub heading: String,
    /// Free text; newlines are significant.
    pub content: String,
    pub alignment: Alignment,
}

/// A section configuration, tagged by the owning section's kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionConfig {
    Hero(HeroConfig),
    Stats(StatsConfig),
    Products(ProductsConfig),
    Video(VideoConfig),
    Gallery(GalleryConfig),
    Text(TextConfig),
    /// Config of an unrecognized kind, carried verbatim.
    Unknown(Value),
}

impl SectionConfig {
    /// Lenient decode of a stored config document.
    ///
    /// Never fails: missing fields become empty strings or `None`,
    /// mistyped fields fall back to defaults, and non-object documents
    /// decode as if they were empty objects. This is the path the
    /// renderer uses, so a malformed document shows blank fields instead
    /// of crashing.
    pub fn from_value(kind: &SectionKind, value: &Value) -> SectionConfig {
        match kind {
            SectionKind::Hero => SectionConfig::Hero(HeroConfig {
                title: str_or_blank(value, "title"),
                subtitle: str_or_blank(value, "subtitle"),
                background_type: BackgroundType::parse_or_default(opt_raw_str(
                    value,
                    "backgroundType",
                )),
                background_color: opt_str(value, "backgroundColor"),
                background_gradient: opt_str(value, "backgroundGradient"),
                background_image: opt_str(value, "backgroundImage"),
                cta_text: opt_str(value, "ctaText"),
                cta_url: opt_str(value, "ctaUrl"),
                alignment: Alignment::parse_or(opt_raw_str(value, "alignment"), Alignment::Center),
            }),
            SectionKind::Stats => SectionConfig::Stats(StatsConfig {
                heading: str_or_blank(value, "heading"),
                stats: arr(value, "stats")
                    .iter()
                    .map(|item| StatItem {
                        label: str_or_blank(item, "label"),
                        value: str_or_blank(item, "value"),
                        description: opt_str(item, "description"),
                    })
                    .collect(),
            }),
            SectionKind::Products => SectionConfig::Products(ProductsConfig {
                heading: str_or_blank(value, "heading"),
                products: arr(value, "products")
                    .iter()
                    .map(|item| ProductItem {
                        name: str_or_blank(item, "name"),
                        description: str_or_blank(item, "description"),
                        image: opt_str(item, "image"),
                        price: opt_str(item, "price"),
                    })
                    .collect(),
            }),
            SectionKind::Video => SectionConfig::Video(VideoConfig {
                heading: str_or_blank(value, "heading"),
                video_url: str_or_blank(value, "videoUrl"),
                thumbnail: opt_str(value, "thumbnail"),
                autoplay: value
                    .get("autoplay")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                description: opt_str(value, "description"),
            }),
            SectionKind::Gallery => SectionConfig::Gallery(GalleryConfig {
                heading: str_or_blank(value, "heading"),
                images: arr(value, "images")
                    .iter()
                    .map(|item| GalleryImage {
                        url: str_or_blank(item, "url"),
                        caption: opt_str(item, "caption"),
                    })
                    .collect(),
                columns: value.get("columns").and_then(Value::as_i64),
            }),
            SectionKind::Text => SectionConfig::Text(TextConfig {
                heading: str_or_blank(value, "heading"),
                content: str_or_blank(value, "content"),
                alignment: Alignment::parse_or(opt_raw_str(value, "alignment"), Alignment::Left),
            }),
            SectionKind::Other(_) => SectionConfig::Unknown(value.clone()),
        }
    }

    /// Strict shape check for a config document being written.
    ///
    /// Required fields must be present with the right JSON type;
    /// enum-valued fields are checked for membership when present.
    /// Unknown kinds only require an object, matching the empty template
    /// they start from.
    pub fn validate(kind: &SectionKind, value: &Value) -> Result<(), CoreError> {
        let obj = value.as_object().ok_or_else(|| {
            CoreError::Validation(format!("{kind} config must be a JSON object"))
        })?;

        match kind {
            SectionKind::Hero => {
                require_str(obj, "title", kind)?;
                require_str(obj, "subtitle", kind)?;
                check_enum(obj, "backgroundType", &["gradient", "color", "image"], kind)?;
                check_enum(obj, "alignment", &["left", "center", "right"], kind)?;
            }
            SectionKind::Stats => {
                require_str(obj, "heading", kind)?;
                for item in require_array(obj, "stats", kind)? {
                    let item = require_item_object(item, "stats", kind)?;
                    require_str(item, "label", kind)?;
                    require_str(item, "value", kind)?;
                }
            }
            SectionKind::Products => {
                require_str(obj, "heading", kind)?;
                for item in require_array(obj, "products", kind)? {
                    let item = require_item_object(item, "products", kind)?;
                    require_str(item, "name", kind)?;
                    require_str(item, "description", kind)?;
                }
            }
            SectionKind::Video => {
                require_str(obj, "heading", kind)?;
                require_str(obj, "videoUrl", kind)?;
                if let Some(autoplay) = obj.get("autoplay") {
                    if !autoplay.is_boolean() {
                        return Err(CoreError::Validation(format!(
                            "{kind} config field 'autoplay' must be a boolean"
                        )));
                    }
                }
            }
            SectionKind::Gallery => {
                require_str(obj, "heading", kind)?;
                for item in require_array(obj, "images", kind)? {
                    let item = require_item_object(item, "images", kind)?;
                    require_str(item, "url", kind)?;
                }
                if let Some(columns) = obj.get("columns") {
                    if !columns.is_i64() && !columns.is_u64() {
                        return Err(CoreError::Validation(format!(
                            "{kind} config field 'columns' must be an integer"
                        )));
                    }
                }
            }
            SectionKind::Text => {
                require_str(obj, "heading", kind)?;
                require_str(obj, "content", kind)?;
                check_enum(obj, "alignment", &["left", "center", "right"], kind)?;
            }
            SectionKind::Other(_) => {}
        }
        Ok(())
    }
}

// -- Lenient accessors ------------------------------------------------------

fn str_or_blank(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn opt_raw_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn arr<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

// -- Strict checks ----------------------------------------------------------

fn require_str(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    kind: &SectionKind,
) -> Result<(), CoreError> {
    match obj.get(key) {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(CoreError::Validation(format!(
            "{kind} config field '{key}' must be a string"
        ))),
        None => Err(CoreError::Validation(format!(
            "{kind} config is missing required field '{key}'"
        ))),
    }
}

fn require_array<'a>(
    obj: &'a serde_json::Map<String, Value>,
    key: &str,
    kind: &SectionKind,
) -> Result<&'a [Value], CoreError> {
    match obj.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(CoreError::Validation(format!(
            "{kind} config field '{key}' must be an array"
        ))),
        None => Err(CoreError::Validation(format!(
            "{kind} config is missing required field '{key}'"
        ))),
    }
}

fn require_item_object<'a>(
    item: &'a Value,
    key: &str,
    kind: &SectionKind,
) -> Result<&'a serde_json::Map<String, Value>, CoreError> {
    item.as_object().ok_or_else(|| {
        CoreError::Validation(format!("{kind} config '{key}' entries must be objects"))
    })
}

fn check_enum(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    allowed: &[&str],
    kind: &SectionKind,
) -> Result<(), CoreError> {
    match obj.get(key) {
        None => Ok(()),
        Some(Value::String(tag)) if allowed.contains(&tag.as_str()) => Ok(()),
        Some(_) => Err(CoreError::Validation(format!(
            "{kind} config field '{key}' must be one of: {}",
            allowed.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn lenient_hero_defaults_blank_fields() {
        let kind = SectionKind::Hero;
        let config = SectionConfig::from_value(&kind, &json!({}));
        assert_matches!(config, SectionConfig::Hero(hero) => {
            assert_eq!(hero.title, "");
            assert_eq!(hero.background_type, BackgroundType::Gradient);
            assert_eq!(hero.alignment, Alignment::Center);
            assert_eq!(hero.cta_text, None);
        });
    }

    #[test]
    fn lenient_decode_tolerates_non_object() {
        let config = SectionConfig::from_value(&SectionKind::Text, &json!("garbage"));
        assert_matches!(config, SectionConfig::Text(text) => {
            assert_eq!(text.heading, "");
            assert_eq!(text.alignment, Alignment::Left);
        });
    }

    #[test]
    fn lenient_decode_defaults_invalid_alignment() {
        let config = SectionConfig::from_value(
            &SectionKind::Text,
            &json!({"heading": "h", "content": "c", "alignment": "middle"}),
        );
        assert_matches!(config, SectionConfig::Text(text) => {
            assert_eq!(text.alignment, Alignment::Left);
        });
    }

    #[test]
    fn lenient_stats_skips_mistyped_entries() {
        let config = SectionConfig::from_value(
            &SectionKind::Stats,
            &json!({"heading": "Numbers", "stats": [{"label": "Users", "value": "10"}, 42]}),
        );
        assert_matches!(config, SectionConfig::Stats(stats) => {
            assert_eq!(stats.stats.len(), 2);
            assert_eq!(stats.stats[0].label, "Users");
            // The mistyped entry decodes blank rather than failing.
            assert_eq!(stats.stats[1].label, "");
        });
    }

    #[test]
    fn unknown_kind_carries_value_verbatim() {
        let raw = json!({"anything": ["goes", 1]});
        let config = SectionConfig::from_value(&SectionKind::Other("faq".into()), &raw);
        assert_eq!(config, SectionConfig::Unknown(raw));
    }

    #[test]
    fn validate_accepts_well_formed_hero() {
        let value = json!({
            "title": "Welcome",
            "subtitle": "Hello",
            "backgroundType": "color",
            "backgroundColor": "#112233",
            "alignment": "left"
        });
        assert!(SectionConfig::validate(&SectionKind::Hero, &value).is_ok());
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let err = SectionConfig::validate(&SectionKind::Hero, &json!({"title": "t"})).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("subtitle"), "message should name the field: {msg}");
        });
    }

    #[test]
    fn validate_rejects_bad_enum_value() {
        let value = json!({"title": "t", "subtitle": "s", "backgroundType": "video"});
        let err = SectionConfig::validate(&SectionKind::Hero, &value).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("backgroundType"));
        });
    }

    #[test]
    fn validate_rejects_non_object() {
        let err = SectionConfig::validate(&SectionKind::Stats, &json!([])).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn validate_rejects_mistyped_list_entry() {
        let value = json!({"heading": "h", "images": [{"url": 5}]});
        let err = SectionConfig::validate(&SectionKind::Gallery, &value).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("url"));
        });
    }

    #[test]
    fn validate_accepts_anything_object_for_unknown_kind() {
        let kind = SectionKind::Other("faq".into());
        assert!(SectionConfig::validate(&kind, &json!({})).is_ok());
        assert!(SectionConfig::validate(&kind, &json!({"q": "a"})).is_ok());
        assert!(SectionConfig::validate(&kind, &json!(3)).is_err());
    }

    #[test]
    fn validate_tolerates_out_of_range_gallery_columns() {
        // Out-of-range columns are a render-time fallback, not a write error.
        let value = json!({"heading": "h", "images": [], "columns": 9});
        assert!(SectionConfig::validate(&SectionKind::Gallery, &value).is_ok());
    }
}
