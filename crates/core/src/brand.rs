//! Brand kit view.
//!
//! A project's brand kit is stored as a free-form JSON document; this is
//! the lenient, defaulted view the AI generation prompt consumes.

use serde_json::Value;

/// Default primary brand color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#8b5cf6";
/// Default secondary brand color.
pub const DEFAULT_SECONDARY_COLOR: &str = "#10b981";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandKit {
    pub primary_color: String,
    pub secondary_color: String,
    pub logo: Option<String>,
}

impl Default for BrandKit {
    fn default() -> Self {
        BrandKit {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            logo: None,
        }
    }
}

impl BrandKit {
    /// Lenient decode of a stored brand-kit document. Missing or mistyped
    /// fields fall back to the defaults; never fails.
    pub fn from_value(value: &Value) -> BrandKit {
        let get = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };
        BrandKit {
            primary_color: get("primaryColor")
                .unwrap_or(DEFAULT_PRIMARY_COLOR)
                .to_string(),
            secondary_color: get("secondaryColor")
                .unwrap_or(DEFAULT_SECONDARY_COLOR)
                .to_string(),
            logo: get("logo").map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(BrandKit::from_value(&json!({})), BrandKit::default());
    }

    #[test]
    fn stored_colors_win_over_defaults() {
        let kit = BrandKit::from_value(&json!({
            "primaryColor": "#112233",
            "logo": "https://example.com/logo.png"
        }));
        assert_eq!(kit.primary_color, "#112233");
        assert_eq!(kit.secondary_color, DEFAULT_SECONDARY_COLOR);
        assert_eq!(kit.logo.as_deref(), Some("https://example.com/logo.png"));
    }

    #[test]
    fn mistyped_fields_fall_back() {
        let kit = BrandKit::from_value(&json!({"primaryColor": 7}));
        assert_eq!(kit.primary_color, DEFAULT_PRIMARY_COLOR);
    }
}
