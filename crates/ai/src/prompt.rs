//! Prompt construction for section editing and generation.

use pagecraft_core::brand::BrandKit;
use pagecraft_core::kind::SectionKind;
use serde_json::Value;

/// Per-kind field-shape table embedded in the edit prompt, mirroring the
/// shapes enforced at the storage boundary.
const SHAPE_TABLE: &str = "\
- hero: { title, subtitle, backgroundType, backgroundColor, backgroundGradient, backgroundImage, ctaText, ctaUrl, alignment }
- stats: { heading, stats: [{ label, value, description }] }
- products: { heading, products: [{ name, description, image, price }] }
- video: { heading, videoUrl, thumbnail, autoplay, description }
- gallery: { heading, images: [{ url, caption }], columns }
- text: { heading, content, alignment }";

/// System prompt for an AI-assisted section edit.
///
/// Embeds the target kind, the field-shape table, and the rules the
/// model is asked (not guaranteed) to honor.
pub fn edit_system_prompt(kind: &SectionKind) -> String {
    format!(
        "You are an AI assistant that helps edit landing page sections based on natural language requests.\n\
         You receive a section configuration as JSON and a user's editing request.\n\
         You must return ONLY a valid JSON object with the updated configuration.\n\
         \n\
         Section type: {kind}\n\
         \n\
         Current configuration format depends on the section type:\n\
         {SHAPE_TABLE}\n\
         \n\
         Rules:\n\
         1. Only modify properties mentioned in the user's request\n\
         2. Keep all other properties unchanged\n\
         3. Return valid JSON only, no markdown or explanations\n\
         4. Use sensible defaults if creating new properties"
    )
}

/// User prompt for an edit: the current config serialized verbatim plus
/// the free-text instruction.
pub fn edit_user_prompt(current_config: &Value, instruction: &str) -> String {
    let serialized =
        serde_json::to_string_pretty(current_config).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Current configuration:\n{serialized}\n\nUser request: {instruction}\n\nReturn the updated configuration as JSON:"
    )
}

/// System prompt for standalone content generation from a brand kit.
pub fn generate_system_prompt(
    kind: &SectionKind,
    brand_kit: &BrandKit,
    context: Option<&str>,
) -> String {
    let context_line = context
        .filter(|c| !c.trim().is_empty())
        .map(|c| format!("\n- Additional context: {c}"))
        .unwrap_or_default();
    format!(
        "You are an AI assistant that generates landing page section content.\n\
         Generate professional, engaging content for a {kind} section.\n\
         \n\
         Brand context:\n\
         - Primary color: {primary}\n\
         - Secondary color: {secondary}{context_line}\n\
         \n\
         Return ONLY valid JSON with appropriate fields for this section type.",
        primary = brand_kit.primary_color,
        secondary = brand_kit.secondary_color,
    )
}

/// User prompt for standalone content generation.
pub fn generate_user_prompt(kind: &SectionKind) -> String {
    format!("Generate content for a {kind} section")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn edit_prompt_embeds_kind_and_rules() {
        let prompt = edit_system_prompt(&SectionKind::Gallery);
        assert!(prompt.contains("Section type: gallery"));
        assert!(prompt.contains("Only modify properties mentioned"));
        assert!(prompt.contains("Keep all other properties unchanged"));
        assert!(prompt.contains("Return valid JSON only"));
    }

    #[test]
    fn edit_user_prompt_carries_config_and_instruction() {
        let config = json!({"heading": "Old"});
        let prompt = edit_user_prompt(&config, "make the heading shorter");
        assert!(prompt.contains("\"heading\": \"Old\""));
        assert!(prompt.contains("User request: make the heading shorter"));
    }

    #[test]
    fn generate_prompt_uses_brand_colors_and_context() {
        let kit = BrandKit {
            primary_color: "#123456".to_string(),
            secondary_color: "#654321".to_string(),
            logo: None,
        };
        let prompt = generate_system_prompt(&SectionKind::Hero, &kit, Some("a bakery"));
        assert!(prompt.contains("Primary color: #123456"));
        assert!(prompt.contains("Additional context: a bakery"));
    }

    #[test]
    fn generate_prompt_omits_blank_context() {
        let prompt = generate_system_prompt(&SectionKind::Text, &BrandKit::default(), Some("  "));
        assert!(!prompt.contains("Additional context"));
    }
}
