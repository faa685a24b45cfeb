//! Section kind tags.
//!
//! The known set is closed (six kinds), but any string is a valid tag at
//! runtime: unrecognized values parse into [`SectionKind::Other`] and flow
//! through the system as a degraded-but-renderable state rather than an
//! error.

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// The kind tag of a section, selecting its configuration shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Stats,
    Products,
    Video,
    Gallery,
    Text,
    /// Any tag outside the known set. Tolerated, never fatal.
    Other(String),
}

/// All known kind tags, in registry order.
pub const KNOWN_KINDS: &[&str] = &["hero", "stats", "products", "video", "gallery", "text"];

impl SectionKind {
    /// Parse a kind tag. Never fails; unrecognized tags become `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "hero" => SectionKind::Hero,
            "stats" => SectionKind::Stats,
            "products" => SectionKind::Products,
            "video" => SectionKind::Video,
            "gallery" => SectionKind::Gallery,
            "text" => SectionKind::Text,
            other => SectionKind::Other(other.to_string()),
        }
    }

    /// The wire/storage tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Stats => "stats",
            SectionKind::Products => "products",
            SectionKind::Video => "video",
            SectionKind::Gallery => "gallery",
            SectionKind::Text => "text",
            SectionKind::Other(tag) => tag,
        }
    }

    /// Whether this is one of the six registered kinds.
    pub fn is_known(&self) -> bool {
        !matches!(self, SectionKind::Other(_))
    }

    /// Default display label for a new section of this kind:
    /// the capitalized tag followed by " Section".
    pub fn default_label(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        format!("{capitalized} Section")
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SectionKind {
    fn from(tag: &str) -> Self {
        SectionKind::parse(tag)
    }
}

impl Serialize for SectionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SectionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(SectionKind::parse(&tag))
    }
}
