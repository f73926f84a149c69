// crates/travelrec-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of destination a record can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Country,
    City,
    Temple,
    Beach,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Country, Kind::City, Kind::Temple, Kind::Beach];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Country => "country",
            Kind::City => "city",
            Kind::Temple => "temple",
            Kind::Beach => "beach",
        }
    }

    /// Parse a kind label, singular or plural, case-insensitive.
    pub fn from_label(label: &str) -> Option<Kind> {
        match label.trim().to_lowercase().as_str() {
            "country" | "countries" => Some(Kind::Country),
            "city" | "cities" => Some(Kind::City),
            "temple" | "temples" => Some(Kind::Temple),
            "beach" | "beaches" => Some(Kind::Beach),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A renderer-ready destination card.
///
/// Produced by [`crate::normalize`]; `name` and `description` double as the
/// text that general search runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    #[serde(rename = "type")]
    pub kind: Kind,
    pub name: String,
    /// Empty means "no image"; renderers show a placeholder.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
}

impl DisplayRecord {
    pub fn new(kind: Kind, name: &str, image_url: &str, description: &str) -> Self {
        DisplayRecord {
            kind,
            name: name.to_owned(),
            image_url: image_url.to_owned(),
            description: description.to_owned(),
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        if self.image_url.is_empty() {
            None
        } else {
            Some(&self.image_url)
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Lowercased `name + " " + description`, the haystack for general search.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_label(kind.as_str()), Some(kind));
        }
        assert_eq!(Kind::from_label(" Beaches "), Some(Kind::Beach));
        assert_eq!(Kind::from_label("volcano"), None);
    }

    #[test]
    fn serializes_with_document_field_names() {
        let rec = DisplayRecord::new(Kind::Beach, "Bora Bora", "bora.jpg", "Lagoon.");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "beach");
        assert_eq!(json["imageUrl"], "bora.jpg");
    }

    #[test]
    fn empty_image_url_means_no_image() {
        let rec = DisplayRecord::new(Kind::Country, "Japan", "", "Explore.");
        assert!(!rec.has_image());
        assert_eq!(rec.image_url(), None);
        assert_eq!(rec.search_text(), "japan explore.");
    }
}
