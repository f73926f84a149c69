// crates/travelrec-core/src/raw.rs
use serde::{Deserialize, Deserializer, Serialize};

// `null` is treated like a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Leaf record as it comes from JSON: a city, a temple or a beach.
///
/// All three share one shape:
/// {
///   "name": "Sydney, Australia",
///   "imageUrl": "sydney.jpg",
///   "description": "A vibrant city known for ..."
/// }
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRaw {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "imageUrl", default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Raw country structure from JSON. Countries carry no description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRaw {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cities: Vec<PlaceRaw>,
}

/// The as-loaded document, before normalization.
///
/// Every collection may be missing from the source; missing means empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<CountryRaw>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temples: Vec<PlaceRaw>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub beaches: Vec<PlaceRaw>,
}

impl RawDataset {
    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|c| c.cities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.temples.is_empty() && self.beaches.is_empty()
    }
}

impl PlaceRaw {
    pub fn new(name: &str, image_url: &str, description: &str) -> Self {
        PlaceRaw {
            name: name.to_owned(),
            image_url: image_url.to_owned(),
            description: description.to_owned(),
        }
    }
}
