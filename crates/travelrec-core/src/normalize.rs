// crates/travelrec-core/src/normalize.rs
use crate::model::{DisplayRecord, Kind};
use crate::raw::{PlaceRaw, RawDataset};

/// Description given to country cards; the document has none for countries.
pub fn country_description(name: &str) -> String {
    format!("Explore top destinations in {name}.")
}

fn place(kind: Kind, raw: &PlaceRaw) -> DisplayRecord {
    DisplayRecord {
        kind,
        name: raw.name.clone(),
        image_url: raw.image_url.clone(),
        description: raw.description.clone(),
    }
}

/// **Flattener:** Raw -> one list of [`DisplayRecord`]s.
///
/// Each country is followed by its own cities, then come all temples, then
/// all beaches. Missing collections simply contribute nothing, so the output
/// length is always `countries + cities + temples + beaches`.
pub fn normalize(raw: &RawDataset) -> Vec<DisplayRecord> {
    let mut items = Vec::with_capacity(
        raw.countries.len() + raw.city_count() + raw.temples.len() + raw.beaches.len(),
    );

    for country in &raw.countries {
        items.push(DisplayRecord {
            kind: Kind::Country,
            name: country.name.clone(),
            image_url: country.image_url.clone().unwrap_or_default(),
            description: country_description(&country.name),
        });

        items.extend(country.cities.iter().map(|city| place(Kind::City, city)));
    }

    items.extend(raw.temples.iter().map(|t| place(Kind::Temple, t)));
    items.extend(raw.beaches.iter().map(|b| place(Kind::Beach, b)));

    items
}
