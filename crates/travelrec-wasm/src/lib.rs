//! travelrec-wasm — WebAssembly bindings for travelrec-core
//!
//! This crate exposes the destination search to a web page. The sample
//! dataset bundled with `travelrec-core` is embedded in the binary and loaded
//! on module start; a page that fetched its own
//! `travel_recommendation_api.json` hands the text to [`load_dataset`].
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_dataset, search, status_for, search_param } from 'travelrec-wasm';
//!
//! async function main() {
//!   await init(); // loads the embedded sample
//!   const resp = await fetch('travel_recommendation_api.json');
//!   if (resp.ok) load_dataset(await resp.text());
//!
//!   const keyword = search_param(window.location.href) ?? 'beach';
//!   console.log(search(keyword));      // [{ type, name, imageUrl, description }, ...]
//!   console.log(status_for(keyword));  // "Found 2 result(s)."
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - `search` throws the status text ("Please enter a valid search query.")
//!   for a blank keyword, and "Data not loaded yet. Please wait..." when no
//!   dataset is loaded.
//! - The retry timer of the terminal session is not part of this API; the
//!   page decides when to call `search` again.
use js_sys::Array;
use serde_wasm_bindgen::to_value;
use std::sync::Arc;
use travelrec_core::prelude::*;
use wasm_bindgen::prelude::*;

// Embedded sample, parsed on start.
static EMBEDDED_DATASET: &[u8] = include_bytes!("../../travelrec-core/data/travel_recommendation_api.json");

fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn loaded() -> Result<Arc<Catalog>, JsValue> {
    DatasetStore::shared()
        .current()
        .ok_or_else(|| js_error(StatusMessage::Waiting))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing travelrec WASM module...");
    if let Err(e) = load_embedded() {
        log(&format!("embedded dataset unusable: {e}"));
    }
}

/// Load the dataset compiled into the module. Returns the record count.
pub fn load_embedded() -> travelrec_core::Result<usize> {
    let raw = parse_dataset(EMBEDDED_DATASET)?;
    let catalog = DatasetStore::shared().replace(raw);
    Ok(catalog.records().len())
}

/* --------------------------------------------------------------------------
   Dataset
-------------------------------------------------------------------------- */

/// Replace the loaded dataset with the given JSON document.
/// Returns the number of searchable records.
#[wasm_bindgen]
pub fn load_dataset(json: &str) -> Result<usize, JsValue> {
    let raw = parse_dataset(json.as_bytes()).map_err(js_error)?;
    let catalog = DatasetStore::shared().replace(raw);
    let stats = catalog.stats();
    log(&format!(
        "✓ Loaded {} countries, {} cities, {} temples, {} beaches",
        stats.countries, stats.cities, stats.temples, stats.beaches
    ));
    Ok(catalog.records().len())
}

#[wasm_bindgen]
pub fn is_loaded() -> bool {
    DatasetStore::shared().is_loaded()
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let catalog = loaded()?;
    to_value(&catalog.stats()).map_err(js_error)
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

/// Run one keyword query. `include_cities` makes `country` keywords return
/// each country's cities as well.
#[wasm_bindgen]
pub fn search(query: &str, include_cities: Option<bool>) -> Result<JsValue, JsValue> {
    let mode = if include_cities.unwrap_or(false) {
        CountryMatch::WithCities
    } else {
        CountryMatch::CountriesOnly
    };
    let catalog = loaded()?;
    let hits = catalog.search(query, mode).map_err(|e| match e {
        TravelError::EmptyQuery => js_error(StatusMessage::InvalidQuery),
        other => js_error(other),
    })?;

    // Keep dataset order.
    let array = Array::new();
    for record in hits {
        array.push(&to_value(record).map_err(js_error)?);
    }
    Ok(array.into())
}

/// The status line the page shows after running `query`.
#[wasm_bindgen]
pub fn status_for(query: &str) -> String {
    let status = match DatasetStore::shared().current() {
        None if query.trim().is_empty() => StatusMessage::InvalidQuery,
        None => StatusMessage::Waiting,
        Some(catalog) => match catalog.search(query, CountryMatch::default()) {
            Ok(hits) => StatusMessage::for_results(hits.len()),
            Err(_) => StatusMessage::InvalidQuery,
        },
    };
    status.to_string()
}

/// Prompt shown in an idle, cleared page.
#[wasm_bindgen]
pub fn prompt() -> String {
    StatusMessage::Prompt.to_string()
}

/* --------------------------------------------------------------------------
   Page links
-------------------------------------------------------------------------- */

/// The non-blank `search` query parameter of a page URL, if any.
#[wasm_bindgen]
pub fn search_param(location: &str) -> Option<String> {
    travelrec_core::search_param(location)
}
