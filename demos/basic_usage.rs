//! Basic usage example for travelrec-rs
//!
//! This example demonstrates how to:
//! - Load the bundled travel dataset into the shared store
//! - Look at the normalized records
//! - Run category and free-text keyword searches
//! - Pull a query out of a page link

use travelrec_rs::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("=== travelrec Basic Usage Example ===\n");

    // Load the dataset
    let location = SourceLocation::bundled();
    println!("Loading travel data from {location}...");
    let source = location.into_source()?;
    let store = DatasetStore::shared();
    let catalog = store.load(&source).await?;
    println!("✓ Dataset loaded ({:?})\n", store.state());

    // Example 1: What the dataset holds
    println!("--- Example 1: Stats ---");
    let stats = catalog.stats();
    println!(
        "{} countries, {} cities, {} temples, {} beaches ({} records)\n",
        stats.countries,
        stats.cities,
        stats.temples,
        stats.beaches,
        stats.total()
    );

    // Example 2: Category keywords
    println!("--- Example 2: Category keywords ---");
    for keyword in ["beach", "Temples", "  COUNTRY  "] {
        let hits = catalog.search(keyword, CountryMatch::CountriesOnly)?;
        let names: Vec<_> = hits.iter().map(|r| r.name.as_str()).collect();
        println!("{keyword:?} -> {names:?}");
    }
    println!();

    // Example 3: Free text matches names and descriptions
    println!("--- Example 3: Free text ---");
    for keyword in ["kyoto", "carnival", "nowhere"] {
        let hits = catalog.search(keyword, CountryMatch::default())?;
        println!("{keyword:?}: {}", StatusMessage::for_results(hits.len()));
        for record in hits {
            println!("  [{}] {}", record.kind, record.name);
        }
    }
    println!();

    // Example 4: Blank keywords are rejected
    println!("--- Example 4: Blank keyword ---");
    match catalog.search("   ", CountryMatch::default()) {
        Err(TravelError::EmptyQuery) => println!("{}\n", StatusMessage::InvalidQuery),
        other => println!("unexpected: {other:?}\n"),
    }

    // Example 5: Query from a page link
    println!("--- Example 5: Page link ---");
    let link = "travel.html?search=beaches";
    if let Some(keyword) = search_param(link) {
        let hits = catalog.search(&keyword, CountryMatch::default())?;
        println!("{link} -> {}", StatusMessage::for_results(hits.len()));
    }

    Ok(())
}
