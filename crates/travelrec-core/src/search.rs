// crates/travelrec-core/src/search.rs
use crate::error::{Result, TravelError};
use crate::model::{DisplayRecord, Kind};

/// How the `country` / `countries` keyword treats cities.
///
/// The default keeps a country as an administrative unit distinct from the
/// cities inside it. `WithCities` is the alternate mode that also returns the
/// city records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountryMatch {
    #[default]
    CountriesOnly,
    WithCities,
}

/// Which rule a query resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// One of the six exact category keywords.
    Category(Kind),
    /// Substring match over `name + " " + description`.
    Text(String),
}

impl Rule {
    /// Trim and lowercase `query`, then pick the first matching rule.
    pub fn parse(query: &str) -> Result<Rule> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Err(TravelError::EmptyQuery);
        }

        let rule = match q.as_str() {
            "beach" | "beaches" => Rule::Category(Kind::Beach),
            "temple" | "temples" => Rule::Category(Kind::Temple),
            "country" | "countries" => Rule::Category(Kind::Country),
            _ => Rule::Text(q),
        };
        Ok(rule)
    }

    pub fn matches(&self, record: &DisplayRecord, mode: CountryMatch) -> bool {
        match self {
            Rule::Category(Kind::Country) => match mode {
                CountryMatch::CountriesOnly => record.kind == Kind::Country,
                CountryMatch::WithCities => matches!(record.kind, Kind::Country | Kind::City),
            },
            Rule::Category(kind) => record.kind == *kind,
            Rule::Text(q) => record.search_text().contains(q.as_str()),
        }
    }
}

/// Filter `records` by `query` with the default [`CountryMatch`].
///
/// # Errors
///
/// [`TravelError::EmptyQuery`] when the query is blank after trimming.
///
/// # Example
///
/// ```rust
/// use travelrec_core::{search, DisplayRecord, Kind};
///
/// let records = vec![
///     DisplayRecord::new(Kind::Country, "India", "", "Explore top destinations in India."),
///     DisplayRecord::new(Kind::City, "Delhi", "delhi.jpg", "Capital city."),
/// ];
///
/// let hits = search(&records, " COUNTRY ").unwrap();
/// assert_eq!(hits, vec![&records[0]]);
///
/// let hits = search(&records, "delhi").unwrap();
/// assert_eq!(hits, vec![&records[1]]);
/// ```
pub fn search<'a>(records: &'a [DisplayRecord], query: &str) -> Result<Vec<&'a DisplayRecord>> {
    search_with(records, query, CountryMatch::default())
}

/// Filter `records` by `query`. Matches keep their input order; there is no
/// ranking.
pub fn search_with<'a>(
    records: &'a [DisplayRecord],
    query: &str,
    mode: CountryMatch,
) -> Result<Vec<&'a DisplayRecord>> {
    let rule = Rule::parse(query)?;
    let hits: Vec<_> = records.iter().filter(|r| rule.matches(r, mode)).collect();
    tracing::debug!(?rule, matches = hits.len(), "query evaluated");
    Ok(hits)
}
