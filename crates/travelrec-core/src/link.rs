// crates/travelrec-core/src/link.rs
use url::Url;

const LINK_BASE: &str = "http://localhost/";

/// Value of the `search` query parameter in a page location.
///
/// Accepts absolute URLs as well as relative ones such as
/// `index.html?search=kyoto` or `?search=kyoto`. Missing or blank values give
/// `None`.
pub fn search_param(location: &str) -> Option<String> {
    let url = Url::parse(location)
        .or_else(|_| Url::parse(LINK_BASE).and_then(|base| base.join(location)))
        .ok()?;

    url.query_pairs()
        .find(|(key, _)| key == "search")
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_search_from_absolute_and_relative_links() {
        assert_eq!(
            search_param("https://example.com/travel.html?search=bora%20bora").as_deref(),
            Some("bora bora")
        );
        assert_eq!(
            search_param("travel.html?lang=en&search=Kyoto").as_deref(),
            Some("Kyoto")
        );
        assert_eq!(search_param("?search=temples").as_deref(), Some("temples"));
    }

    #[test]
    fn missing_or_blank_parameter_is_none() {
        assert_eq!(search_param("https://example.com/travel.html"), None);
        assert_eq!(search_param("travel.html?search="), None);
        assert_eq!(search_param("travel.html?search=+"), None);
    }
}
