//! Pagination envelope type.

use serde::Deserialize;

/// One page of a paginated collection response.
///
/// This is the Django REST pagination envelope: a total count, opaque
/// next/previous page links, and the items themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total number of items in the collection.
    pub count: u64,
    /// Link to the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// The items on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether a further page exists.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_envelope() {
        let page: Page<serde_json::Value> = serde_json::from_str(
            r#"{"count": 12, "next": "http://x/api/users/?page=2", "previous": null, "results": [{"id": "1"}]}"#,
        )
        .unwrap();
        assert_eq!(page.count, 12);
        assert!(page.has_next());
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn missing_links_default_to_none() {
        let page: Page<serde_json::Value> =
            serde_json::from_str(r#"{"count": 0, "results": []}"#).unwrap();
        assert!(!page.has_next());
        assert!(page.is_empty());
    }
}
