//! Name-search result model and category grouping.
//!
//! A name search answers with a JSON object mapping category names to URL
//! lists. Rendering order must match the backend's document order, so the
//! mapping is deserialized through a map visitor into a `Vec` instead of a
//! hash map, which would shuffle the keys.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One result category: the raw key and its URLs, both in backend order.
///
/// # Fields
///
/// - `key`: raw category identifier, e.g. `social_media`; stays the identity
///   used for ordering and uniqueness
/// - `urls`: the category's URL strings, rendered in sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub key: String,
    pub urls: Vec<String>,
}

impl CategoryGroup {
    /// Returns the display label: the raw key with underscores replaced by
    /// spaces. Display-only transform; `key` remains untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use zienda::domain::CategoryGroup;
    ///
    /// let group = CategoryGroup {
    ///     key: "social_media".to_string(),
    ///     urls: vec![],
    /// };
    /// assert_eq!(group.label(), "social media");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        self.key.replace('_', " ")
    }

    /// Number of URLs in this category, always counted from the list itself
    /// rather than taken from any backend-supplied figure.
    #[must_use]
    pub fn count(&self) -> usize {
        self.urls.len()
    }
}

/// Payload of a completed name search.
///
/// # Fields
///
/// - `categories`: category groups in backend document order
/// - `total`: backend-supplied grand total; informational and not required
///   to equal the sum of the category list lengths
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameSearchResult {
    #[serde(rename = "results", deserialize_with = "ordered_categories")]
    pub categories: Vec<CategoryGroup>,
    pub total: u64,
}

impl NameSearchResult {
    /// True when the backend found nothing. Zero categories is a first-class
    /// outcome ("no results"), distinct from any failure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Deserializes the `results` object while preserving key order.
fn ordered_categories<'de, D>(deserializer: D) -> Result<Vec<CategoryGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CategoryVisitor;

    impl<'de> Visitor<'de> for CategoryVisitor {
        type Value = Vec<CategoryGroup>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of category name to URL list")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, urls)) = access.next_entry::<String, Vec<String>>()? {
                categories.push(CategoryGroup { key, urls });
            }
            Ok(categories)
        }
    }

    deserializer.deserialize_map(CategoryVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_backend_category_order() {
        let body = r#"{
            "results": {
                "social_media": ["https://twitter.com/acme"],
                "ecommerce": ["https://shop.example.com/"],
                "news": ["https://news.example.com/acme"]
            },
            "total": 3
        }"#;
        let result: NameSearchResult = serde_json::from_str(body).unwrap();
        let keys: Vec<&str> = result.categories.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["social_media", "ecommerce", "news"]);
    }

    #[test]
    fn label_replaces_every_underscore() {
        let group = CategoryGroup {
            key: "press_and_media_kit".to_string(),
            urls: vec![],
        };
        assert_eq!(group.label(), "press and media kit");
    }

    #[test]
    fn count_comes_from_the_list_not_the_total() {
        let body = r#"{
            "results": {"social_media": ["https://a.example", "https://b.example"]},
            "total": 50
        }"#;
        let result: NameSearchResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.categories[0].count(), 2);
        assert_eq!(result.total, 50);
    }

    #[test]
    fn empty_mapping_is_a_valid_result() {
        let result: NameSearchResult =
            serde_json::from_str(r#"{"results": {}, "total": 0}"#).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn rejects_shapes_that_are_not_a_category_map() {
        assert!(serde_json::from_str::<NameSearchResult>(r#"{"results": [], "total": 0}"#).is_err());
        assert!(serde_json::from_str::<NameSearchResult>(
            r#"{"results": {"social_media": [42]}, "total": 1}"#
        )
        .is_err());
        assert!(serde_json::from_str::<NameSearchResult>(r#"{"total": 0}"#).is_err());
    }
}
