//! Option lists for selection widgets.
//!
//! An [`OptionList`] is the ordered, caller-owned sequence of choices a
//! [`ComboBox`](super::widgets::ComboBox) offers. Widgets never mutate it;
//! they derive filtered views from it on demand.

use serde::{Deserialize, Serialize};

/// Controls how filtering handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "Ba" won't match "bar").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "Ba" will match "bar").
    #[default]
    CaseInsensitive,
}

/// An ordered list of option strings.
///
/// Order is significant and preserved by every derived view. An absent list
/// is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList {
    items: Vec<String>,
}

impl OptionList {
    /// Create a new list with the given items.
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Create an empty list.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Get a reference to the items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no options.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `option` is one of the items.
    pub fn contains(&self, option: &str) -> bool {
        self.items.iter().any(|item| item == option)
    }

    /// Items whose text contains `query` as a substring.
    ///
    /// An empty query matches everything. Order is preserved; there is no
    /// ranking.
    pub fn filter(&self, query: &str, case_sensitivity: CaseSensitivity) -> Vec<&str> {
        match case_sensitivity {
            CaseSensitivity::CaseSensitive => self
                .items
                .iter()
                .filter(|item| item.contains(query))
                .map(String::as_str)
                .collect(),
            CaseSensitivity::CaseInsensitive => {
                let query = query.to_lowercase();
                self.items
                    .iter()
                    .filter(|item| item.to_lowercase().contains(&query))
                    .map(String::as_str)
                    .collect()
            }
        }
    }
}

impl From<Vec<String>> for OptionList {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<Option<Vec<String>>> for OptionList {
    fn from(items: Option<Vec<String>>) -> Self {
        items.map(Self::new).unwrap_or_default()
    }
}

impl From<Vec<&str>> for OptionList {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionList {
    fn from(items: [&str; N]) -> Self {
        Self::new(items.into_iter().map(String::from).collect())
    }
}

impl FromIterator<String> for OptionList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_options_degrade_to_empty() {
        let list = OptionList::from(None::<Vec<String>>);
        assert!(list.is_empty());
        assert!(list.filter("", CaseSensitivity::CaseInsensitive).is_empty());
    }

    #[test]
    fn test_filter_is_substring_not_prefix() {
        let list = OptionList::from(["bar", "foo", "Barbados", "crowbar"]);

        assert_eq!(
            list.filter("bar", CaseSensitivity::CaseInsensitive),
            vec!["bar", "Barbados", "crowbar"]
        );
        assert_eq!(
            list.filter("bar", CaseSensitivity::CaseSensitive),
            vec!["bar", "crowbar"]
        );
    }

    #[test]
    fn test_filter_empty_query_keeps_order() {
        let list = OptionList::from(["zeta", "alpha", "mu"]);
        assert_eq!(
            list.filter("", CaseSensitivity::CaseInsensitive),
            vec!["zeta", "alpha", "mu"]
        );
    }

    #[test]
    fn test_filter_upper_case_query() {
        let list = OptionList::from(["bar", "foo"]);
        assert_eq!(list.filter("F", CaseSensitivity::CaseInsensitive), vec!["foo"]);
        assert!(list.filter("F", CaseSensitivity::CaseSensitive).is_empty());
    }

    #[test]
    fn test_contains() {
        let list = OptionList::from(["bar", "foo"]);
        assert!(list.contains("foo"));
        assert!(!list.contains("Foo"));
    }

    #[test]
    fn test_deserialize_transparent() {
        #[derive(Deserialize)]
        struct Doc {
            options: OptionList,
        }

        let doc: Doc = toml::from_str(r#"options = ["bar", "foo"]"#).unwrap();
        assert_eq!(doc.options.items(), ["bar", "foo"]);
    }
}
