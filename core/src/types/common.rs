//! Shapes shared by every resource: the response envelope, pagination and
//! the comma-joined name set.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// UI sentinel meaning "no filter" for carrier and site/grid selectors.
pub const ALL: &str = "all";

pub const DEFAULT_PAGE_NUM: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Uniform `{code, msg, data}` wrapper returned by every endpoint.
///
/// `code` and `msg` are passed through as-is. `data` is `None` when the
/// server sends `null` or omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Payload of operations whose `data` carries nothing useful (deletes and
/// sub-resource updates). Accepts any JSON value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde::de::IgnoredAny::deserialize(deserializer)?;
        Ok(Empty)
    }
}

impl Serialize for Empty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub list: Vec<T>,
    pub total: u64,
}

/// Normalized pagination as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_num: u32,
    pub page_size: u32,
}

impl PageParams {
    /// Missing or zero values fall back to page 1 of size 10.
    pub fn resolve(page_num: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page_num: page_num.filter(|n| *n > 0).unwrap_or(DEFAULT_PAGE_NUM),
            page_size: page_size.filter(|n| *n > 0).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Optional text filter: absent becomes `""`.
pub(crate) fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Optional selector filter: absent or `"all"` becomes `""`.
pub(crate) fn wildcard(value: &Option<String>) -> String {
    match value.as_deref() {
        None | Some(ALL) => String::new(),
        Some(other) => other.to_string(),
    }
}

/// A set of names stored on the server as one comma-joined string
/// (`"G1,G2"`).
///
/// Parsing trims whitespace and drops empty segments and duplicates.
/// Formatting joins in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NameSet(BTreeSet<String>);

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Returns `false` if the name was already present, is blank or
    /// contains the `,` separator.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() || name.contains(',') {
            return false;
        }
        self.0.insert(name.to_string())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl FromStr for NameSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NameSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl Serialize for NameSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NameSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older rows store `null` instead of an empty string.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| NameSet::parse(&s)).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_default_to_first_page_of_ten() {
        assert_eq!(
            PageParams::resolve(None, None),
            PageParams { page_num: 1, page_size: 10 }
        );
    }

    #[test]
    fn zero_page_values_are_treated_as_missing() {
        assert_eq!(
            PageParams::resolve(Some(0), Some(0)),
            PageParams { page_num: 1, page_size: 10 }
        );
        assert_eq!(
            PageParams::resolve(Some(3), Some(50)),
            PageParams { page_num: 3, page_size: 50 }
        );
    }

    #[test]
    fn wildcard_collapses_all_and_missing() {
        assert_eq!(wildcard(&None), "");
        assert_eq!(wildcard(&Some("all".to_string())), "");
        assert_eq!(wildcard(&Some("ALL".to_string())), "ALL");
        assert_eq!(wildcard(&Some("CMCC".to_string())), "CMCC");
        assert_eq!(text(&Some("all".to_string())), "all");
    }

    #[test]
    fn name_set_parses_and_formats() {
        let set = NameSet::parse(" g2, g1,,g2 ");
        assert_eq!(set.len(), 2);
        assert!(set.contains("g1"));
        assert_eq!(set.to_wire(), "g1,g2");
        assert!(NameSet::parse("").is_empty());
    }

    #[test]
    fn name_set_serde_uses_comma_string() {
        let set: NameSet = ["north", "east"].into_iter().collect();
        assert_eq!(serde_json::to_value(&set).unwrap(), "east,north");

        let back: NameSet = serde_json::from_str("\"east,north\"").unwrap();
        assert_eq!(back, set);

        let empty: NameSet = serde_json::from_str("null").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn name_set_insert_ignores_blank_names() {
        let mut set = NameSet::new();
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert!(!set.insert("  "));
        assert!(set.remove("a"));
        assert!(set.is_empty());
    }

    #[test]
    fn name_set_insert_rejects_separator() {
        let mut set = NameSet::new();
        assert!(!set.insert("East, North"));
        assert!(set.is_empty());

        let collected: NameSet = ["West", "East,North"].into_iter().collect();
        assert_eq!(collected.len(), 1);

        assert!(set.insert("East"));
        let wire = serde_json::to_string(&set).unwrap();
        let back: NameSet = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn envelope_tolerates_null_or_missing_data() {
        let env: Envelope<Page<u32>> =
            serde_json::from_str(r#"{"code":500,"msg":"boom","data":null}"#).unwrap();
        assert_eq!(env.code, 500);
        assert!(env.data.is_none());

        let env: Envelope<Empty> = serde_json::from_str(r#"{"code":200,"msg":"ok"}"#).unwrap();
        assert!(env.into_data().is_none());

        let env: Envelope<Empty> =
            serde_json::from_str(r#"{"code":200,"msg":"ok","data":{"anything":[1,2]}}"#).unwrap();
        assert_eq!(env.data, Some(Empty));
    }
}
