//! Ordered query parameters forwarded verbatim to the API.

use std::fmt;

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            // Debug keeps the fraction of whole numbers: 1.0, not 1
            ParamValue::Float(x) => write!(f, "{:?}", x),
            ParamValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

/// Insertion-ordered mapping of parameter names to values.
///
/// Keys are not validated or renamed. Inserting an existing key replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a parameter, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Adds a parameter only when a value is present.
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key, v);
        }
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns these parameters preceded by the required ones.
    ///
    /// Required keys win: a caller-supplied parameter with the same name is
    /// dropped.
    pub fn merged_after(&self, required: QueryParams) -> QueryParams {
        let mut merged = required;
        for (key, value) in &self.entries {
            if !merged.contains_key(key) {
                merged.entries.push((key.clone(), value.clone()));
            }
        }
        merged
    }

    /// Encodes the parameters as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| {
                format!("{}={}", urlencoding::encode(k), urlencoding::encode(&v.to_string()))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K, V> Extend<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Parses a `key=value` pair as given on the command line.
///
/// The value is kept as the exact text after the first `=`.
pub fn parse_key_value(s: &str) -> Result<(String, ParamValue), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("Invalid parameter '{}': expected key=value", s))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Invalid parameter '{}': empty key", s));
    }

    Ok((key.to_string(), ParamValue::Str(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_values() {
        assert_eq!(ParamValue::Bool(true).to_string(), "true");
        assert_eq!(ParamValue::Int(10).to_string(), "10");
        assert_eq!(ParamValue::Float(2.5).to_string(), "2.5");
        assert_eq!(ParamValue::Float(1.0).to_string(), "1.0");
        assert_eq!(ParamValue::Float(-0.25).to_string(), "-0.25");
        assert_eq!(ParamValue::from("BEST_MATCH").to_string(), "BEST_MATCH");
    }

    #[test]
    fn test_insert_preserves_order() {
        let params = QueryParams::new().with("limit", 10).with("page", 2).with("country", "us");

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["limit", "page", "country"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_insert_replaces_existing_key_in_place() {
        let params = QueryParams::new().with("limit", 10).with("page", 2).with("limit", 50);

        let entries: Vec<(&str, String)> = params.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(entries, vec![("limit", "50".to_string()), ("page", "2".to_string())]);
    }

    #[test]
    fn test_insert_opt() {
        let mut params = QueryParams::new();
        params.insert_opt("limit", Some(5u32));
        params.insert_opt::<String>("sort", None);

        assert!(params.contains_key("limit"));
        assert!(!params.contains_key("sort"));
    }

    #[test]
    fn test_merged_after_required_first() {
        let optional = QueryParams::new().with("limit", 10).with("query", "ignored");
        let merged = optional.merged_after(QueryParams::new().with("query", "laptop"));

        let entries: Vec<(&str, String)> = merged.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(
            entries,
            vec![("query", "laptop".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_query_string_encoding() {
        let params = QueryParams::new().with("query", "rust & c++").with("limit", 5);
        assert_eq!(params.to_query_string(), "query=rust%20%26%20c%2B%2B&limit=5");
    }

    #[test]
    fn test_query_string_empty() {
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn test_from_iterator() {
        let params: QueryParams = vec![("store", "walmart"), ("category", "toys")].into_iter().collect();
        assert_eq!(params.get("store"), Some(&ParamValue::from("walmart")));
        assert_eq!(params.get("category"), Some(&ParamValue::from("toys")));
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("limit=10").unwrap(),
            ("limit".to_string(), ParamValue::from("10"))
        );
        assert_eq!(
            parse_key_value("sort=MOST_RECENT").unwrap(),
            ("sort".to_string(), ParamValue::from("MOST_RECENT"))
        );
        assert_eq!(
            parse_key_value("q=a=b").unwrap(),
            ("q".to_string(), ParamValue::from("a=b"))
        );
    }

    #[test]
    fn test_parse_key_value_keeps_text_verbatim() {
        for raw in ["02134", "4.0", "+5", "1e3", "True", "nan", ""] {
            let (_, value) = parse_key_value(&format!("x={}", raw)).unwrap();
            assert_eq!(value, ParamValue::Str(raw.to_string()));
        }

        let (key, value) = parse_key_value("zip=02134").unwrap();
        let params = QueryParams::new().with(key, value);
        assert_eq!(params.to_query_string(), "zip=02134");
    }

    #[test]
    fn test_float_query_value_keeps_fraction() {
        let params = QueryParams::new().with("min_price", 1.0);
        assert_eq!(params.to_query_string(), "min_price=1.0");
    }

    #[test]
    fn test_parse_key_value_invalid() {
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=value").is_err());
    }
}
