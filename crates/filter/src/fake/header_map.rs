use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::HeaderError;
use crate::header::HeaderAccess;

/// A header map backed by [`http::HeaderMap`]. Names are stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct FakeHeaderMap {
    headers: HeaderMap,
}

impl FakeHeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(name, value)` pairs; repeated names keep every value.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.add(key, value)?;
        }
        Ok(map)
    }

    pub fn header_map(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_header_map(self) -> HeaderMap {
        self.headers
    }
}

impl From<HeaderMap> for FakeHeaderMap {
    fn from(headers: HeaderMap) -> Self {
        Self { headers }
    }
}

impl HeaderAccess for FakeHeaderMap {
    fn get(&self, key: &str) -> Vec<&[u8]> {
        self.headers.get_all(key).iter().map(HeaderValue::as_bytes).collect()
    }

    fn get_one(&self, key: &str) -> Option<&[u8]> {
        self.headers.get(key).map(HeaderValue::as_bytes)
    }

    fn get_all(&self) -> Vec<(&str, &[u8])> {
        self.headers.iter().map(|(name, value)| (name.as_str(), value.as_bytes())).collect()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HeaderError> {
        let name = HeaderName::from_bytes(key.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(())
    }

    fn add(&mut self, key: &str, value: &str) -> Result<(), HeaderError> {
        let name = HeaderName::from_bytes(key.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.append(name, value);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.headers.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FakeHeaderMap {
        FakeHeaderMap::from_pairs([("host", "example.com"), ("accept", "text/html"), ("accept", "application/json")]).unwrap()
    }

    #[test]
    fn test_get() {
        let map = sample();

        assert_eq!(map.get("accept"), vec![&b"text/html"[..], &b"application/json"[..]]);
        assert_eq!(map.get("Accept").len(), 2);
        assert!(map.get("missing").is_empty());
        assert!(map.get("bad key").is_empty());
    }

    #[test]
    fn test_get_one() {
        let map = sample();

        assert_eq!(map.get_one("accept"), Some(&b"text/html"[..]));
        assert_eq!(map.get_one("host"), Some(&b"example.com"[..]));
        assert_eq!(map.get_one("missing"), None);
    }

    #[test]
    fn test_get_all() {
        let map = sample();
        let all = map.get_all();

        assert_eq!(all.len(), 3);
        assert!(all.contains(&("host", &b"example.com"[..])));
        assert!(all.contains(&("accept", &b"application/json"[..])));
    }

    #[test]
    fn test_set_replaces_values() {
        let mut map = sample();

        map.set("accept", "*/*").unwrap();

        assert_eq!(map.get("accept"), vec![&b"*/*"[..]]);
    }

    #[test]
    fn test_add_appends_value() {
        let mut map = FakeHeaderMap::new();

        map.add("X-Trace", "a").unwrap();
        map.add("x-trace", "b").unwrap();

        assert_eq!(map.get("x-trace"), vec![&b"a"[..], &b"b"[..]]);
        assert!(map.header_map().contains_key("x-trace"));
    }

    #[test]
    fn test_remove() {
        let mut map = sample();

        map.remove("accept");
        map.remove("missing");
        map.remove("bad key");

        assert!(map.get("accept").is_empty());
        assert_eq!(map.get_all().len(), 1);
    }

    #[test]
    fn test_invalid_name() {
        let mut map = FakeHeaderMap::new();

        let err = map.set("bad key", "value").unwrap_err();
        assert!(err.is_invalid_name());
        assert!(map.get_all().is_empty());
    }

    #[test]
    fn test_invalid_value() {
        let mut map = FakeHeaderMap::new();

        let err = map.add("x-bad", "line\nbreak").unwrap_err();
        assert!(err.is_invalid_value());
        assert!(err.to_string().starts_with("invalid header value"));
    }

    #[test]
    fn test_from_header_map() {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::CONTENT_LENGTH, HeaderValue::from_static("11"));

        let map = FakeHeaderMap::from(headers);

        assert_eq!(map.get_one("content-length"), Some(&b"11"[..]));
        assert_eq!(map.into_header_map().len(), 1);
    }
}
