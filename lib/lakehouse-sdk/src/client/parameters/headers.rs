use http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

use crate::client::LakehouseError;

/// HTTP headers supplied by the caller.
///
/// When passed as the `headers` field of an operation's parameters, these
/// headers override every header the SDK computes, `Accept` and
/// `Content-Type` included. Names are matched case-insensitively.
///
/// ```rust
/// use lakehouse_sdk::CallHeaders;
///
/// let headers = CallHeaders::new()
///     .add_header("Accept", "text/csv")
///     .add_header("X-Request-ID", "abc-123");
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallHeaders {
    headers: IndexMap<String, String>,
}

impl CallHeaders {
    /// Creates a new empty `CallHeaders` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing any previous value with the same name.
    pub fn add_header(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.to_string());
        self
    }

    /// Merges another instance into this one; `other` takes precedence.
    pub fn merge(mut self, other: Self) -> Self {
        for (name, value) in other.headers {
            self = self.add_header(name, value);
        }
        self
    }

    /// Returns the value of a header, ignoring the name's case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Checks if the headers collection is empty.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Writes the headers into `target`, replacing existing values.
    pub(in crate::client) fn apply_to(&self, target: &mut HeaderMap) -> Result<(), LakehouseError> {
        for (name, value) in &self.headers {
            target.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for CallHeaders
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |headers, (name, value)| {
                headers.add_header(name, value)
            })
    }
}

#[cfg(test)]
mod tests {
    use http::header::{ACCEPT, CONTENT_TYPE};

    use super::*;

    #[test]
    fn test_new_empty_headers() {
        let headers = CallHeaders::new();

        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);
    }

    #[test]
    fn test_add_header_is_case_insensitive() {
        let headers = CallHeaders::new()
            .add_header("content-type", "text/plain")
            .add_header("Content-Type", "application/json");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_merge_other_takes_precedence() {
        let base = CallHeaders::new()
            .add_header("Accept", "application/json")
            .add_header("X-Trace", "1");
        let other = CallHeaders::new().add_header("accept", "text/csv");

        let merged = base.merge(other);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("Accept"), Some("text/csv"));
        assert_eq!(merged.get("X-Trace"), Some("1"));
    }

    #[test]
    fn test_apply_to_overrides_existing() {
        let mut target = HeaderMap::new();
        target.insert(ACCEPT, HeaderValue::from_static("application/json"));
        target.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let headers: CallHeaders = [("Accept", "text/csv")].into_iter().collect();
        headers.apply_to(&mut target).expect("valid headers");

        assert_eq!(target[ACCEPT], "text/csv");
        assert_eq!(target[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_apply_to_rejects_invalid_name() {
        let headers = CallHeaders::new().add_header("Invalid Header", "x");
        let mut target = HeaderMap::new();

        let result = headers.apply_to(&mut target);

        assert!(matches!(result, Err(LakehouseError::InvalidHeaderName(_))));
    }
}
