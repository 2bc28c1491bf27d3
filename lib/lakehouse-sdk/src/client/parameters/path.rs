use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use crate::client::LakehouseError;

/// Regular expression for matching path parameters in the format `{param_name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Characters left as-is by `encodeURIComponent`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// A path template such as `/access/buckets/{bucket_id}` with its arguments.
///
/// ```rust
/// use lakehouse_sdk::CallPath;
///
/// let path = CallPath::from("/queries/{query_name}").add_param("query_name", "daily report");
/// assert_eq!(path.resolve().unwrap(), "/queries/daily%20report");
/// ```
#[derive(Debug, Clone, Default, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    path: String,
    args: IndexMap<String, String>,
}

impl CallPath {
    /// Adds a path argument; the value is percent-encoded on resolution.
    pub fn add_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.args.insert(name.into(), value.to_string());
        self
    }

    /// Returns `true` if an argument with this name was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// The template, before substitution.
    pub fn template(&self) -> &str {
        &self.path
    }

    /// Substitutes every `{name}` placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`LakehouseError::PathUnresolved`] when a placeholder has no argument.
    pub fn resolve(&self) -> Result<String, LakehouseError> {
        let mut path = self.path.clone();

        let mut names: HashSet<&str> = RE
            .captures_iter(&self.path)
            .filter_map(|caps| caps.name("name"))
            .map(|found| found.as_str())
            .collect();

        if names.is_empty() {
            return Ok(path);
        }

        for (name, value) in &self.args {
            if !names.remove(name.as_str()) {
                warn!(?name, "argument name not found");
                continue;
            }
            path = replace_path_param(&path, name, &encode_path_param_value(value));
        }

        if !names.is_empty() {
            let mut missings: Vec<String> = names.into_iter().map(str::to_string).collect();
            missings.sort();
            return Err(LakehouseError::PathUnresolved {
                path: self.path.clone(),
                missings,
            });
        }

        Ok(path)
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(path: String) -> Self {
        Self {
            path,
            args: IndexMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_params() {
        let path = CallPath::from("/buckets/bucket");

        assert_eq!(path.resolve().expect("resolved"), "/buckets/bucket");
    }

    #[test]
    fn test_path_with_param() {
        let path = CallPath::from("/access/data_policies/{policy_name}")
            .add_param("policy_name", "pii-mask");

        assert_eq!(
            path.resolve().expect("resolved"),
            "/access/data_policies/pii-mask"
        );
    }

    #[test]
    fn test_path_param_encoding() {
        let path = CallPath::from("/queries/{query_name}").add_param("query_name", "a/b c?d");

        assert_eq!(path.resolve().expect("resolved"), "/queries/a%2Fb%20c%3Fd");
    }

    #[test]
    fn test_path_param_keeps_unreserved_characters() {
        let path =
            CallPath::from("/queries/{query_name}").add_param("query_name", "q-1_v2.(x)~!*'");

        assert_eq!(path.resolve().expect("resolved"), "/queries/q-1_v2.(x)~!*'");
    }

    #[test]
    fn test_template_survives_arguments() {
        let path = CallPath::from("/access/buckets/{bucket_id}").add_param("bucket_id", "b 1");

        assert_eq!(path.template(), "/access/buckets/{bucket_id}");
        assert_eq!(path.to_string(), "/access/buckets/{bucket_id}");
        assert_eq!(path.resolve().expect("resolved"), "/access/buckets/b%201");
    }

    #[test]
    fn test_duplicate_placeholder() {
        let path = CallPath::from("/test/{id}/{id}").add_param("id", 123);

        assert_eq!(path.resolve().expect("resolved"), "/test/123/123");
    }

    #[test]
    fn test_missing_argument() {
        let path = CallPath::from("/access/engines/{engine_id}");

        let error = path.resolve().expect_err("should fail");

        assert!(matches!(
            error,
            LakehouseError::PathUnresolved { ref missings, .. }
                if missings == &["engine_id".to_string()]
        ));
    }

    #[test]
    fn test_unknown_argument_is_ignored() {
        let path = CallPath::from("/access/engines/{engine_id}")
            .add_param("engine_id", "presto-01")
            .add_param("other", "x");

        assert!(path.contains("other"));
        assert_eq!(
            path.resolve().expect("resolved"),
            "/access/engines/presto-01"
        );
    }
}
