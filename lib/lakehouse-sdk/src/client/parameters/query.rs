use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::client::LakehouseError;

/// Query string parameters of a call.
///
/// Values are kept as JSON values so arrays and booleans reach the transport
/// unchanged; [`CallQuery::to_query_string`] is where they get serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallQuery {
    params: IndexMap<String, Value>,
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter. `null` values are skipped.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized to JSON.
    pub fn add_param<T: Serialize>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self, LakehouseError> {
        let value = serde_json::to_value(value)?;
        if !value.is_null() {
            self.params.insert(name.into(), value);
        }
        Ok(self)
    }

    /// Returns the raw value of a parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Returns `true` if a parameter with this name was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Checks if there is no parameter.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Serializes the parameters into a URL-encoded query string.
    ///
    /// Booleans become `true`/`false`, arrays are joined with commas.
    ///
    /// # Errors
    ///
    /// Objects, and arrays containing objects or arrays, are rejected.
    pub fn to_query_string(&self) -> Result<String, LakehouseError> {
        let mut pairs = Vec::with_capacity(self.params.len());
        for (name, value) in &self.params {
            pairs.push((name.as_str(), query_value(value)?));
        }
        let query = serde_urlencoded::to_string(pairs)?;
        Ok(query)
    }
}

fn query_value(value: &Value) -> Result<String, LakehouseError> {
    match value {
        Value::Array(items) => {
            let items = items
                .iter()
                .map(scalar_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(items.join(","))
        }
        _ => scalar_value(value),
    }
}

fn scalar_value(value: &Value) -> Result<String, LakehouseError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text.clone()),
        Value::Array(_) | Value::Object(_) => Err(LakehouseError::UnsupportedQueryParameterValue {
            value: value.clone(),
        }),
    }
}
