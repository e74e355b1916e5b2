use serde_json::{json, Value};
use std::fmt;

#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

/// Ordered key/value pairs attached to a log record.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LogFields(Vec<(String, Value)>);

impl LogFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    /// Puts `key`/`value` in front of the fields already collected.
    pub(crate) fn prefixed_by(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut fields = Vec::with_capacity(self.0.len() + 1);
        fields.push((key.into(), value.into()));
        fields.extend(self.0);
        Self(fields)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sequence as a JSON array of `[key, value]` pairs, order kept.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.0
                .iter()
                .map(|(key, value)| json!([key, value]))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for LogFields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Display for LogFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Destination for the leveled records written alongside error responses.
#[cfg_attr(any(test, feature = "mocks"), automock)]
pub trait LogSink: Send + Sync {
    fn error(&self, message: &str, fields: &LogFields);
    fn warn(&self, message: &str, fields: &LogFields);
}

/// Writes records through `tracing`, so they end up wherever the installed subscriber sends them.
/// The field sequence is attached as `fields`, a JSON array of `[key, value]` pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn error(&self, message: &str, fields: &LogFields) {
        tracing::error!(fields = %fields.to_json(), "{}", message);
    }

    fn warn(&self, message: &str, fields: &LogFields) {
        tracing::warn!(fields = %fields.to_json(), "{}", message);
    }
}
