//! Field-level validation failures, collected rather than short-circuited.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered `field -> [message]` multimap.
///
/// Fields keep the order in which they were first reported. Serializes as a
/// JSON object whose values are message arrays, e.g.
/// `{"amount": ["..."], "sender": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldViolations {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldViolations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`, appending to any earlier messages.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field, vec![message])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct fields with at least one message.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(f, _)| f.as_str())
    }
}

impl core::fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.entries {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl Serialize for FieldViolations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}
