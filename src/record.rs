//! Records and their stream context.

use crate::value::Value;

/// One record of the stream: field names mapped to values, kept in
/// insertion order. Records are small, so lookup is a linear scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set a field: overwrites in place when the name exists, appends
    /// otherwise.
    pub fn put(&mut self, name: &str, value: Value) {
        for (key, slot) in &mut self.fields {
            if key == name {
                *slot = value;
                return;
            }
        }
        self.fields.push((name.to_string(), value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.fields.iter().position(|(key, _)| key == name)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.put(&name, value);
        }
        record
    }
}

/// Stream bookkeeping carried alongside each record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    pub filename: String,
    /// Record number across all inputs.
    pub nr: u64,
    /// Record number within the current file.
    pub fnr: u64,
}

/// A record paired with its context as it travels between mappers.
/// `record: None` is the end-of-stream marker; its context is still
/// meaningful (the last state the producer saw).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordAndContext {
    pub record: Option<Record>,
    pub context: Context,
}

impl RecordAndContext {
    pub fn new(record: Record, context: Context) -> Self {
        Self {
            record: Some(record),
            context,
        }
    }

    pub fn end_of_stream(context: Context) -> Self {
        Self {
            record: None,
            context,
        }
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.record.is_none()
    }
}
