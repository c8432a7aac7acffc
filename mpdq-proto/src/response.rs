use derive_more::{AsRef, IntoIterator};
use serde::{
    Serialize,
    Serializer,
    ser::{SerializeMap, SerializeStruct},
};
use strum::Display;

/// Value of a single field. Keys repeated within one record, ie. multiple
/// `Artist` tags of one song, are collected into [`Value::Multiple`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Single(String),
    Multiple(Vec<String>),
}

impl Value {
    /// The first value received for the key.
    pub fn first(&self) -> &str {
        match self {
            Value::Single(v) => v,
            Value::Multiple(v) => v.first().map_or("", String::as_str),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            Value::Single(v) => std::slice::from_ref(v),
            Value::Multiple(v) => v,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Value::Single(existing) => {
                *self = Value::Multiple(vec![std::mem::take(existing), value]);
            }
            Value::Multiple(values) => values.push(value),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Single(value.to_owned())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(value: [&str; N]) -> Self {
        Value::Multiple(value.iter().map(|v| (*v).to_owned()).collect())
    }
}

/// Key value pairs belonging to one logical entry of a response, in the
/// order the keys were first received.
#[derive(Debug, Default, Clone, PartialEq, Eq, IntoIterator, AsRef)]
pub struct Record(Vec<(String, Value)>);

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.push(value),
            None => self.0.push((key, Value::Single(value))),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Record::default();
        for (key, value) in iter {
            record.insert(key.into(), value.into());
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Output of one command inside a [`crate::command_list::ListMode::Separated`]
/// command list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    pub command: String,
    #[serde(rename = "response")]
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ResponseKind {
    Command,
    CommandList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Command(Vec<Record>),
    AggregateList(Vec<Record>),
    SeparatedList(Vec<CommandResponse>),
}

impl Response {
    pub fn kind(&self) -> ResponseKind {
        match self {
            Response::Command(_) => ResponseKind::Command,
            Response::AggregateList(_) | Response::SeparatedList(_) => ResponseKind::CommandList,
        }
    }

    /// Flat records of a single command or an aggregated command list.
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Response::Command(records) | Response::AggregateList(records) => Some(records),
            Response::SeparatedList(_) => None,
        }
    }

    /// Per command output of a separated command list.
    pub fn per_command(&self) -> Option<&[CommandResponse]> {
        match self {
            Response::SeparatedList(responses) => Some(responses),
            Response::Command(_) | Response::AggregateList(_) => None,
        }
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Response", 2)?;
        state.serialize_field("kind", &self.kind())?;
        match self {
            Response::Command(records) | Response::AggregateList(records) => {
                state.serialize_field("records", records)?;
            }
            Response::SeparatedList(responses) => {
                state.serialize_field("records", responses)?;
            }
        }
        state.end()
    }
}
