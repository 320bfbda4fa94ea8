//! Generic ordered key/value dump used for persistence and printing.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::errors::{LexiconError, Result};
use crate::value::Value;

/// A header line plus ordered entries. `R` is the raw entry type: [`Value`]
/// for dumps produced by a lexicon, `serde_json::Value` for parsed documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Dump<R = Value> {
    pub header: String,
    pub entries: Vec<(R, R)>,
}

impl<R> Dump<R> {
    pub fn new(header: impl Into<String>, entries: Vec<(R, R)>) -> Self {
        Self { header: header.into(), entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// On-disk shape: `{"header": "...", "entries": [k1, v1, k2, v2]}`.
#[derive(Debug, Serialize, Deserialize)]
struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<String>,
    entries: Vec<Json>,
}

impl Dump<Value> {
    pub fn to_json(&self) -> Result<Json> {
        let mut entries = Vec::with_capacity(self.entries.len() * 2);
        for (k, v) in &self.entries {
            entries.push(k.to_json()?);
            entries.push(v.to_json()?);
        }
        let doc = Document { header: Some(self.header.clone()), entries };
        Ok(serde_json::to_value(&doc)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json()?)?)
    }
}

impl Dump<Json> {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_json(serde_json::from_str(s)?)
    }

    pub fn from_json(json: Json) -> Result<Self> {
        let doc: Document = serde_json::from_value(json)?;
        if doc.entries.len() % 2 != 0 {
            return Err(LexiconError::Format(format!(
                "entries must alternate keys and values, got {} items",
                doc.entries.len()
            )));
        }
        let mut items = doc.entries.into_iter();
        let mut entries = Vec::with_capacity(items.len() / 2);
        while let (Some(k), Some(v)) = (items.next(), items.next()) {
            entries.push((k, v));
        }
        Ok(Self { header: doc.header.unwrap_or_default(), entries })
    }
}
