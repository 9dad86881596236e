//! SUB file layer: `key = value` entries of a submit description.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Raw text of a SUB file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDocument(String);

impl SubDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        log::debug!("loaded SUB file {} ({} bytes)", path.display(), text.len());
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> Result<SubContent> {
        parse_sub_file(&self.0)
    }
}

/// Key/value entries of a SUB file, in file order. Keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubContent(IndexMap<String, String>);

impl SubContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Like `get`, but a missing key is an error.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Error::MissingKey {
            key: key.to_string(),
        })
    }

    pub fn executable(&self) -> Result<&str> {
        self.require("executable")
    }

    /// The raw `arguments` entry, quotes and placeholders untouched.
    pub fn arguments(&self) -> Result<&str> {
        self.require("arguments")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubContent {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut content = Self::new();
        for (k, v) in iter {
            content.insert(k, v);
        }
        content
    }
}

/// Parse SUB text into its key/value entries.
///
/// Expected shape (one entry per line):
/// key = value
///
/// The key is everything up to the first `=` that has blanks on both sides;
/// the value is the rest of the line. Both are trimmed. Lines without that
/// shape (`queue`, comments) are skipped, and a repeated key keeps its last
/// value. Required keys are not checked here.
pub fn parse_sub_file(sub_text: &str) -> Result<SubContent> {
    let re = Regex::new(r"(?mR)^(.+?)\s+=\s+(.+)$")?;

    let mut content = SubContent::new();
    for caps in re.captures_iter(sub_text) {
        content.insert(caps[1].trim(), caps[2].trim());
    }

    log::trace!("parsed {} SUB entries", content.len());
    Ok(content)
}
