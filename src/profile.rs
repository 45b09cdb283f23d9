use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::ProfileError;

/// Opaque field value. Shown verbatim, never validated.
/// Booleans are accepted but display as blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(_) => Ok(()),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Integer(i64::from(n))
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

/// The record a host hands to the card. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<FieldValue>,
}

impl Profile {
    pub fn new(
        name: impl Into<FieldValue>,
        age: impl Into<FieldValue>,
        city: impl Into<FieldValue>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age.into()),
            city: Some(city.into()),
        }
    }

    /// Fields from `other` win where present.
    pub fn overlay(mut self, other: Profile) -> Self {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.age.is_some() {
            self.age = other.age;
        }
        if other.city.is_some() {
            self.city = other.city;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.city.is_none()
    }

    pub fn from_json(content: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a profile file, picking the parser from its extension.
    pub async fn load(path: &Path) -> Result<Self, ProfileError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ProfileError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Loaded profile file: {}", path.display());

        match ext.as_str() {
            "json" => Self::from_json(&content),
            "toml" => Self::from_toml(&content),
            other => Err(ProfileError::UnsupportedFormat(other.to_string())),
        }
    }
}
