//! Responses written to stdout

use serde::{Deserialize, Serialize};

/// A resource version, the Marathon app version timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    #[serde(rename = "ref")]
    pub reference: String,
}

impl Version {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

/// Key/value shown in the Concourse UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPair {
    pub name: String,
    pub value: String,
}

impl MetadataPair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Output of `in` and `out`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOutput {
    pub version: Version,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataPair>,
}

/// Output of `check`
pub type CheckOutput = Vec<Version>;
