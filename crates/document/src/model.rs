use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document header; free-form provenance fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Header {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
}

/// Document footer; stamped at generation time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Footer {
    #[serde(default)]
    pub generated: Option<DateTime<Utc>>,
}

impl Footer {
    pub fn stamped() -> Self {
        Self {
            generated: Some(Utc::now()),
        }
    }
}

/// A structured document: header, an ordered list of records, footer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Document<C> {
    #[serde(default)]
    pub header: Header,
    #[serde(default = "Vec::new")]
    pub content: Vec<C>,
    #[serde(default)]
    pub footer: Footer,
}

impl<C> Document<C> {
    pub fn new(header: Header, content: Vec<C>, footer: Footer) -> Self {
        Self {
            header,
            content,
            footer,
        }
    }
}
