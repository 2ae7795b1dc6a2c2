use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DocumentError;
use crate::model::Document;

/// Load/save contract for structured documents.
pub trait DocumentStore<C> {
    fn load(&self) -> Result<Document<C>, DocumentError>;
    fn save(&self, document: &Document<C>) -> Result<(), DocumentError>;
}

/// JSON file implementation of [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct JsonDocumentFile<C> {
    path: PathBuf,
    _marker: PhantomData<C>,
}

impl<C> JsonDocumentFile<C> {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<C> DocumentStore<C> for JsonDocumentFile<C>
where
    C: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Document<C>, DocumentError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, document: &Document<C>) -> Result<(), DocumentError> {
        let raw = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
