//! Front matter
//!
//! Reading, caching, and defaulting the metadata block at the top of content files.

pub mod cache;
pub mod defaults;
pub mod document;

use crate::error::ContentError;
use crate::types::Weight;
use serde_yaml::{Mapping, Value};
use std::path::Path;

pub use cache::FrontmatterCache;
pub use defaults::DefaultFields;
pub use document::Document;

/// Key holding the ordering weight
pub const WEIGHT_KEY: &str = "weight";

/// Metadata associated with one content file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontmatterRecord {
    pub weight: Option<Weight>,
    pub fields: Mapping,
}

impl FrontmatterRecord {
    pub fn from_fields(fields: Mapping) -> Self {
        Self {
            weight: fields.get(WEIGHT_KEY).and_then(numeric_weight),
            fields,
        }
    }

    /// Read and parse `path`.
    ///
    /// A file that cannot be parsed yields an empty record; I/O failures are errors.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        match Document::parse(&content) {
            Ok(doc) => Ok(Self::from_fields(doc.fields)),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Unparseable front matter");
                Ok(Self::default())
            }
        }
    }

    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }
}

/// Interpret a YAML value as a weight. Floats truncate toward zero; strings never count.
pub fn numeric_weight(value: &Value) -> Option<Weight> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    n.as_f64()
        .filter(|f| f.is_finite() && *f >= Weight::MIN as f64 && *f <= Weight::MAX as f64)
        .map(|f| f.trunc() as Weight)
}
