//! Default front matter fields
//!
//! Each default is added only when its key is absent from the document. Keys are
//! appended in a fixed order so rewritten files are stable across runs.

use crate::config::FrontmatterConfig;
use crate::error::ContentError;
use crate::frontmatter::{Document, WEIGHT_KEY};
use crate::tree::ordinal::display_name;
use crate::types::Weight;
use chrono::{DateTime, Local};
use serde_yaml::{Mapping, Value};
use std::path::{Component, Path};

/// Keys in the order they are appended
pub const DEFAULT_KEYS: [&str; 9] = [
    "title",
    "date",
    "url",
    "type",
    "description",
    WEIGHT_KEY,
    "tags",
    "categories",
    "author",
];

const SLUG_BYTES: usize = 3;

/// Builder for the default fields of files under one content root
pub struct DefaultFields<'a> {
    config: &'a FrontmatterConfig,
    content_root: &'a Path,
    ignore_names: &'a [String],
}

impl<'a> DefaultFields<'a> {
    pub fn new(
        config: &'a FrontmatterConfig,
        content_root: &'a Path,
        ignore_names: &'a [String],
    ) -> Self {
        Self {
            config,
            content_root,
            ignore_names,
        }
    }

    /// Content-root relative path with `/` separators.
    pub fn relative_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(self.content_root).unwrap_or(path);
        rel.components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Keys that would receive a default value for `doc`.
    pub fn missing_keys(&self, doc: &Document) -> Vec<&'static str> {
        DEFAULT_KEYS
            .iter()
            .copied()
            .filter(|key| !doc.contains_key(key))
            .filter(|key| match *key {
                "url" => self.permalink_prefix().is_some(),
                "author" => self.config.author.is_some(),
                _ => true,
            })
            .collect()
    }

    /// Add the missing defaults to `doc` and return the keys added.
    ///
    /// `weight` is only called when the document has no `weight` key.
    pub fn fill<F>(
        &self,
        doc: &mut Document,
        path: &Path,
        weight: F,
    ) -> Result<Vec<&'static str>, ContentError>
    where
        F: FnOnce() -> Weight,
    {
        let missing = self.missing_keys(doc);
        let mut weight = Some(weight);
        for key in &missing {
            let value = match *key {
                "title" => Value::from(self.title(path)),
                "date" => Value::from(self.date(path)?),
                "url" => match self.permalink(path) {
                    Some(url) => Value::from(url),
                    None => continue,
                },
                "type" => Value::from(self.config.doc_type.clone()),
                "description" => Value::from(""),
                WEIGHT_KEY => match weight.take() {
                    Some(compute) => Value::from(compute()),
                    None => continue,
                },
                "tags" => Value::Sequence(Vec::new()),
                "categories" => Value::Sequence(
                    self.categories(path).into_iter().map(Value::from).collect(),
                ),
                "author" => match self.author() {
                    Some(author) => author,
                    None => continue,
                },
                _ => continue,
            };
            doc.fields.insert(Value::from(*key), value);
        }
        Ok(missing)
    }

    pub fn title(&self, path: &Path) -> String {
        path.file_name()
            .map(|n| display_name(&n.to_string_lossy()))
            .unwrap_or_default()
    }

    /// File creation time, or modification time where the platform lacks it.
    pub fn date(&self, path: &Path) -> Result<String, ContentError> {
        let read_err = |source| ContentError::ReadFile {
            path: path.to_path_buf(),
            source,
        };
        let metadata = std::fs::metadata(path).map_err(read_err)?;
        let time = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map_err(read_err)?;
        let local: DateTime<Local> = time.into();
        Ok(local.format(&self.config.date_format).to_string())
    }

    fn permalink_prefix(&self) -> Option<&str> {
        self.config
            .permalink_prefix
            .as_deref()
            .map(|p| p.trim_matches('/'))
            .filter(|p| !p.is_empty())
    }

    /// `/{prefix}/{slug}`, where the slug is derived from the relative path.
    pub fn permalink(&self, path: &Path) -> Option<String> {
        let prefix = self.permalink_prefix()?;
        let hash = blake3::hash(self.relative_path(path).as_bytes());
        let slug = hex::encode(&hash.as_bytes()[..SLUG_BYTES]);
        Some(format!("/{}/{}", prefix, slug))
    }

    /// Directory display names between the content root and the file.
    pub fn categories(&self, path: &Path) -> Vec<String> {
        if !self.config.categories {
            return Vec::new();
        }
        let rel = self.relative_path(path);
        let mut segments: Vec<&str> = rel.split('/').collect();
        segments.pop();
        segments
            .into_iter()
            .map(display_name)
            .filter(|name| !name.is_empty())
            .filter(|name| !self.ignore_names.iter().any(|ignored| ignored == name))
            .collect()
    }

    fn author(&self) -> Option<Value> {
        let author = self.config.author.as_ref()?;
        let mut map = Mapping::new();
        map.insert(Value::from("name"), Value::from(author.name.clone()));
        if let Some(link) = &author.link {
            map.insert(Value::from("link"), Value::from(link.clone()));
        }
        Some(Value::Mapping(map))
    }
}
