//! Split, parse, and render markdown documents with a YAML front matter block.

use crate::error::FrontmatterError;
use serde_yaml::{Mapping, Value};

const YAML_FENCE: &str = "---";
const TOML_FENCE: &str = "+++";
const BOM: char = '\u{feff}';

/// A markdown document split into front matter fields and body
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub fields: Mapping,
    pub body: String,
    /// Whether the source carried a front matter block at all
    pub has_block: bool,
}

/// Byte ranges of a located block: (yaml start, yaml end, body start)
type BlockBounds = (usize, usize, usize);

fn is_fence(line: &str, fence: &str) -> bool {
    line.trim_end_matches('\r') == fence
}

fn locate_block(input: &str) -> Result<Option<BlockBounds>, FrontmatterError> {
    let first_end = input.find('\n').unwrap_or(input.len());
    let first = &input[..first_end];
    if is_fence(first, TOML_FENCE) {
        return Err(FrontmatterError::UnsupportedFormat("toml"));
    }
    if !is_fence(first, YAML_FENCE) {
        return Ok(None);
    }

    let yaml_start = (first_end + 1).min(input.len());
    let mut offset = yaml_start;
    while offset < input.len() {
        let line_end = input[offset..].find('\n').map(|i| offset + i);
        let line = &input[offset..line_end.unwrap_or(input.len())];
        if is_fence(line, YAML_FENCE) {
            let body_start = line_end.map(|e| e + 1).unwrap_or(input.len());
            return Ok(Some((yaml_start, offset, body_start)));
        }
        match line_end {
            Some(end) => offset = end + 1,
            None => break,
        }
    }
    Err(FrontmatterError::Unterminated)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

impl Document {
    /// Parse a document; input without a leading `---` line has empty fields.
    pub fn parse(input: &str) -> Result<Self, FrontmatterError> {
        let input = input.strip_prefix(BOM).unwrap_or(input);
        let Some((yaml_start, yaml_end, body_start)) = locate_block(input)? else {
            return Ok(Self {
                fields: Mapping::new(),
                body: input.to_string(),
                has_block: false,
            });
        };

        let raw = &input[yaml_start..yaml_end];
        let fields = if raw.trim().is_empty() {
            Mapping::new()
        } else {
            match serde_yaml::from_str::<Value>(raw)? {
                Value::Mapping(m) => m,
                Value::Null => Mapping::new(),
                other => return Err(FrontmatterError::NotAMapping(kind_of(&other))),
            }
        };

        Ok(Self {
            fields,
            body: input[body_start..].to_string(),
            has_block: true,
        })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Render the fields as a `---` block followed by the unchanged body.
    pub fn render(&self) -> Result<String, FrontmatterError> {
        let yaml = if self.fields.is_empty() {
            String::new()
        } else {
            serde_yaml::to_string(&self.fields)?
        };
        let mut out = String::with_capacity(yaml.len() + self.body.len() + 8);
        out.push_str(YAML_FENCE);
        out.push('\n');
        out.push_str(&yaml);
        out.push_str(YAML_FENCE);
        out.push('\n');
        out.push_str(&self.body);
        Ok(out)
    }
}
