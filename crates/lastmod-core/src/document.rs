//! Markdown documents with a YAML frontmatter block
//!
//! Only the frontmatter is interpreted. The body is carried through
//! byte for byte, and unrelated frontmatter keys keep their order.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::{LastmodError, Result};
use crate::property::{self, PropertyValue, LAST_MODIFIED_KEY};

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// A parsed markdown document
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    frontmatter: Mapping,
    body: String,
    /// Leading byte order mark, restored on render
    bom: bool,
}

/// Split `content` into (yaml, body) if it opens with a frontmatter block
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let first_end = content.find('\n')?;
    if content[..first_end].trim_end_matches('\r') != DELIMITER {
        return None;
    }

    let yaml_start = first_end + 1;
    let mut line_start = yaml_start;
    while line_start <= content.len() {
        let rest = &content[line_start..];
        let (line, next) = match rest.find('\n') {
            Some(i) => (&rest[..i], line_start + i + 1),
            None => (rest, content.len() + 1),
        };
        if line.trim_end_matches('\r') == DELIMITER {
            let body_start = next.min(content.len());
            return Some((&content[yaml_start..line_start], &content[body_start..]));
        }
        line_start = next;
    }

    None
}

impl Document {
    /// Parse document content. `path` is only used for error reporting.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let invalid = |reason: String| LastmodError::InvalidFrontmatter {
            path: path.to_path_buf(),
            reason,
        };

        let (bom, content) = match content.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, content),
        };

        let Some((yaml, body)) = split_frontmatter(content) else {
            if content.lines().next().map(|l| l.trim_end_matches('\r')) == Some(DELIMITER) {
                return Err(invalid(
                    "missing closing frontmatter delimiter (---)".to_string(),
                ));
            }
            return Ok(Self {
                path: path.to_path_buf(),
                frontmatter: Mapping::new(),
                body: content.to_string(),
                bom,
            });
        };

        let frontmatter = if yaml.trim().is_empty() {
            Mapping::new()
        } else {
            match serde_yaml::from_str::<Value>(yaml).map_err(|e| invalid(e.to_string()))? {
                Value::Mapping(mapping) => mapping,
                Value::Null => Mapping::new(),
                _ => return Err(invalid("frontmatter is not a mapping".to_string())),
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            frontmatter,
            body: body.to_string(),
            bom,
        })
    }

    /// Path the document was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Document text after the frontmatter block
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Raw frontmatter mapping
    pub fn frontmatter(&self) -> &Mapping {
        &self.frontmatter
    }

    /// Current `last-modified` value
    pub fn last_modified(&self) -> PropertyValue {
        PropertyValue::from_yaml(self.frontmatter.get(LAST_MODIFIED_KEY))
    }

    /// Replace `last-modified` with `log`, keeping its position if present
    pub fn set_last_modified(&mut self, log: &[String]) {
        self.frontmatter.insert(
            Value::String(LAST_MODIFIED_KEY.to_string()),
            property::to_yaml(log),
        );
    }

    /// Serialize back to markdown
    pub fn render(&self) -> Result<String> {
        let mut out = String::with_capacity(self.body.len() + 128);
        if self.bom {
            out.push(BOM);
        }
        out.push_str(DELIMITER);
        out.push('\n');
        if !self.frontmatter.is_empty() {
            out.push_str(&serde_yaml::to_string(&self.frontmatter)?);
            if !out.ends_with('\n') {
                out.push('\n');
            }
        }
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&self.body);
        Ok(out)
    }
}
