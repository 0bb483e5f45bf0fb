use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{MarkupError, MarkupResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupConfig {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub syntax: SyntaxConfig,
}

impl MarkupConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> MarkupResult<Self> {
        from_file(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Deepest interpreter nesting a parse may reach.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// Which reference constructs the markdown preset recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxConfig {
    #[serde(default = "default_true")]
    pub headings: bool,

    #[serde(default = "default_true")]
    pub lists: bool,

    #[serde(default = "default_true")]
    pub bold: bool,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            headings: default_true(),
            lists: default_true(),
            bold: default_true(),
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> MarkupResult<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        MarkupError::Config(format!("Failed to open config file {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| MarkupError::Config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> MarkupResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| MarkupError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_max_depth() -> usize {
    128
}
fn default_true() -> bool {
    true
}
