use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use crate::data::PostError;

/// Ordered class-name table, loaded once at initialization and read-only
/// afterwards. Index `class_id` resolves the human-readable label name.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    names: Vec<String>,
}

impl Labels {
    /// Reads one label per line from a plain text file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path)
            .with_context(|| format!("failed to open label file {}", path.display()))?;
        let names: Vec<String> = BufReader::new(file)
            .lines()
            .collect::<Result<_, _>>()
            .with_context(|| format!("failed to read label file {}", path.display()))?;

        let labels = Self::from_names(names);
        if labels.is_empty() {
            anyhow::bail!("label file {} contains no labels", path.display());
        }
        Ok(labels)
    }

    pub fn from_names<S: Into<String>>(names: Vec<S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolves a class index to its label name. An index beyond the table
    /// means the label table and the model output-class-count are mismatched,
    /// which is fatal for the caller, never silently defaulted.
    pub fn name(&self, class_id: usize) -> Result<&str, PostError> {
        self.names
            .get(class_id)
            .map(String::as_str)
            .ok_or(PostError::LabelOutOfRange {
                class_id,
                len: self.names.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
