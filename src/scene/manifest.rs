use crate::foundation::error::{SidleError, SidleResult};
use crate::foundation::paths::normalize_lexically;
use crate::scene::model::Manifest;
use serde_json::error::Category;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

impl Manifest {
    /// Parse a manifest from a JSON reader.
    ///
    /// Syntax errors map to [`SidleError::Parse`]; missing or mistyped fields, unknown
    /// element types, and bad colours map to [`SidleError::Schema`].
    pub fn from_reader<R: std::io::Read>(r: R) -> SidleResult<Self> {
        serde_json::from_reader(r).map_err(classify_json_error)
    }

    /// Parse a manifest from an in-memory JSON document.
    pub fn from_json_str(s: &str) -> SidleResult<Self> {
        serde_json::from_str(s).map_err(classify_json_error)
    }

    /// Parse a manifest from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SidleResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| SidleError::io(format!("could not open '{}': {e}", path.display())))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check constraints that the JSON shape alone cannot express.
    pub fn validate(&self) -> SidleResult<()> {
        for res in &self.resolutions {
            res.validate()?;
        }

        let mut seen = BTreeSet::new();
        for image in &self.images {
            let name = image.name.as_str();
            if name.is_empty() || name == "." || name == ".." {
                return Err(SidleError::schema(format!(
                    "image name \"{name}\" is not a usable file name"
                )));
            }
            if name.contains(['/', '\\']) {
                return Err(SidleError::schema(format!(
                    "image name \"{name}\" must not contain path separators"
                )));
            }
            if !seen.insert(name) {
                return Err(SidleError::schema(format!(
                    "image name \"{name}\" is declared more than once"
                )));
            }
        }

        Ok(())
    }

    /// `outputPath` with `.` and `name/..` segments folded away.
    pub fn normalized_output_path(&self) -> PathBuf {
        normalize_lexically(&self.output_path)
    }
}

fn classify_json_error(e: serde_json::Error) -> SidleError {
    match e.classify() {
        Category::Syntax | Category::Eof => SidleError::parse(e.to_string()),
        Category::Data => SidleError::schema(e.to_string()),
        Category::Io => SidleError::io(e.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/manifest.rs"]
mod tests;
