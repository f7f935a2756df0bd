use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

use crate::error::UpdateError;

/// The `selector.matchLabels` pair identifying one platform entry.
#[derive(Debug, Deserialize)]
pub struct PlatformLabels {
    pub os: String,
    pub arch: String,
}

pub fn load(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(UpdateError::ManifestNotFound(path.display().to_string()).into());
    }

    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Textual pre-pass over the raw manifest: rewrite the `version:` line and
/// every release download path segment to the new version. This runs before
/// the YAML parse, so the patterns match the authored text; occurrences
/// formatted differently silently pass through unchanged.
pub fn rewrite_versions(content: &str, version: &str) -> String {
    let version_line = Regex::new(r"version: v[0-9]+\.[0-9]+\.[0-9]+").unwrap();
    let content = version_line.replace_all(content, NoExpand(&format!("version: {version}")));

    let download_segment = Regex::new(r"download/v[0-9]+\.[0-9]+\.[0-9]+/").unwrap();
    download_segment
        .replace_all(&content, NoExpand(&format!("download/{version}/")))
        .into_owned()
}

pub fn parse(content: &str, file: &str) -> Result<Value, UpdateError> {
    serde_yaml::from_str(content).map_err(|source| UpdateError::ManifestParse {
        file: file.to_string(),
        source,
    })
}

/// Serialize the whole document back and overwrite the manifest in place.
/// Key order is kept as parsed, collections render in block style.
pub fn save(path: &Path, doc: &Value) -> Result<()> {
    let rendered = serde_yaml::to_string(doc)
        .with_context(|| format!("failed to serialize {}", path.display()))?;

    fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))
}

/// Mutable view of the `spec.platforms` list.
pub fn platforms_mut(doc: &mut Value) -> Result<&mut Vec<Value>> {
    doc.get_mut("spec")
        .and_then(|spec| spec.get_mut("platforms"))
        .and_then(Value::as_sequence_mut)
        .context("manifest has no spec.platforms list")
}

/// Read the (os, arch) labels of a platform entry. Entries without a full
/// selector are treated as unrecognized and skipped by the caller.
pub fn platform_labels(entry: &Value) -> Option<PlatformLabels> {
    let labels = entry.get("selector")?.get("matchLabels")?;
    serde_yaml::from_value(labels.clone()).ok()
}
