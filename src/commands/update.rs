use anyhow::Result;
use colored::Colorize;
use reqwest::blocking::Client;
use std::path::Path;

use crate::config;
use crate::manifest;
use crate::options::verbose;
use crate::platforms;
use crate::utils::{self, download};

/// Update krew-manifest.yaml for a new release: rewrite the version and the
/// download URLs, then refresh every recognized platform's sha256 from the
/// published artifacts. The file is written back only after every download
/// has succeeded, so a failed run leaves it untouched.
pub fn execute(version: &str, repo: &str) -> Result<()> {
    utils::validate_version(version)?;

    let path = Path::new(config::MANIFEST_FILE);
    let content = manifest::load(path)?;

    println!("Updating krew manifest for version {}", version.green());

    // Textual edits first, then the edited text is parsed. The substitution
    // patterns match the authored serialized form, not parsed fields.
    let content = manifest::rewrite_versions(&content, version);
    let mut doc = manifest::parse(&content, config::MANIFEST_FILE)?;

    println!("Calculating SHA256 checksums...");

    let client = Client::new();

    for entry in manifest::platforms_mut(&mut doc)? {
        let Some(labels) = manifest::platform_labels(entry) else {
            verbose::log("Skipping platform entry without os/arch labels");
            continue;
        };

        let Some(filename) = platforms::artifact_for(&labels.os, &labels.arch) else {
            verbose::log(&format!(
                "Skipping unrecognized platform {}/{}",
                labels.os, labels.arch
            ));
            continue;
        };

        let url = utils::release_url(repo, version, filename);
        let bytes = download::fetch_bytes(&client, &url)?;
        let digest = download::sha256_hex(&bytes);

        if let Some(fields) = entry.as_mapping_mut() {
            fields.insert("sha256".into(), digest.clone().into());
        }

        println!("Updated {}/{}: {}", labels.os, labels.arch, digest.green());
    }

    manifest::save(path, &doc)?;

    println!("{}", "Krew manifest updated successfully!".green());
    println!();
    println!("Next steps:");
    println!("  1. Review the changes in {}", config::MANIFEST_FILE);
    println!("  2. Commit and push the updated manifest");
    println!("  3. Submit to krew-index if needed");

    Ok(())
}
