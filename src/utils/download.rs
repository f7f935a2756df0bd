use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use sha2::{Digest, Sha256};

use crate::error::UpdateError;
use crate::options::verbose;

/// Fetch one release artifact whole into memory. Any network or HTTP error
/// aborts the run; there is no retry.
pub fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, UpdateError> {
    println!("Downloading {}", url);

    let resp = client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .map_err(|source| UpdateError::Download {
            url: url.to_string(),
            source,
        })?;

    let total_size = resp.content_length().unwrap_or(0);

    let pb = ProgressBar::new(total_size);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
        .unwrap()
        .progress_chars("#>-"));

    let content = resp.bytes().map_err(|source| UpdateError::Download {
        url: url.to_string(),
        source,
    })?;

    pb.set_position(content.len() as u64);
    pb.finish_with_message("Download complete");

    verbose::log(&format!("Fetched {} bytes", content.len()));

    Ok(content.to_vec())
}

/// Lowercase hex SHA-256 digest, as stored in the manifest's sha256 field.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
