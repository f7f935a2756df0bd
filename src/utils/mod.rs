pub mod download;

use regex::Regex;

use crate::error::UpdateError;

/// Check the target version against the release tag format, e.g. `v0.1.3`.
pub fn validate_version(version: &str) -> Result<(), UpdateError> {
    let pattern = Regex::new(r"^v\d+\.\d+\.\d+$").unwrap();

    if pattern.is_match(version) {
        Ok(())
    } else {
        Err(UpdateError::InvalidVersionFormat(version.to_string()))
    }
}

pub fn release_url(repo: &str, version: &str, filename: &str) -> String {
    format!("https://github.com/{repo}/releases/download/{version}/{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_release_tags() {
        assert!(validate_version("v0.1.3").is_ok());
        assert!(validate_version("v12.0.105").is_ok());
    }

    #[test]
    fn rejects_malformed_versions() {
        assert!(validate_version("1.2.3").is_err());
        assert!(validate_version("v1.2").is_err());
        assert!(validate_version("version3").is_err());
        assert!(validate_version("v1.2.3-rc1").is_err());
    }

    #[test]
    fn builds_release_download_urls() {
        assert_eq!(
            release_url(
                "helmcode/kubectl-ai",
                "v0.1.3",
                "kubectl-ai-linux-amd64.tar.gz"
            ),
            "https://github.com/helmcode/kubectl-ai/releases/download/v0.1.3/kubectl-ai-linux-amd64.tar.gz"
        );
    }
}
