/// GitHub repository whose releases host the plugin artifacts.
pub const DEFAULT_REPO: &str = "helmcode/kubectl-ai";

/// Manifest file updated in place, resolved relative to the working directory.
pub const MANIFEST_FILE: &str = "krew-manifest.yaml";
