/// Release artifact filenames keyed by the manifest's (os, arch) labels.
/// Platform entries outside this table are skipped during the checksum
/// refresh and survive the run unchanged.
pub const PLATFORM_FILES: &[((&str, &str), &str)] = &[
    (("linux", "amd64"), "kubectl-ai-linux-amd64.tar.gz"),
    (("linux", "arm64"), "kubectl-ai-linux-arm64.tar.gz"),
    (("darwin", "amd64"), "kubectl-ai-darwin-amd64.tar.gz"),
    (("darwin", "arm64"), "kubectl-ai-darwin-arm64.tar.gz"),
    (("windows", "amd64"), "kubectl-ai-windows-amd64.exe.zip"),
];

pub fn artifact_for(os: &str, arch: &str) -> Option<&'static str> {
    PLATFORM_FILES
        .iter()
        .find(|((table_os, table_arch), _)| *table_os == os && *table_arch == arch)
        .map(|(_, filename)| *filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pairs_resolve_to_filenames() {
        assert_eq!(
            artifact_for("linux", "amd64"),
            Some("kubectl-ai-linux-amd64.tar.gz")
        );
        assert_eq!(
            artifact_for("darwin", "arm64"),
            Some("kubectl-ai-darwin-arm64.tar.gz")
        );
        assert_eq!(
            artifact_for("windows", "amd64"),
            Some("kubectl-ai-windows-amd64.exe.zip")
        );
    }

    #[test]
    fn unknown_pairs_are_not_mapped() {
        assert_eq!(artifact_for("windows", "arm64"), None);
        assert_eq!(artifact_for("freebsd", "amd64"), None);
        assert_eq!(artifact_for("linux", "riscv64"), None);
    }
}
