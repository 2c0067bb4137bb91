pub mod fastq;

use std::path::Path;
use tracing::warn;

const FASTQ_EXTENSIONS: [&str; 6] = [
    ".fastq", ".fq", ".fastq.gz", ".fq.gz", ".fastq.bz2", ".fq.bz2",
];

/// Warns when input filenames look like reverse-read files (`*_2`, `*.2`,
/// `*_R2`). Reverse reads overlap forward reads over the same fragments and
/// inflate solid k-mer counts, so richness estimates on them are skewed.
pub fn warn_on_reverse_read_files(paths: &[impl AsRef<Path>]) {
    let suspicious: Vec<String> = paths
        .iter()
        .filter_map(|path| {
            let name = path.as_ref().file_name()?.to_string_lossy().into_owned();
            let stem = FASTQ_EXTENSIONS
                .iter()
                .find_map(|ext| name.strip_suffix(ext))
                .unwrap_or(&name);
            if stem.ends_with("_2") || stem.ends_with(".2") || stem.ends_with("_R2") {
                Some(name)
            } else {
                None
            }
        })
        .collect();

    if !suspicious.is_empty() {
        warn!(
            "Input FASTQ files probably contain reverse reads ({})",
            suspicious.join(",")
        );
        warn!("Use only forward reads for accurate results");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_reverse_read_names() {
        let name = Path::new("sample_R2.fastq.gz");
        let stem = FASTQ_EXTENSIONS
            .iter()
            .find_map(|ext| name.to_str().unwrap().strip_suffix(ext))
            .unwrap();
        assert_eq!(stem, "sample_R2");
        assert!(stem.ends_with("_R2"));
    }

    #[test]
    fn forward_read_names_pass() {
        let stem = FASTQ_EXTENSIONS
            .iter()
            .find_map(|ext| "sample_R1.fq".strip_suffix(ext))
            .unwrap();
        assert!(!stem.ends_with("_2") && !stem.ends_with(".2") && !stem.ends_with("_R2"));
    }
}
