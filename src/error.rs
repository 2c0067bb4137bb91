use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the richness pipeline.
///
/// Configuration problems are reported before any input is opened. Decoding
/// problems abort the whole sample run: a reservoir built from a truncated
/// stream would be silently biased, so there is no partial recovery.
#[derive(Debug, Error)]
pub enum EskrimError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("FASTQ file {path} is truncated or invalid (record {record})")]
    TruncatedFastq { path: PathBuf, record: u64 },

    #[error("input FASTQ files are empty")]
    EmptyInput,

    #[error("no reads of at least {read_length} bp without ambiguous bases in input FASTQ files")]
    NoUsableReads { read_length: usize },
}

impl EskrimError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EskrimError::Io {
            path: path.into(),
            source,
        }
    }
}
