use std::path::PathBuf;

use tracing::{info, warn};

use crate::classify::classify_kmers;
use crate::error::EskrimError;
use crate::filter::{filter_read, FilterOutcome};
use crate::io::fastq::{FastqStream, FastqWriter};
use crate::io::warn_on_reverse_read_files;
use crate::kmer::counter::KmerCounter;
use crate::reservoir::Reservoir;
use crate::stats::SampleStats;

/// Largest k that fits the 2-bit packed representation.
pub const MAX_KMER_LENGTH: usize = 32;

/// Parameters of one sample run. A run is fully determined by the input
/// files, these parameters and the seed; re-running with the same values
/// reproduces the record byte for byte.
#[derive(Debug, Clone)]
pub struct RichnessConfig {
    pub input_files: Vec<PathBuf>,
    pub sample_name: String,
    pub read_length: usize,
    pub target_num_reads: usize,
    pub kmer_length: usize,
    /// Merge each k-mer with its reverse complement while counting.
    pub canonical: bool,
    pub seed: u64,
    /// Optional path to save the selected reads as FASTQ(.gz).
    pub output_fastq: Option<PathBuf>,
}

impl RichnessConfig {
    pub fn validate(&self) -> Result<(), EskrimError> {
        if self.input_files.is_empty() {
            return Err(EskrimError::Config("no input FASTQ files".to_string()));
        }
        if self.read_length == 0 {
            return Err(EskrimError::Config("READ_LENGTH must be positive".to_string()));
        }
        if self.target_num_reads == 0 {
            return Err(EskrimError::Config("TARGET_NUM_READS must be positive".to_string()));
        }
        if self.kmer_length == 0 || self.kmer_length > MAX_KMER_LENGTH {
            return Err(EskrimError::Config(format!(
                "KMER_LENGTH must be in 1..={}",
                MAX_KMER_LENGTH
            )));
        }
        if self.canonical && self.kmer_length % 2 == 0 {
            // An even canonical k-mer can be its own reverse complement,
            // which skews solidity counts on palindromes
            return Err(EskrimError::Config(
                "KMER_LENGTH must be odd when counting canonically".to_string(),
            ));
        }
        Ok(())
    }
}

/// Runs the whole pipeline for one sample: stream, filter and subsample the
/// reads, then count and classify k-mers over the finalized reservoir.
pub fn run_sample(config: &RichnessConfig) -> Result<SampleStats, EskrimError> {
    config.validate()?;
    warn_on_reverse_read_files(&config.input_files);

    info!("Subsampling reads from FASTQ files");
    let mut total_num_reads = 0u64;
    let mut num_ns_reads_ignored = 0u64;
    let mut num_too_short_reads_ignored = 0u64;
    let mut reservoir = Reservoir::new(config.target_num_reads, config.seed);

    for record in FastqStream::new(config.input_files.clone()) {
        let record = record?;
        total_num_reads += 1;

        match filter_read(record, config.read_length) {
            FilterOutcome::Accepted(read) => reservoir.observe(read),
            FilterOutcome::RejectedAmbiguous => num_ns_reads_ignored += 1,
            FilterOutcome::RejectedTooShort => num_too_short_reads_ignored += 1,
        }

        if total_num_reads % 10_000_000 == 0 {
            info!("Processed {} reads so far...", total_num_reads);
        }
    }

    if total_num_reads == 0 {
        return Err(EskrimError::EmptyInput);
    }

    let selected_reads = reservoir.into_items();
    if selected_reads.is_empty() {
        return Err(EskrimError::NoUsableReads {
            read_length: config.read_length,
        });
    }

    if selected_reads.len() < config.target_num_reads {
        warn!(
            "Only {} reads of at least {} bp and no Ns are available in input FASTQ files",
            selected_reads.len(),
            config.read_length
        );
        warn!(
            "Selected read count ({}) is less than the target read count ({})",
            selected_reads.len(),
            config.target_num_reads
        );
        warn!("Restart with a lower target read count or discard the current sample");
    }

    info!(
        "{} reads out of {} ({:.2}%) selected in input FASTQ files",
        selected_reads.len(),
        total_num_reads,
        100.0 * selected_reads.len() as f64 / total_num_reads as f64
    );

    if let Some(path) = &config.output_fastq {
        info!("Writing selected reads");
        let mut writer = FastqWriter::create(path).map_err(|e| EskrimError::io(path, e))?;
        for read in &selected_reads {
            writer.write_record(read).map_err(|e| EskrimError::io(path, e))?;
        }
        writer.finish().map_err(|e| EskrimError::io(path, e))?;
        info!("Selected reads saved in {}", path.display());
    }

    info!("Counting kmers (k={})", config.kmer_length);
    let counter = KmerCounter::new(config.kmer_length, config.canonical);
    let sequences: Vec<&str> = selected_reads.iter().map(|r| r.sequence.as_str()).collect();
    let counts = counter.count(&sequences);

    info!("Classifying kmers by solidity");
    let classification = classify_kmers(&sequences, &counts, &counter);
    info!("{} distinct kmers found", classification.num_distinct_kmers);
    info!("{} solid kmers found", classification.num_solid_kmers);
    info!("{} mercy kmers found", classification.num_mercy_kmers);

    Ok(SampleStats {
        sample_name: config.sample_name.clone(),
        total_num_reads,
        num_ns_reads_ignored,
        num_too_short_reads_ignored,
        target_num_reads: config.target_num_reads as u64,
        num_selected_reads: selected_reads.len() as u64,
        read_length: config.read_length as u64,
        kmer_length: config.kmer_length as u64,
        num_distinct_kmers: classification.num_distinct_kmers,
        num_solid_kmers: classification.num_solid_kmers,
        num_mercy_kmers: classification.num_mercy_kmers,
    })
}
