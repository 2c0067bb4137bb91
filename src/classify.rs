use rayon::prelude::*;

use crate::kmer::counter::{KmerCounter, KmerCounts};

/// Per-sample k-mer solidity breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerClassification {
    /// Unique k-mers observed across the reservoir.
    pub num_distinct_kmers: u64,
    /// Distinct k-mers seen at least twice.
    pub num_solid_kmers: u64,
    /// K-mer occurrences in reads whose every k-mer occurrence is non-solid.
    pub num_mercy_kmers: u64,
}

fn is_solid(counts: &KmerCounts, kmer: u64) -> bool {
    counts.get(&kmer).copied().unwrap_or(0) >= 2
}

/// Mercy contribution of one read.
///
/// A single non-solid k-mer inside an otherwise-solid read is most likely a
/// sequencing error, so such reads contribute nothing. A read in which every
/// k-mer occurrence is non-solid more plausibly comes from an organism not
/// yet covered twice, and contributes all of its occurrences. A read too
/// short to yield any k-mer contributes nothing either; it does not count as
/// all-non-solid vacuously.
fn mercy_kmers_in_read(sequence: &str, counts: &KmerCounts, counter: &KmerCounter) -> u64 {
    let mut occurrences = 0u64;
    for kmer in counter.kmers_of(sequence) {
        if is_solid(counts, kmer) {
            return 0;
        }
        occurrences += 1;
    }
    occurrences
}

/// Classifies the counted k-mers of a finalized reservoir.
///
/// The mercy rule is a read-level predicate, so it walks the reads again and
/// looks each occurrence up in the count table; reads are independent and
/// processed in parallel.
pub fn classify_kmers<S: AsRef<str> + Sync>(
    reads: &[S],
    counts: &KmerCounts,
    counter: &KmerCounter,
) -> KmerClassification {
    let num_distinct_kmers = counts.len() as u64;
    let num_solid_kmers = counts.values().filter(|&&count| count >= 2).count() as u64;
    let num_mercy_kmers = reads
        .par_iter()
        .map(|read| mercy_kmers_in_read(read.as_ref(), counts, counter))
        .sum();

    KmerClassification {
        num_distinct_kmers,
        num_solid_kmers,
        num_mercy_kmers,
    }
}
