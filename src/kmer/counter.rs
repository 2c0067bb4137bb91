use ahash::AHashMap;
use rayon::prelude::*;

use crate::kmer::kmer::{canonical_kmer, encode_kmer};

/// Exact occurrence counts per distinct (packed) k-mer.
pub type KmerCounts = AHashMap<u64, u32>;

/// Exact k-mer counting engine over a finalized set of reads.
///
/// Counts every overlapping window of length `k` in every read, so a read of
/// length `L` contributes `L - k + 1` occurrences and reads shorter than `k`
/// contribute none. In canonical mode a k-mer and its reverse complement are
/// counted as one, matching `jellyfish count -C`. Counting is exact; the
/// count table is the classifier's ground truth and cannot be approximated.
pub struct KmerCounter {
    k: usize,
    canonical: bool,
}

/// Reads per rayon work item when counting in parallel.
const COUNT_CHUNK_SIZE: usize = 200_000;

impl KmerCounter {
    pub fn new(k: usize, canonical: bool) -> Self {
        KmerCounter { k, canonical }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Packed k-mers of one read, in window order. Windows containing a base
    /// that does not 2-bit encode are skipped.
    pub fn kmers_of<'a>(&'a self, sequence: &'a str) -> impl Iterator<Item = u64> + 'a {
        let bytes = sequence.as_bytes();
        let windows = bytes.len().saturating_sub(self.k.saturating_sub(1));
        (0..windows).filter_map(move |i| {
            let encoded = encode_kmer(&bytes[i..i + self.k])?;
            Some(if self.canonical {
                canonical_kmer(encoded, self.k)
            } else {
                encoded
            })
        })
    }

    /// Exact occurrence counts over all reads, merged from per-chunk tables.
    pub fn count<S: AsRef<str> + Sync>(&self, reads: &[S]) -> KmerCounts {
        reads
            .par_chunks(COUNT_CHUNK_SIZE)
            .map(|chunk| {
                let mut counts = KmerCounts::new();
                for read in chunk {
                    for kmer in self.kmers_of(read.as_ref()) {
                        *counts.entry(kmer).or_insert(0) += 1;
                    }
                }
                counts
            })
            .reduce(KmerCounts::new, |mut acc, counts| {
                for (kmer, count) in counts {
                    *acc.entry(kmer).or_insert(0) += count;
                }
                acc
            })
    }
}
