use crate::io::fastq::FastqRecord;

/// Outcome of the pre-sampling read filter.
#[derive(Debug)]
pub enum FilterOutcome {
    /// Read passed both checks, trimmed to exactly the target length.
    Accepted(FastqRecord),
    /// An ambiguous base occurs within the first `read_length` bases.
    RejectedAmbiguous,
    /// Read is shorter than the target length.
    RejectedTooShort,
}

fn is_unambiguous(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T' | b'a' | b'c' | b'g' | b't')
}

/// Applies the length and ambiguity checks to one read.
///
/// The ambiguity scan only covers the bases that would survive trimming, so a
/// read with an N beyond the trim point is still usable. Ambiguity is checked
/// before length: a read that is both short and ambiguous rejects as
/// ambiguous. Counters for the two rejection classes belong to the caller.
pub fn filter_read(mut record: FastqRecord, read_length: usize) -> FilterOutcome {
    let scanned = record.sequence.len().min(read_length);
    if !record.sequence.as_bytes()[..scanned].iter().copied().all(is_unambiguous) {
        return FilterOutcome::RejectedAmbiguous;
    }
    if record.sequence.len() < read_length {
        return FilterOutcome::RejectedTooShort;
    }

    record.sequence.truncate(read_length);
    record.quality.truncate(read_length);
    FilterOutcome::Accepted(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(seq: &str) -> FastqRecord {
        FastqRecord {
            header: "@r".to_string(),
            sequence: seq.to_string(),
            quality: "I".repeat(seq.len()),
        }
    }

    #[test]
    fn trims_accepted_reads_to_length() {
        match filter_read(read("ACGTACGTAC"), 8) {
            FilterOutcome::Accepted(r) => {
                assert_eq!(r.sequence, "ACGTACGT");
                assert_eq!(r.quality.len(), 8);
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn rejects_short_reads() {
        assert!(matches!(
            filter_read(read("ACGT"), 8),
            FilterOutcome::RejectedTooShort
        ));
    }

    #[test]
    fn rejects_ambiguous_reads() {
        assert!(matches!(
            filter_read(read("ACGTNCGT"), 8),
            FilterOutcome::RejectedAmbiguous
        ));
    }

    #[test]
    fn lowercase_bases_are_unambiguous() {
        assert!(matches!(
            filter_read(read("acgtacgt"), 8),
            FilterOutcome::Accepted(_)
        ));
    }

    #[test]
    fn ambiguity_beyond_trim_point_is_ignored() {
        match filter_read(read("ACGTACGTN"), 8) {
            FilterOutcome::Accepted(r) => assert_eq!(r.sequence, "ACGTACGT"),
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn short_ambiguous_read_counts_as_ambiguous() {
        assert!(matches!(
            filter_read(read("ACNT"), 8),
            FilterOutcome::RejectedAmbiguous
        ));
    }
}
