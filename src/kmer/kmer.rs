/// Encodes a DNA k-mer to a 64-bit integer (2 bits per nucleotide, max 32-mer).
pub fn encode_kmer(seq: &[u8]) -> Option<u64> {
    debug_assert!(seq.len() <= 32);
    let mut val: u64 = 0;
    for &b in seq {
        val <<= 2;
        val |= match b {
            b'A' | b'a' => 0,
            b'C' | b'c' => 1,
            b'G' | b'g' => 2,
            b'T' | b't' => 3,
            _ => return None,
        };
    }
    Some(val)
}

/// Decodes a 2-bit packed k-mer back to its nucleotide string.
pub fn decode_kmer(encoded: u64, k: usize) -> String {
    (0..k)
        .rev()
        .map(|i| match (encoded >> (2 * i)) & 3 {
            0 => 'A',
            1 => 'C',
            2 => 'G',
            _ => 'T',
        })
        .collect()
}

/// Reverse complement of a 2-bit packed k-mer.
pub fn reverse_complement(mut encoded: u64, k: usize) -> u64 {
    let mut rc = 0u64;
    for _ in 0..k {
        rc = (rc << 2) | (3 - (encoded & 3));
        encoded >>= 2;
    }
    rc
}

/// Canonical form of a k-mer: the smaller of the k-mer and its reverse
/// complement. The 2-bit packing preserves A < C < G < T, so integer order
/// matches lexicographic order on the decoded strings.
pub fn canonical_kmer(encoded: u64, k: usize) -> u64 {
    encoded.min(reverse_complement(encoded, k))
}
