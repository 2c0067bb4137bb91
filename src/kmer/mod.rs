//! K-mer packing and exact counting.

pub mod counter;
pub mod kmer;
