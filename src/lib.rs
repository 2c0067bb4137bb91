//! ESKRIM: EStimate with K-mers the RIchness in a Microbiome.
//!
//! Reference-free comparison of microbial richness across shotgun
//! metagenomic samples: reads are length-normalized, uniformly subsampled in
//! a single pass, and their k-mers classified as distinct, solid (seen at
//! least twice) or mercy (all k-mers of a read seen exactly once).

pub mod classify;
pub mod error;
pub mod filter;
pub mod io;
pub mod kmer;
pub mod pipeline;
pub mod reservoir;
pub mod stats;

pub use error::EskrimError;
pub use pipeline::{run_sample, RichnessConfig};
pub use stats::SampleStats;
