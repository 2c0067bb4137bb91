use clap::Parser;
use std::path::PathBuf;

fn parse_kmer_length(value: &str) -> Result<usize, String> {
    let k: usize = value
        .parse()
        .map_err(|_| "KMER_LENGTH is not an integer".to_string())?;
    if !(17..=31).contains(&k) || k % 2 == 0 {
        return Err("KMER_LENGTH must be odd, between 17 and 31".to_string());
    }
    Ok(k)
}

fn parse_num_threads(value: &str) -> Result<usize, String> {
    let max_num_threads = num_cpus::get();
    let num_threads: usize = value
        .parse()
        .map_err(|_| "NUM_THREADS is not an integer".to_string())?;
    if num_threads == 0 {
        return Err("minimum NUM_THREADS is 1".to_string());
    }
    if num_threads > max_num_threads {
        return Err(format!("maximum NUM_THREADS is {}", max_num_threads));
    }
    Ok(num_threads)
}

#[derive(Parser, Debug)]
#[command(
    name = "eskrim",
    version,
    about = "EStimate with K-mers the RIchness in a Microbiome",
    long_about = None
)]
pub struct Cli {
    /// Input FASTQ files with reads from a single metagenomic sample (gzip accepted)
    #[arg(short, long, num_args = 1.., required = true)]
    pub input: Vec<PathBuf>,

    /// Name of the metagenomic sample
    #[arg(short = 'n', long, default_value = "NA")]
    pub name: String,

    /// Discard reads shorter than READ_LENGTH bases and trim those exceeding this length
    #[arg(short = 'l', long, default_value_t = 80)]
    pub read_length: usize,

    /// TARGET_NUM_READS to draw randomly from the input files
    #[arg(short = 'r', long, default_value_t = 10_000_000)]
    pub target_reads: usize,

    /// Length of kmers to count (odd, between 17 and 31)
    #[arg(short = 'k', long, default_value_t = 21, value_parser = parse_kmer_length)]
    pub kmer_length: usize,

    /// NUM_THREADS to launch for kmers counting
    #[arg(short = 't', long, default_value_t = num_cpus::get(), value_parser = parse_num_threads)]
    pub threads: usize,

    /// Optional FASTQ(.gz) output with the randomly selected reads
    #[arg(short = 'o', long)]
    pub output_fastq: Option<PathBuf>,

    /// Output file with kmer richness estimates
    #[arg(short = 's', long)]
    pub stats: PathBuf,

    /// Format of the stats record
    #[arg(long, default_value = "tsv", value_parser = ["tsv", "json"])]
    pub format: String,

    /// Count each kmer separately from its reverse complement
    #[arg(long)]
    pub no_canonical: bool,

    /// Seed for the random number generator
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmer_length_parser_enforces_odd_range() {
        assert!(parse_kmer_length("21").is_ok());
        assert!(parse_kmer_length("17").is_ok());
        assert!(parse_kmer_length("31").is_ok());
        assert!(parse_kmer_length("22").is_err());
        assert!(parse_kmer_length("15").is_err());
        assert!(parse_kmer_length("33").is_err());
        assert!(parse_kmer_length("x").is_err());
    }

    #[test]
    fn thread_parser_rejects_zero() {
        assert!(parse_num_threads("1").is_ok());
        assert!(parse_num_threads("0").is_err());
    }

    #[test]
    fn minimal_command_line_parses() {
        let cli = Cli::parse_from([
            "eskrim", "-i", "a.fastq", "b.fastq.gz", "-s", "stats.tsv",
        ]);
        assert_eq!(cli.input.len(), 2);
        assert_eq!(cli.name, "NA");
        assert_eq!(cli.read_length, 80);
        assert_eq!(cli.target_reads, 10_000_000);
        assert_eq!(cli.kmer_length, 21);
        assert_eq!(cli.format, "tsv");
        assert_eq!(cli.seed, 0);
        assert!(!cli.no_canonical);
    }
}
