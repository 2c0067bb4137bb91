mod cli_main;

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use clap::Parser;
use rayon::ThreadPoolBuilder;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use cli_main::Cli;
use eskrim::{run_sample, EskrimError, RichnessConfig, SampleStats};

fn write_stats(stats: &SampleStats, cli: &Cli) -> Result<(), EskrimError> {
    let file = File::create(&cli.stats).map_err(|e| EskrimError::io(&cli.stats, e))?;
    let mut writer = BufWriter::new(file);
    let result = match cli.format.as_str() {
        "json" => stats.write_json(&mut writer),
        _ => stats.write_tsv(&mut writer),
    };
    result.map_err(|e| EskrimError::io(&cli.stats, e))
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let cli = Cli::parse();

    ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build_global()
        .expect("Building rayon thread pool failed");

    info!("eskrim {}", env!("CARGO_PKG_VERSION"));
    let start = Instant::now();

    let config = RichnessConfig {
        input_files: cli.input.clone(),
        sample_name: cli.name.clone(),
        read_length: cli.read_length,
        target_num_reads: cli.target_reads,
        kmer_length: cli.kmer_length,
        canonical: !cli.no_canonical,
        seed: cli.seed,
        output_fastq: cli.output_fastq.clone(),
    };

    let stats = match run_sample(&config) {
        Ok(stats) => stats,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = write_stats(&stats, &cli) {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Statistics saved in {}", cli.stats.display());
    info!("Completed in {:.2}s", start.elapsed().as_secs_f32());
}
