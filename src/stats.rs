use std::io::{self, Write};

use serde::Serialize;

/// One output record per sample, fields in wire order.
///
/// Consumers comparing richness across samples must treat a record where
/// `num_selected_reads < target_num_reads` as unreliable: the sample did not
/// reach its size normalization target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleStats {
    pub sample_name: String,
    pub total_num_reads: u64,
    #[serde(rename = "num_Ns_reads_ignored")]
    pub num_ns_reads_ignored: u64,
    pub num_too_short_reads_ignored: u64,
    pub target_num_reads: u64,
    pub num_selected_reads: u64,
    pub read_length: u64,
    pub kmer_length: u64,
    pub num_distinct_kmers: u64,
    pub num_solid_kmers: u64,
    pub num_mercy_kmers: u64,
}

const TSV_HEADER: [&str; 11] = [
    "sample_name",
    "total_num_reads",
    "num_Ns_reads_ignored",
    "num_too_short_reads_ignored",
    "target_num_reads",
    "num_selected_reads",
    "read_length",
    "kmer_length",
    "num_distinct_kmers",
    "num_solid_kmers",
    "num_mercy_kmers",
];

impl SampleStats {
    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", TSV_HEADER.join("\t"))?;
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.sample_name,
            self.total_num_reads,
            self.num_ns_reads_ignored,
            self.num_too_short_reads_ignored,
            self.target_num_reads,
            self.num_selected_reads,
            self.read_length,
            self.kmer_length,
            self.num_distinct_kmers,
            self.num_solid_kmers,
            self.num_mercy_kmers,
        )
    }

    pub fn write_json<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SampleStats {
        SampleStats {
            sample_name: "gut1".to_string(),
            total_num_reads: 1000,
            num_ns_reads_ignored: 10,
            num_too_short_reads_ignored: 20,
            target_num_reads: 500,
            num_selected_reads: 500,
            read_length: 80,
            kmer_length: 21,
            num_distinct_kmers: 12345,
            num_solid_kmers: 234,
            num_mercy_kmers: 56,
        }
    }

    #[test]
    fn tsv_has_header_and_one_row_in_wire_order() {
        let mut out = Vec::new();
        stats().write_tsv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("sample_name\ttotal_num_reads\tnum_Ns_reads_ignored"));
        assert_eq!(
            lines[1],
            "gut1\t1000\t10\t20\t500\t500\t80\t21\t12345\t234\t56"
        );
    }

    #[test]
    fn json_keeps_the_renamed_field() {
        let mut out = Vec::new();
        stats().write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["num_Ns_reads_ignored"], 10);
        assert_eq!(value["sample_name"], "gut1");
    }
}
