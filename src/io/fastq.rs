use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::info;

use crate::error::EskrimError;

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub header: String,
    pub sequence: String,
    pub quality: String,
}

pub fn open_fastq(path: &Path) -> Result<Box<dyn BufRead>, EskrimError> {
    let file = File::open(path).map_err(|e| EskrimError::io(path, e))?;
    if path.extension().map(|ext| ext == "gz").unwrap_or(false) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Streams FASTQ records from one or more files of a single sample, in order.
///
/// Files are opened lazily, one at a time, so arbitrarily large multi-file
/// samples are traversed with bounded memory. A record that starts but does
/// not finish before end-of-file is a fatal `TruncatedFastq` error.
pub struct FastqStream {
    pending: std::vec::IntoIter<PathBuf>,
    current: Option<(PathBuf, Box<dyn BufRead>)>,
    record: u64,
}

impl FastqStream {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        FastqStream {
            pending: paths.into_iter(),
            current: None,
            record: 0,
        }
    }

    fn read_line(&mut self, line: &mut String) -> Result<usize, EskrimError> {
        let (path, reader) = self
            .current
            .as_mut()
            .ok_or_else(|| EskrimError::EmptyInput)?;
        line.clear();
        reader
            .read_line(line)
            .map_err(|e| EskrimError::io(path.clone(), e))
    }
}

impl Iterator for FastqStream {
    type Item = Result<FastqRecord, EskrimError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_none() {
                let path = self.pending.next()?;
                info!("Reading {}", path.display());
                match open_fastq(&path) {
                    Ok(reader) => {
                        self.current = Some((path, reader));
                        self.record = 0;
                    }
                    Err(e) => return Some(Err(e)),
                }
            }

            let mut header = String::new();
            match self.read_line(&mut header) {
                Ok(0) => {
                    // End of this file, move on to the next one
                    self.current = None;
                    continue;
                }
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.record += 1;

            let mut sequence = String::new();
            let mut plus = String::new();
            let mut quality = String::new();
            for line in [&mut sequence, &mut plus, &mut quality] {
                match self.read_line(line) {
                    Ok(0) => {
                        let path = self.current.as_ref().unwrap().0.clone();
                        return Some(Err(EskrimError::TruncatedFastq {
                            path,
                            record: self.record,
                        }));
                    }
                    Ok(_) => {}
                    Err(e) => return Some(Err(e)),
                }
            }

            return Some(Ok(FastqRecord {
                header: header.trim_end().to_string(),
                sequence: sequence.trim_end().to_string(),
                quality: quality.trim_end().to_string(),
            }));
        }
    }
}

pub enum FastqWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl FastqWriter {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        if path.extension().map(|ext| ext == "gz").unwrap_or(false) {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastqWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastqWriter::Plain(BufWriter::new(file)))
        }
    }

    pub fn write_record(&mut self, record: &FastqRecord) -> io::Result<()> {
        match self {
            FastqWriter::Plain(writer) => {
                writeln!(writer, "{}\n{}\n+\n{}", record.header, record.sequence, record.quality)
            }
            FastqWriter::Compressed(writer) => {
                writeln!(writer, "{}\n{}\n+\n{}", record.header, record.sequence, record.quality)
            }
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self {
            FastqWriter::Plain(mut writer) => writer.flush(),
            FastqWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}
