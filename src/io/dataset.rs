//!
//! Line-oriented dataset format
//!
//! ```text
//! Z W H
//! 1 0 1
//! - 0 1
//! 0 1 1
//! ```
//!
//! * the first line is a header and is skipped
//! * whitespace inside a line is ignored, blank lines are skipped
//! * `zwh`: fully observed record
//! * `-wh`: record with `Z` unobserved
//!
use super::is_gzip;
use crate::common::MISSING_MARKER;
use crate::config::{FullConfig, ObservedConfig};
use crate::error::{Error, Result};
use crate::stats::{Record, SufficientStats};
use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

/// Header line written by `write_records`
pub const HEADER: &str = "Z W H";

/// `'0'`/`'1'` into a bit
fn to_bit(c: char) -> Option<u8> {
    match c {
        '0' => Some(0),
        '1' => Some(1),
        _ => None,
    }
}

///
/// Parse a record whose whitespace is already removed
///
fn parse_record(s: &str) -> Option<Record> {
    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        [m, w, h] if *m == MISSING_MARKER => Some(Record::Missing(ObservedConfig::from_bits(
            to_bit(*w)?,
            to_bit(*h)?,
        ))),
        [z, w, h] => Some(Record::Hard(FullConfig::from_bits(
            to_bit(*z)?,
            to_bit(*w)?,
            to_bit(*h)?,
        ))),
        _ => None,
    }
}

impl FromStr for Record {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        parse_record(&compact).ok_or_else(|| Error::Parse {
            line: 0,
            content: s.to_string(),
        })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Record::Hard(config) => write!(f, "{}", config),
            Record::Missing(config) => write!(f, "{}{}", MISSING_MARKER, config),
        }
    }
}

///
/// Parse all records of a dataset.
///
/// Errors carry the 1-origin line number.
///
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    // skip header
    for (i, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = line.parse::<Record>().map_err(|_| Error::Parse {
            line: i + 1,
            content: line.clone(),
        })?;
        records.push(record);
    }
    Ok(records)
}

///
/// Parse a dataset into its sufficient statistics.
///
pub fn parse_dataset<R: BufRead>(reader: R) -> Result<SufficientStats> {
    let stats: SufficientStats = parse_records(reader)?.into_iter().collect();
    log::info!(
        "parsed {} records ({} hard, {} missing)",
        stats.total(),
        stats.n_hard(),
        stats.n_missing()
    );
    Ok(stats)
}

///
/// Parse a dataset file. `*.gz` is decompressed on the fly.
///
pub fn parse_dataset_file<P: AsRef<Path>>(path: P) -> Result<SufficientStats> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    if is_gzip(&path) {
        parse_dataset(BufReader::new(GzDecoder::new(reader)))
    } else {
        parse_dataset(reader)
    }
}

///
/// Write records with a header line.
///
pub fn write_records<W: Write>(writer: &mut W, records: &[Record]) -> Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    Ok(())
}

///
/// Write records into a file. `*.gz` is compressed.
///
pub fn write_records_file<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<()> {
    let mut file = File::create(path.as_ref())?;
    if is_gzip(&path) {
        let mut writer = GzEncoder::new(file, Compression::default());
        write_records(&mut writer, records)?;
        writer.try_finish()?;
    } else {
        write_records(&mut file, records)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parse() {
        assert_eq!(
            "101".parse::<Record>().unwrap(),
            Record::Hard(FullConfig::from_bits(1, 0, 1))
        );
        assert_eq!(
            " 1 0  1 ".parse::<Record>().unwrap(),
            Record::Hard(FullConfig::from_bits(1, 0, 1))
        );
        assert_eq!(
            "- 1 0".parse::<Record>().unwrap(),
            Record::Missing(ObservedConfig::from_bits(1, 0))
        );
        for bad in &["", "10", "1011", "-1", "-101", "2 0 1", "x01", "--0"] {
            assert!(bad.parse::<Record>().is_err(), "{}", bad);
        }
    }
    #[test]
    fn record_display() {
        assert_eq!(Record::Hard(FullConfig::from_bits(0, 1, 1)).to_string(), "011");
        assert_eq!(
            Record::Missing(ObservedConfig::from_bits(0, 1)).to_string(),
            "-01"
        );
    }
    #[test]
    fn dataset_parse() {
        let text = "G W H\n0 0 0\n1 0 1\n\n- 0 1\n-01\n101\n";
        let stats = parse_dataset(text.as_bytes()).unwrap();
        assert_eq!(
            stats,
            SufficientStats::new([1, 0, 0, 0, 0, 2, 0, 0], [0, 2, 0, 0])
        );
    }
    #[test]
    fn dataset_header_only() {
        let stats = parse_dataset("Z W H\n".as_bytes()).unwrap();
        assert!(stats.is_empty());
        let stats = parse_dataset("".as_bytes()).unwrap();
        assert!(stats.is_empty());
    }
    #[test]
    fn dataset_parse_error_line() {
        let text = "G W H\n000\n0?1\n";
        match parse_dataset(text.as_bytes()) {
            Err(Error::Parse { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "0?1");
            }
            r => panic!("unexpected {:?}", r),
        }
    }
    #[test]
    fn dataset_file_roundtrip() {
        let records: Vec<Record> = vec!["000", "-11", "110", "-00"]
            .into_iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let dir = tempfile::tempdir().unwrap();
        for name in &["data.txt", "data.txt.gz"] {
            let path = dir.path().join(name);
            write_records_file(&path, &records).unwrap();
            let stats = parse_dataset_file(&path).unwrap();
            assert_eq!(
                stats,
                SufficientStats::new([1, 0, 0, 0, 0, 0, 1, 0], [1, 0, 0, 1])
            );
        }
    }
    #[test]
    fn dataset_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let r = parse_dataset_file(dir.path().join("nonexistent.txt"));
        assert!(matches!(r, Err(Error::Io(_))));
    }
}
