use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::TableResult;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> TableResult<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Read all non-blank lines of a file, keeping their 1-based line numbers.
/// Trailing `\r` is stripped so CRLF files parse like LF files.
///
pub fn read_data_lines(path: &Path) -> TableResult<Vec<(usize, String)>> {
    let reader = get_dynamic_reader(path)?;

    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        lines.push((idx + 1, line.to_string()));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::NamedTempFile;

    #[rstest]
    fn test_read_data_lines_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "A_1_1_1\t1\r\n\n   \nA_1_1_2\t2\n").unwrap();

        let lines = read_data_lines(file.path()).unwrap();
        assert_eq!(
            lines,
            vec![(1, "A_1_1_1\t1".to_string()), (4, "A_1_1_2\t2".to_string())]
        );
    }

    #[rstest]
    fn test_read_data_lines_gzipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.tsv.gz");

        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        writeln!(encoder, "QUAL_1_1_1\t35\t36").unwrap();
        encoder.finish().unwrap();

        let lines = read_data_lines(&path).unwrap();
        assert_eq!(lines, vec![(1, "QUAL_1_1_1\t35\t36".to_string())]);
    }

    #[rstest]
    fn test_missing_file_is_io_error() {
        let result = get_dynamic_reader(Path::new("does/not/exist.tsv"));
        assert!(matches!(result, Err(crate::errors::TableError::Io(_))));
    }
}
